// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keeping the knob center inside the travel disk.
//!
//! The knob center must always satisfy `|knob - center| <= travel`, where
//! `travel` is the track radius minus the knob radius. Two building blocks
//! are provided:
//!
//! - [`project_onto_travel`] moves a point along the ray from the center
//!   through it until it lies on or inside the travel circle.
//! - [`displace_within_travel`] applies a pointer delta to the current knob
//!   center and clamps each axis into the band that the other axis leaves
//!   available.
//!
//! A joystick drag uses the second while the pointer stays on the track and
//! falls back to the first once it leaves the track.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

/// Result of constraining a candidate knob position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constrained {
    /// The constrained knob center.
    pub position: Point,
    /// `true` if constraining moved the candidate on either axis.
    pub clamped: bool,
}

impl Constrained {
    fn new(candidate: Point, position: Point) -> Self {
        Self {
            position,
            clamped: position != candidate,
        }
    }
}

/// Projects `pt` onto the disk of radius `travel` around `center`.
///
/// Points already inside (or on) the disk are returned unchanged. Points
/// outside are moved along the ray from `center` through `pt` onto the
/// boundary, which clamps both axes by the ray's slope. A point exactly at
/// the center has no ray and is returned as is.
#[must_use]
pub fn project_onto_travel(center: Point, travel: f64, pt: Point) -> Constrained {
    let travel = travel.max(0.0);
    let offset = pt - center;
    let distance = offset.hypot();
    if distance <= travel {
        return Constrained::new(pt, pt);
    }
    // `distance > travel >= 0` here, so the division is well defined.
    let position = center + offset * (travel / distance);
    Constrained::new(pt, position)
}

/// Moves `knob` by `delta`, keeping the result inside the travel disk.
///
/// The x axis is clamped first, to the half-width of the disk at the knob's
/// current y offset. The y axis is then clamped to the half-height at the new
/// x offset. Clamping sequentially keeps the result inside the disk for any
/// `knob` that starts inside it.
#[must_use]
pub fn displace_within_travel(center: Point, travel: f64, knob: Point, delta: Vec2) -> Constrained {
    let travel = travel.max(0.0);
    let candidate = knob + delta;

    let y_offset = (knob.y - center.y).clamp(-travel, travel);
    let x_limit = half_chord(travel, y_offset);
    let x = candidate.x.clamp(center.x - x_limit, center.x + x_limit);

    let y_limit = half_chord(travel, x - center.x);
    let y = candidate.y.clamp(center.y - y_limit, center.y + y_limit);

    Constrained::new(candidate, Point::new(x, y))
}

/// Half the length of the chord of a circle of `radius` at distance `offset`
/// from its center.
fn half_chord(radius: f64, offset: f64) -> f64 {
    (radius * radius - offset * offset).max(0.0).sqrt()
}
