// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track and knob bounds derived from the widget size, plus hit testing.

use kurbo::{Circle, Point, Size, Vec2};

use crate::config::JoystickConfig;

/// Geometry of the joystick for one widget size.
///
/// The track (outer circle) and the knob share the widget center at rest.
/// Both are sized from `min(width, height)` so the joystick stays round in
/// non-square widgets. A layout is immutable; a resize produces a new one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JoystickLayout {
    center: Point,
    track_radius: f64,
    knob_radius: f64,
}

impl JoystickLayout {
    /// Computes the layout for a widget of the given size.
    ///
    /// Negative or non-finite dimensions are treated as zero.
    #[must_use]
    pub fn from_size(size: Size, config: &JoystickConfig) -> Self {
        let width = sanitize(size.width);
        let height = sanitize(size.height);
        let min_side = width.min(height);
        Self {
            center: Point::new(width / 2.0, height / 2.0),
            track_radius: min_side * config.joystick_ratio / 2.0,
            knob_radius: min_side * config.knob_ratio / 2.0,
        }
    }

    /// Center of the track, which is also the resting knob center.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius of the outer track.
    #[must_use]
    pub fn track_radius(&self) -> f64 {
        self.track_radius
    }

    /// Radius of the knob.
    #[must_use]
    pub fn knob_radius(&self) -> f64 {
        self.knob_radius
    }

    /// Maximum distance of the knob center from the track center.
    ///
    /// The knob never leaves the track, inclusive of its own radius.
    #[must_use]
    pub fn travel(&self) -> f64 {
        (self.track_radius - self.knob_radius).max(0.0)
    }

    /// The outer track as a circle.
    #[must_use]
    pub fn track(&self) -> Circle {
        Circle::new(self.center, self.track_radius)
    }

    /// The knob as a circle centered at `knob_center`.
    #[must_use]
    pub fn knob_at(&self, knob_center: Point) -> Circle {
        Circle::new(knob_center, self.knob_radius)
    }

    /// Offset of `pt` from the track center.
    #[must_use]
    pub fn offset_of(&self, pt: Point) -> Vec2 {
        pt - self.center
    }

    /// Returns `true` if `pt` lies on or inside the knob centered at `knob_center`.
    #[must_use]
    pub fn hit_knob(&self, knob_center: Point, pt: Point) -> bool {
        pt.distance(knob_center) <= self.knob_radius
    }

    /// Returns `true` if `pt` lies on or inside the track.
    #[must_use]
    pub fn hit_track(&self, pt: Point) -> bool {
        pt.distance(self.center) <= self.track_radius
    }
}

fn sanitize(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(w: f64, h: f64) -> JoystickLayout {
        JoystickLayout::from_size(Size::new(w, h), &JoystickConfig::default())
    }

    #[test]
    fn square_widget_radii() {
        let l = layout(400.0, 400.0);
        assert_eq!(l.center(), Point::new(200.0, 200.0));
        assert_eq!(l.track_radius(), 100.0);
        assert_eq!(l.knob_radius(), 20.0);
        assert_eq!(l.travel(), 80.0);
    }

    #[test]
    fn uses_smaller_dimension() {
        let l = layout(800.0, 200.0);
        assert_eq!(l.center(), Point::new(400.0, 100.0));
        assert_eq!(l.track_radius(), 50.0);
        assert_eq!(l.knob_radius(), 10.0);
    }

    #[test]
    fn degenerate_sizes_collapse_to_zero() {
        let l = layout(-10.0, f64::NAN);
        assert_eq!(l.center(), Point::ZERO);
        assert_eq!(l.track_radius(), 0.0);
        assert_eq!(l.travel(), 0.0);
    }

    #[test]
    fn hit_tests_are_inclusive() {
        let l = layout(400.0, 400.0);
        let knob = l.center();
        assert!(l.hit_knob(knob, Point::new(220.0, 200.0)));
        assert!(!l.hit_knob(knob, Point::new(220.5, 200.0)));
        assert!(l.hit_track(Point::new(200.0, 300.0)));
        assert!(!l.hit_track(Point::new(271.0, 271.0)));
    }

    #[test]
    fn knob_follows_center() {
        let l = layout(400.0, 400.0);
        let knob = l.knob_at(Point::new(250.0, 180.0));
        assert_eq!(knob.center, Point::new(250.0, 180.0));
        assert_eq!(knob.radius, 20.0);
    }
}
