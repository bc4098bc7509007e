// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping from knob displacement to axis output values.

use kurbo::Vec2;

/// Per-axis maximum magnitude of the joystick output.
///
/// Hosts typically bind these to numeric inputs; see
/// [`Joystick::set_axis_max`](crate::Joystick::set_axis_max).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AxisMax {
    /// Maximum magnitude of [`OutputValue::x`].
    pub x: u32,
    /// Maximum magnitude of [`OutputValue::y`].
    pub y: u32,
}

impl AxisMax {
    /// Axis maximum used when nothing else is configured.
    pub const DEFAULT_MAX: u32 = 50;

    /// Creates a new pair of axis maxima.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl Default for AxisMax {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX, Self::DEFAULT_MAX)
    }
}

/// The joystick reading.
///
/// `x` grows to the right and `y` grows **upward**, even though widget
/// coordinates have y pointing down. Each component lies in
/// `[-max, max]` for the corresponding [`AxisMax`] component.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OutputValue {
    /// Horizontal reading, positive to the right.
    pub x: f64,
    /// Vertical reading, positive upward.
    pub y: f64,
}

impl OutputValue {
    /// The centered reading.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Maps a knob offset (knob center minus track center, widget space) to
    /// an output value.
    ///
    /// A knob at distance `travel` from the center along an axis reads the
    /// full axis maximum. With no travel at all the reading is zero.
    #[must_use]
    pub fn from_offset(offset: Vec2, travel: f64, axis_max: AxisMax) -> Self {
        if travel.is_nan() || travel <= 0.0 {
            return Self::ZERO;
        }
        let max_x = f64::from(axis_max.x);
        let max_y = f64::from(axis_max.y);
        // Clamping absorbs rounding from the constraint math.
        let x = (offset.x * max_x / travel).clamp(-max_x, max_x);
        let y = (-offset.y * max_y / travel).clamp(-max_y, max_y);
        // `+ 0.0` folds a negative zero from the y flip into a plain zero.
        Self { x: x + 0.0, y: y + 0.0 }
    }

    /// Returns `true` for the centered reading.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_travel_to_axis_maximum() {
        let max = AxisMax::default();
        let out = OutputValue::from_offset(Vec2::new(80.0, 0.0), 80.0, max);
        assert_eq!(out, OutputValue { x: 50.0, y: 0.0 });

        let out = OutputValue::from_offset(Vec2::new(60.0, 0.0), 80.0, max);
        assert_eq!(out.x, 37.5);
    }

    #[test]
    fn y_grows_upward() {
        let max = AxisMax::new(10, 100);
        // Knob above the center (negative widget y).
        let out = OutputValue::from_offset(Vec2::new(0.0, -40.0), 80.0, max);
        assert_eq!(out.y, 50.0);
        let out = OutputValue::from_offset(Vec2::new(0.0, 40.0), 80.0, max);
        assert_eq!(out.y, -50.0);
    }

    #[test]
    fn centered_reading_has_no_negative_zero() {
        let out = OutputValue::from_offset(Vec2::ZERO, 80.0, AxisMax::default());
        assert!(out.is_zero());
        assert!(out.y.is_sign_positive());
    }

    #[test]
    fn zero_travel_reads_zero() {
        let out = OutputValue::from_offset(Vec2::new(3.0, 4.0), 0.0, AxisMax::default());
        assert_eq!(out, OutputValue::ZERO);
    }

    #[test]
    fn overshoot_is_clamped() {
        let out = OutputValue::from_offset(Vec2::new(80.000_001, 0.0), 80.0, AxisMax::new(5, 5));
        assert_eq!(out.x, 5.0);
    }
}
