// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend-agnostic painting of the joystick.
//!
//! The joystick does not own a renderer. [`Joystick::paint`](crate::Joystick::paint)
//! emits two filled circles (track, then knob) through a [`JoystickPainter`],
//! which hosts implement on top of whatever renderer they use.

use alloc::vec::Vec;

use kurbo::Circle;
use peniko::Color;

/// Colors for the track and the knob.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JoystickStyle {
    /// Fill color of the outer track.
    pub track: Color,
    /// Fill color of the knob, painted over the track.
    pub knob: Color,
}

impl Default for JoystickStyle {
    fn default() -> Self {
        Self {
            track: Color::from_rgba8(0, 0, 255, 255),
            // Red at 70% opacity, so the track shows through the knob.
            knob: Color::from_rgba8(255, 0, 0, 178),
        }
    }
}

/// Sink for joystick paint commands.
pub trait JoystickPainter {
    /// Fills `circle` with a solid `color`, antialiased.
    fn fill_circle(&mut self, circle: Circle, color: Color);
}

/// A painter that records fill commands.
///
/// Useful for tests and for hosts that batch drawing.
#[derive(Clone, Debug, Default)]
pub struct JoystickScene {
    /// Recorded fills, in paint order.
    pub fills: Vec<(Circle, Color)>,
}

impl JoystickScene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all recorded fills.
    pub fn clear(&mut self) {
        self.fills.clear();
    }
}

impl JoystickPainter for JoystickScene {
    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.fills.push((circle, color));
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;

    #[test]
    fn scene_records_in_order() {
        let style = JoystickStyle::default();
        let mut scene = JoystickScene::new();
        scene.fill_circle(Circle::new(Point::ZERO, 10.0), style.track);
        scene.fill_circle(Circle::new(Point::ZERO, 2.0), style.knob);
        assert_eq!(scene.fills.len(), 2);
        assert_eq!(scene.fills[0].1, style.track);
        assert_eq!(scene.fills[1].0.radius, 2.0);

        scene.clear();
        assert!(scene.fills.is_empty());
    }

    #[test]
    fn default_knob_is_translucent() {
        let style = JoystickStyle::default();
        assert!(style.knob.components[3] < 1.0);
        assert_eq!(style.track.components[3], 1.0);
    }
}
