// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Understory joystick demos.

use kurbo::Circle;
use peniko::Color;
use understory_joystick::JoystickPainter;

/// A painter that prints fill commands instead of rasterizing them.
#[derive(Debug, Default)]
pub struct PrintPainter {
    /// Number of fills printed so far.
    pub fills: usize,
}

impl JoystickPainter for PrintPainter {
    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.fills += 1;
        let [r, g, b, a] = color.components;
        println!(
            "  fill circle at ({:.1}, {:.1}) r={:.1} rgba({r:.2}, {g:.2}, {b:.2}, {a:.2})",
            circle.center.x, circle.center.y, circle.radius
        );
    }
}
