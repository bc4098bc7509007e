// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless joystick window demo.
//!
//! Scripts a drag on a `JoystickWindow`, prints the live readings, then runs
//! the recenter animation at 60 Hz until the knob is back at rest.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_joystick_demos --example joystick_headless`

use kurbo::{Point, Size};
use understory_joystick_demos::PrintPainter;
use understory_joystick_window::{AxisInput, JoystickWindow, WindowChanges};

const FRAME_MS: u64 = 16;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut window = JoystickWindow::new();
    window.on_resize(Size::new(418.0, 448.0));
    window
        .joystick_mut()
        .set_output_listener(|value| println!("output: x={:.2} y={:.2}", value.x, value.y));

    println!("{}", JoystickWindow::TITLE);
    println!("==========\n");

    window.set_input(AxisInput::X, 100);
    window.set_input(AxisInput::Y, 20);
    println!(
        "axis max: x={} y={}\n",
        window.input(AxisInput::X).value(),
        window.input(AxisInput::Y).value()
    );

    let knob = window.joystick_rect().center();
    window.on_pointer_down(knob);

    // Sweep right, then up and out past the edge of the track.
    let path = [
        Point::new(knob.x + 20.0, knob.y),
        Point::new(knob.x + 60.0, knob.y),
        Point::new(knob.x + 60.0, knob.y - 40.0),
        Point::new(knob.x + 200.0, knob.y - 200.0),
    ];
    let mut now = 0;
    for pos in path {
        now += FRAME_MS;
        let changes = window.on_pointer_move(pos);
        if changes.contains(WindowChanges::JOYSTICK) {
            let mut painter = PrintPainter::default();
            window.paint_joystick(&mut painter);
        }
    }

    window.on_pointer_up(now);
    let mut frames = 0;
    while window.wants_animation_frame() {
        now += FRAME_MS;
        window.on_animation_frame(now);
        frames += 1;
    }
    println!("\nrecentered after {frames} frames");
}
