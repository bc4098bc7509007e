// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_joystick_window --heading-base-level=0

//! Understory Joystick Window: a headless host window for the Understory joystick.
//!
//! [`JoystickWindow`] composes an [`understory_joystick::Joystick`] with two
//! [`SpinBox`] inputs that set the maximum output of each axis. It owns the
//! grid layout of those three cells, routes window-space pointer events to
//! the joystick (with pointer capture while dragging), and wires spin box
//! edits one way into the joystick.
//!
//! Creating the native window, drawing the spin boxes, and running the event
//! loop stay with the host toolkit; it calls into the window and acts on the
//! returned [`WindowChanges`]:
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_joystick_window::{AxisInput, JoystickWindow, WindowChanges};
//!
//! let mut window = JoystickWindow::new();
//! window.on_resize(Size::new(418.0, 448.0));
//!
//! // Double the horizontal range.
//! window.set_input(AxisInput::X, 100);
//!
//! // The joystick cell starts at (9, 39); its knob rests at the cell center.
//! let knob = Point::new(209.0, 239.0);
//! window.on_pointer_down(knob);
//! let changes = window.on_pointer_move(Point::new(249.0, 239.0));
//! assert!(changes.contains(WindowChanges::OUTPUT));
//! assert_eq!(window.output().x, 50.0);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

mod spin_box;
mod window;

pub use spin_box::{SpinBox, SpinBoxError};
pub use window::{AxisInput, JoystickWindow, WindowChanges};
