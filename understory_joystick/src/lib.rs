// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_joystick --heading-base-level=0

//! Understory Joystick: a headless on-screen joystick widget model.
//!
//! This crate models a circular joystick with a draggable knob, the kind of
//! control used for touch and mouse steering. It owns:
//!
//! - Geometry: a track and a knob sized from the widget's smaller dimension
//!   ([`JoystickLayout`]).
//! - Interaction: a pointer-driven state machine ([`Joystick`]) that keeps the
//!   knob inside the track while dragging ([`displace_within_travel`],
//!   [`project_onto_travel`]).
//! - Output: an `(x, y)` reading scaled by per-axis maxima ([`OutputValue`],
//!   [`AxisMax`]), with y growing upward.
//! - Recentering: an eased return to the center after release
//!   ([`RecenterAnimation`]), expressed as a pure function of time.
//!
//! It does **not** own a window, an event loop, a timer, or a renderer. Hosts
//! translate their toolkit's callbacks into plain method calls and act on the
//! returned [`Changes`]:
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_joystick::{Changes, Joystick, JoystickScene};
//!
//! let mut joystick = Joystick::new();
//! joystick.on_resize(Size::new(400.0, 400.0));
//!
//! // Press on the knob and drag it to the right.
//! joystick.on_pointer_down(Point::new(200.0, 200.0));
//! let changes = joystick.on_pointer_move(Point::new(260.0, 200.0));
//! assert!(changes.contains(Changes::REPAINT | Changes::OUTPUT));
//! assert_eq!(joystick.output().x, 37.5);
//!
//! // Release, then drive the recenter animation from frame callbacks.
//! joystick.on_pointer_up(0);
//! let mut now = 0;
//! while joystick.wants_animation_frame() {
//!     now += 16;
//!     joystick.on_animation_frame(now);
//! }
//! assert!(joystick.output().is_zero());
//!
//! // Paint through any backend implementing `JoystickPainter`.
//! let mut scene = JoystickScene::new();
//! joystick.paint(&mut scene);
//! assert_eq!(scene.fills.len(), 2);
//! ```
//!
//! ## Drag behavior
//!
//! Drags are incremental: the knob moves by the pointer's movement, so
//! grabbing the knob off-center (or mid-animation) never makes it jump.
//! While the pointer is on the track each axis is clamped to the room the
//! other axis leaves; once the pointer leaves the track the knob is placed
//! at the edge of its travel in the pointer's direction.
//!
//! ## Features
//!
//! - `std` (default): use the standard library.
//! - `libm`: `no_std` float math via Kurbo and Peniko.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod constrain;
mod drag;
mod easing;
mod joystick;
mod layout;
mod output;
mod paint;
mod recenter;

pub use config::{ConfigError, JoystickConfig, RatioField};
pub use constrain::{Constrained, displace_within_travel, project_onto_travel};
pub use drag::KnobDrag;
pub use easing::Easing;
pub use joystick::{Changes, Joystick, Phase};
pub use layout::JoystickLayout;
pub use output::{AxisMax, OutputValue};
pub use paint::{JoystickPainter, JoystickScene, JoystickStyle};
pub use recenter::RecenterAnimation;
