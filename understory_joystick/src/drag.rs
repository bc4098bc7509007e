// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer tracking for a knob drag.
//!
//! A knob drag is incremental: each pointer move displaces the knob by the
//! pointer's movement since the previous event, not by its distance from the
//! press point. [`KnobDrag`] remembers the last pointer position and hands out
//! those deltas.

use kurbo::{Point, Vec2};

/// Tracks an active knob drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KnobDrag {
    last_pos: Point,
}

impl KnobDrag {
    /// Starts tracking at the press position.
    #[must_use]
    pub fn start(pos: Point) -> Self {
        Self { last_pos: pos }
    }

    /// Records a new pointer position and returns the movement since the last one.
    pub fn update(&mut self, pos: Point) -> Vec2 {
        let delta = pos - self.last_pos;
        self.last_pos = pos;
        delta
    }

    /// Most recent pointer position.
    #[must_use]
    pub fn last_pos(&self) -> Point {
        self.last_pos
    }
}
