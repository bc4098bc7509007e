// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recenter animation: returning the knob to the center after release.
//!
//! The animation is a pure function of elapsed time. It stores only the start
//! timestamp and the knob offset at release; the host calls
//! [`RecenterAnimation::progress`] from its frame or timer callback.
//!
//! Progress runs from `1.0` (knob where it was released) to `0.0` (knob at the
//! center), following the configured [`Easing`] curve.

use kurbo::Vec2;

use crate::easing::Easing;

/// An in-flight recenter animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecenterAnimation {
    start_ms: u64,
    duration_ms: u64,
    release_offset: Vec2,
    easing: Easing,
}

impl RecenterAnimation {
    /// Starts an animation at `start_ms` for a knob released at
    /// `release_offset` from the track center.
    ///
    /// A zero duration is treated as one millisecond.
    #[must_use]
    pub fn new(start_ms: u64, duration_ms: u64, release_offset: Vec2, easing: Easing) -> Self {
        Self {
            start_ms,
            duration_ms: duration_ms.max(1),
            release_offset,
            easing,
        }
    }

    /// Total duration in milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Recenter progress at `now_ms`, in `[0, 1]`.
    ///
    /// Timestamps before the start read as `1.0`.
    #[must_use]
    pub fn progress(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= self.duration_ms {
            return 0.0;
        }
        let t = elapsed as f64 / self.duration_ms as f64;
        1.0 - self.easing.ease(t)
    }

    /// Returns `true` once `now_ms` has reached the end of the animation.
    #[must_use]
    pub fn is_finished(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Knob offset for a given progress value.
    ///
    /// `progress` is clamped into `[0, 1]`; `0.0` yields exactly [`Vec2::ZERO`].
    #[must_use]
    pub fn offset_at(&self, progress: f64) -> Vec2 {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        if progress == 0.0 {
            Vec2::ZERO
        } else {
            self.release_offset * progress
        }
    }
}
