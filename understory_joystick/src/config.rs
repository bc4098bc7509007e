// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Joystick configuration and its validation.

use core::fmt;

use crate::easing::Easing;
use crate::output::AxisMax;
use crate::paint::JoystickStyle;

/// Static configuration for a [`Joystick`](crate::Joystick).
///
/// All sizes are expressed as ratios of the smaller widget dimension, so the
/// joystick scales with its host on every resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JoystickConfig {
    /// Diameter of the outer track relative to `min(width, height)`.
    pub joystick_ratio: f64,
    /// Diameter of the knob relative to `min(width, height)`.
    pub knob_ratio: f64,
    /// Duration of the recenter animation in milliseconds.
    pub recenter_duration_ms: u64,
    /// Easing curve applied to the recenter animation.
    pub recenter_easing: Easing,
    /// Axis maxima the joystick starts with.
    pub axis_max: AxisMax,
    /// Colors used by [`Joystick::paint`](crate::Joystick::paint).
    pub style: JoystickStyle,
}

impl JoystickConfig {
    /// Track diameter ratio used by [`JoystickConfig::default`].
    pub const DEFAULT_JOYSTICK_RATIO: f64 = 0.5;
    /// Knob diameter ratio used by [`JoystickConfig::default`].
    pub const DEFAULT_KNOB_RATIO: f64 = 0.1;
    /// Recenter duration used by [`JoystickConfig::default`].
    pub const DEFAULT_RECENTER_DURATION_MS: u64 = 250;

    /// Checks that the configuration describes a usable joystick.
    ///
    /// Both ratios must be finite and in `(0, 1]`, the knob must be strictly
    /// smaller than the track, and the recenter animation must have a
    /// non-zero duration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_ratio(RatioField::Joystick, self.joystick_ratio)?;
        check_ratio(RatioField::Knob, self.knob_ratio)?;
        if self.knob_ratio >= self.joystick_ratio {
            return Err(ConfigError::KnobNotSmallerThanTrack {
                knob_ratio: self.knob_ratio,
                joystick_ratio: self.joystick_ratio,
            });
        }
        if self.recenter_duration_ms == 0 {
            return Err(ConfigError::ZeroRecenterDuration);
        }
        Ok(())
    }
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            joystick_ratio: Self::DEFAULT_JOYSTICK_RATIO,
            knob_ratio: Self::DEFAULT_KNOB_RATIO,
            recenter_duration_ms: Self::DEFAULT_RECENTER_DURATION_MS,
            recenter_easing: Easing::InCirc,
            axis_max: AxisMax::default(),
            style: JoystickStyle::default(),
        }
    }
}

fn check_ratio(field: RatioField, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::RatioOutOfRange { field, value })
    }
}

/// Which size ratio a [`ConfigError::RatioOutOfRange`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RatioField {
    /// [`JoystickConfig::joystick_ratio`].
    Joystick,
    /// [`JoystickConfig::knob_ratio`].
    Knob,
}

impl fmt::Display for RatioField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Joystick => "joystick_ratio",
            Self::Knob => "knob_ratio",
        })
    }
}

/// Error returned by [`JoystickConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A size ratio is not finite or lies outside `(0, 1]`.
    RatioOutOfRange {
        /// The offending field.
        field: RatioField,
        /// The rejected value.
        value: f64,
    },
    /// The knob would be as large as (or larger than) the track, leaving no travel.
    KnobNotSmallerThanTrack {
        /// Configured knob ratio.
        knob_ratio: f64,
        /// Configured track ratio.
        joystick_ratio: f64,
    },
    /// The recenter animation duration is zero.
    ZeroRecenterDuration,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RatioOutOfRange { field, value } => {
                write!(f, "{field} must be finite and in (0, 1], got {value}")
            }
            Self::KnobNotSmallerThanTrack {
                knob_ratio,
                joystick_ratio,
            } => write!(
                f,
                "knob_ratio ({knob_ratio}) must be smaller than joystick_ratio ({joystick_ratio})"
            ),
            Self::ZeroRecenterDuration => f.write_str("recenter duration must be non-zero"),
        }
    }
}

impl core::error::Error for ConfigError {}
