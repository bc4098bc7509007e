// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless integer spin box.

use core::fmt;

/// Headless model of an integer spin box.
///
/// The value always lies in `[min, max]`. Mutators return the new value only
/// when it actually changed, which is what callers use to propagate edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpinBox {
    value: u32,
    min: u32,
    max: u32,
    step: u32,
}

impl SpinBox {
    /// Lower bound used by [`SpinBox::new`].
    pub const DEFAULT_MIN: u32 = 0;
    /// Upper bound used by [`SpinBox::new`].
    pub const DEFAULT_MAX: u32 = 1000;

    /// Creates a spin box over `[0, 1000]` with step `1`.
    ///
    /// `value` is clamped into range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self {
            value: value.clamp(Self::DEFAULT_MIN, Self::DEFAULT_MAX),
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
            step: 1,
        }
    }

    /// Creates a spin box over `[min, max]`.
    pub fn with_range(value: u32, min: u32, max: u32) -> Result<Self, SpinBoxError> {
        check_range(min, max)?;
        Ok(Self {
            value: value.clamp(min, max),
            min,
            max,
            step: 1,
        })
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Amount a single step changes the value by.
    #[must_use]
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Sets the step size. A step of `0` is treated as `1`.
    pub fn set_step(&mut self, step: u32) {
        self.step = step.max(1);
    }

    /// Sets the value, clamped into range.
    ///
    /// Returns the new value if it changed.
    pub fn set_value(&mut self, value: u32) -> Option<u32> {
        let value = value.clamp(self.min, self.max);
        if value == self.value {
            return None;
        }
        self.value = value;
        Some(value)
    }

    /// Moves the value by `steps` steps (negative steps move down), saturating
    /// at the range bounds.
    ///
    /// Returns the new value if it changed.
    pub fn step_by(&mut self, steps: i32) -> Option<u32> {
        let amount = steps.unsigned_abs().saturating_mul(self.step);
        let value = if steps >= 0 {
            self.value.saturating_add(amount)
        } else {
            self.value.saturating_sub(amount)
        };
        self.set_value(value)
    }

    /// Moves the value up by one step.
    pub fn step_up(&mut self) -> Option<u32> {
        self.step_by(1)
    }

    /// Moves the value down by one step.
    pub fn step_down(&mut self) -> Option<u32> {
        self.step_by(-1)
    }

    /// Changes the range, re-clamping the current value.
    ///
    /// Returns the new value if re-clamping changed it.
    pub fn set_range(&mut self, min: u32, max: u32) -> Result<Option<u32>, SpinBoxError> {
        check_range(min, max)?;
        self.min = min;
        self.max = max;
        Ok(self.set_value(self.value))
    }
}

impl Default for SpinBox {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN)
    }
}

fn check_range(min: u32, max: u32) -> Result<(), SpinBoxError> {
    if min > max {
        Err(SpinBoxError::InvalidRange { min, max })
    } else {
        Ok(())
    }
}

/// Error returned when configuring a [`SpinBox`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinBoxError {
    /// The lower bound exceeds the upper bound.
    InvalidRange {
        /// Requested lower bound.
        min: u32,
        /// Requested upper bound.
        max: u32,
    },
}

impl fmt::Display for SpinBoxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { min, max } => {
                write!(f, "spin box range is inverted: min {min} > max {max}")
            }
        }
    }
}

impl core::error::Error for SpinBoxError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_into_default_range() {
        assert_eq!(SpinBox::new(50).value(), 50);
        assert_eq!(SpinBox::new(5000).value(), 1000);
        assert_eq!(SpinBox::default().value(), 0);
    }

    #[test]
    fn set_value_reports_changes_only() {
        let mut spin = SpinBox::new(50);
        assert_eq!(spin.set_value(50), None);
        assert_eq!(spin.set_value(75), Some(75));
        assert_eq!(spin.set_value(2000), Some(1000));
        assert_eq!(spin.set_value(1001), None);
    }

    #[test]
    fn stepping_saturates_at_bounds() {
        let mut spin = SpinBox::with_range(5, 0, 10).unwrap();
        spin.set_step(3);
        assert_eq!(spin.step_up(), Some(8));
        assert_eq!(spin.step_up(), Some(10));
        assert_eq!(spin.step_up(), None);
        assert_eq!(spin.step_by(-2), Some(4));
        assert_eq!(spin.step_by(-100), Some(0));
        assert_eq!(spin.step_down(), None);
        assert_eq!(spin.step_by(i32::MIN), None);
    }

    #[test]
    fn zero_step_is_one() {
        let mut spin = SpinBox::new(0);
        spin.set_step(0);
        assert_eq!(spin.step(), 1);
        assert_eq!(spin.step_up(), Some(1));
    }

    #[test]
    fn range_changes_reclamp() {
        let mut spin = SpinBox::new(500);
        assert_eq!(spin.set_range(0, 100), Ok(Some(100)));
        assert_eq!(spin.set_range(0, 200), Ok(None));
        assert_eq!(
            spin.set_range(10, 5),
            Err(SpinBoxError::InvalidRange { min: 10, max: 5 })
        );
        assert_eq!(spin.value(), 100);
        assert!(SpinBox::with_range(0, 3, 2).is_err());
    }
}
