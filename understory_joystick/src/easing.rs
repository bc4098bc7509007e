// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves for the recenter animation.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// An easing curve mapping normalized time `t ∈ [0, 1]` to eased time.
///
/// Curves are monotonic with `ease(0) == 0` and `ease(1) == 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Identity curve.
    Linear,
    /// Circular ease-in: `1 - sqrt(1 - t²)`. Starts slowly and accelerates.
    #[default]
    InCirc,
}

impl Easing {
    /// Evaluates the curve. `t` is clamped into `[0, 1]` first.
    #[must_use]
    pub fn ease(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::InCirc => 1.0 - (1.0 - t * t).max(0.0).sqrt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Easing;

    #[test]
    fn endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::InCirc] {
            assert_eq!(easing.ease(0.0), 0.0);
            assert_eq!(easing.ease(1.0), 1.0);
        }
    }

    #[test]
    fn in_circ_accelerates() {
        let e = Easing::InCirc;
        // Slower than linear early on.
        assert!(e.ease(0.25) < 0.25);
        assert!(e.ease(0.5) < 0.5);
        // Steeper at the end than at the start.
        let early = e.ease(0.1) - e.ease(0.0);
        let late = e.ease(1.0) - e.ease(0.9);
        assert!(late > early);
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::InCirc.ease(-3.0), 0.0);
        assert_eq!(Easing::InCirc.ease(7.0), 1.0);
        assert_eq!(Easing::Linear.ease(f64::NAN), 0.0);
    }
}
