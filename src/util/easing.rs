//! Easing functions for camera animation.
//!
//! All curves map `[0, 1]` onto `[0, 1]` with `f(0) = 0` and `f(1) = 1`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Quartic ease-out: `1 - (1 - t)^4`, a long gentle stop.
    #[default]
    QuarticOut,
}

impl EasingFunction {
    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::QuarticOut => {
                let r = t - 1.0;
                -(r * r * r * r - 1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingFunction; 3] = [
        EasingFunction::Linear,
        EasingFunction::QuadraticOut,
        EasingFunction::QuarticOut,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert_eq!(easing.evaluate(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.evaluate(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn test_quartic_out_values() {
        let quart = EasingFunction::QuarticOut;
        // 1 - 0.5^4
        assert!((quart.evaluate(0.5) - 0.9375).abs() < 1e-6);
        assert!(quart.evaluate(0.1) > EasingFunction::QuadraticOut.evaluate(0.1));
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut last = 0.0;
            for i in 1..=100 {
                let v = easing.evaluate(i as f32 / 100.0);
                assert!(v >= last, "{easing:?} decreases at step {i}");
                last = v;
            }
        }
    }

    #[test]
    fn test_input_clamping() {
        for easing in ALL {
            assert_eq!(easing.evaluate(-0.5), 0.0);
            assert_eq!(easing.evaluate(1.5), 1.0);
        }
    }

    #[test]
    fn test_default_is_quartic_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::QuarticOut);
    }
}
