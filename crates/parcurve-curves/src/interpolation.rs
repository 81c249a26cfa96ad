//! Discount factor interpolation strategies.
//!
//! The strategy is chosen by how many points the curve holds:
//!
//! | Curve points | Strategy | DF(t) |
//! |--------------|----------|-------|
//! | anchor only  | [`DiscountInterpolation::FlatRate`] | `1 / (1 + r * t)` with `r` the quote being solved |
//! | two or more  | [`DiscountInterpolation::LogLinear`] | log-linear on solved points |
//!
//! The flat-rate stub only ever prices the interior coupons of the first
//! quote. It is an approximation, not a general interpolation scheme.

use parcurve_math::interpolation::{Interpolator, LogLinearInterpolator};
use parcurve_math::MathError;

use crate::error::{CurveError, CurveResult};

/// A discount factor pricer over the points solved so far.
#[derive(Debug, Clone)]
pub enum DiscountInterpolation {
    /// Only the anchor is known: price with a flat simple rate.
    FlatRate {
        /// The flat rate, normally the par rate of the quote being solved.
        rate: f64,
    },
    /// Log-linear interpolation over the solved points.
    LogLinear(LogLinearInterpolator),
}

impl DiscountInterpolation {
    /// Returns the discount factor at `t` years.
    ///
    /// # Errors
    ///
    /// - `InterpolationGap` if `t` is outside the solved range and
    ///   extrapolation is disabled
    /// - `InvalidInput` if `t` is negative or the flat rate gives a
    ///   non-positive discount factor
    pub fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        if !t.is_finite() || t < 0.0 {
            return Err(CurveError::invalid_input(format!(
                "time must be non-negative, got {t}"
            )));
        }

        match self {
            Self::FlatRate { rate } => {
                let growth = 1.0 + rate * t;
                if growth <= 0.0 {
                    return Err(CurveError::invalid_input(format!(
                        "flat rate {rate} gives a non-positive discount factor at t={t}"
                    )));
                }
                Ok(1.0 / growth)
            }
            Self::LogLinear(interp) => interp.interpolate(t).map_err(|e| match e {
                MathError::ExtrapolationNotAllowed { x, min, max } => {
                    CurveError::interpolation_gap(x, min, max)
                }
                other => CurveError::from(other),
            }),
        }
    }

    /// Returns true if this is the flat-rate stub.
    #[must_use]
    pub fn is_flat_rate(&self) -> bool {
        matches!(self, Self::FlatRate { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_rate_stub() {
        let stub = DiscountInterpolation::FlatRate { rate: 0.03 };
        assert!(stub.is_flat_rate());
        assert_eq!(stub.discount_factor(0.0).unwrap(), 1.0);
        assert_relative_eq!(stub.discount_factor(0.5).unwrap(), 1.0 / 1.015, epsilon = 1e-15);
    }

    #[test]
    fn test_flat_rate_stub_rejects_non_positive_df() {
        let stub = DiscountInterpolation::FlatRate { rate: -2.0 };
        assert!(stub.discount_factor(0.75).is_err());
    }

    #[test]
    fn test_log_linear_gap_maps_to_curve_error() {
        let interp = LogLinearInterpolator::new(vec![0.0, 1.0], vec![1.0, 0.97]).unwrap();
        let strategy = DiscountInterpolation::LogLinear(interp);

        let err = strategy.discount_factor(1.25).unwrap_err();
        assert_eq!(err, CurveError::interpolation_gap(1.25, 0.0, 1.0));
    }

    #[test]
    fn test_negative_time_rejected() {
        let stub = DiscountInterpolation::FlatRate { rate: 0.03 };
        assert!(stub.discount_factor(-0.1).is_err());
    }
}
