//! Error types for curve construction.
//!
//! Every failure aborts the whole bootstrap: later pillars depend on earlier
//! ones, so a curve with a failed pillar is not a curve.

use parcurve_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// The quote set or a query argument is malformed.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of what's wrong with the input.
        reason: String,
    },

    /// The closed-form solve produced an unusable discount factor.
    #[error("Numerical failure at maturity {maturity:.4}Y (par rate {par_rate:.6}): {reason}")]
    NumericalFailure {
        /// Maturity of the quote being solved.
        maturity: f64,
        /// Par rate of the quote being solved.
        par_rate: f64,
        /// Description of the failure.
        reason: String,
    },

    /// A time falls outside the solved range and extrapolation is disabled.
    #[error("Interpolation gap: t={time:.4} is outside the solved range [{min:.4}, {max:.4}]")]
    InterpolationGap {
        /// The requested time in years.
        time: f64,
        /// Earliest solved time.
        min: f64,
        /// Latest solved time.
        max: f64,
    },

    /// An interior coupon of the quote being solved lies beyond the last
    /// solved point and extrapolation is disabled.
    #[error("Interpolation gap at maturity {maturity:.4}Y (par rate {par_rate:.6}): coupon at t={time:.4} is outside the solved range [{min:.4}, {max:.4}]")]
    CouponGap {
        /// Maturity of the quote being solved.
        maturity: f64,
        /// Par rate of the quote being solved.
        par_rate: f64,
        /// Payment time of the unpriced coupon.
        time: f64,
        /// Earliest solved time.
        min: f64,
        /// Latest solved time.
        max: f64,
    },

    /// Quotes failed to reprice within tolerance.
    #[error("Repricing failed: {failed_count} quote(s) exceed tolerance (max residual: {max_residual:.2e})")]
    RepricingFailed {
        /// Number of failing quotes.
        failed_count: usize,
        /// Largest absolute par residual.
        max_residual: f64,
        /// Maturities of the failing quotes.
        maturities: Vec<f64>,
    },

    /// Error raised by the numerical layer.
    #[error("Math error: {0}")]
    Math(#[from] MathError),
}

impl CurveError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a numerical failure error for the quote being solved.
    #[must_use]
    pub fn numerical_failure(maturity: f64, par_rate: f64, reason: impl Into<String>) -> Self {
        Self::NumericalFailure {
            maturity,
            par_rate,
            reason: reason.into(),
        }
    }

    /// Creates an interpolation gap error.
    #[must_use]
    pub fn interpolation_gap(time: f64, min: f64, max: f64) -> Self {
        Self::InterpolationGap { time, min, max }
    }

    /// Creates a coupon gap error for the quote being solved.
    #[must_use]
    pub fn coupon_gap(maturity: f64, par_rate: f64, time: f64, min: f64, max: f64) -> Self {
        Self::CouponGap {
            maturity,
            par_rate,
            time,
            min,
            max,
        }
    }

    /// Creates a repricing failure error.
    #[must_use]
    pub fn repricing_failed(failed_count: usize, max_residual: f64, maturities: Vec<f64>) -> Self {
        Self::RepricingFailed {
            failed_count,
            max_residual,
            maturities,
        }
    }
}
