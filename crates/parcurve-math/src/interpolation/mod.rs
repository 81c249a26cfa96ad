//! Interpolation methods for discount curve construction.
//!
//! # Available Methods
//!
//! - [`LogLinearInterpolator`]: linear interpolation of `ln(y)`, the standard
//!   choice for discount factors
//!
//! Log-linear interpolation of discount factors keeps every interpolated value
//! strictly positive and makes the instantaneous forward rate piecewise
//! constant between nodes. Linear interpolation of zero rates gives neither
//! guarantee.

mod log_linear;

pub use log_linear::LogLinearInterpolator;

use crate::error::MathResult;

/// Trait for interpolation methods.
///
/// Curve construction only depends on this trait, so an alternative scheme
/// can be swapped in without touching the bootstrap.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the first derivative at x.
    fn derivative(&self, x: f64) -> MathResult<f64>;

    /// Returns true if extrapolation is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}
