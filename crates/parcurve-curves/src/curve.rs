//! Discount curve built up one pillar at a time.
//!
//! The curve always starts at the anchor `(0, 1)`. Points are kept in
//! strictly increasing time order and are never revised once appended.

use serde::{Deserialize, Serialize};

use parcurve_math::interpolation::LogLinearInterpolator;

use crate::compounding::Compounding;
use crate::error::{CurveError, CurveResult};
use crate::interpolation::DiscountInterpolation;

/// A solved `(time, discount factor)` node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Time in years from the reference date.
    pub time: f64,
    /// Discount factor at `time`.
    pub discount_factor: f64,
}

impl CurvePoint {
    /// The anchor point `(0, 1)`.
    pub const ANCHOR: CurvePoint = CurvePoint {
        time: 0.0,
        discount_factor: 1.0,
    };
}

/// A discount curve of solved points, interpolated log-linearly.
///
/// # Example
///
/// ```rust
/// use parcurve_curves::prelude::*;
///
/// let output = CurveBootstrapper::default()
///     .bootstrap(&[SwapQuote::new(1.0, 0.03), SwapQuote::new(2.0, 0.032)])
///     .unwrap();
///
/// let curve = &output.curve;
/// assert_eq!(curve.points()[0], CurvePoint::ANCHOR);
/// let df = curve.discount_factor(1.5).unwrap();
/// assert!(df < curve.discount_factor(1.0).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountCurve {
    points: Vec<CurvePoint>,
    allow_extrapolation: bool,
}

impl Default for DiscountCurve {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscountCurve {
    /// Creates a curve holding only the anchor, with extrapolation enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            points: vec![CurvePoint::ANCHOR],
            allow_extrapolation: true,
        }
    }

    /// Enables or disables extrapolation beyond the last solved point.
    #[must_use]
    pub fn with_extrapolation(mut self, enabled: bool) -> Self {
        self.allow_extrapolation = enabled;
        self
    }

    /// Returns the solved points, anchor first.
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Number of points including the anchor.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.points.len()
    }

    /// Time of the last solved point.
    #[must_use]
    pub fn max_time(&self) -> f64 {
        self.points[self.points.len() - 1].time
    }

    /// Returns true if queries beyond the last point are extrapolated.
    #[must_use]
    pub fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    /// Appends a solved point.
    pub(crate) fn push(&mut self, time: f64, discount_factor: f64) -> CurveResult<()> {
        let last = self.max_time();
        if !time.is_finite() || time <= last {
            return Err(CurveError::invalid_input(format!(
                "curve points must be strictly increasing: {time} after {last}"
            )));
        }
        if !discount_factor.is_finite() || discount_factor <= 0.0 {
            return Err(CurveError::invalid_input(format!(
                "discount factor {discount_factor} at t={time} is not positive"
            )));
        }

        self.points.push(CurvePoint {
            time,
            discount_factor,
        });
        Ok(())
    }

    /// Selects the interpolation strategy for the current points.
    ///
    /// With only the anchor the flat-rate stub is returned, priced at
    /// `flat_rate`. Otherwise the points are interpolated log-linearly.
    pub fn interpolation(&self, flat_rate: f64) -> CurveResult<DiscountInterpolation> {
        if self.points.len() < 2 {
            return Ok(DiscountInterpolation::FlatRate { rate: flat_rate });
        }
        self.interpolator()
    }

    /// Returns the log-linear interpolator over the solved points.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the curve holds only the anchor.
    pub fn interpolator(&self) -> CurveResult<DiscountInterpolation> {
        if self.points.len() < 2 {
            return Err(CurveError::invalid_input(
                "curve has no solved points beyond the anchor",
            ));
        }

        let times = self.points.iter().map(|p| p.time).collect();
        let dfs = self.points.iter().map(|p| p.discount_factor).collect();

        let interp = LogLinearInterpolator::new(times, dfs)?;
        Ok(DiscountInterpolation::LogLinear(if self.allow_extrapolation {
            interp.with_extrapolation()
        } else {
            interp
        }))
    }

    /// Returns the discount factor at `t` years.
    ///
    /// Builds the interpolator on every call; use
    /// [`interpolator`](Self::interpolator) for batches of queries.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve holds only the anchor (and `t > 0`),
    /// `t` is negative, or `t` lies beyond the last point with extrapolation
    /// disabled.
    pub fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        if t == 0.0 {
            return Ok(1.0);
        }
        self.interpolator()?.discount_factor(t)
    }

    /// Returns the zero rate at `t` years in the given compounding.
    pub fn zero_rate(&self, t: f64, compounding: Compounding) -> CurveResult<f64> {
        let df = self.discount_factor(t)?;
        compounding.zero_rate(df, t)
    }

    /// Returns the continuously compounded forward rate between `t1` and `t2`.
    ///
    /// Between two adjacent points this is constant.
    pub fn forward_rate(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        if t2 <= t1 {
            return Err(CurveError::invalid_input(format!(
                "forward period must have t2 > t1, got [{t1}, {t2}]"
            )));
        }
        let df1 = self.discount_factor(t1)?;
        let df2 = self.discount_factor(t2)?;
        Ok((df1 / df2).ln() / (t2 - t1))
    }
}
