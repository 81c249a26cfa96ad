//! Log-linear interpolation.
//!
//! Interpolates the logarithm of values, which keeps discount factors
//! positive and yields piecewise constant forward rates.

use std::cmp::Ordering;

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Log-linear interpolation between data points.
///
/// The interpolation formula is:
/// ```text
/// y(x) = exp(linear_interpolate(x, ln(y)))
/// ```
///
/// When extrapolation is enabled, queries outside the node range reuse the
/// nearest segment's slope in log space.
///
/// # Example
///
/// ```rust
/// use parcurve_math::interpolation::{LogLinearInterpolator, Interpolator};
///
/// let times = vec![0.0, 1.0, 2.0, 3.0];
/// let discount_factors = vec![1.0, 0.97, 0.94, 0.91];
///
/// let interp = LogLinearInterpolator::new(times, discount_factors).unwrap();
/// let df = interp.interpolate(1.5).unwrap();
/// assert!(df > 0.94 && df < 0.97);
/// ```
#[derive(Debug, Clone)]
pub struct LogLinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Precomputed ln(y) values
    log_ys: Vec<f64>,
    allow_extrapolation: bool,
}

impl LogLinearInterpolator {
    /// Creates a new log-linear interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (strictly increasing)
    /// * `ys` - Y coordinates (strictly positive)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There are fewer than 2 points
    /// - Lengths differ
    /// - The x values are not strictly increasing
    /// - Any y value is non-positive or not finite
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.len() < 2 {
            return Err(MathError::insufficient_data(2, xs.len()));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }

        for i in 1..xs.len() {
            if xs[i] <= xs[i - 1] || !xs[i].is_finite() || !xs[i - 1].is_finite() {
                return Err(MathError::invalid_input(
                    "x values must be finite and strictly increasing",
                ));
            }
        }

        let mut log_ys = Vec::with_capacity(ys.len());
        for (i, &y) in ys.iter().enumerate() {
            if y <= 0.0 || !y.is_finite() {
                return Err(MathError::invalid_input(format!(
                    "y[{i}] = {y} is not positive; log-linear requires positive values"
                )));
            }
            log_ys.push(y.ln());
        }

        Ok(Self {
            xs,
            ys,
            log_ys,
            allow_extrapolation: false,
        })
    }

    /// Enables extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// Finds the index i such that xs[i] <= x < xs[i+1], clamped to the
    /// first and last segments.
    fn find_segment(&self, x: f64) -> usize {
        let last_segment = self.xs.len() - 2;
        match self
            .xs
            .binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(Ordering::Equal))
        {
            Ok(i) => i.min(last_segment),
            Err(i) => i.saturating_sub(1).min(last_segment),
        }
    }

    fn check_query(&self, x: f64) -> MathResult<()> {
        if !x.is_finite() {
            return Err(MathError::invalid_input(format!(
                "query point {x} is not finite"
            )));
        }
        if !self.allow_extrapolation && !self.in_range(x) {
            return Err(MathError::extrapolation_not_allowed(
                x,
                self.min_x(),
                self.max_x(),
            ));
        }
        Ok(())
    }

    /// Returns `(ln y(x), d ln y / dx)` on the segment containing x.
    fn log_value_and_slope(&self, x: f64) -> (f64, f64) {
        let i = self.find_segment(x);

        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let log_y0 = self.log_ys[i];
        let log_y1 = self.log_ys[i + 1];

        let slope = (log_y1 - log_y0) / (x1 - x0);
        (log_y0 + slope * (x - x0), slope)
    }
}

impl Interpolator for LogLinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_query(x)?;

        // Nodes are returned verbatim so they survive the ln/exp round trip.
        if let Ok(i) = self
            .xs
            .binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(Ordering::Less))
        {
            return Ok(self.ys[i]);
        }

        let (log_y, _) = self.log_value_and_slope(x);
        Ok(log_y.exp())
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.check_query(x)?;

        // dy/dx = y(x) * d(ln y)/dx
        let (log_y, slope) = self.log_value_and_slope(x);
        Ok(log_y.exp() * slope)
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}
