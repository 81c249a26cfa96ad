//! Bootstrap configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};
use crate::schedule::Frequency;

/// Configuration for the sequential bootstrap.
///
/// Every field has a serde default, so a partial TOML or JSON table is a
/// valid configuration:
///
/// ```rust
/// use parcurve_curves::bootstrap::BootstrapConfig;
///
/// let config: BootstrapConfig = serde_json::from_str(r#"{ "payment_interval": 0.5 }"#).unwrap();
/// assert_eq!(config.payment_interval, 0.5);
/// assert!(config.allow_extrapolation);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Fixed-leg accrual year fraction per coupon period (`dt`).
    #[serde(default = "default_payment_interval")]
    pub payment_interval: f64,

    /// Whether interior cashflows beyond the last solved point may be
    /// priced by extrapolation.
    #[serde(default = "default_true")]
    pub allow_extrapolation: bool,

    /// Maximum absolute par residual accepted when repricing.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_payment_interval() -> f64 {
    Frequency::default().accrual_fraction()
}

fn default_true() -> bool {
    true
}

fn default_tolerance() -> f64 {
    1e-9
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            payment_interval: default_payment_interval(),
            allow_extrapolation: true,
            tolerance: default_tolerance(),
        }
    }
}

impl BootstrapConfig {
    /// Sets the payment interval from a frequency.
    #[must_use]
    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.payment_interval = frequency.accrual_fraction();
        self
    }

    /// Enables or disables extrapolation.
    #[must_use]
    pub fn with_extrapolation(mut self, enabled: bool) -> Self {
        self.allow_extrapolation = enabled;
        self
    }

    /// Sets the repricing tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the payment interval is not positive or the
    /// tolerance is negative.
    pub fn validate(&self) -> CurveResult<()> {
        if !self.payment_interval.is_finite() || self.payment_interval <= 0.0 {
            return Err(CurveError::invalid_input(format!(
                "payment interval must be positive, got {}",
                self.payment_interval
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(CurveError::invalid_input(format!(
                "tolerance must be non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}
