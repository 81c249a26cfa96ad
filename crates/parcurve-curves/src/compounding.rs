//! Compounding conventions for zero rates.
//!
//! The bootstrap derives continuously compounded zero rates. Other
//! conventions are provided for reporting.
//!
//! # Example
//!
//! ```rust
//! use parcurve_curves::Compounding;
//!
//! let df = Compounding::Continuous.discount_factor(0.05, 2.0);
//! let rate = Compounding::Annual.zero_rate(df, 2.0).unwrap();
//!
//! // e^0.05 - 1
//! assert!((rate - 0.051271096).abs() < 1e-9);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// Interest compounding convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Compounding {
    /// Simple interest (no compounding)
    Simple,
    /// Annual compounding (1x per year)
    Annual,
    /// Semi-annual compounding (2x per year)
    SemiAnnual,
    /// Quarterly compounding (4x per year)
    Quarterly,
    /// Monthly compounding (12x per year)
    Monthly,
    /// Continuous compounding
    #[default]
    Continuous,
}

impl Compounding {
    /// Returns the number of compounding periods per year, if periodic.
    #[must_use]
    pub fn periods_per_year_opt(&self) -> Option<u32> {
        match self {
            Compounding::Annual => Some(1),
            Compounding::SemiAnnual => Some(2),
            Compounding::Quarterly => Some(4),
            Compounding::Monthly => Some(12),
            Compounding::Simple | Compounding::Continuous => None,
        }
    }

    /// Discount factor implied by `rate` over `t` years.
    #[must_use]
    pub fn discount_factor(&self, rate: f64, t: f64) -> f64 {
        match self {
            Compounding::Continuous => (-rate * t).exp(),
            Compounding::Simple => 1.0 / (1.0 + rate * t),
            periodic => {
                let n = f64::from(periodic.periods_per_year_opt().unwrap_or(1));
                (1.0 + rate / n).powf(-n * t)
            }
        }
    }

    /// Zero rate reproducing `df` over `t` years.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `t` is not positive or `df` is not a
    /// positive finite number.
    pub fn zero_rate(&self, df: f64, t: f64) -> CurveResult<f64> {
        if !t.is_finite() || t <= 0.0 {
            return Err(CurveError::invalid_input(format!(
                "zero rate needs a positive horizon, got t={t}"
            )));
        }
        if !df.is_finite() || df <= 0.0 {
            return Err(CurveError::invalid_input(format!(
                "zero rate needs a positive discount factor, got {df}"
            )));
        }

        let rate = match self {
            Compounding::Continuous => -df.ln() / t,
            Compounding::Simple => (1.0 / df - 1.0) / t,
            periodic => {
                let n = f64::from(periodic.periods_per_year_opt().unwrap_or(1));
                n * (df.powf(-1.0 / (n * t)) - 1.0)
            }
        };
        Ok(rate)
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Compounding::Simple => "Simple",
            Compounding::Annual => "Annual",
            Compounding::SemiAnnual => "Semi-Annual",
            Compounding::Quarterly => "Quarterly",
            Compounding::Monthly => "Monthly",
            Compounding::Continuous => "Continuous",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_discount_factor_continuous() {
        let df = Compounding::Continuous.discount_factor(0.05, 1.0);
        assert_relative_eq!(df, (-0.05_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_discount_factor_semi_annual() {
        let df = Compounding::SemiAnnual.discount_factor(0.05, 1.0);
        assert_relative_eq!(df, 1.025_f64.powf(-2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_discount_factor_simple() {
        let df = Compounding::Simple.discount_factor(0.05, 0.5);
        assert_relative_eq!(df, 1.0 / 1.025, epsilon = 1e-12);
    }

    #[test]
    fn test_annual_zero_rate_matches_power_form() {
        // (1/DF)^(1/T) - 1
        let df: f64 = 0.8153786310461361;
        let t = 5.0;
        let expected = (1.0 / df).powf(1.0 / t) - 1.0;
        assert_relative_eq!(
            Compounding::Annual.zero_rate(df, t).unwrap(),
            expected,
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_roundtrip_all_compounding() {
        let original_rate = 0.05;
        let t = 2.0;

        for compounding in [
            Compounding::Continuous,
            Compounding::Annual,
            Compounding::SemiAnnual,
            Compounding::Quarterly,
            Compounding::Monthly,
            Compounding::Simple,
        ] {
            let df = compounding.discount_factor(original_rate, t);
            let recovered = compounding.zero_rate(df, t).unwrap();
            assert_relative_eq!(recovered, original_rate, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_zero_rate_rejects_bad_inputs() {
        assert!(Compounding::Continuous.zero_rate(0.0, 1.0).is_err());
        assert!(Compounding::Continuous.zero_rate(-0.1, 1.0).is_err());
        assert!(Compounding::Continuous.zero_rate(0.9, 0.0).is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Compounding::SemiAnnual).unwrap();
        assert_eq!(json, "\"semi-annual\"");
        let parsed: Compounding = serde_json::from_str("\"continuous\"").unwrap();
        assert_eq!(parsed, Compounding::Continuous);
    }
}
