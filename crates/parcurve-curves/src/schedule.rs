//! Fixed-leg payment schedules.
//!
//! Payment times are year fractions from the reference date. Grid points are
//! generated as `k * dt`, never by repeated addition, and the final payment
//! always lands exactly on the maturity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// `maturity / dt` within this distance of an integer is a whole number of periods.
pub const GRID_TOLERANCE: f64 = 1e-9;

/// Fixed-leg payment frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    /// Annual payments (1 per year)
    Annual,
    /// Semi-annual payments (2 per year)
    SemiAnnual,
    /// Quarterly payments (4 per year) - KRW IRS fixed leg
    #[default]
    Quarterly,
    /// Monthly payments (12 per year)
    Monthly,
}

impl Frequency {
    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
        }
    }

    /// Returns the accrual year fraction of one full period.
    #[must_use]
    pub fn accrual_fraction(&self) -> f64 {
        1.0 / f64::from(self.periods_per_year())
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}

/// One fixed-leg payment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentPeriod {
    /// Payment time in years.
    pub time: f64,
    /// Accrual year fraction of the period ending at `time`.
    pub accrual: f64,
}

/// Builds the fixed-leg payment schedule of a swap maturing at `maturity`.
///
/// When the maturity is a whole number `n` of periods the schedule is
/// `dt, 2dt, ..., (n-1)dt, maturity`, every period accruing exactly `dt`.
/// Otherwise the whole periods strictly before the maturity are followed by
/// a short final stub ending at the maturity. A maturity shorter than one
/// period gives a single payment at the maturity.
///
/// # Errors
///
/// Returns `InvalidInput` if `maturity` or `dt` is not finite and positive.
pub fn payment_schedule(maturity: f64, dt: f64) -> CurveResult<Vec<PaymentPeriod>> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(CurveError::invalid_input(format!(
            "payment interval must be positive, got {dt}"
        )));
    }
    if !maturity.is_finite() || maturity <= 0.0 {
        return Err(CurveError::invalid_input(format!(
            "maturity must be positive, got {maturity}"
        )));
    }

    let ratio = maturity / dt;
    let nearest = ratio.round();

    let (whole_periods, final_accrual) = if nearest >= 1.0 && (ratio - nearest).abs() < GRID_TOLERANCE
    {
        (nearest as usize - 1, dt)
    } else {
        let whole = ratio.floor() as usize;
        (whole, maturity - whole as f64 * dt)
    };

    let mut schedule = Vec::with_capacity(whole_periods + 1);
    schedule.extend((1..=whole_periods).map(|k| PaymentPeriod {
        time: k as f64 * dt,
        accrual: dt,
    }));
    schedule.push(PaymentPeriod {
        time: maturity,
        accrual: final_accrual,
    });

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_frequency_accrual() {
        assert_eq!(Frequency::Annual.accrual_fraction(), 1.0);
        assert_eq!(Frequency::SemiAnnual.accrual_fraction(), 0.5);
        assert_eq!(Frequency::Quarterly.accrual_fraction(), 0.25);
        assert_eq!(Frequency::default(), Frequency::Quarterly);
    }

    #[test]
    fn test_quarterly_one_year() {
        let schedule = payment_schedule(1.0, 0.25).unwrap();
        let times: Vec<f64> = schedule.iter().map(|p| p.time).collect();
        assert_eq!(times, vec![0.25, 0.5, 0.75, 1.0]);
        assert!(schedule.iter().all(|p| p.accrual == 0.25));
    }

    #[test]
    fn test_final_point_is_exact_maturity() {
        // 0.1 is not representable; accumulation would drift
        let schedule = payment_schedule(3.0, 0.1).unwrap();
        assert_eq!(schedule.len(), 30);
        assert_eq!(schedule.last().unwrap().time, 3.0);
        assert_eq!(schedule.last().unwrap().accrual, 0.1);
        assert!(schedule[28].time < 3.0);
    }

    #[test]
    fn test_monthly_grid_has_no_spurious_stub() {
        let schedule = payment_schedule(2.0, 1.0 / 12.0).unwrap();
        assert_eq!(schedule.len(), 24);
        assert_eq!(schedule.last().unwrap().time, 2.0);
    }

    #[test]
    fn test_broken_maturity_gets_short_stub() {
        let schedule = payment_schedule(1.1, 0.25).unwrap();
        let times: Vec<f64> = schedule.iter().map(|p| p.time).collect();
        assert_eq!(times, vec![0.25, 0.5, 0.75, 1.0, 1.1]);
        assert_relative_eq!(schedule[4].accrual, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_maturity_shorter_than_period() {
        let schedule = payment_schedule(1.0 / 12.0, 0.25).unwrap();
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].time, 1.0 / 12.0);
        assert_eq!(schedule[0].accrual, 1.0 / 12.0);
    }

    #[test]
    fn test_invalid_interval() {
        assert!(payment_schedule(1.0, 0.0).is_err());
        assert!(payment_schedule(1.0, -0.25).is_err());
        assert!(payment_schedule(1.0, f64::NAN).is_err());
        assert!(payment_schedule(0.0, 0.25).is_err());
    }
}
