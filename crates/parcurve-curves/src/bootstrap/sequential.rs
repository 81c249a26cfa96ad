//! Sequential bootstrap algorithm.
//!
//! Solves each quote's terminal discount factor in ascending maturity,
//! using only the points already on the curve.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::bootstrap::BootstrapConfig;
use crate::compounding::Compounding;
use crate::curve::DiscountCurve;
use crate::error::{CurveError, CurveResult};
use crate::quote::{sorted_quotes, SwapQuote};
use crate::repricing::RepricingReport;
use crate::schedule::{payment_schedule, Frequency};

/// One solved quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolvedPillar {
    /// Maturity in years.
    pub maturity: f64,
    /// Quoted par rate.
    pub par_rate: f64,
    /// Continuously compounded zero rate, `-ln(DF) / T`.
    pub zero_rate: f64,
    /// Solved discount factor at the maturity.
    pub discount_factor: f64,
    /// Accrual-weighted sum of interior discount factors.
    pub interior_annuity: f64,
    /// `1 - (S * annuity + DF(T))` with the discount factors used in the solve.
    pub par_residual: f64,
}

impl SolvedPillar {
    /// Returns the zero rate in another compounding convention.
    pub fn zero_rate_in(&self, compounding: Compounding) -> CurveResult<f64> {
        compounding.zero_rate(self.discount_factor, self.maturity)
    }
}

/// Everything produced by one bootstrap run.
#[derive(Debug, Clone)]
pub struct BootstrapOutput {
    /// One pillar per quote, in ascending maturity.
    pub results: Vec<SolvedPillar>,
    /// The solved curve, anchor included.
    pub curve: DiscountCurve,
    /// Repricing of every quote against the final curve.
    pub report: RepricingReport,
    /// Wall-clock time spent building the curve.
    pub build_duration: Duration,
}

/// The curve accumulator of a single bootstrap run.
///
/// A run owns its curve exclusively and only ever appends to it. Each call
/// to [`solve`](Self::solve) reads points strictly before the new maturity.
#[derive(Debug, Clone)]
pub struct BootstrapRun {
    curve: DiscountCurve,
    payment_interval: f64,
}

impl BootstrapRun {
    /// Starts a run with a curve holding only the anchor.
    #[must_use]
    pub fn new(config: &BootstrapConfig) -> Self {
        Self {
            curve: DiscountCurve::new().with_extrapolation(config.allow_extrapolation),
            payment_interval: config.payment_interval,
        }
    }

    /// Returns the curve solved so far.
    #[must_use]
    pub fn curve(&self) -> &DiscountCurve {
        &self.curve
    }

    /// Consumes the run and returns its curve.
    #[must_use]
    pub fn into_curve(self) -> DiscountCurve {
        self.curve
    }

    /// Discount factor at `t` on the points solved so far.
    ///
    /// While only the anchor exists, `t` is priced at the flat simple rate
    /// `flat_rate`, normally the par rate of the quote being solved.
    pub fn interpolate(&self, t: f64, flat_rate: f64) -> CurveResult<f64> {
        self.curve.interpolation(flat_rate)?.discount_factor(t)
    }

    /// Solves `quote` and appends its pillar to the curve.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the maturity does not extend the curve
    /// - `CouponGap` if an interior coupon lies beyond the last solved point
    ///   and extrapolation is disabled
    /// - `NumericalFailure` if the solved discount factor is not positive
    pub fn solve(&mut self, quote: &SwapQuote) -> CurveResult<SolvedPillar> {
        let SwapQuote { maturity, par_rate } = *quote;

        if maturity <= self.curve.max_time() {
            return Err(CurveError::invalid_input(format!(
                "quote at {maturity}Y does not extend the curve beyond {}Y",
                self.curve.max_time()
            )));
        }

        let schedule = payment_schedule(maturity, self.payment_interval)?;
        let (last, interior) = schedule
            .split_last()
            .ok_or_else(|| CurveError::invalid_input("empty payment schedule"))?;

        let pricer = self.curve.interpolation(par_rate)?;
        let mut interior_annuity = 0.0;
        for period in interior {
            let df = pricer.discount_factor(period.time).map_err(|e| match e {
                CurveError::InterpolationGap { time, min, max } => {
                    CurveError::coupon_gap(maturity, par_rate, time, min, max)
                }
                other => CurveError::numerical_failure(maturity, par_rate, other.to_string()),
            })?;
            interior_annuity += period.accrual * df;
        }

        let denominator = 1.0 + par_rate * last.accrual;
        if denominator <= 0.0 {
            return Err(CurveError::numerical_failure(
                maturity,
                par_rate,
                format!("final coupon factor {denominator} is not positive"),
            ));
        }

        let discount_factor = (1.0 - par_rate * interior_annuity) / denominator;
        if !discount_factor.is_finite() || discount_factor <= 0.0 {
            return Err(CurveError::numerical_failure(
                maturity,
                par_rate,
                format!("discount factor {discount_factor} is not positive"),
            ));
        }

        let zero_rate = Compounding::Continuous
            .zero_rate(discount_factor, maturity)
            .map_err(|e| CurveError::numerical_failure(maturity, par_rate, e.to_string()))?;

        let par_residual = 1.0
            - (par_rate * (interior_annuity + last.accrual * discount_factor) + discount_factor);

        self.curve.push(maturity, discount_factor)?;

        log::debug!(
            "solved {quote}: df={discount_factor:.10} zero={zero_rate:.6} annuity={interior_annuity:.6} ({} interior coupons{})",
            interior.len(),
            if pricer.is_flat_rate() && !interior.is_empty() { ", flat-rate stub" } else { "" }
        );

        Ok(SolvedPillar {
            maturity,
            par_rate,
            zero_rate,
            discount_factor,
            interior_annuity,
            par_residual,
        })
    }
}

/// Sequential bootstrapper for par swap curves.
///
/// The sequential bootstrap algorithm:
/// 1. Validate and sort quotes by maturity
/// 2. Start the curve at DF(0) = 1.0
/// 3. For each quote, price the interior coupons on the curve so far and
///    solve the terminal discount factor in closed form
/// 4. Reprice every quote against the final curve
///
/// # Example
///
/// ```rust
/// use parcurve_curves::bootstrap::{BootstrapConfig, CurveBootstrapper};
/// use parcurve_curves::quote::SwapQuote;
/// use parcurve_curves::schedule::Frequency;
///
/// let bootstrapper = CurveBootstrapper::new(
///     BootstrapConfig::default().with_frequency(Frequency::SemiAnnual),
/// );
/// let output = bootstrapper
///     .bootstrap(&[SwapQuote::new(2.0, 0.035), SwapQuote::new(1.0, 0.03)])
///     .unwrap();
///
/// assert!(output.results[0].discount_factor > output.results[1].discount_factor);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CurveBootstrapper {
    config: BootstrapConfig,
}

impl CurveBootstrapper {
    /// Creates a bootstrapper with the given configuration.
    #[must_use]
    pub fn new(config: BootstrapConfig) -> Self {
        Self { config }
    }

    /// Sets the fixed-leg payment frequency.
    #[must_use]
    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.config = self.config.with_frequency(frequency);
        self
    }

    /// Enables or disables extrapolation.
    #[must_use]
    pub fn with_extrapolation(mut self, enabled: bool) -> Self {
        self.config = self.config.with_extrapolation(enabled);
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Bootstraps the curve from `quotes`, in any order.
    ///
    /// The first failing quote aborts the run; no partial curve is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration or the quote set is invalid
    /// - Any quote fails to solve
    pub fn bootstrap(&self, quotes: &[SwapQuote]) -> CurveResult<BootstrapOutput> {
        let started = Instant::now();

        self.config.validate()?;
        let sorted = sorted_quotes(quotes)?;

        let mut run = BootstrapRun::new(&self.config);
        let results = sorted
            .iter()
            .map(|quote| run.solve(quote))
            .collect::<CurveResult<Vec<_>>>()?;
        let curve = run.into_curve();

        let report = RepricingReport::from_pillars(
            &results,
            &curve,
            self.config.payment_interval,
            self.config.tolerance,
        )?;

        let build_duration = started.elapsed();
        log::info!(
            "bootstrapped {} pillars to {:.2}Y in {:?} (max residual {:.2e}, max drift {:.2} bp)",
            results.len(),
            curve.max_time(),
            build_duration,
            report.max_residual(),
            report.max_drift() * 10_000.0
        );

        Ok(BootstrapOutput {
            results,
            curve,
            report,
            build_duration,
        })
    }

    /// Bootstraps and fails if any quote does not reprice within tolerance.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::RepricingFailed` on top of the errors of
    /// [`bootstrap`](Self::bootstrap).
    pub fn bootstrap_strict(&self, quotes: &[SwapQuote]) -> CurveResult<BootstrapOutput> {
        let output = self.bootstrap(quotes)?;

        if !output.report.is_valid() {
            return Err(CurveError::repricing_failed(
                output.report.failed_count(),
                output.report.max_residual(),
                output.report.failed_maturities(),
            ));
        }

        Ok(output)
    }
}

/// Bootstraps `quotes` with payment interval `dt` and returns the pillars.
///
/// Convenience wrapper over [`CurveBootstrapper`] with extrapolation enabled.
pub fn bootstrap_par_swaps(quotes: &[SwapQuote], dt: f64) -> CurveResult<Vec<SolvedPillar>> {
    let config = BootstrapConfig {
        payment_interval: dt,
        ..BootstrapConfig::default()
    };
    Ok(CurveBootstrapper::new(config).bootstrap(quotes)?.results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn scenario_quotes() -> Vec<SwapQuote> {
        vec![
            SwapQuote::new(1.0, 0.03),
            SwapQuote::new(5.0, 0.04),
            SwapQuote::new(10.0, 0.05),
        ]
    }

    #[test]
    fn test_first_quote_uses_flat_rate_stub() {
        let output = CurveBootstrapper::default()
            .bootstrap(&scenario_quotes())
            .unwrap();
        let first = output.results[0];

        let sum = 0.25 * (1.0 / 1.0075 + 1.0 / 1.015 + 1.0 / 1.0225);
        let expected_df = (1.0 - 0.03 * sum) / (1.0 + 0.03 * 0.25);

        assert_relative_eq!(first.interior_annuity, sum, epsilon = 1e-15);
        assert_relative_eq!(first.discount_factor, expected_df, epsilon = 1e-15);
        assert_relative_eq!(first.discount_factor, 0.9705525611699741, epsilon = 1e-14);
        assert_relative_eq!(first.zero_rate, -expected_df.ln(), epsilon = 1e-15);
    }

    #[test]
    fn test_scenario_reference_values() {
        let output = CurveBootstrapper::default()
            .bootstrap(&scenario_quotes())
            .unwrap();

        let expected = [
            (1.0, 0.9705525611699741, 0.02988971898337701),
            (5.0, 0.8153786310461361, 0.040820539130697726),
            (10.0, 0.5923611083157797, 0.05236388497973323),
        ];
        for (pillar, (maturity, df, zero)) in output.results.iter().zip(expected) {
            assert_eq!(pillar.maturity, maturity);
            assert_relative_eq!(pillar.discount_factor, df, epsilon = 1e-12);
            assert_relative_eq!(pillar.zero_rate, zero, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_single_quote_bounds() {
        let output = CurveBootstrapper::default()
            .bootstrap(&[SwapQuote::new(1.0, 0.03)])
            .unwrap();
        let df = output.results[0].discount_factor;

        // Quarterly coupons put DF below the annual 1/1.03, within 1e-4 of
        // quarterly compounding at the par rate
        let quarterly = 1.0 / 1.0075_f64.powi(4);
        assert!(df < 1.0 / 1.03, "DF(1Y) = {df}");
        assert!((df - quarterly).abs() < 1e-4, "DF(1Y) = {df}");
        assert_eq!(output.curve.node_count(), 2);
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let mut quotes = scenario_quotes();
        quotes.reverse();

        let output = CurveBootstrapper::default().bootstrap(&quotes).unwrap();
        let maturities: Vec<f64> = output.results.iter().map(|r| r.maturity).collect();
        assert_eq!(maturities, vec![1.0, 5.0, 10.0]);
        assert_eq!(output.curve.node_count(), 4);
    }

    #[test]
    fn test_par_residual_is_zero() {
        let output = CurveBootstrapper::default()
            .bootstrap(&scenario_quotes())
            .unwrap();
        for pillar in &output.results {
            assert!(pillar.par_residual.abs() < 1e-12, "{pillar:?}");
        }
        assert!(output.report.is_valid());
    }

    #[test]
    fn test_results_match_curve_points() {
        let output = CurveBootstrapper::default()
            .bootstrap(&scenario_quotes())
            .unwrap();
        for (pillar, point) in output.results.iter().zip(&output.curve.points()[1..]) {
            assert_eq!(pillar.maturity, point.time);
            assert_eq!(pillar.discount_factor, point.discount_factor);
        }
    }

    #[test]
    fn test_negative_discount_factor_is_numerical_failure() {
        let err = CurveBootstrapper::default()
            .bootstrap(&[SwapQuote::new(10.0, 0.5)])
            .unwrap_err();

        match err {
            CurveError::NumericalFailure { maturity, par_rate, .. } => {
                assert_eq!(maturity, 10.0);
                assert_eq!(par_rate, 0.5);
            }
            other => panic!("expected NumericalFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_strict_mode_reports_gap() {
        let err = CurveBootstrapper::default()
            .with_extrapolation(false)
            .bootstrap(&scenario_quotes())
            .unwrap_err();

        assert_eq!(err, CurveError::coupon_gap(5.0, 0.04, 1.25, 0.0, 1.0));
    }

    #[test]
    fn test_strict_mode_with_dense_quotes() {
        let quotes = [
            SwapQuote::new(0.25, 0.03),
            SwapQuote::new(0.5, 0.031),
            SwapQuote::new(0.75, 0.032),
            SwapQuote::new(1.0, 0.033),
        ];
        let output = CurveBootstrapper::default()
            .with_extrapolation(false)
            .bootstrap_strict(&quotes)
            .unwrap();

        assert_relative_eq!(output.results[0].discount_factor, 1.0 / 1.0075, epsilon = 1e-15);
        assert_relative_eq!(
            output.results[3].discount_factor,
            0.967649661799117,
            epsilon = 1e-14
        );
        // Every interior coupon sits on a solved node, so nothing drifts
        assert!(output.report.max_drift() < 1e-14);
    }

    #[test]
    fn test_run_interpolate_fallback_and_nodes() {
        let config = BootstrapConfig::default();
        let mut run = BootstrapRun::new(&config);

        assert_relative_eq!(run.interpolate(0.5, 0.03).unwrap(), 1.0 / 1.015, epsilon = 1e-15);

        let pillar = run.solve(&SwapQuote::new(1.0, 0.03)).unwrap();
        assert_eq!(run.interpolate(1.0, 0.99).unwrap(), pillar.discount_factor);
        assert_eq!(run.interpolate(0.0, 0.99).unwrap(), 1.0);
    }

    #[test]
    fn test_run_rejects_non_extending_quote() {
        let mut run = BootstrapRun::new(&BootstrapConfig::default());
        run.solve(&SwapQuote::new(2.0, 0.03)).unwrap();

        assert!(run.solve(&SwapQuote::new(1.0, 0.03)).is_err());
        assert_eq!(run.curve().node_count(), 2);
    }

    #[test]
    fn test_failure_aborts_whole_run() {
        let quotes = [
            SwapQuote::new(1.0, 0.03),
            SwapQuote::new(2.0, 0.032),
            SwapQuote::new(30.0, 0.9),
        ];
        assert!(CurveBootstrapper::default().bootstrap(&quotes).is_err());
    }

    #[test]
    fn test_invalid_inputs() {
        let bootstrapper = CurveBootstrapper::default();
        assert!(bootstrapper.bootstrap(&[]).is_err());
        assert!(bootstrapper.bootstrap(&[SwapQuote::new(-1.0, 0.03)]).is_err());
        assert!(bootstrapper
            .bootstrap(&[SwapQuote::new(1.0, 0.03), SwapQuote::new(1.0, 0.031)])
            .is_err());

        let bad_config = BootstrapConfig {
            payment_interval: -0.25,
            ..BootstrapConfig::default()
        };
        assert!(CurveBootstrapper::new(bad_config)
            .bootstrap(&[SwapQuote::new(1.0, 0.03)])
            .is_err());
    }

    #[test]
    fn test_annual_zero_rate() {
        let pillar = CurveBootstrapper::default()
            .bootstrap(&[SwapQuote::new(1.0, 0.03)])
            .unwrap()
            .results[0];
        let annual = pillar.zero_rate_in(Compounding::Annual).unwrap();
        assert_relative_eq!(annual, 1.0 / pillar.discount_factor - 1.0, epsilon = 1e-14);
    }

    #[test]
    fn test_bootstrap_par_swaps() {
        let pillars = bootstrap_par_swaps(&scenario_quotes(), 0.25).unwrap();
        assert_eq!(pillars.len(), 3);
        assert!(bootstrap_par_swaps(&scenario_quotes(), 0.0).is_err());
    }

    #[test]
    fn test_build_duration_recorded() {
        let output = CurveBootstrapper::default()
            .bootstrap(&scenario_quotes())
            .unwrap();
        assert!(output.build_duration.as_nanos() > 0);
    }
}
