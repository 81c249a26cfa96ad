//! Sequential bootstrap of a discount curve from par swap quotes.
//!
//! Quotes are solved in ascending maturity. For each quote the interior
//! fixed-leg coupons are priced on the points solved so far, and the
//! terminal discount factor follows in closed form from the par condition:
//!
//! ```text
//! DF(T) = (1 - S * sum(tau_i * DF(t_i))) / (1 + S * tau_n)
//! ```
//!
//! where `S` is the par rate, `t_i` the interior payment times and `tau_n`
//! the final period's accrual. No root finding is needed because `DF(T)`
//! enters the par condition linearly once the interior sum is known.
//!
//! # Example
//!
//! ```rust
//! use parcurve_curves::bootstrap::CurveBootstrapper;
//! use parcurve_curves::quote::SwapQuote;
//!
//! let output = CurveBootstrapper::default()
//!     .bootstrap(&[
//!         SwapQuote::new(10.0, 0.05),
//!         SwapQuote::new(1.0, 0.03),
//!         SwapQuote::new(5.0, 0.04),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(output.results.len(), 3);
//! assert_eq!(output.results[0].maturity, 1.0);
//! assert!(output.report.is_valid());
//! ```

mod config;
mod sequential;

pub use config::BootstrapConfig;
pub use sequential::{
    bootstrap_par_swaps, BootstrapOutput, BootstrapRun, CurveBootstrapper, SolvedPillar,
};
