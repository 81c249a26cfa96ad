//! # Parcurve Curves
//!
//! Sequential bootstrapping of zero-coupon discount curves from par interest
//! rate swap quotes.
//!
//! This crate provides:
//!
//! - **Quotes**: [`SwapQuote`] and validation of quote sets
//! - **Schedules**: fixed-leg payment grids with exact maturity end points
//! - **Curves**: an append-only [`DiscountCurve`] anchored at `DF(0) = 1`,
//!   interpolated log-linearly in discount factors
//! - **Bootstrap**: the closed-form sequential solver [`CurveBootstrapper`]
//! - **Repricing**: par residual and rate drift checks of every quote
//!
//! ## Quick Start
//!
//! ```rust
//! use parcurve_curves::prelude::*;
//!
//! let quotes = quotes_from_parallel(&[1.0, 5.0, 10.0], &[0.03, 0.04, 0.05]).unwrap();
//! let output = CurveBootstrapper::default().bootstrap(&quotes).unwrap();
//!
//! for pillar in &output.results {
//!     println!(
//!         "{:>5.2}Y  DF {:.6}  zero {:.4}%",
//!         pillar.maturity,
//!         pillar.discount_factor,
//!         pillar.zero_rate * 100.0
//!     );
//! }
//!
//! let df = output.curve.discount_factor(7.5).unwrap();
//! assert!(df > 0.0 && df < 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

pub mod bootstrap;
pub mod compounding;
pub mod curve;
pub mod error;
pub mod interpolation;
pub mod quote;
pub mod repricing;
pub mod schedule;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::{
        bootstrap_par_swaps, BootstrapConfig, BootstrapOutput, BootstrapRun, CurveBootstrapper,
        SolvedPillar,
    };
    pub use crate::compounding::Compounding;
    pub use crate::curve::{CurvePoint, DiscountCurve};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::interpolation::DiscountInterpolation;
    pub use crate::quote::{quotes_from_parallel, SwapQuote};
    pub use crate::repricing::{RepricingCheck, RepricingReport};
    pub use crate::schedule::{payment_schedule, Frequency, PaymentPeriod};
}

pub use bootstrap::CurveBootstrapper;
pub use compounding::Compounding;
pub use curve::DiscountCurve;
pub use error::{CurveError, CurveResult};
pub use quote::SwapQuote;
