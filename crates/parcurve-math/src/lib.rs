//! # Parcurve Math
//!
//! Numerical building blocks for the Parcurve swap curve bootstrapper.
//!
//! This crate provides:
//!
//! - **Interpolation**: the [`Interpolator`](interpolation::Interpolator) trait and
//!   log-linear interpolation of discount factors
//! - **Errors**: [`MathError`] shared by every numerical routine

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]

pub mod error;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{Interpolator, LogLinearInterpolator};
}

pub use error::{MathError, MathResult};
