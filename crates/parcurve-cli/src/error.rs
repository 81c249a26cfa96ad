//! CLI error types.

use parcurve_curves::CurveError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Unparseable tenor token.
    #[error("Invalid tenor: {0}. Use 3M, 1Y, 2W, 10D, a number of years or YYYY-MM-DD.")]
    InvalidTenor(String),

    /// Unparseable rate.
    #[error("Invalid rate: {0}. Rates are given in percent, e.g. 3.25.")]
    InvalidRate(String),

    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Missing required argument.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Curve construction error.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// CSV input error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
