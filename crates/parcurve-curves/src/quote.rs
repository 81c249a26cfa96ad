//! Par swap quotes.
//!
//! A quote is the only market input the bootstrap consumes: a maturity in
//! years and the fixed rate at which a fixed-for-floating swap of that
//! maturity is worth par.
//!
//! Maturities are arbitrary positive reals (1.0, 1.5, 0.25, ...). They need
//! not be whole years and need not be contiguous.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// Two maturities closer than this are treated as the same pillar.
pub const MATURITY_TOLERANCE: f64 = 1e-10;

/// A par swap rate quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwapQuote {
    /// Maturity in years from the curve's reference date.
    pub maturity: f64,
    /// Par fixed rate as a decimal (0.035 = 3.5%).
    pub par_rate: f64,
}

impl SwapQuote {
    /// Creates a new quote.
    #[must_use]
    pub fn new(maturity: f64, par_rate: f64) -> Self {
        Self { maturity, par_rate }
    }

    fn validate(&self) -> CurveResult<()> {
        if !self.maturity.is_finite() || self.maturity <= 0.0 {
            return Err(CurveError::invalid_input(format!(
                "maturity must be positive, got {}",
                self.maturity
            )));
        }
        if !self.par_rate.is_finite() {
            return Err(CurveError::invalid_input(format!(
                "par rate for maturity {} is not finite",
                self.maturity
            )));
        }
        Ok(())
    }
}

impl fmt::Display for SwapQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Swap {:.4}Y @ {:.4}%", self.maturity, self.par_rate * 100.0)
    }
}

/// Zips parallel maturity and rate lists into quotes.
///
/// # Errors
///
/// Returns `InvalidInput` if the lists have different lengths.
pub fn quotes_from_parallel(maturities: &[f64], rates: &[f64]) -> CurveResult<Vec<SwapQuote>> {
    if maturities.len() != rates.len() {
        return Err(CurveError::invalid_input(format!(
            "maturities ({}) and rates ({}) must have the same length",
            maturities.len(),
            rates.len()
        )));
    }

    Ok(maturities
        .iter()
        .zip(rates)
        .map(|(&maturity, &par_rate)| SwapQuote::new(maturity, par_rate))
        .collect())
}

/// Validates a quote set and returns it sorted by ascending maturity.
///
/// # Errors
///
/// Returns `InvalidInput` if the set is empty, a maturity is not positive,
/// a rate is not finite, or two quotes share a maturity.
pub fn sorted_quotes(quotes: &[SwapQuote]) -> CurveResult<Vec<SwapQuote>> {
    if quotes.is_empty() {
        return Err(CurveError::invalid_input("no quotes provided for bootstrap"));
    }

    for quote in quotes {
        quote.validate()?;
    }

    let mut sorted = quotes.to_vec();
    sorted.sort_by(|a, b| a.maturity.partial_cmp(&b.maturity).unwrap_or(Ordering::Equal));

    if let Some(pair) = sorted
        .windows(2)
        .find(|pair| pair[1].maturity - pair[0].maturity < MATURITY_TOLERANCE)
    {
        return Err(CurveError::invalid_input(format!(
            "duplicate maturity {}: quotes {:.6} and {:.6} are ambiguous",
            pair[0].maturity, pair[0].par_rate, pair[1].par_rate
        )));
    }

    Ok(sorted)
}
