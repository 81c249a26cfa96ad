//! Tenor and rate parsing.
//!
//! A tenor token is a count followed by a unit (`3M`, `1Y`, `2W`, `10D`),
//! a bare number of years (`2.5`), or an ISO date converted to a year
//! fraction from the settlement date with ACT/365F.

use chrono::NaiveDate;

use crate::error::{CliError, CliResult};

const DAYS_PER_YEAR: f64 = 365.0;

/// Parses one tenor token into years from `settlement`.
pub fn parse_tenor(token: &str, settlement: NaiveDate) -> CliResult<f64> {
    let token = token.trim();
    if token.is_empty() {
        return Err(CliError::InvalidTenor(token.to_string()));
    }

    if let Ok(date) = NaiveDate::parse_from_str(token, "%Y-%m-%d") {
        return year_fraction(settlement, date);
    }

    let upper = token.to_ascii_uppercase();
    let (count, unit) = match upper.char_indices().last() {
        Some((i, c)) if c.is_ascii_alphabetic() => (&upper[..i], Some(c)),
        _ => (upper.as_str(), None),
    };

    let count: f64 = count
        .parse()
        .map_err(|_| CliError::InvalidTenor(token.to_string()))?;

    let years = match unit {
        None | Some('Y') => count,
        Some('M') => count / 12.0,
        Some('W') => count * 7.0 / DAYS_PER_YEAR,
        Some('D') => count / DAYS_PER_YEAR,
        Some(_) => return Err(CliError::InvalidTenor(token.to_string())),
    };

    if !years.is_finite() || years <= 0.0 {
        return Err(CliError::InvalidTenor(token.to_string()));
    }
    Ok(years)
}

/// Parses a comma-separated tenor list.
pub fn parse_tenor_list(list: &str, settlement: NaiveDate) -> CliResult<Vec<f64>> {
    list.split(',').map(|t| parse_tenor(t, settlement)).collect()
}

/// Parses one rate given in percent into a decimal.
pub fn parse_percent(token: &str) -> CliResult<f64> {
    token
        .trim()
        .trim_end_matches('%')
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite())
        .map(|r| r / 100.0)
        .ok_or_else(|| CliError::InvalidRate(token.trim().to_string()))
}

/// Parses a comma-separated list of percent rates.
pub fn parse_rate_list(list: &str) -> CliResult<Vec<f64>> {
    list.split(',').map(parse_percent).collect()
}

/// Parses a settlement date in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// ACT/365F year fraction between two dates.
fn year_fraction(start: NaiveDate, end: NaiveDate) -> CliResult<f64> {
    let days = (end - start).num_days();
    if days <= 0 {
        return Err(CliError::InvalidTenor(format!(
            "{end} is not after settlement {start}"
        )));
    }
    Ok(days as f64 / DAYS_PER_YEAR)
}
