//! Bootstrap command implementation.
//!
//! Bootstraps a discount curve from par swap quotes given inline or in a
//! CSV file, and reports pillars, extra query tenors and repricing.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use parcurve_curves::bootstrap::BootstrapOutput;
use parcurve_curves::prelude::*;

use crate::cli::OutputFormat;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{
    format_bps, format_percent, format_years, print_csv, print_header, print_json, print_success,
    print_table, print_warning, KeyValue,
};
use crate::tenor::{parse_date, parse_percent, parse_rate_list, parse_tenor, parse_tenor_list};

/// Arguments for the bootstrap command.
#[derive(Args, Debug)]
pub struct BootstrapArgs {
    /// Quote tenors (comma-separated, e.g., "1Y,5Y,10Y" or "0.5,1,2")
    #[arg(short, long, requires = "rates", conflicts_with = "file")]
    pub tenors: Option<String>,

    /// Par rates in percent (comma-separated, e.g., "3,4,5")
    #[arg(short, long, requires = "tenors")]
    pub rates: Option<String>,

    /// CSV file with a `tenor,rate` header, rates in percent
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Fixed-leg payment frequency
    #[arg(long, value_enum)]
    pub frequency: Option<FrequencyChoice>,

    /// Disable extrapolation and fail if any quote does not reprice
    #[arg(long)]
    pub strict: bool,

    /// Compounding of reported zero rates
    #[arg(long, value_enum)]
    pub compounding: Option<CompoundingChoice>,

    /// Extra tenors to interpolate (comma-separated)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Show the repricing check of every quote
    #[arg(long)]
    pub show_repricing: bool,

    /// Maximum absolute par residual
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Settlement date for date tenors (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub settlement: Option<String>,

    /// TOML configuration file
    #[arg(short, long, env = "PARCURVE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Frequency choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FrequencyChoice {
    /// Annual (1/year)
    Annual,
    /// Semi-annual (2/year)
    #[value(name = "semi-annual")]
    SemiAnnual,
    /// Quarterly (4/year)
    Quarterly,
    /// Monthly (12/year)
    Monthly,
}

impl From<FrequencyChoice> for Frequency {
    fn from(choice: FrequencyChoice) -> Self {
        match choice {
            FrequencyChoice::Annual => Frequency::Annual,
            FrequencyChoice::SemiAnnual => Frequency::SemiAnnual,
            FrequencyChoice::Quarterly => Frequency::Quarterly,
            FrequencyChoice::Monthly => Frequency::Monthly,
        }
    }
}

/// Compounding choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CompoundingChoice {
    /// Simple interest
    Simple,
    /// Annual
    Annual,
    /// Semi-annual
    #[value(name = "semi-annual")]
    SemiAnnual,
    /// Quarterly
    Quarterly,
    /// Monthly
    Monthly,
    /// Continuous
    Continuous,
}

impl From<CompoundingChoice> for Compounding {
    fn from(choice: CompoundingChoice) -> Self {
        match choice {
            CompoundingChoice::Simple => Compounding::Simple,
            CompoundingChoice::Annual => Compounding::Annual,
            CompoundingChoice::SemiAnnual => Compounding::SemiAnnual,
            CompoundingChoice::Quarterly => Compounding::Quarterly,
            CompoundingChoice::Monthly => Compounding::Monthly,
            CompoundingChoice::Continuous => Compounding::Continuous,
        }
    }
}

/// A quote with the tenor label it was given as.
#[derive(Debug, Clone)]
struct LabelledQuote {
    label: String,
    quote: SwapQuote,
}

/// One `tenor,rate` line of a quote file.
#[derive(Debug, Deserialize)]
struct QuoteRow {
    tenor: String,
    rate: String,
}

/// One output row, either a solved pillar or a queried tenor.
#[derive(Debug, Clone, Serialize)]
struct CurveRow {
    kind: &'static str,
    tenor: String,
    maturity: f64,
    par_rate: Option<f64>,
    zero_rate: f64,
    discount_factor: f64,
}

#[derive(Tabled)]
struct CurveTableRow {
    #[tabled(rename = "Tenor")]
    tenor: String,
    #[tabled(rename = "Years")]
    years: String,
    #[tabled(rename = "Par Rate")]
    par_rate: String,
    #[tabled(rename = "Zero Rate")]
    zero_rate: String,
    #[tabled(rename = "Discount Factor")]
    discount_factor: String,
}

#[derive(Tabled)]
struct RepricingTableRow {
    #[tabled(rename = "Tenor")]
    tenor: String,
    #[tabled(rename = "Par Residual")]
    residual: String,
    #[tabled(rename = "Model Rate")]
    model_rate: String,
    #[tabled(rename = "Drift")]
    drift: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Execute the bootstrap command.
pub fn execute(args: BootstrapArgs, format: OutputFormat) -> Result<()> {
    let mut config = CliConfig::load(args.config.as_deref())?;
    if let Some(frequency) = args.frequency {
        config.bootstrap = config.bootstrap.with_frequency(frequency.into());
    }
    if args.strict {
        config.bootstrap = config.bootstrap.with_extrapolation(false);
    }
    if let Some(tolerance) = args.tolerance {
        config.bootstrap = config.bootstrap.with_tolerance(tolerance);
    }
    if let Some(compounding) = args.compounding {
        config.output.compounding = compounding.into();
    }

    let settlement = settlement_date(args.settlement.as_deref())?;
    let quotes = load_quotes(&args, settlement)?;
    let query_times = match &args.query {
        Some(list) => parse_tenor_list(list, settlement)?,
        None => Vec::new(),
    };

    tracing::info!(
        "bootstrapping {} quotes (payment interval {}, extrapolation {})",
        quotes.len(),
        config.bootstrap.payment_interval,
        if config.bootstrap.allow_extrapolation { "on" } else { "off" }
    );

    let bootstrapper = CurveBootstrapper::new(config.bootstrap);
    let plain: Vec<SwapQuote> = quotes.iter().map(|q| q.quote).collect();
    let output = if args.strict {
        bootstrapper.bootstrap_strict(&plain)?
    } else {
        bootstrapper.bootstrap(&plain)?
    };

    let pillars = pillar_rows(&output, &quotes, config.output.compounding)?;
    let queries = query_rows(&output.curve, &query_times, config.output.compounding)?;

    match format {
        OutputFormat::Table => {
            print_report(&output, &pillars, &queries, &config, settlement, args.show_repricing, &quotes);
        }
        OutputFormat::Json => {
            print_json(&serde_json::json!({
                "settlement": settlement.to_string(),
                "payment_interval": config.bootstrap.payment_interval,
                "allow_extrapolation": config.bootstrap.allow_extrapolation,
                "compounding": config.output.compounding,
                "pillars": pillars,
                "queries": queries,
                "repricing": {
                    "valid": output.report.is_valid(),
                    "max_residual": output.report.max_residual(),
                    "max_drift": output.report.max_drift(),
                    "checks": output.report.checks(),
                },
            }))?;
        }
        OutputFormat::Csv => {
            let rows: Vec<&CurveRow> = pillars.iter().chain(&queries).collect();
            print_csv(&rows)?;
        }
        OutputFormat::Minimal => {
            for row in pillars.iter().chain(&queries) {
                println!(
                    "{} {:.prec$}",
                    row.maturity,
                    row.discount_factor,
                    prec = config.output.precision
                );
            }
        }
    }

    Ok(())
}

fn settlement_date(arg: Option<&str>) -> CliResult<NaiveDate> {
    match arg {
        Some(s) => parse_date(s),
        None => Ok(chrono::Utc::now().date_naive()),
    }
}

fn load_quotes(args: &BootstrapArgs, settlement: NaiveDate) -> CliResult<Vec<LabelledQuote>> {
    let (labels, rates) = match (&args.tenors, &args.rates, &args.file) {
        (Some(tenors), Some(rates), _) => (
            tenors.split(',').map(|t| t.trim().to_string()).collect::<Vec<_>>(),
            parse_rate_list(rates)?,
        ),
        (_, _, Some(path)) => read_quote_file(path)?,
        _ => {
            return Err(CliError::MissingArgument(
                "--tenors and --rates, or --file".to_string(),
            ))
        }
    };

    let maturities = labels
        .iter()
        .map(|label| parse_tenor(label, settlement))
        .collect::<CliResult<Vec<_>>>()?;

    let quotes = quotes_from_parallel(&maturities, &rates)?;
    Ok(labels
        .into_iter()
        .zip(quotes)
        .map(|(label, quote)| LabelledQuote { label, quote })
        .collect())
}

fn read_quote_file(path: &Path) -> CliResult<(Vec<String>, Vec<f64>)> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_path(path)?;

    let mut labels = Vec::new();
    let mut rates = Vec::new();
    for row in reader.deserialize::<QuoteRow>() {
        let row = row?;
        rates.push(parse_percent(&row.rate)?);
        labels.push(row.tenor);
    }

    tracing::debug!("read {} quotes from {}", labels.len(), path.display());
    Ok((labels, rates))
}

fn pillar_rows(
    output: &BootstrapOutput,
    quotes: &[LabelledQuote],
    compounding: Compounding,
) -> CliResult<Vec<CurveRow>> {
    output
        .results
        .iter()
        .map(|pillar| {
            let tenor = quotes
                .iter()
                .find(|q| q.quote.maturity == pillar.maturity)
                .map_or_else(|| format_years(pillar.maturity), |q| q.label.clone());
            Ok(CurveRow {
                kind: "pillar",
                tenor,
                maturity: pillar.maturity,
                par_rate: Some(pillar.par_rate),
                zero_rate: pillar.zero_rate_in(compounding)?,
                discount_factor: pillar.discount_factor,
            })
        })
        .collect()
}

fn query_rows(
    curve: &DiscountCurve,
    times: &[f64],
    compounding: Compounding,
) -> CliResult<Vec<CurveRow>> {
    if times.is_empty() {
        return Ok(Vec::new());
    }

    let pricer = curve.interpolator()?;
    times
        .iter()
        .map(|&t| {
            let discount_factor = pricer.discount_factor(t)?;
            Ok(CurveRow {
                kind: "query",
                tenor: format_years(t),
                maturity: t,
                par_rate: None,
                zero_rate: compounding.zero_rate(discount_factor, t)?,
                discount_factor,
            })
        })
        .collect()
}

fn table_rows(rows: &[CurveRow], precision: usize) -> Vec<CurveTableRow> {
    rows.iter()
        .map(|row| CurveTableRow {
            tenor: row.tenor.clone(),
            years: format!("{:.4}", row.maturity),
            par_rate: row.par_rate.map_or_else(|| "-".to_string(), format_percent),
            zero_rate: format_percent(row.zero_rate),
            discount_factor: format!("{:.precision$}", row.discount_factor),
        })
        .collect()
}

fn print_report(
    output: &BootstrapOutput,
    pillars: &[CurveRow],
    queries: &[CurveRow],
    config: &CliConfig,
    settlement: NaiveDate,
    show_repricing: bool,
    quotes: &[LabelledQuote],
) {
    let precision = config.output.precision;

    print_header("Bootstrapped Curve");
    print_table(&[
        KeyValue::new("Settlement", settlement.to_string()),
        KeyValue::new(
            "Payment interval",
            format!("{} years", config.bootstrap.payment_interval),
        ),
        KeyValue::new(
            "Extrapolation",
            if config.bootstrap.allow_extrapolation { "enabled" } else { "disabled" },
        ),
        KeyValue::new("Zero rates", config.output.compounding.to_string()),
        KeyValue::new("Pillars", output.results.len().to_string()),
        KeyValue::new("Build time", format!("{:?}", output.build_duration)),
    ]);

    print_header("Pillars");
    print_table(&table_rows(pillars, precision));

    if !queries.is_empty() {
        print_header("Interpolated");
        print_table(&table_rows(queries, precision));
    }

    if show_repricing {
        print_header("Repricing");
        let rows: Vec<RepricingTableRow> = output
            .report
            .checks()
            .iter()
            .map(|check| RepricingTableRow {
                tenor: quotes
                    .iter()
                    .find(|q| q.quote.maturity == check.maturity)
                    .map_or_else(|| format_years(check.maturity), |q| q.label.clone()),
                residual: format!("{:.2e}", check.par_residual),
                model_rate: format_percent(check.model_rate),
                drift: format_bps(check.rate_drift),
                status: if check.passed { "✓" } else { "✗" }.to_string(),
            })
            .collect();
        print_table(&rows);
    }

    println!();
    let summary = format!(
        "{}/{} quotes repriced within {:.0e} (max drift {})",
        output.report.total_count() - output.report.failed_count(),
        output.report.total_count(),
        config.bootstrap.tolerance,
        format_bps(output.report.max_drift())
    );
    if output.report.is_valid() {
        print_success(&summary);
    } else {
        print_warning(&summary);
    }
}
