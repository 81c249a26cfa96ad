//! Parcurve CLI - Bootstrap discount curves from par swap quotes.
//!
//! # Usage
//!
//! ```bash
//! # Bootstrap from inline quotes (rates in percent)
//! parcurve bootstrap --tenors 1Y,5Y,10Y --rates 3,4,5
//!
//! # Bootstrap from a CSV file with a `tenor,rate` header
//! parcurve bootstrap --file quotes.csv --query 2.5,7 --show-repricing
//!
//! # JSON output, semi-annual fixed leg, no extrapolation
//! parcurve --format json bootstrap --tenors 6M,1Y --rates 3,3.1 --frequency semi-annual --strict
//!
//! # Print the default configuration file
//! parcurve config
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;
mod tenor;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Bootstrap(args) => commands::bootstrap::execute(args, cli.format)?,
        Commands::Config(args) => commands::config::execute(&args, cli.format)?,
    }

    Ok(())
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides `-v`.
fn init_tracing(verbose: u8) {
    let default_directive = match verbose {
        0 => "parcurve=info",
        1 => "parcurve=debug",
        _ => "parcurve=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
