//! Config command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::cli::OutputFormat;
use crate::config::CliConfig;

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Configuration file to load. Defaults are shown when omitted.
    #[arg(short, long, env = "PARCURVE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Execute the config command.
pub fn execute(args: &ConfigArgs, format: OutputFormat) -> Result<()> {
    let config = CliConfig::load(args.config.as_deref())?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        _ => print!("{}", config.to_toml()?),
    }

    Ok(())
}
