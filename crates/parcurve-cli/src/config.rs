//! CLI configuration file.
//!
//! ```toml
//! [bootstrap]
//! payment_interval = 0.25
//! allow_extrapolation = true
//! tolerance = 1e-9
//!
//! [output]
//! compounding = "continuous"
//! precision = 6
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use std::path::Path;

use parcurve_curves::bootstrap::BootstrapConfig;
use parcurve_curves::Compounding;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Top-level CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Bootstrap settings.
    #[serde(default)]
    pub bootstrap: BootstrapConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Compounding of reported zero rates.
    #[serde(default)]
    pub compounding: Compounding,

    /// Decimal places for discount factors.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_precision() -> usize {
    6
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            compounding: Compounding::default(),
            precision: default_precision(),
        }
    }
}

impl CliConfig {
    /// Loads a configuration file, or the defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("cannot read {}: {e}", path.display())))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;

        config.bootstrap.validate()?;
        tracing::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()))
    }
}
