//! CLI command implementations.

pub mod bootstrap;
pub mod config;

pub use bootstrap::BootstrapArgs;
pub use config::ConfigArgs;
