//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, registry construction and argument
//! parsing helpers.

use crate::error::CliError;
use chrono::NaiveDate;
use hotelier::{BookingPolicy, Config, ConfigBuilder, HotelRegistry, OutputFormat};
use std::path::PathBuf;

/// Date format accepted for check-in, check-out and availability dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Global CLI options shared across all commands.
///
/// Verbosity is consumed by the logger before any command runs, so only
/// the settings commands read themselves live here.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. The `--config` file
/// 3. The user file `~/.hotelier/config.yaml`
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_file(path);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Create an empty registry governed by the configured booking policy.
pub fn open_registry(config: &Config) -> Result<HotelRegistry, CliError> {
    let policy = BookingPolicy::from_config(config).map_err(|e| CliError::Config(e.to_string()))?;
    Ok(HotelRegistry::new(policy))
}

/// The configured default output format.
pub fn default_format(config: &Config) -> OutputFormat {
    config.output_format.unwrap_or_default()
}

/// Parse an ISO `YYYY-MM-DD` date.
///
/// Used as a clap value parser for session arguments.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| format!("invalid date '{s}' (expected YYYY-MM-DD)"))
}

/// Format an amount of money for display.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}
