//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `HOTELIER_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use std::env;

/// Overrides `default_base_price`.
pub const ENV_DEFAULT_BASE_PRICE: &str = "HOTELIER_DEFAULT_BASE_PRICE";
/// Overrides `max_rooms`.
pub const ENV_MAX_ROOMS: &str = "HOTELIER_MAX_ROOMS";
/// Overrides `minimum_room_price`.
pub const ENV_MINIMUM_ROOM_PRICE: &str = "HOTELIER_MINIMUM_ROOM_PRICE";
/// Overrides `output_format`.
pub const ENV_OUTPUT_FORMAT: &str = "HOTELIER_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use hotelier::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the variable if any value cannot
    /// be parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(ENV_DEFAULT_BASE_PRICE) {
            config.default_base_price = Some(Self::parse_amount(ENV_DEFAULT_BASE_PRICE, &val)?);
        }

        if let Ok(val) = env::var(ENV_MAX_ROOMS) {
            config.max_rooms = Some(val.trim().parse().map_err(|_| Error::Validation {
                field: ENV_MAX_ROOMS.into(),
                message: format!("'{val}' is not a non-negative integer"),
            })?);
        }

        if let Ok(val) = env::var(ENV_MINIMUM_ROOM_PRICE) {
            config.minimum_room_price = Some(Self::parse_amount(ENV_MINIMUM_ROOM_PRICE, &val)?);
        }

        if let Ok(val) = env::var(ENV_OUTPUT_FORMAT) {
            config.output_format = Some(Self::parse_format(&val)?);
        }

        Ok(())
    }

    /// Parse a monetary amount. Range checks are left to the validator.
    fn parse_amount(field: &str, s: &str) -> Result<f64> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("'{s}' is not a number"),
        })
    }

    fn parse_format(s: &str) -> Result<OutputFormat> {
        s.parse().map_err(|message| Error::Validation {
            field: ENV_OUTPUT_FORMAT.into(),
            message,
        })
    }
}
