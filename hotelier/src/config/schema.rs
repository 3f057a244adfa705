//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::price::Price;

/// Default largest number of rooms per hotel.
pub const DEFAULT_MAX_ROOMS: usize = 50;

/// Complete configuration structure.
///
/// Every field is optional so that partial configurations from several
/// sources can be merged. Unset fields fall back to the defaults of
/// [`crate::BookingPolicy`].
///
/// # Examples
///
/// ```
/// use hotelier::config::Config;
///
/// let config: Config = serde_yaml::from_str("max_rooms: 20\n").unwrap();
/// assert_eq!(config.max_rooms, Some(20));
/// assert_eq!(config.default_base_price, None);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base price for hotels created without one.
    pub default_base_price: Option<f64>,

    /// Largest number of rooms a hotel can be created with.
    pub max_rooms: Option<usize>,

    /// Lowest nightly price a room can be repriced to.
    pub minimum_room_price: Option<f64>,

    /// Output format for listing commands.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Returns a configuration with every field set to its built-in default.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelier::config::{Config, OutputFormat};
    ///
    /// let config = Config::with_defaults();
    /// assert_eq!(config.default_base_price, Some(1299.0));
    /// assert_eq!(config.max_rooms, Some(50));
    /// assert_eq!(config.minimum_room_price, Some(100.0));
    /// assert_eq!(config.output_format, Some(OutputFormat::Table));
    /// ```
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            default_base_price: Some(Price::DEFAULT_BASE.value()),
            max_rooms: Some(DEFAULT_MAX_ROOMS),
            minimum_room_price: Some(Price::DEFAULT_MINIMUM.value()),
            output_format: Some(OutputFormat::Table),
        }
    }
}

/// Output format for listing commands.
///
/// # Examples
///
/// ```
/// use hotelier::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!(
                "unknown output format '{other}' (expected table, json or csv)"
            )),
        }
    }
}
