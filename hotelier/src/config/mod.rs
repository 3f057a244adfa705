//! Configuration system for hotelier.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (user config and an explicit file)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`HOTELIER_*`)
//! 3. Explicit file (`--config` / `HOTELIER_CONFIG`)
//! 4. User config (`~/.hotelier/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use hotelier::config::{Config, ConfigBuilder, OutputFormat};
//!
//! let custom = Config {
//!     output_format: Some(OutputFormat::Csv),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.output_format, Some(OutputFormat::Csv));
//! assert_eq!(config.max_rooms, Some(50));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat, DEFAULT_MAX_ROOMS};
pub use validator::ConfigValidator;
