//! Configuration builder.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Assembles the effective configuration from every source.
///
/// Sources are applied lowest precedence first: built-in defaults, the user
/// file, the explicit file, environment variables, then the programmatic
/// override. The result is validated before it is returned.
///
/// # Examples
///
/// ```
/// use hotelier::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { max_rooms: Some(10), ..Default::default() })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.max_rooms, Some(10));
/// assert_eq!(config.default_base_price, Some(1299.0));
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    user_dir: Option<PathBuf>,
    file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the user file from `dir/config.yaml` instead of
    /// `~/.hotelier/config.yaml`.
    #[must_use]
    pub fn with_user_dir(mut self, dir: &Path) -> Self {
        self.user_dir = Some(dir.to_path_buf());
        self
    }

    /// Adds an explicit configuration file. It must exist.
    #[must_use]
    pub fn with_file(mut self, path: &Path) -> Self {
        self.file = Some(path.to_path_buf());
        self
    }

    /// Skips the user configuration file. An explicit file is still read.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips `HOTELIER_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Sets values that override every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is malformed, or the merged values fail validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::with_defaults();

        if self.skip_files {
            if let Some(path) = &self.file {
                ConfigMerger::merge_into(&mut config, &ConfigLoader::load_file(path)?);
            }
        } else {
            let sources = ConfigLoader::load_all(self.user_dir.as_deref(), self.file.as_deref())?;
            for source in &sources {
                log::debug!(
                    "merging configuration from {} (precedence {})",
                    source.path.display(),
                    source.precedence
                );
                ConfigMerger::merge_into(&mut config, &source.config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::OutputFormat;
    use crate::error::Error;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::with_defaults());
    }

    #[test]
    fn test_explicit_file_over_user_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("config.yaml"),
            "max_rooms: 5\noutput_format: json\n",
        )
        .unwrap();
        let explicit = temp.path().join("explicit.yaml");
        fs::write(&explicit, "max_rooms: 7\n").unwrap();

        let config = ConfigBuilder::new()
            .with_user_dir(temp.path())
            .with_file(&explicit)
            .skip_env()
            .build()
            .unwrap();

        assert_eq!(config.max_rooms, Some(7));
        assert_eq!(config.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_skip_files_still_reads_explicit_file() {
        let temp = TempDir::new().unwrap();
        let explicit = temp.path().join("explicit.yaml");
        fs::write(&explicit, "minimum_room_price: 80\n").unwrap();

        let config = ConfigBuilder::new()
            .skip_files()
            .with_file(&explicit)
            .skip_env()
            .build()
            .unwrap();
        assert_eq!(config.minimum_room_price, Some(80.0));
    }

    #[test]
    fn test_programmatic_override_wins() {
        let temp = TempDir::new().unwrap();
        let explicit = temp.path().join("explicit.yaml");
        fs::write(&explicit, "max_rooms: 7\n").unwrap();

        let config = ConfigBuilder::new()
            .skip_files()
            .with_file(&explicit)
            .skip_env()
            .with_config(Config {
                max_rooms: Some(3),
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(config.max_rooms, Some(3));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                default_base_price: Some(-5.0),
                ..Default::default()
            })
            .build();
        assert!(matches!(result, Err(Error::Validation { .. })));
    }
}
