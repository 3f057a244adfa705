//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::price::Price;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use hotelier::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { max_rooms: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a price is negative or not finite,
    /// if the default base price is zero, or if `max_rooms` is zero.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(price) = config.default_base_price {
            Self::validate_price("default_base_price", price)?;
            if price == 0.0 {
                return Err(Error::Validation {
                    field: "default_base_price".into(),
                    message: "the default base price must be greater than zero".into(),
                });
            }
        }

        if let Some(price) = config.minimum_room_price {
            Self::validate_price("minimum_room_price", price)?;
        }

        if config.max_rooms == Some(0) {
            return Err(Error::Validation {
                field: "max_rooms".into(),
                message: "a hotel must be allowed at least one room".into(),
            });
        }

        Ok(())
    }

    fn validate_price(field: &str, value: f64) -> Result<()> {
        Price::try_from(value)
            .map(|_| ())
            .map_err(|e| Error::Validation {
                field: field.into(),
                message: e.reason,
            })
    }
}
