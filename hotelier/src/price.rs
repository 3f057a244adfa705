//! Nightly room price type.

use std::fmt;
use std::ops::Mul;

use serde::{Deserialize, Serialize};

/// A non-negative, finite price per night.
///
/// # Examples
///
/// ```
/// use hotelier::Price;
///
/// let price = Price::try_from(1299.0).unwrap();
/// assert_eq!(price.to_string(), "1299.00");
///
/// assert!(Price::try_from(-1.0).is_err());
/// assert!(Price::try_from(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(0.0);

    /// Base price used for new hotels when none is configured.
    pub const DEFAULT_BASE: Self = Self(1299.0);

    /// Lowest nightly price a room can be repriced to by default.
    pub const DEFAULT_MINIMUM: Self = Self(100.0);

    /// Returns the underlying amount.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns `true` if the price is exactly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Returns the total for the given number of nights.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelier::Price;
    ///
    /// let price = Price::try_from(1299.0).unwrap();
    /// assert!((price.total_for(3) - 3897.0).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn total_for(self, nights: i64) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let nights = nights as f64;
        self.0 * nights
    }
}

impl TryFrom<f64> for Price {
    type Error = InvalidPriceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            Err(InvalidPriceError {
                value,
                reason: "price must be a finite number".into(),
            })
        } else if value < 0.0 {
            Err(InvalidPriceError {
                value,
                reason: format!("price {value:.2} cannot be negative"),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Mul<i64> for Price {
    type Output = f64;

    fn mul(self, nights: i64) -> f64 {
        self.total_for(nights)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl std::str::FromStr for Price {
    type Err = InvalidPriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.trim().parse().map_err(|_| InvalidPriceError {
            value: f64::NAN,
            reason: format!("'{s}' is not a number"),
        })?;
        Self::try_from(value)
    }
}

/// Error type for rejected prices.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidPriceError {
    /// The rejected value.
    pub value: f64,
    /// The reason the price is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidPriceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid price: {}", self.reason)
    }
}

impl std::error::Error for InvalidPriceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_validation() {
        assert!(Price::try_from(0.0).is_ok());
        assert!(Price::try_from(100.0).is_ok());
        assert!(Price::try_from(-0.01).is_err());
        assert!(Price::try_from(f64::INFINITY).is_err());
    }

    #[test]
    fn test_price_parse() {
        assert_eq!("1299".parse::<Price>().unwrap().value(), 1299.0);
        assert_eq!(" 99.5 ".parse::<Price>().unwrap().value(), 99.5);
        assert!("abc".parse::<Price>().unwrap_err().reason.contains("not a number"));
        assert!("-5".parse::<Price>().unwrap_err().reason.contains("negative"));
    }

    #[test]
    fn test_price_display_two_decimals() {
        assert_eq!(Price::try_from(100.5).unwrap().to_string(), "100.50");
        assert_eq!(Price::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_price_total_for_nights() {
        let price = Price::try_from(1299.0).unwrap();
        assert_eq!(price * 3, 3897.0);
        assert_eq!(price * 0, 0.0);
    }

    #[test]
    fn test_price_serde() {
        let price = Price::try_from(150.0).unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "150.0");
        assert!(serde_json::from_str::<Price>("-1.0").is_err());
    }
}
