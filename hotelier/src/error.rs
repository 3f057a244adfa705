//! Error types for the hotelier library.
//!
//! This module provides the error hierarchy for every operation in the
//! library, using `thiserror` for ergonomic error handling. All variants are
//! recoverable outcomes reported to the caller; none of them is fatal.

use thiserror::Error;

use crate::calendar::DayRange;

/// Result type alias for operations that may fail with a hotelier error.
///
/// # Examples
///
/// ```
/// use hotelier::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(31)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the hotelier library.
#[derive(Debug, Error)]
pub enum Error {
    /// A hotel or room name is already taken.
    #[error("{kind} name '{name}' already exists")]
    DuplicateName {
        /// What kind of entity owns the name ("hotel" or "room").
        kind: NameKind,
        /// The conflicting name.
        name: String,
    },

    /// A numeric or date value fell outside its allowed range.
    #[error("invalid {field}: {reason}")]
    InvalidRange {
        /// The field that was out of range.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// No hotel with the given name exists.
    #[error("hotel not found: {name}")]
    HotelNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// No room with the given name exists in the hotel.
    #[error("room not found: {name}")]
    RoomNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// No reservation exists for the given guest.
    #[error("reservation not found for guest '{guest}'")]
    ReservationNotFound {
        /// The guest name that was looked up.
        guest: String,
    },

    /// At least one day of the requested range is already booked.
    #[error("room '{room}' is not available for days {range}")]
    RoomUnavailable {
        /// The room that was requested.
        room: String,
        /// The requested day range.
        range: DayRange,
    },

    /// The operation is blocked by existing reservations.
    #[error("blocked by active reservations: {details}")]
    HasActiveReservations {
        /// What was blocked and why.
        details: String,
    },

    /// A value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The kind of entity a duplicate name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    /// A hotel name (unique across the registry, case-insensitive).
    Hotel,
    /// A room name (unique within one hotel, case-sensitive).
    Room,
}

impl std::fmt::Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hotel => write!(f, "hotel"),
            Self::Room => write!(f, "room"),
        }
    }
}

impl From<crate::calendar::InvalidDayError> for Error {
    fn from(err: crate::calendar::InvalidDayError) -> Self {
        Self::InvalidRange {
            field: "day".into(),
            reason: err.to_string(),
        }
    }
}

impl From<crate::calendar::InvalidDayRangeError> for Error {
    fn from(err: crate::calendar::InvalidDayRangeError) -> Self {
        Self::InvalidRange {
            field: "date range".into(),
            reason: err.reason,
        }
    }
}

impl From<crate::price::InvalidPriceError> for Error {
    fn from(err: crate::price::InvalidPriceError) -> Self {
        Self::InvalidRange {
            field: "price".into(),
            reason: err.reason,
        }
    }
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        match err.kind {
            crate::reservation::ValidationKind::Range => Self::InvalidRange {
                field: err.field,
                reason: err.message,
            },
            crate::reservation::ValidationKind::Value => Self::Validation {
                field: err.field,
                message: err.message,
            },
        }
    }
}

impl Error {
    /// Check if the error is a business-rule outcome rather than an
    /// environmental failure (I/O, configuration).
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelier::Error;
    ///
    /// let err = Error::RoomNotFound { name: "Room 9".to_string() };
    /// assert!(err.is_validation_outcome());
    /// ```
    #[must_use]
    pub fn is_validation_outcome(&self) -> bool {
        !matches!(self, Self::Configuration(_) | Self::Io(_))
    }

    /// Check if the error reports a missing hotel, room or reservation.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::HotelNotFound { .. } | Self::RoomNotFound { .. } | Self::ReservationNotFound { .. }
        )
    }
}
