//! Reservation records binding a guest, a room and a stay.
//!
//! A reservation is an immutable value. It is created by the booking
//! orchestrator together with the matching room-calendar update and removed
//! the same way; nothing mutates it in between.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::DayRange;
use crate::room::RoomId;

#[cfg(test)]
mod proptests;

/// A booking of one room for one guest from check-in to check-out.
///
/// The room is referenced by its [`RoomId`]; the hotel owns the room.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hotelier::{Reservation, RoomId};
///
/// let reservation = Reservation::builder("Alice", RoomId::new(1))
///     .stay(
///         NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///         NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(),
///     )
///     .build()
///     .unwrap();
///
/// assert_eq!(reservation.guest_name(), "Alice");
/// assert_eq!(reservation.nights(), 3);
/// assert_eq!(reservation.day_range().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    guest_name: String,
    room: RoomId,
    check_in: NaiveDate,
    check_out: NaiveDate,
    #[serde(skip)]
    days: DayRange,
}

impl Reservation {
    /// Creates a new reservation builder.
    #[must_use]
    pub fn builder(guest_name: impl Into<String>, room: RoomId) -> ReservationBuilder {
        ReservationBuilder {
            guest_name: guest_name.into(),
            room,
            check_in: None,
            check_out: None,
        }
    }

    /// Returns the guest name.
    #[must_use]
    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    /// Returns the reserved room.
    #[must_use]
    pub const fn room(&self) -> RoomId {
        self.room
    }

    /// Returns the check-in date.
    #[must_use]
    pub const fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// Returns the check-out date.
    #[must_use]
    pub const fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Returns the calendar days blocked by this reservation (inclusive of
    /// the check-out day).
    #[must_use]
    pub const fn day_range(&self) -> DayRange {
        self.days
    }

    /// Returns the number of nights billed: the difference in epoch days
    /// between check-out and check-in.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

impl std::fmt::Display for Reservation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} in room {} from {} to {}",
            self.guest_name, self.room, self.check_in, self.check_out
        )
    }
}

/// Builder for creating validated `Reservation` instances.
#[derive(Debug)]
pub struct ReservationBuilder {
    guest_name: String,
    room: RoomId,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
}

impl ReservationBuilder {
    /// Sets the check-in and check-out dates.
    #[must_use]
    pub const fn stay(mut self, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        self.check_in = Some(check_in);
        self.check_out = Some(check_out);
        self
    }

    /// Builds the reservation.
    ///
    /// The guest name is trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The guest name is empty after trimming
    /// - The stay dates were not set
    /// - Check-out precedes check-in or the dates span two months
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use hotelier::{Reservation, RoomId};
    ///
    /// let june = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
    ///
    /// // Invalid: empty guest name
    /// let result = Reservation::builder("  ", RoomId::new(1))
    ///     .stay(june(1), june(2))
    ///     .build();
    /// assert!(result.is_err());
    ///
    /// // Invalid: check-out before check-in
    /// let result = Reservation::builder("Bob", RoomId::new(1))
    ///     .stay(june(5), june(2))
    ///     .build();
    /// assert!(result.is_err());
    /// ```
    pub fn build(self) -> Result<Reservation, ValidationError> {
        let guest_name = self.guest_name.trim().to_string();
        if guest_name.is_empty() {
            return Err(ValidationError {
                field: "guest name".into(),
                message: "guest name must be non-empty after trimming whitespace".into(),
                kind: ValidationKind::Value,
            });
        }

        let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) else {
            return Err(ValidationError {
                field: "stay".into(),
                message: "check-in and check-out dates are required".into(),
                kind: ValidationKind::Value,
            });
        };

        let days = DayRange::for_stay(check_in, check_out).map_err(|e| ValidationError {
            field: "date range".into(),
            message: e.reason,
            kind: ValidationKind::Range,
        })?;

        Ok(Reservation {
            guest_name,
            room: self.room,
            check_in,
            check_out,
            days,
        })
    }
}

/// Whether a validation failure concerns a value's shape or its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// The value is malformed (for example empty).
    Value,
    /// The value is well-formed but out of range.
    Range,
}

/// Error type for reservation validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
    /// The failure category.
    pub kind: ValidationKind,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
