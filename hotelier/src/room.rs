//! Rooms and their monthly availability calendar.
//!
//! A room answers availability queries and applies or reverts bookings over
//! the fixed [`DAYS_IN_CALENDAR`] slot month. It performs no consistency
//! checks of its own: [`Room::book`] and [`Room::cancel`] overwrite the
//! covered slots unconditionally, and callers are expected to check
//! [`Room::is_range_available`] first. The booking orchestrator in
//! [`crate::operations`] is the only code that does so.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calendar::{Day, DayRange, DAYS_IN_CALENDAR};
use crate::price::Price;

#[cfg(test)]
mod proptests;

/// Stable identifier of a room within its hotel.
///
/// Identifiers are assigned by the owning hotel and never reused, so a
/// reservation keeps pointing at the same room even if the room is renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(u32);

impl RoomId {
    /// Creates an identifier from its raw value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the identifier following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Descriptive room category. Both kinds behave identically.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum RoomKind {
    /// A standard room.
    #[default]
    Standard,
    /// A deluxe room.
    Deluxe,
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "Standard"),
            Self::Deluxe => write!(f, "Deluxe"),
        }
    }
}

/// A bookable room with a one-month availability calendar.
///
/// # Examples
///
/// ```
/// use hotelier::{Day, DayRange, Price, Room, RoomId, RoomKind};
///
/// let mut room = Room::new(
///     RoomId::new(1),
///     "Room 1",
///     RoomKind::Standard,
///     Price::try_from(1299.0).unwrap(),
/// );
/// let stay = DayRange::new(Day::try_from(1).unwrap(), Day::try_from(3).unwrap()).unwrap();
///
/// assert!(room.is_range_available(stay));
/// room.book(stay);
/// assert!(!room.is_available(Day::try_from(2).unwrap()));
/// room.cancel(stay);
/// assert!(room.is_range_available(stay));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    id: RoomId,
    name: String,
    kind: RoomKind,
    price_per_night: Price,
    availability: [bool; DAYS_IN_CALENDAR],
}

impl Room {
    /// Creates a room with every day available.
    #[must_use]
    pub fn new(id: RoomId, name: impl Into<String>, kind: RoomKind, price_per_night: Price) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            price_per_night,
            availability: [true; DAYS_IN_CALENDAR],
        }
    }

    /// Returns the room identifier.
    #[must_use]
    pub const fn id(&self) -> RoomId {
        self.id
    }

    /// Returns the room name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the room kind.
    #[must_use]
    pub const fn kind(&self) -> RoomKind {
        self.kind
    }

    /// Returns the nightly price.
    #[must_use]
    pub const fn price_per_night(&self) -> Price {
        self.price_per_night
    }

    /// Renames the room.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sets the nightly price. Policy checks belong to the caller.
    pub fn set_price(&mut self, price: Price) {
        self.price_per_night = price;
    }

    /// Returns `true` if the room is free on `day`.
    #[must_use]
    pub const fn is_available(&self, day: Day) -> bool {
        self.availability[day.index()]
    }

    /// Returns `true` if every day of `range` is free.
    #[must_use]
    pub fn is_range_available(&self, range: DayRange) -> bool {
        self.availability[range.indices()].iter().all(|free| *free)
    }

    /// Marks every day of `range` as booked.
    pub fn book(&mut self, range: DayRange) {
        self.availability[range.indices()].fill(false);
    }

    /// Marks every day of `range` as free again.
    pub fn cancel(&mut self, range: DayRange) {
        self.availability[range.indices()].fill(true);
    }

    /// Returns the number of free days in the calendar.
    #[must_use]
    pub fn available_days(&self) -> usize {
        self.availability.iter().filter(|free| **free).count()
    }

    /// Returns the number of booked days in the calendar.
    #[must_use]
    pub fn booked_days(&self) -> usize {
        DAYS_IN_CALENDAR - self.available_days()
    }

    /// Returns the raw availability flags, indexed by day minus one.
    #[must_use]
    pub const fn availability(&self) -> &[bool; DAYS_IN_CALENDAR] {
        &self.availability
    }

    /// Renders the calendar as one character per day: `.` free, `x` booked.
    #[must_use]
    pub fn calendar_strip(&self) -> String {
        self.availability
            .iter()
            .map(|free| if *free { '.' } else { 'x' })
            .collect()
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}/night)",
            self.name, self.kind, self.price_per_night
        )
    }
}
