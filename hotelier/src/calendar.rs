//! Day-of-month and day range types for the monthly booking calendar.
//!
//! Every room tracks a single implicit month of [`DAYS_IN_CALENDAR`] slots.
//! Dates are projected onto that month by their day-of-month only, so
//! 2024-06-03 and 2024-07-03 address the same slot. Months shorter than 31
//! days never address the trailing slots.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod proptests;

/// Number of day slots tracked per room.
pub const DAYS_IN_CALENDAR: usize = 31;

/// A valid day of the month (1-31).
///
/// # Examples
///
/// ```
/// use hotelier::Day;
///
/// let day = Day::try_from(15).unwrap();
/// assert_eq!(day.value(), 15);
///
/// assert!(Day::try_from(0).is_err());
/// assert!(Day::try_from(32).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Day(u32);

impl Day {
    /// The first day of the month.
    pub const MIN: u32 = 1;

    /// The last trackable day of the month.
    #[allow(clippy::cast_possible_truncation)]
    pub const MAX: u32 = DAYS_IN_CALENDAR as u32;

    /// Returns the underlying day-of-month number.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the zero-based slot index for this day.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Projects a calendar date onto its day-of-month slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use hotelier::Day;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
    /// assert_eq!(Day::of(date).value(), 3);
    /// ```
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        // chrono guarantees day() is within 1..=31
        Self(date.day())
    }
}

impl TryFrom<u32> for Day {
    type Error = InvalidDayError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidDayError { value })
        }
    }
}

impl From<Day> for u32 {
    fn from(day: Day) -> Self {
        day.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for day numbers outside 1-31.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDayError {
    /// The rejected value.
    pub value: u32,
}

impl fmt::Display for InvalidDayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "day {} is outside the calendar ({}-{})",
            self.value,
            Day::MIN,
            Day::MAX
        )
    }
}

impl std::error::Error for InvalidDayError {}

/// An inclusive range of days within the month.
///
/// Inverted ranges cannot be constructed.
///
/// # Examples
///
/// ```
/// use hotelier::{Day, DayRange};
///
/// let start = Day::try_from(1).unwrap();
/// let end = Day::try_from(3).unwrap();
/// let range = DayRange::new(start, end).unwrap();
///
/// assert_eq!(range.len(), 3);
/// assert!(range.contains(Day::try_from(2).unwrap()));
/// assert!(DayRange::new(end, start).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DayRange {
    start: Day,
    end: Day,
}

impl DayRange {
    /// Creates a new inclusive day range.
    ///
    /// # Errors
    ///
    /// Returns an error if `end` is before `start`.
    pub fn new(start: Day, end: Day) -> Result<Self, InvalidDayRangeError> {
        if end < start {
            Err(InvalidDayRangeError {
                start,
                end,
                reason: format!("end day {end} is before start day {start}"),
            })
        } else {
            Ok(Self { start, end })
        }
    }

    /// Creates a range covering a single day.
    #[must_use]
    pub const fn single(day: Day) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// Builds the day range covered by a stay from `check_in` to `check_out`.
    ///
    /// Both dates must fall in the same calendar month, since the calendar
    /// only tracks one month of day slots.
    ///
    /// # Errors
    ///
    /// Returns an error if `check_out` precedes `check_in` or the dates are
    /// in different months.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use hotelier::DayRange;
    ///
    /// let check_in = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let check_out = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
    /// let range = DayRange::for_stay(check_in, check_out).unwrap();
    /// assert_eq!(range.len(), 3);
    ///
    /// let next_month = NaiveDate::from_ymd_opt(2024, 7, 2).unwrap();
    /// assert!(DayRange::for_stay(check_in, next_month).is_err());
    /// ```
    pub fn for_stay(
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Self, InvalidDayRangeError> {
        let start = Day::of(check_in);
        let end = Day::of(check_out);

        if check_out < check_in {
            return Err(InvalidDayRangeError {
                start,
                end,
                reason: format!("check-out {check_out} is before check-in {check_in}"),
            });
        }

        if (check_in.year(), check_in.month()) != (check_out.year(), check_out.month()) {
            return Err(InvalidDayRangeError {
                start,
                end,
                reason: format!(
                    "check-in {check_in} and check-out {check_out} must fall in the same month"
                ),
            });
        }

        Self::new(start, end)
    }

    /// Returns the first day of the range.
    #[must_use]
    pub const fn start(&self) -> Day {
        self.start
    }

    /// Returns the last day of the range.
    #[must_use]
    pub const fn end(&self) -> Day {
        self.end
    }

    /// Returns `true` if the range contains the given day.
    #[must_use]
    pub const fn contains(&self, day: Day) -> bool {
        day.value() >= self.start.value() && day.value() <= self.end.value()
    }

    /// Returns `true` if the two ranges share at least one day.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start.value() <= other.end.value() && other.start.value() <= self.end.value()
    }

    /// Returns the number of days in the range (inclusive).
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.end.value() - self.start.value() + 1
    }

    /// Always `false`; a valid range holds at least one day.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the zero-based slot indices covered by the range.
    #[must_use]
    pub const fn indices(&self) -> std::ops::RangeInclusive<usize> {
        self.start.index()..=self.end.index()
    }

    /// Returns an iterator over every day in the range.
    pub fn iter(self) -> impl Iterator<Item = Day> {
        (self.start.value()..=self.end.value()).map(Day)
    }
}

impl fmt::Display for DayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Error type for invalid day ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDayRangeError {
    /// The requested first day.
    pub start: Day,
    /// The requested last day.
    pub end: Day,
    /// The reason the range is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidDayRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid day range {}-{}: {}",
            self.start, self.end, self.reason
        )
    }
}

impl std::error::Error for InvalidDayRangeError {}
