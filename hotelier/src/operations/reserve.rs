//! Reserve operation planning.
//!
//! Planning resolves the room, validates the stay and checks the room
//! calendar. It never modifies the hotel.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::hotel::Hotel;
use crate::reservation::Reservation;

use super::plan::{OperationPlan, PlanAction};

/// Options for a reserve operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReserveOptions {
    /// The guest making the reservation.
    pub guest_name: String,

    /// The exact (case-sensitive) room name.
    pub room_name: String,

    /// First night of the stay.
    pub check_in: NaiveDate,

    /// Check-out date. The room stays blocked on this day too.
    pub check_out: NaiveDate,
}

impl ReserveOptions {
    /// Creates a new `ReserveOptions`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use hotelier::operations::ReserveOptions;
    ///
    /// let options = ReserveOptions::new(
    ///     "Alice",
    ///     "Room 1",
    ///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
    /// );
    /// assert_eq!(options.room_name, "Room 1");
    /// ```
    #[must_use]
    pub fn new(
        guest_name: impl Into<String>,
        room_name: impl Into<String>,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Self {
        Self {
            guest_name: guest_name.into(),
            room_name: room_name.into(),
            check_in,
            check_out,
        }
    }
}

/// A reserve plan generator.
pub struct ReservePlan {
    options: ReserveOptions,
}

impl ReservePlan {
    /// Creates a new reserve plan with the given options.
    #[must_use]
    pub const fn new(options: ReserveOptions) -> Self {
        Self { options }
    }

    /// Builds an operation plan for this reserve request.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No room has the requested name ([`Error::RoomNotFound`])
    /// - The guest name is empty ([`Error::Validation`])
    /// - The dates are inverted or span two months ([`Error::InvalidRange`])
    /// - Any day of the stay is already booked ([`Error::RoomUnavailable`])
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use hotelier::operations::{ReserveOptions, ReservePlan};
    /// use hotelier::{Hotel, Price, RoomKind};
    ///
    /// let base = Price::try_from(1299.0).unwrap();
    /// let mut hotel = Hotel::new("Aurora", base);
    /// hotel.add_room("Room 1", RoomKind::Standard, base);
    ///
    /// let june = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
    /// let options = ReserveOptions::new("Alice", "Room 1", june(1), june(3));
    /// let plan = ReservePlan::new(options).build_plan(&hotel).unwrap();
    /// assert_eq!(plan.len(), 2);
    /// ```
    pub fn build_plan(&self, hotel: &Hotel) -> Result<OperationPlan> {
        let options = &self.options;
        let mut plan = OperationPlan::new(format!(
            "Reserve {} for {}",
            options.room_name, options.guest_name
        ));

        // Step 1: Resolve the room
        let room = hotel
            .room(&options.room_name)
            .ok_or_else(|| Error::RoomNotFound {
                name: options.room_name.clone(),
            })?;

        // Step 2: Validate guest and stay
        let reservation = Reservation::builder(&options.guest_name, room.id())
            .stay(options.check_in, options.check_out)
            .build()?;
        let range = reservation.day_range();

        // Step 3: Check the calendar
        if !room.is_range_available(range) {
            log::debug!(
                "room '{}' is booked during days {range}, rejecting reservation",
                room.name()
            );
            return Err(Error::RoomUnavailable {
                room: room.name().to_string(),
                range,
            });
        }

        if hotel.reservation(reservation.guest_name()).is_some() {
            plan = plan.add_warning(format!(
                "{} already holds a reservation; cancel removes the earliest one first",
                reservation.guest_name()
            ));
        }

        plan = plan
            .add_action(PlanAction::BookDays {
                room: room.id(),
                range,
            })
            .add_action(PlanAction::RecordReservation(reservation));

        Ok(plan)
    }
}
