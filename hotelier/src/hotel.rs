//! The hotel aggregate.
//!
//! A [`Hotel`] owns its rooms and reservations and enforces the invariants
//! that only need the hotel itself: a room referenced by a reservation can't
//! be removed, and the base price can't change while reservations exist.
//! Rules that span hotels (name uniqueness) live in
//! [`crate::registry::HotelRegistry`]; rules that couple room calendars with
//! reservation records live in [`crate::operations`].

use serde::Serialize;

use crate::calendar::Day;
use crate::error::{Error, Result};
use crate::price::Price;
use crate::reservation::Reservation;
use crate::room::{Room, RoomId, RoomKind};

/// A hotel with its rooms and reservations, both in insertion order.
///
/// # Examples
///
/// ```
/// use hotelier::{Hotel, Price, RoomKind};
///
/// let base = Price::try_from(1299.0).unwrap();
/// let mut hotel = Hotel::new("Aurora", base);
/// hotel.add_room("Room 1", RoomKind::Standard, base);
///
/// assert_eq!(hotel.rooms().len(), 1);
/// assert!(hotel.room("Room 1").is_some());
/// assert!(hotel.has_no_reservations());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hotel {
    name: String,
    base_price: Price,
    rooms: Vec<Room>,
    reservations: Vec<Reservation>,
    #[serde(skip)]
    next_room_id: RoomId,
}

/// Count of free and booked rooms on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Occupancy {
    /// Rooms free on the day.
    pub available: usize,
    /// Rooms booked on the day.
    pub booked: usize,
}

/// High-level figures for one hotel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelSummary {
    /// Hotel name.
    pub name: String,
    /// Default price for new rooms.
    pub base_price: Price,
    /// Number of rooms.
    pub rooms: usize,
    /// Number of reservations.
    pub reservations: usize,
    /// Sum of all reservation totals.
    pub estimated_earnings: f64,
}

impl Hotel {
    /// Creates a hotel with no rooms and no reservations.
    #[must_use]
    pub fn new(name: impl Into<String>, base_price: Price) -> Self {
        Self {
            name: name.into(),
            base_price,
            rooms: Vec::new(),
            reservations: Vec::new(),
            next_room_id: RoomId::new(1),
        }
    }

    /// Returns the hotel name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the hotel. Uniqueness is checked by the registry.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the default price for newly created rooms.
    #[must_use]
    pub const fn base_price(&self) -> Price {
        self.base_price
    }

    /// Returns the rooms in insertion order.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Returns the reservations in insertion order.
    #[must_use]
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Appends a new room and returns its identifier. Always succeeds.
    pub fn add_room(&mut self, name: impl Into<String>, kind: RoomKind, price: Price) -> RoomId {
        let id = self.next_room_id;
        self.next_room_id = id.next();
        self.rooms.push(Room::new(id, name, kind, price));
        id
    }

    /// Removes the room named exactly `name`, unless a reservation references
    /// it. Returns the removed room, or `None` if nothing was removed.
    ///
    /// Room names match case-sensitively, ignoring surrounding whitespace.
    pub fn remove_room(&mut self, name: &str) -> Option<Room> {
        if self.room_has_reservations(name) {
            return None;
        }
        let name = name.trim();
        let index = self.rooms.iter().position(|room| room.name() == name)?;
        Some(self.rooms.remove(index))
    }

    /// Returns `true` if any reservation references a room named `name`.
    #[must_use]
    pub fn room_has_reservations(&self, name: &str) -> bool {
        let name = name.trim();
        self.rooms
            .iter()
            .filter(|room| room.name() == name)
            .any(|room| self.reservations_for_room(room.id()).next().is_some())
    }

    /// Changes the base price.
    ///
    /// Existing rooms keep their own price.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HasActiveReservations`] if the hotel has any
    /// reservation.
    pub fn update_base_price(&mut self, price: Price) -> Result<()> {
        if !self.has_no_reservations() {
            return Err(Error::HasActiveReservations {
                details: format!(
                    "cannot change the base price of '{}' while it has {} reservation(s)",
                    self.name,
                    self.reservations.len()
                ),
            });
        }
        self.base_price = price;
        Ok(())
    }

    /// Appends a reservation record. Room calendars are not touched.
    pub fn add_reservation(&mut self, reservation: Reservation) {
        self.reservations.push(reservation);
    }

    /// Removes and returns the first reservation for `guest_name`.
    ///
    /// Guest names are not unique; later reservations for the same guest
    /// stay in place. Room calendars are not touched.
    pub fn remove_reservation(&mut self, guest_name: &str) -> Option<Reservation> {
        let index = self
            .reservations
            .iter()
            .position(|r| r.guest_name() == guest_name)?;
        Some(self.reservations.remove(index))
    }

    /// Looks up the first room named exactly `name`.
    ///
    /// Room names are stored trimmed, so surrounding whitespace in `name`
    /// is ignored.
    #[must_use]
    pub fn room(&self, name: &str) -> Option<&Room> {
        let name = name.trim();
        self.rooms.iter().find(|room| room.name() == name)
    }

    /// Mutable variant of [`Hotel::room`].
    pub fn room_mut(&mut self, name: &str) -> Option<&mut Room> {
        let name = name.trim();
        self.rooms.iter_mut().find(|room| room.name() == name)
    }

    /// Looks up a room by identifier.
    #[must_use]
    pub fn room_by_id(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id() == id)
    }

    /// Mutable variant of [`Hotel::room_by_id`].
    pub fn room_by_id_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.id() == id)
    }

    /// Looks up the first reservation for `guest_name`.
    #[must_use]
    pub fn reservation(&self, guest_name: &str) -> Option<&Reservation> {
        self.reservations
            .iter()
            .find(|r| r.guest_name() == guest_name)
    }

    /// Returns `true` if the hotel has no reservations.
    #[must_use]
    pub fn has_no_reservations(&self) -> bool {
        self.reservations.is_empty()
    }

    /// Iterates over the reservations that reference room `id`.
    pub fn reservations_for_room(&self, id: RoomId) -> impl Iterator<Item = &Reservation> {
        self.reservations.iter().filter(move |r| r.room() == id)
    }

    /// Counts free and booked rooms on `day`.
    #[must_use]
    pub fn availability_on(&self, day: Day) -> Occupancy {
        let available = self
            .rooms
            .iter()
            .filter(|room| room.is_available(day))
            .count();
        Occupancy {
            available,
            booked: self.rooms.len() - available,
        }
    }

    /// Returns the price of a reservation: the room's nightly price times
    /// the number of nights.
    #[must_use]
    pub fn reservation_total(&self, reservation: &Reservation) -> f64 {
        self.room_by_id(reservation.room())
            .map_or(Price::ZERO, Room::price_per_night)
            * reservation.nights()
    }

    /// Returns the sum of all reservation totals.
    #[must_use]
    pub fn estimated_earnings(&self) -> f64 {
        self.reservations
            .iter()
            .fold(0.0, |total, r| total + self.reservation_total(r))
    }

    /// Returns the high-level figures for this hotel.
    #[must_use]
    pub fn summary(&self) -> HotelSummary {
        HotelSummary {
            name: self.name.clone(),
            base_price: self.base_price,
            rooms: self.rooms.len(),
            reservations: self.reservations.len(),
            estimated_earnings: self.estimated_earnings(),
        }
    }
}

impl std::fmt::Display for Hotel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} rooms, {} reservations, base price {})",
            self.name,
            self.rooms.len(),
            self.reservations.len(),
            self.base_price
        )
    }
}
