//! The hotel registry.
//!
//! [`HotelRegistry`] is the single owned collection of hotels. It enforces
//! the rules that need more than one hotel (name uniqueness) or the booking
//! policy (room limits and minimum prices), and resolves hotels by name for
//! every other operation.
//!
//! Hotel names match case-insensitively. Room names and guest names match
//! exactly.

use chrono::NaiveDate;

use crate::calendar::Day;
use crate::config::{Config, DEFAULT_MAX_ROOMS};
use crate::error::{Error, NameKind, Result};
use crate::hotel::{Hotel, Occupancy};
use crate::operations::{self, ReserveOptions};
use crate::price::Price;
use crate::reservation::Reservation;
use crate::room::{Room, RoomId, RoomKind};

/// Limits and defaults applied by the registry.
///
/// # Examples
///
/// ```
/// use hotelier::config::{Config, ConfigBuilder};
/// use hotelier::BookingPolicy;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { max_rooms: Some(10), ..Default::default() })
///     .build()
///     .unwrap();
///
/// let policy = BookingPolicy::from_config(&config).unwrap();
/// assert_eq!(policy.max_rooms, 10);
/// assert_eq!(policy.default_base_price.value(), 1299.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookingPolicy {
    /// Base price for hotels created without one (or with zero).
    pub default_base_price: Price,
    /// Largest room count accepted by [`HotelRegistry::create_hotel`].
    pub max_rooms: usize,
    /// Lowest price accepted by [`HotelRegistry::update_room_price`].
    pub minimum_room_price: Price,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            default_base_price: Price::DEFAULT_BASE,
            max_rooms: DEFAULT_MAX_ROOMS,
            minimum_room_price: Price::DEFAULT_MINIMUM,
        }
    }
}

impl BookingPolicy {
    /// Resolves the policy from a configuration, using built-in defaults for
    /// unset fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if a configured price is negative or
    /// not finite.
    pub fn from_config(config: &Config) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            default_base_price: config
                .default_base_price
                .map(Price::try_from)
                .transpose()?
                .unwrap_or(defaults.default_base_price),
            max_rooms: config.max_rooms.unwrap_or(defaults.max_rooms),
            minimum_room_price: config
                .minimum_room_price
                .map(Price::try_from)
                .transpose()?
                .unwrap_or(defaults.minimum_room_price),
        })
    }
}

/// The set of hotels managed in one session.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hotelier::{Error, HotelRegistry};
///
/// let mut registry = HotelRegistry::default();
/// registry.create_hotel("Aurora", 5, None).unwrap();
///
/// let june = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
/// registry.reserve("aurora", "Alice", "Room 1", june(1), june(4)).unwrap();
///
/// assert_eq!(registry.estimated_earnings("Aurora").unwrap(), 3897.0);
/// assert!(matches!(
///     registry.create_hotel("AURORA", 1, None),
///     Err(Error::DuplicateName { .. })
/// ));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HotelRegistry {
    hotels: Vec<Hotel>,
    policy: BookingPolicy,
}

impl HotelRegistry {
    /// Creates an empty registry with the given policy.
    #[must_use]
    pub const fn new(policy: BookingPolicy) -> Self {
        Self {
            hotels: Vec::new(),
            policy,
        }
    }

    /// Returns the active policy.
    #[must_use]
    pub const fn policy(&self) -> &BookingPolicy {
        &self.policy
    }

    /// Returns all hotels in creation order.
    #[must_use]
    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    /// Looks up a hotel by name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HotelNotFound`] if no hotel has that name.
    pub fn hotel(&self, name: &str) -> Result<&Hotel> {
        self.position(name)
            .map(|index| &self.hotels[index])
            .ok_or_else(|| Self::not_found(name))
    }

    /// Mutable variant of [`HotelRegistry::hotel`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::HotelNotFound`] if no hotel has that name.
    pub fn hotel_mut(&mut self, name: &str) -> Result<&mut Hotel> {
        match self.position(name) {
            Some(index) => Ok(&mut self.hotels[index]),
            None => Err(Self::not_found(name)),
        }
    }

    /// Creates a hotel with `room_count` standard rooms named `Room 1` to
    /// `Room N`, each priced at the base price.
    ///
    /// A missing or zero base price means the policy's default base price.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is empty ([`Error::Validation`])
    /// - Another hotel has the same name, ignoring case ([`Error::DuplicateName`])
    /// - `room_count` is outside `1..=max_rooms` ([`Error::InvalidRange`])
    pub fn create_hotel(
        &mut self,
        name: &str,
        room_count: usize,
        base_price: Option<Price>,
    ) -> Result<&Hotel> {
        let name = Self::clean_name("hotel name", name)?;
        if self.position(&name).is_some() {
            return Err(Error::DuplicateName {
                kind: NameKind::Hotel,
                name,
            });
        }

        if !(1..=self.policy.max_rooms).contains(&room_count) {
            return Err(Error::InvalidRange {
                field: "room count".into(),
                reason: format!(
                    "a hotel needs between 1 and {} rooms, got {room_count}",
                    self.policy.max_rooms
                ),
            });
        }

        let base_price = base_price
            .filter(|price| !price.is_zero())
            .unwrap_or(self.policy.default_base_price);

        let mut hotel = Hotel::new(name, base_price);
        for number in 1..=room_count {
            hotel.add_room(format!("Room {number}"), RoomKind::Standard, base_price);
        }

        log::info!(
            "created hotel '{}' with {room_count} rooms at {base_price}",
            hotel.name()
        );
        self.hotels.push(hotel);
        Ok(&self.hotels[self.hotels.len() - 1])
    }

    /// Renames a hotel.
    ///
    /// Renaming a hotel to its own name in a different case is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HotelNotFound`], [`Error::Validation`] for an empty
    /// name, or [`Error::DuplicateName`] if another hotel has the new name.
    pub fn rename_hotel(&mut self, current: &str, new_name: &str) -> Result<()> {
        let index = self.position(current).ok_or_else(|| Self::not_found(current))?;
        let new_name = Self::clean_name("hotel name", new_name)?;

        if let Some(other) = self.position(&new_name) {
            if other != index {
                return Err(Error::DuplicateName {
                    kind: NameKind::Hotel,
                    name: new_name,
                });
            }
        }

        log::info!("renamed hotel '{}' to '{new_name}'", self.hotels[index].name());
        self.hotels[index].set_name(new_name);
        Ok(())
    }

    /// Changes a hotel's base price.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HotelNotFound`] or [`Error::HasActiveReservations`].
    pub fn update_base_price(&mut self, hotel: &str, price: Price) -> Result<()> {
        self.hotel_mut(hotel)?.update_base_price(price)
    }

    /// Adds a room to a hotel. The price defaults to the hotel's base price.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HotelNotFound`], [`Error::Validation`] for an empty
    /// name, or [`Error::DuplicateName`] if the hotel already has a room
    /// with exactly that name.
    pub fn add_room(
        &mut self,
        hotel: &str,
        room_name: &str,
        kind: RoomKind,
        price: Option<Price>,
    ) -> Result<RoomId> {
        let room_name = Self::clean_name("room name", room_name)?;
        let hotel = self.hotel_mut(hotel)?;
        if hotel.room(&room_name).is_some() {
            return Err(Error::DuplicateName {
                kind: NameKind::Room,
                name: room_name,
            });
        }

        let price = price.unwrap_or_else(|| hotel.base_price());
        log::debug!("adding {kind} room '{room_name}' to '{}'", hotel.name());
        Ok(hotel.add_room(room_name, kind, price))
    }

    /// Removes a room from a hotel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HotelNotFound`], [`Error::RoomNotFound`], or
    /// [`Error::HasActiveReservations`] if a reservation references the room.
    pub fn remove_room(&mut self, hotel: &str, room_name: &str) -> Result<Room> {
        let hotel = self.hotel_mut(hotel)?;
        if hotel.room(room_name).is_none() {
            return Err(Error::RoomNotFound {
                name: room_name.to_string(),
            });
        }

        hotel
            .remove_room(room_name)
            .ok_or_else(|| Error::HasActiveReservations {
                details: format!("room '{room_name}' is referenced by a reservation"),
            })
    }

    /// Changes the nightly price of one room.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The hotel or room does not exist
    /// - The price is below the policy minimum ([`Error::InvalidRange`])
    /// - A reservation references the room ([`Error::HasActiveReservations`])
    pub fn update_room_price(&mut self, hotel: &str, room_name: &str, price: Price) -> Result<()> {
        let minimum = self.policy.minimum_room_price;
        let hotel = self.hotel_mut(hotel)?;

        let id = hotel
            .room(room_name)
            .map(Room::id)
            .ok_or_else(|| Error::RoomNotFound {
                name: room_name.to_string(),
            })?;

        if price < minimum {
            return Err(Error::InvalidRange {
                field: "room price".into(),
                reason: format!("{price} is below the minimum of {minimum}"),
            });
        }

        if hotel.reservations_for_room(id).next().is_some() {
            return Err(Error::HasActiveReservations {
                details: format!("cannot reprice room '{room_name}' while it is reserved"),
            });
        }

        if let Some(room) = hotel.room_by_id_mut(id) {
            room.set_price(price);
        }
        Ok(())
    }

    /// Reserves a room for a guest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HotelNotFound`] or any error from
    /// [`operations::ReservePlan::build_plan`].
    pub fn reserve(
        &mut self,
        hotel: &str,
        guest_name: &str,
        room_name: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Reservation> {
        let hotel = self.hotel_mut(hotel)?;
        operations::reserve(
            hotel,
            ReserveOptions::new(guest_name, room_name, check_in, check_out),
        )
    }

    /// Cancels the guest's first reservation in a hotel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HotelNotFound`] or [`Error::ReservationNotFound`].
    pub fn cancel(&mut self, hotel: &str, guest_name: &str) -> Result<Reservation> {
        operations::cancel(self.hotel_mut(hotel)?, guest_name)
    }

    /// Counts free and booked rooms on the day-of-month of `date`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HotelNotFound`].
    pub fn availability(&self, hotel: &str, date: NaiveDate) -> Result<Occupancy> {
        Ok(self.hotel(hotel)?.availability_on(Day::of(date)))
    }

    /// Lists the reservations of one room.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HotelNotFound`] or [`Error::RoomNotFound`].
    pub fn room_reservations(&self, hotel: &str, room_name: &str) -> Result<Vec<&Reservation>> {
        let hotel = self.hotel(hotel)?;
        let room = hotel.room(room_name).ok_or_else(|| Error::RoomNotFound {
            name: room_name.to_string(),
        })?;
        Ok(hotel.reservations_for_room(room.id()).collect())
    }

    /// Returns the guest's first reservation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HotelNotFound`] or [`Error::ReservationNotFound`].
    pub fn reservation(&self, hotel: &str, guest_name: &str) -> Result<&Reservation> {
        let guest = guest_name.trim();
        self.hotel(hotel)?
            .reservation(guest)
            .ok_or_else(|| Error::ReservationNotFound {
                guest: guest.to_string(),
            })
    }

    /// Returns the sum of all reservation totals of a hotel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HotelNotFound`].
    pub fn estimated_earnings(&self, hotel: &str) -> Result<f64> {
        Ok(self.hotel(hotel)?.estimated_earnings())
    }

    fn position(&self, name: &str) -> Option<usize> {
        let wanted = name.trim().to_lowercase();
        self.hotels
            .iter()
            .position(|hotel| hotel.name().to_lowercase() == wanted)
    }

    fn not_found(name: &str) -> Error {
        Error::HotelNotFound {
            name: name.trim().to_string(),
        }
    }

    fn clean_name(field: &str, name: &str) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("{field} must be non-empty"),
            });
        }
        Ok(name.to_string())
    }
}
