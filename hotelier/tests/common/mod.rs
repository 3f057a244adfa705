//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the hotelier library.

use chrono::NaiveDate;
use hotelier::{BookingPolicy, HotelRegistry, Price};

/// Returns a date in June 2024.
#[allow(dead_code)]
pub fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

/// Shorthand for a valid price.
#[allow(dead_code)]
pub fn price(value: f64) -> Price {
    Price::try_from(value).unwrap()
}

/// Builder for a registry holding one hotel.
///
/// # Examples
///
/// ```no_run
/// # use common::HotelFixture;
/// let registry = HotelFixture::new("Aurora")
///     .with_rooms(5)
///     .with_reservation("Alice", "Room 1", 1, 3)
///     .build();
/// ```
#[allow(dead_code)]
pub struct HotelFixture {
    name: String,
    rooms: usize,
    base_price: Option<Price>,
    policy: BookingPolicy,
    reservations: Vec<(String, String, u32, u32)>,
}

#[allow(dead_code)]
impl HotelFixture {
    /// Creates a fixture for a hotel with default values.
    ///
    /// Defaults:
    /// - rooms: 5
    /// - base price: policy default (1299.00)
    /// - no reservations
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rooms: 5,
            base_price: None,
            policy: BookingPolicy::default(),
            reservations: Vec::new(),
        }
    }

    /// Sets the number of rooms.
    pub fn with_rooms(mut self, rooms: usize) -> Self {
        self.rooms = rooms;
        self
    }

    /// Sets the base price.
    pub fn with_base_price(mut self, value: f64) -> Self {
        self.base_price = Some(price(value));
        self
    }

    /// Sets the registry policy.
    pub fn with_policy(mut self, policy: BookingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Adds a June reservation made after the hotel is created.
    pub fn with_reservation(mut self, guest: &str, room: &str, from: u32, to: u32) -> Self {
        self.reservations
            .push((guest.to_string(), room.to_string(), from, to));
        self
    }

    /// Builds the registry.
    pub fn build(self) -> HotelRegistry {
        let mut registry = HotelRegistry::new(self.policy);
        registry
            .create_hotel(&self.name, self.rooms, self.base_price)
            .unwrap();
        for (guest, room, from, to) in &self.reservations {
            registry
                .reserve(&self.name, guest, room, june(*from), june(*to))
                .unwrap();
        }
        registry
    }
}
