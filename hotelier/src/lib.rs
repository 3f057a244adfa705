#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # hotelier
//!
//! A library for managing hotels, their rooms, and reservations over a
//! one-month booking calendar.
//!
//! ## Core Types
//!
//! - [`Day`] and [`DayRange`]: Validated calendar days and inclusive ranges
//! - [`Price`]: Validated nightly prices
//! - [`Room`] and [`RoomId`]: Rooms with a 31-day availability calendar
//! - [`Reservation`]: A guest's booking of one room
//! - [`Hotel`]: Owns rooms and reservations
//! - [`HotelRegistry`] and [`BookingPolicy`]: The managed hotels and their rules
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use hotelier::{Error, HotelRegistry};
//!
//! let mut registry = HotelRegistry::default();
//! registry.create_hotel("Aurora", 5, None).unwrap();
//!
//! let june = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
//! registry.reserve("Aurora", "Alice", "Room 1", june(1), june(3)).unwrap();
//!
//! // Overlaps Alice's stay
//! let clash = registry.reserve("Aurora", "Bob", "Room 1", june(2), june(4));
//! assert!(matches!(clash, Err(Error::RoomUnavailable { .. })));
//!
//! registry.cancel("Aurora", "Alice").unwrap();
//! registry.reserve("Aurora", "Bob", "Room 1", june(2), june(4)).unwrap();
//! ```

pub mod calendar;
pub mod config;
pub mod error;
pub mod hotel;
pub mod logging;
pub mod operations;
pub mod price;
pub mod registry;
pub mod reservation;
pub mod room;

// Re-export key types at crate root for convenience
pub use calendar::{Day, DayRange, DAYS_IN_CALENDAR};
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use error::{Error, NameKind, Result};
pub use hotel::{Hotel, HotelSummary, Occupancy};
pub use logging::{init_logger, resolve_level, LogLevel, Logger};
pub use operations::{
    CancelOptions, CancelPlan, ExecutionResult, OperationPlan, PlanAction, PlanExecutor,
    ReserveOptions, ReservePlan,
};
pub use price::Price;
pub use registry::{BookingPolicy, HotelRegistry};
pub use reservation::{Reservation, ReservationBuilder};
pub use room::{Room, RoomId, RoomKind};
