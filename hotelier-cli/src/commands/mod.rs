//! CLI command implementations.
//!
//! Top-level commands:
//! - `shell`: Interactive session over standard input
//! - `run`: Execute a script of session commands
//! - `completions`: Generate shell completion scripts
//!
//! Session commands, grouped by concern:
//! - `hotel`: create-hotel, list-hotels, rename-hotel, set-base-price
//! - `room`: add-room, remove-room, set-room-price
//! - `booking`: reserve, cancel
//! - `report`: availability, rooms, room, reservation, summary

pub mod booking;
pub mod completions;
pub mod hotel;
pub mod report;
pub mod room;
pub mod run;
pub mod shell;

pub use booking::{CancelArgs, ReserveArgs};
pub use completions::CompletionsCommand;
pub use hotel::{CreateHotelArgs, ListHotelsArgs, RenameHotelArgs, SetBasePriceArgs};
pub use report::{AvailabilityArgs, ReservationArgs, RoomArgs, RoomsArgs, SummaryArgs};
pub use room::{AddRoomArgs, RemoveRoomArgs, SetRoomPriceArgs};
pub use run::RunCommand;
pub use shell::ShellCommand;
