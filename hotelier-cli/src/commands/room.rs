//! Room management commands.

use crate::error::CliError;
use crate::session::Session;
use clap::Args;
use hotelier::{Price, RoomKind};
use std::io::Write;

/// Add a room to a hotel.
#[derive(Args, Debug)]
pub struct AddRoomArgs {
    /// Hotel name
    pub hotel: String,

    /// Room name (unique within the hotel, case-sensitive)
    pub room: String,

    /// Room kind
    #[arg(long, value_enum, default_value_t = RoomKind::Standard)]
    pub kind: RoomKind,

    /// Price per night (defaults to the hotel's base price)
    #[arg(long, value_name = "PRICE")]
    pub price: Option<Price>,
}

impl AddRoomArgs {
    /// Execute the add-room command.
    pub fn execute(self, session: &mut Session, out: &mut dyn Write) -> Result<(), CliError> {
        let registry = session.registry_mut();
        let id = registry.add_room(&self.hotel, &self.room, self.kind, self.price)?;

        let hotel = registry.hotel(&self.hotel)?;
        if let Some(room) = hotel.room_by_id(id) {
            writeln!(out, "Added room {id} {room} to '{}'", hotel.name())?;
        }
        Ok(())
    }
}

/// Remove a room that has no reservations.
#[derive(Args, Debug)]
pub struct RemoveRoomArgs {
    /// Hotel name
    pub hotel: String,

    /// Room name
    pub room: String,
}

impl RemoveRoomArgs {
    /// Execute the remove-room command.
    pub fn execute(self, session: &mut Session, out: &mut dyn Write) -> Result<(), CliError> {
        let room = session.registry_mut().remove_room(&self.hotel, &self.room)?;
        writeln!(out, "Removed room '{}'", room.name())?;
        Ok(())
    }
}

/// Change the nightly price of a room.
#[derive(Args, Debug)]
pub struct SetRoomPriceArgs {
    /// Hotel name
    pub hotel: String,

    /// Room name
    pub room: String,

    /// New price per night
    pub price: Price,
}

impl SetRoomPriceArgs {
    /// Execute the set-room-price command.
    pub fn execute(self, session: &mut Session, out: &mut dyn Write) -> Result<(), CliError> {
        session
            .registry_mut()
            .update_room_price(&self.hotel, &self.room, self.price)?;
        writeln!(out, "Price of room '{}' set to {}", self.room, self.price)?;
        Ok(())
    }
}
