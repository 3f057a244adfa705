//! Read-only hotel views: availability, rooms, reservations and summary.

use crate::commands::booking::describe;
use crate::error::CliError;
use crate::output::write_rows;
use crate::session::Session;
use crate::utils::{format_amount, parse_date};
use chrono::NaiveDate;
use clap::Args;
use hotelier::{OutputFormat, Price, Room, RoomKind};
use serde::Serialize;
use std::io::Write;

/// Column headers for room listings.
const ROOM_HEADERS: [&str; 6] = ["id", "name", "kind", "price", "booked_days", "calendar"];

/// One row of a room listing.
#[derive(Debug, Serialize)]
struct RoomRow {
    id: u32,
    name: String,
    kind: RoomKind,
    price_per_night: Price,
    available_days: usize,
    booked_days: usize,
    calendar: String,
}

impl From<&Room> for RoomRow {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id().value(),
            name: room.name().to_string(),
            kind: room.kind(),
            price_per_night: room.price_per_night(),
            available_days: room.available_days(),
            booked_days: room.booked_days(),
            calendar: room.calendar_strip(),
        }
    }
}

/// Count available and booked rooms on a date.
#[derive(Args, Debug)]
pub struct AvailabilityArgs {
    /// Hotel name
    pub hotel: String,

    /// Date to inspect (YYYY-MM-DD); only its day of the month is used
    #[arg(value_parser = parse_date)]
    pub date: NaiveDate,
}

impl AvailabilityArgs {
    /// Execute the availability command.
    pub fn execute(self, session: &mut Session, out: &mut dyn Write) -> Result<(), CliError> {
        let occupancy = session.registry().availability(&self.hotel, self.date)?;

        writeln!(out, "Date: {}", self.date)?;
        writeln!(out, "Total Available Rooms: {}", occupancy.available)?;
        writeln!(out, "Total Booked Rooms: {}", occupancy.booked)?;
        Ok(())
    }
}

/// List the rooms of a hotel.
#[derive(Args, Debug)]
pub struct RoomsArgs {
    /// Hotel name
    pub hotel: String,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl RoomsArgs {
    /// Execute the rooms command.
    pub fn execute(self, session: &mut Session, out: &mut dyn Write) -> Result<(), CliError> {
        let format = session.format_or_default(self.format);
        let hotel = session.registry().hotel(&self.hotel)?;
        let rows: Vec<RoomRow> = hotel.rooms().iter().map(RoomRow::from).collect();

        write_rows(out, format, &ROOM_HEADERS, &rows, |row| {
            vec![
                row.id.to_string(),
                row.name.clone(),
                row.kind.to_string(),
                row.price_per_night.to_string(),
                row.booked_days.to_string(),
                row.calendar.clone(),
            ]
        })
    }
}

/// Show one room and its reservations.
#[derive(Args, Debug)]
pub struct RoomArgs {
    /// Hotel name
    pub hotel: String,

    /// Room name
    pub room: String,
}

impl RoomArgs {
    /// Execute the room command.
    pub fn execute(self, session: &mut Session, out: &mut dyn Write) -> Result<(), CliError> {
        let registry = session.registry();
        let reservations = registry.room_reservations(&self.hotel, &self.room)?;
        let hotel = registry.hotel(&self.hotel)?;
        let room = hotel
            .room(&self.room)
            .ok_or_else(|| hotelier::Error::RoomNotFound {
                name: self.room.clone(),
            })?;

        writeln!(out, "Room: {}", room.name())?;
        writeln!(out, "Kind: {}", room.kind())?;
        writeln!(out, "Price per night: {}", room.price_per_night())?;
        writeln!(
            out,
            "Available days: {} of {}",
            room.available_days(),
            room.availability().len()
        )?;
        writeln!(out, "Calendar: {}", room.calendar_strip())?;

        if reservations.is_empty() {
            writeln!(out, "There are no reservations for this room.")?;
        } else {
            writeln!(out, "Reservations:")?;
            for reservation in reservations {
                writeln!(out, "  {}", describe(hotel, reservation))?;
            }
        }
        Ok(())
    }
}

/// Show a guest's reservation.
#[derive(Args, Debug)]
pub struct ReservationArgs {
    /// Hotel name
    pub hotel: String,

    /// Guest name
    pub guest: String,
}

impl ReservationArgs {
    /// Execute the reservation command.
    pub fn execute(self, session: &mut Session, out: &mut dyn Write) -> Result<(), CliError> {
        let registry = session.registry();
        let reservation = registry.reservation(&self.hotel, &self.guest)?;
        let hotel = registry.hotel(&self.hotel)?;
        let room = hotel
            .room_by_id(reservation.room())
            .map_or_else(|| reservation.room().to_string(), |r| r.name().to_string());

        writeln!(out, "Guest Name: {}", reservation.guest_name())?;
        writeln!(out, "Room: {room}")?;
        writeln!(out, "Check-In Date: {}", reservation.check_in())?;
        writeln!(out, "Check-Out Date: {}", reservation.check_out())?;
        writeln!(out, "Nights: {}", reservation.nights())?;
        writeln!(
            out,
            "Total Price: {}",
            format_amount(hotel.reservation_total(reservation))
        )?;
        Ok(())
    }
}

/// Show a hotel's high-level figures.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Hotel name
    pub hotel: String,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl SummaryArgs {
    /// Execute the summary command.
    pub fn execute(self, session: &mut Session, out: &mut dyn Write) -> Result<(), CliError> {
        let format = session.format_or_default(self.format);
        let summary = session.registry().hotel(&self.hotel)?.summary();

        if format != OutputFormat::Table {
            return write_rows(out, format, &[], &[summary], |_| Vec::new());
        }

        writeln!(out, "Hotel Name: {}", summary.name)?;
        writeln!(out, "Base Price: {}", summary.base_price)?;
        writeln!(out, "Total Number of Rooms: {}", summary.rooms)?;
        writeln!(out, "Reservations: {}", summary.reservations)?;
        writeln!(
            out,
            "Estimated Earnings for the Month: {}",
            format_amount(summary.estimated_earnings)
        )?;
        Ok(())
    }
}
