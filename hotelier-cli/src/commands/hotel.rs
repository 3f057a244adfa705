//! Hotel management commands: create, list, rename and reprice hotels.

use crate::error::CliError;
use crate::output::write_rows;
use crate::session::Session;
use crate::utils::format_amount;
use clap::Args;
use hotelier::{HotelSummary, OutputFormat, Price};
use std::io::Write;

/// Column headers for hotel listings.
const HOTEL_HEADERS: [&str; 5] = ["name", "rooms", "reservations", "base_price", "earnings"];

/// Create a hotel with numbered standard rooms.
#[derive(Args, Debug)]
pub struct CreateHotelArgs {
    /// Hotel name (unique, ignoring case)
    pub name: String,

    /// Number of rooms, named "Room 1" to "Room N"
    #[arg(long, default_value_t = 5, value_name = "N")]
    pub rooms: usize,

    /// Base price per night (0 uses the configured default)
    #[arg(long, value_name = "PRICE")]
    pub base_price: Option<Price>,
}

impl CreateHotelArgs {
    /// Execute the create-hotel command.
    pub fn execute(self, session: &mut Session, out: &mut dyn Write) -> Result<(), CliError> {
        let hotel = session
            .registry_mut()
            .create_hotel(&self.name, self.rooms, self.base_price)?;

        writeln!(
            out,
            "Created hotel '{}' with {} rooms at {} per night",
            hotel.name(),
            hotel.rooms().len(),
            hotel.base_price()
        )?;
        Ok(())
    }
}

/// List all hotels.
#[derive(Args, Debug)]
pub struct ListHotelsArgs {
    /// Output format (defaults to the configured format)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl ListHotelsArgs {
    /// Execute the list-hotels command.
    pub fn execute(self, session: &mut Session, out: &mut dyn Write) -> Result<(), CliError> {
        let format = session.format_or_default(self.format);
        let summaries: Vec<HotelSummary> = session
            .registry()
            .hotels()
            .iter()
            .map(hotelier::Hotel::summary)
            .collect();

        if summaries.is_empty() && format == OutputFormat::Table {
            writeln!(out, "No hotels available.")?;
            return Ok(());
        }

        write_rows(out, format, &HOTEL_HEADERS, &summaries, |s| {
            vec![
                s.name.clone(),
                s.rooms.to_string(),
                s.reservations.to_string(),
                s.base_price.to_string(),
                format_amount(s.estimated_earnings),
            ]
        })
    }
}

/// Rename a hotel.
#[derive(Args, Debug)]
pub struct RenameHotelArgs {
    /// Current hotel name
    pub hotel: String,

    /// New hotel name
    pub new_name: String,
}

impl RenameHotelArgs {
    /// Execute the rename-hotel command.
    pub fn execute(self, session: &mut Session, out: &mut dyn Write) -> Result<(), CliError> {
        let registry = session.registry_mut();
        let old_name = registry.hotel(&self.hotel)?.name().to_string();
        registry.rename_hotel(&self.hotel, &self.new_name)?;

        writeln!(out, "Renamed hotel '{old_name}' to '{}'", self.new_name.trim())?;
        Ok(())
    }
}

/// Change a hotel's base price.
#[derive(Args, Debug)]
pub struct SetBasePriceArgs {
    /// Hotel name
    pub hotel: String,

    /// New base price per night
    pub price: Price,
}

impl SetBasePriceArgs {
    /// Execute the set-base-price command.
    pub fn execute(self, session: &mut Session, out: &mut dyn Write) -> Result<(), CliError> {
        let registry = session.registry_mut();
        registry.update_base_price(&self.hotel, self.price)?;

        let hotel = registry.hotel(&self.hotel)?;
        writeln!(out, "Base price of '{}' set to {}", hotel.name(), self.price)?;
        Ok(())
    }
}
