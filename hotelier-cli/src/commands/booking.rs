//! Booking commands: reserve and cancel.
//!
//! Both commands build an operation plan against the hotel and hand it to
//! a [`PlanExecutor`], so `--dry-run` reports exactly what would change.

use crate::error::CliError;
use crate::session::Session;
use crate::utils::{format_amount, parse_date};
use chrono::NaiveDate;
use clap::Args;
use hotelier::{
    CancelOptions, CancelPlan, ExecutionResult, Hotel, OperationPlan, PlanExecutor, Reservation,
    ReserveOptions, ReservePlan,
};
use std::io::Write;

/// Reserve a room for a guest.
#[derive(Args, Debug)]
pub struct ReserveArgs {
    /// Hotel name
    pub hotel: String,

    /// Guest name
    pub guest: String,

    /// Room name
    pub room: String,

    /// First night (YYYY-MM-DD)
    #[arg(value_parser = parse_date)]
    pub check_in: NaiveDate,

    /// Check-out date (YYYY-MM-DD), in the same month
    #[arg(value_parser = parse_date)]
    pub check_out: NaiveDate,

    /// Show what would be booked without booking it
    #[arg(long)]
    pub dry_run: bool,
}

impl ReserveArgs {
    /// Execute the reserve command.
    pub fn execute(self, session: &mut Session, out: &mut dyn Write) -> Result<(), CliError> {
        let hotel = session.registry_mut().hotel_mut(&self.hotel)?;
        let options = ReserveOptions::new(self.guest, self.room, self.check_in, self.check_out);
        let plan = ReservePlan::new(options).build_plan(hotel)?;

        let result = execute_plan(hotel, &plan, self.dry_run)?;
        report(out, hotel, &result, "Reserved", "Would reserve")
    }
}

/// Cancel a guest's first reservation.
#[derive(Args, Debug)]
pub struct CancelArgs {
    /// Hotel name
    pub hotel: String,

    /// Guest name
    pub guest: String,

    /// Show what would be released without releasing it
    #[arg(long)]
    pub dry_run: bool,
}

impl CancelArgs {
    /// Execute the cancel command.
    pub fn execute(self, session: &mut Session, out: &mut dyn Write) -> Result<(), CliError> {
        let hotel = session.registry_mut().hotel_mut(&self.hotel)?;
        let plan = CancelPlan::new(CancelOptions::new(self.guest)).build_plan(hotel)?;

        let result = execute_plan(hotel, &plan, self.dry_run)?;
        report(out, hotel, &result, "Cancelled", "Would cancel")
    }
}

fn execute_plan(
    hotel: &mut Hotel,
    plan: &OperationPlan,
    dry_run: bool,
) -> Result<ExecutionResult, CliError> {
    for warning in &plan.warnings {
        log::warn!("{warning}");
    }

    let mut executor = PlanExecutor::new(hotel);
    if dry_run {
        executor = executor.dry_run();
    }
    Ok(executor.execute(plan)?)
}

fn report(
    out: &mut dyn Write,
    hotel: &Hotel,
    result: &ExecutionResult,
    done: &str,
    planned: &str,
) -> Result<(), CliError> {
    if result.dry_run {
        writeln!(out, "Dry run, no changes made:")?;
        for action in &result.actions_taken {
            writeln!(out, "  {action}")?;
        }
    }

    if let Some(reservation) = &result.reservation {
        let verb = if result.dry_run { planned } else { done };
        writeln!(out, "{verb} {}", describe(hotel, reservation))?;
    }
    Ok(())
}

/// One-line description of a reservation with its room name and total.
pub(crate) fn describe(hotel: &Hotel, reservation: &Reservation) -> String {
    let room = hotel
        .room_by_id(reservation.room())
        .map_or_else(|| reservation.room().to_string(), |r| r.name().to_string());
    let nights = reservation.nights();
    let noun = if nights == 1 { "night" } else { "nights" };

    format!(
        "{room} for {} from {} to {} ({nights} {noun}, total {})",
        reservation.guest_name(),
        reservation.check_in(),
        reservation.check_out(),
        format_amount(hotel.reservation_total(reservation))
    )
}
