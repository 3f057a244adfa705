//! Plan execution engine.
//!
//! The executor applies every action of a plan to a staged copy of the
//! hotel and only replaces the hotel once all actions succeeded. A failing
//! action therefore leaves the hotel exactly as it was.

use crate::error::{Error, Result};
use crate::hotel::Hotel;
use crate::reservation::Reservation;

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// The reservation that was recorded or dropped, if any.
    pub reservation: Option<Reservation>,
}

impl ExecutionResult {
    fn success(plan: &OperationPlan, reservation: Option<Reservation>) -> Self {
        Self {
            success: true,
            dry_run: false,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            reservation,
        }
    }

    fn dry_run(plan: &OperationPlan) -> Self {
        Self {
            success: true,
            dry_run: true,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            reservation: plan.reservation().cloned(),
        }
    }
}

/// Executes operation plans against a hotel.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hotelier::operations::{PlanExecutor, ReserveOptions, ReservePlan};
/// use hotelier::{Hotel, Price, RoomKind};
///
/// let base = Price::try_from(1299.0).unwrap();
/// let mut hotel = Hotel::new("Aurora", base);
/// hotel.add_room("Room 1", RoomKind::Standard, base);
///
/// let june = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
/// let options = ReserveOptions::new("Alice", "Room 1", june(1), june(3));
/// let plan = ReservePlan::new(options).build_plan(&hotel).unwrap();
///
/// // Dry-run execution
/// let result = PlanExecutor::new(&mut hotel).dry_run().execute(&plan).unwrap();
/// assert!(result.dry_run);
/// assert!(hotel.has_no_reservations());
///
/// // Normal execution
/// let result = PlanExecutor::new(&mut hotel).execute(&plan).unwrap();
/// assert!(result.success);
/// assert_eq!(hotel.reservations().len(), 1);
/// ```
pub struct PlanExecutor<'a> {
    hotel: &'a mut Hotel,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor.
    #[must_use]
    pub fn new(hotel: &'a mut Hotel) -> Self {
        Self {
            hotel,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode.
    ///
    /// In dry-run mode, the executor reports the plan but does not
    /// modify the hotel.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// # Errors
    ///
    /// Returns an error if any action fails. The hotel is left unchanged in
    /// that case.
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        if self.dry_run {
            log::debug!("dry run: {}", plan.description);
            return Ok(ExecutionResult::dry_run(plan));
        }

        let mut staged = self.hotel.clone();
        let mut affected = None;
        for action in &plan.actions {
            log::debug!("{}", action.description());
            if let Some(reservation) = Self::apply(&mut staged, action)? {
                affected = Some(reservation);
            }
        }

        *self.hotel = staged;
        log::info!("{} in hotel '{}'", plan.description, self.hotel.name());
        Ok(ExecutionResult::success(plan, affected))
    }

    /// Applies a single action to the staged hotel.
    ///
    /// Returns the reservation recorded or removed by the action, if any.
    fn apply(hotel: &mut Hotel, action: &PlanAction) -> Result<Option<Reservation>> {
        match action {
            PlanAction::BookDays { room, range } => {
                let target = hotel
                    .room_by_id_mut(*room)
                    .ok_or_else(|| Error::RoomNotFound {
                        name: room.to_string(),
                    })?;
                if !target.is_range_available(*range) {
                    return Err(Error::RoomUnavailable {
                        room: target.name().to_string(),
                        range: *range,
                    });
                }
                target.book(*range);
                Ok(None)
            }
            PlanAction::ReleaseDays { room, range } => {
                let target = hotel
                    .room_by_id_mut(*room)
                    .ok_or_else(|| Error::RoomNotFound {
                        name: room.to_string(),
                    })?;
                target.cancel(*range);
                Ok(None)
            }
            PlanAction::RecordReservation(reservation) => {
                hotel.add_reservation(reservation.clone());
                Ok(Some(reservation.clone()))
            }
            PlanAction::DropReservation(reservation) => {
                let removed = hotel
                    .remove_reservation(reservation.guest_name())
                    .ok_or_else(|| Error::ReservationNotFound {
                        guest: reservation.guest_name().to_string(),
                    })?;
                Ok(Some(removed))
            }
        }
    }
}
