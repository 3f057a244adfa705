//! Cancel operation planning.

use crate::error::{Error, Result};
use crate::hotel::Hotel;

use super::plan::{OperationPlan, PlanAction};

/// Options for a cancel operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelOptions {
    /// The guest whose earliest reservation is cancelled.
    pub guest_name: String,
}

impl CancelOptions {
    /// Creates a new `CancelOptions` for the given guest.
    #[must_use]
    pub fn new(guest_name: impl Into<String>) -> Self {
        Self {
            guest_name: guest_name.into(),
        }
    }
}

/// A cancel plan generator.
pub struct CancelPlan {
    options: CancelOptions,
}

impl CancelPlan {
    /// Creates a new cancel plan with the given options.
    #[must_use]
    pub const fn new(options: CancelOptions) -> Self {
        Self { options }
    }

    /// Builds an operation plan that frees the room days of the guest's
    /// first reservation and then drops that reservation.
    ///
    /// Guest names are matched exactly, after trimming the request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservationNotFound`] if the guest holds no
    /// reservation.
    pub fn build_plan(&self, hotel: &Hotel) -> Result<OperationPlan> {
        let guest = self.options.guest_name.trim();
        let reservation = hotel
            .reservation(guest)
            .ok_or_else(|| Error::ReservationNotFound {
                guest: guest.to_string(),
            })?;

        let mut plan = OperationPlan::new(format!("Cancel reservation for {guest}"));

        let held = hotel
            .reservations()
            .iter()
            .filter(|r| r.guest_name() == guest)
            .count();
        if held > 1 {
            plan = plan.add_warning(format!(
                "{guest} holds {held} reservations; only the earliest is cancelled"
            ));
        }

        Ok(plan
            .add_action(PlanAction::ReleaseDays {
                room: reservation.room(),
                range: reservation.day_range(),
            })
            .add_action(PlanAction::DropReservation(reservation.clone())))
    }
}
