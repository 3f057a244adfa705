//! Booking operations using the plan-execute pattern.
//!
//! Booking and cancelling each touch two places: the room calendar and the
//! hotel's reservation list. Operations are split into two phases so that
//! those two places always change together:
//! 1. **Planning**: resolves the room or reservation, validates the request
//!    and checks availability, without touching the hotel
//! 2. **Execution**: applies the plan all-or-nothing
//!
//! Planning alone is what the `--dry-run` flag reports.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use hotelier::operations::{self, ReserveOptions};
//! use hotelier::{Error, Hotel, Price, RoomKind};
//!
//! let base = Price::try_from(1299.0).unwrap();
//! let mut hotel = Hotel::new("Aurora", base);
//! hotel.add_room("Room 1", RoomKind::Standard, base);
//! let june = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
//!
//! operations::reserve(&mut hotel, ReserveOptions::new("Alice", "Room 1", june(1), june(3))).unwrap();
//!
//! let clash = operations::reserve(&mut hotel, ReserveOptions::new("Bob", "Room 1", june(2), june(4)));
//! assert!(matches!(clash, Err(Error::RoomUnavailable { .. })));
//!
//! operations::cancel(&mut hotel, "Alice").unwrap();
//! operations::reserve(&mut hotel, ReserveOptions::new("Bob", "Room 1", june(2), june(4))).unwrap();
//! ```

pub mod cancel;
pub mod executor;
pub mod plan;
pub mod reserve;

#[cfg(test)]
mod proptests;

pub use cancel::{CancelOptions, CancelPlan};
pub use executor::{ExecutionResult, PlanExecutor};
pub use plan::{OperationPlan, PlanAction};
pub use reserve::{ReserveOptions, ReservePlan};

use crate::error::{Error, Result};
use crate::hotel::Hotel;
use crate::reservation::Reservation;

/// Plans and executes a reservation, returning the recorded reservation.
///
/// # Errors
///
/// Returns any planning error from [`ReservePlan::build_plan`].
pub fn reserve(hotel: &mut Hotel, options: ReserveOptions) -> Result<Reservation> {
    let plan = ReservePlan::new(options).build_plan(hotel)?;
    let result = PlanExecutor::new(hotel).execute(&plan)?;
    result.reservation.ok_or_else(|| missing_reservation(&plan))
}

/// Plans and executes the cancellation of a guest's first reservation,
/// returning the removed reservation.
///
/// # Errors
///
/// Returns [`Error::ReservationNotFound`] if the guest holds no reservation.
pub fn cancel(hotel: &mut Hotel, guest_name: &str) -> Result<Reservation> {
    let plan = CancelPlan::new(CancelOptions::new(guest_name)).build_plan(hotel)?;
    let result = PlanExecutor::new(hotel).execute(&plan)?;
    result.reservation.ok_or_else(|| missing_reservation(&plan))
}

fn missing_reservation(plan: &OperationPlan) -> Error {
    Error::Validation {
        field: "plan".into(),
        message: format!("'{}' did not touch any reservation", plan.description),
    }
}
