//! Plan types for booking operations.
//!
//! A plan lists the calendar and reservation-list changes an operation will
//! make to a hotel, without making them.

use crate::calendar::DayRange;
use crate::reservation::Reservation;
use crate::room::RoomId;

/// A single change to a hotel.
///
/// Booking always pairs `BookDays` with `RecordReservation`, and cancelling
/// pairs `ReleaseDays` with `DropReservation`. The executor applies a plan
/// all-or-nothing, so a room calendar and the reservation list never
/// disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Mark the days of `range` as booked on `room`.
    BookDays {
        /// The room to book.
        room: RoomId,
        /// The days to mark.
        range: DayRange,
    },

    /// Mark the days of `range` as free on `room`.
    ReleaseDays {
        /// The room to release.
        room: RoomId,
        /// The days to free.
        range: DayRange,
    },

    /// Append a reservation to the hotel.
    RecordReservation(Reservation),

    /// Remove the first reservation held by this reservation's guest.
    DropReservation(Reservation),
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::BookDays { room, range } => format!("Book days {range} on room {room}"),
            Self::ReleaseDays { room, range } => format!("Release days {range} on room {room}"),
            Self::RecordReservation(r) => format!("Record reservation: {r}"),
            Self::DropReservation(r) => format!("Drop reservation: {r}"),
        }
    }
}

/// A complete operation plan describing all actions to be taken.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelier::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Reserve Room 1 for Alice");
    /// assert_eq!(plan.description, "Reserve Room 1 for Alice");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns the reservation recorded or dropped by this plan, if any.
    #[must_use]
    pub fn reservation(&self) -> Option<&Reservation> {
        self.actions.iter().find_map(|action| match action {
            PlanAction::RecordReservation(r) | PlanAction::DropReservation(r) => Some(r),
            PlanAction::BookDays { .. } | PlanAction::ReleaseDays { .. } => None,
        })
    }
}
