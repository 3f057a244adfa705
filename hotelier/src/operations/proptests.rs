//! Property-based tests for booking operations.
//!
//! These tests focus on the consistency between room calendars and the
//! reservation list across reserve and cancel.

use chrono::NaiveDate;
use proptest::prelude::*;

use super::{cancel, reserve, ReserveOptions};
use crate::error::Error;
use crate::hotel::Hotel;
use crate::price::Price;
use crate::room::RoomKind;

fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

fn hotel() -> Hotel {
    let base = Price::try_from(1299.0).unwrap();
    let mut hotel = Hotel::new("Aurora", base);
    hotel.add_room("Room 1", RoomKind::Standard, base);
    hotel
}

// Ordered (check_in, check_out) pair within June
fn stay_strategy() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=30).prop_flat_map(|start| (Just(start), start..=30))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Overlapping stays on one room cannot both be reserved
    #[test]
    fn overlapping_stays_conflict(first in stay_strategy(), second in stay_strategy()) {
        let mut hotel = hotel();
        reserve(&mut hotel, ReserveOptions::new("Alice", "Room 1", june(first.0), june(first.1))).unwrap();
        let before = hotel.clone();

        let result = reserve(&mut hotel, ReserveOptions::new("Bob", "Room 1", june(second.0), june(second.1)));
        let overlaps = first.0 <= second.1 && second.0 <= first.1;

        if overlaps {
            let unavailable = matches!(result, Err(Error::RoomUnavailable { .. }));
            prop_assert!(unavailable, "expected RoomUnavailable, got {:?}", result);
            prop_assert_eq!(&hotel, &before);
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(hotel.reservations().len(), 2);
        }
    }

    // Reserving and cancelling returns the hotel to its previous state
    #[test]
    fn reserve_then_cancel_is_identity(stay in stay_strategy()) {
        let mut hotel = hotel();
        let before = hotel.clone();

        reserve(&mut hotel, ReserveOptions::new("Alice", "Room 1", june(stay.0), june(stay.1))).unwrap();
        cancel(&mut hotel, "Alice").unwrap();

        prop_assert_eq!(hotel, before);
    }

    // Every booked day belongs to exactly one reservation
    #[test]
    fn booked_days_match_reservations(stays in prop::collection::vec(stay_strategy(), 1..8)) {
        let mut hotel = hotel();
        for (i, (from, to)) in stays.iter().enumerate() {
            let _ = reserve(&mut hotel, ReserveOptions::new(format!("Guest {i}"), "Room 1", june(*from), june(*to)));
        }

        let reserved: u32 = hotel.reservations().iter().map(|r| r.day_range().len()).sum();
        let room = hotel.room("Room 1").unwrap();
        prop_assert_eq!(room.booked_days(), reserved as usize);
    }
}
