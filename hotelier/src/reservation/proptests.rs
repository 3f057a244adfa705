//! Property-based tests for `Reservation`.

use super::Reservation;
use crate::room::RoomId;
use chrono::NaiveDate;
use proptest::prelude::*;

// Strategy for generating guest names with optional surrounding whitespace
fn guest_strategy() -> impl Strategy<Value = String> {
    ("[ ]{0,2}", "[A-Za-z]{1,12}", "[ ]{0,2}").prop_map(|(pre, name, post)| format!("{pre}{name}{post}"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // Any ordered stay inside one month builds, and its nights are one less
    // than the number of blocked calendar days
    #[test]
    fn ordered_stay_builds(guest in guest_strategy(), month in 1u32..=12, a in 1u32..=28, b in 1u32..=28, room in 1u32..100) {
        let (first, last) = if a <= b { (a, b) } else { (b, a) };
        let check_in = NaiveDate::from_ymd_opt(2023, month, first).unwrap();
        let check_out = NaiveDate::from_ymd_opt(2023, month, last).unwrap();

        let reservation = Reservation::builder(guest.clone(), RoomId::new(room))
            .stay(check_in, check_out)
            .build()
            .unwrap();

        prop_assert_eq!(reservation.guest_name(), guest.trim());
        prop_assert_eq!(reservation.nights() + 1, i64::from(reservation.day_range().len()));
    }

    // Check-out strictly before check-in never builds
    #[test]
    fn inverted_stay_rejected(a in 1u32..=28, b in 1u32..=28) {
        prop_assume!(a != b);
        let (first, last) = if a < b { (a, b) } else { (b, a) };
        let check_in = NaiveDate::from_ymd_opt(2023, 5, last).unwrap();
        let check_out = NaiveDate::from_ymd_opt(2023, 5, first).unwrap();

        let result = Reservation::builder("Guest", RoomId::new(1))
            .stay(check_in, check_out)
            .build();
        prop_assert!(result.is_err());
    }
}
