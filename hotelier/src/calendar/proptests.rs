//! Property-based tests for `Day` and `DayRange`.

use super::{Day, DayRange};
use chrono::NaiveDate;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        max_shrink_iters: 5000,
        .. ProptestConfig::default()
    })]

    // Only 1..=31 converts into a Day
    #[test]
    fn day_accepts_exactly_calendar_days(value in 0u32..100) {
        let result = Day::try_from(value);
        prop_assert_eq!(result.is_ok(), (1..=31).contains(&value));
    }

    // A range built from ordered days always has a positive length
    #[test]
    fn ordered_range_len(a in Day::MIN..=Day::MAX, b in Day::MIN..=Day::MAX) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let range = DayRange::new(Day::try_from(start).unwrap(), Day::try_from(end).unwrap()).unwrap();
        prop_assert_eq!(range.len(), end - start + 1);
        prop_assert_eq!(range.iter().count(), range.len() as usize);
    }

    // Inverted ranges are always rejected
    #[test]
    fn inverted_range_rejected(a in Day::MIN..Day::MAX, gap in 1u32..=30) {
        let end = a;
        let start = (a + gap).min(Day::MAX);
        prop_assume!(start > end);
        let result = DayRange::new(Day::try_from(start).unwrap(), Day::try_from(end).unwrap());
        prop_assert!(result.is_err());
    }

    // Overlap is symmetric
    #[test]
    fn overlap_symmetric(a in 1u32..=31, b in 1u32..=31, c in 1u32..=31, d in 1u32..=31) {
        let r1 = DayRange::new(Day::try_from(a.min(b)).unwrap(), Day::try_from(a.max(b)).unwrap()).unwrap();
        let r2 = DayRange::new(Day::try_from(c.min(d)).unwrap(), Day::try_from(d.max(c)).unwrap()).unwrap();
        prop_assert_eq!(r1.overlaps(&r2), r2.overlaps(&r1));
    }

    // A stay inside one month maps to the same day numbers as its dates
    #[test]
    fn stay_projects_day_of_month(month in 1u32..=12, a in 1u32..=28, b in 1u32..=28) {
        let (first, last) = if a <= b { (a, b) } else { (b, a) };
        let check_in = NaiveDate::from_ymd_opt(2024, month, first).unwrap();
        let check_out = NaiveDate::from_ymd_opt(2024, month, last).unwrap();
        let range = DayRange::for_stay(check_in, check_out).unwrap();
        prop_assert_eq!(range.start().value(), first);
        prop_assert_eq!(range.end().value(), last);
    }
}
