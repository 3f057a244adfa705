//! Property-based tests for the room availability calendar.

use super::{Room, RoomId, RoomKind};
use crate::calendar::{Day, DayRange};
use crate::price::Price;
use proptest::prelude::*;

// Strategy for generating valid inclusive day ranges
fn range_strategy() -> impl Strategy<Value = DayRange> {
    (Day::MIN..=Day::MAX, Day::MIN..=Day::MAX).prop_map(|(a, b)| {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        DayRange::new(Day::try_from(start).unwrap(), Day::try_from(end).unwrap()).unwrap()
    })
}

fn fresh_room() -> Room {
    Room::new(RoomId::new(1), "Room 1", RoomKind::Standard, Price::ZERO)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // book then cancel restores every day to its pre-book state when the
    // range was free beforehand
    #[test]
    fn book_cancel_round_trip(mut existing in prop::collection::vec(range_strategy(), 0..4), stay in range_strategy()) {
        existing.retain(|r| !r.overlaps(&stay));

        let mut room = fresh_room();
        for r in &existing {
            room.book(*r);
        }
        prop_assert!(room.is_range_available(stay));

        let before = *room.availability();
        room.book(stay);
        room.cancel(stay);
        prop_assert_eq!(&before, room.availability());
    }

    // After booking, no day in the range is available
    #[test]
    fn booked_range_is_unavailable(stay in range_strategy()) {
        let mut room = fresh_room();
        room.book(stay);
        for day in stay.iter() {
            prop_assert!(!room.is_available(day));
        }
        prop_assert!(!room.is_range_available(stay));
        prop_assert_eq!(room.booked_days(), stay.len() as usize);
    }

    // Booking never touches days outside the range
    #[test]
    fn booking_is_local(stay in range_strategy(), probe in Day::MIN..=Day::MAX) {
        let mut room = fresh_room();
        room.book(stay);
        let probe = Day::try_from(probe).unwrap();
        prop_assert_eq!(room.is_available(probe), !stay.contains(probe));
    }

    // Range availability agrees with the overlap relation on booked ranges
    #[test]
    fn range_availability_matches_overlap(booked in range_strategy(), request in range_strategy()) {
        let mut room = fresh_room();
        room.book(booked);
        prop_assert_eq!(room.is_range_available(request), !booked.overlaps(&request));
    }
}
