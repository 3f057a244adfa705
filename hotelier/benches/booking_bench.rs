use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use hotelier::operations::{self, ReserveOptions};
use hotelier::{Day, Hotel, HotelRegistry, Price, RoomKind};

const ROOM_COUNTS: &[usize] = &[5, 25, 50];

fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).expect("valid June date")
}

fn populated_hotel(rooms: usize) -> Hotel {
    let base = Price::try_from(1299.0).expect("valid price");
    let mut hotel = Hotel::new("Aurora", base);
    for number in 1..=rooms {
        hotel.add_room(format!("Room {number}"), RoomKind::Standard, base);
    }

    // Book every room for the first ten days, one guest per room
    for number in 1..=rooms {
        operations::reserve(
            &mut hotel,
            ReserveOptions::new(
                format!("Guest {number}"),
                format!("Room {number}"),
                june(1),
                june(10),
            ),
        )
        .expect("failed to populate hotel");
    }
    hotel
}

fn bench_reserve_cancel(c: &mut Criterion) {
    let mut group = c.benchmark_group("reserve_cancel");

    for &rooms in ROOM_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(rooms), &rooms, |b, &rooms| {
            b.iter_batched(
                || populated_hotel(rooms),
                |mut hotel| {
                    let last = format!("Room {rooms}");
                    operations::reserve(
                        &mut hotel,
                        ReserveOptions::new("Bench", last, june(15), june(20)),
                    )
                    .expect("reserve");
                    operations::cancel(&mut hotel, "Bench").expect("cancel");
                    black_box(hotel)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    for &rooms in ROOM_COUNTS {
        let hotel = populated_hotel(rooms);
        let day = Day::try_from(5).expect("valid day");

        group.bench_with_input(BenchmarkId::new("availability_on", rooms), &hotel, |b, hotel| {
            b.iter(|| black_box(hotel.availability_on(day)));
        });

        group.bench_with_input(BenchmarkId::new("estimated_earnings", rooms), &hotel, |b, hotel| {
            b.iter(|| black_box(hotel.estimated_earnings()));
        });
    }

    group.finish();
}

fn bench_create_hotel(c: &mut Criterion) {
    c.bench_function("create_hotel_50_rooms", |b| {
        b.iter(|| {
            let mut registry = HotelRegistry::default();
            registry
                .create_hotel(black_box("Aurora"), 50, None)
                .expect("create hotel");
            black_box(registry)
        });
    });
}

criterion_group!(benches, bench_reserve_cancel, bench_queries, bench_create_hotel);
criterion_main!(benches);
