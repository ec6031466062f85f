//! Property-based tests for `ReservationManager` booking invariants.

use super::ReservationManager;
use crate::{Block, Error};
use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

fn day(offset: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, 3, 1, 14, 8, 45).unwrap() + Duration::days(offset)
}

// (start day, nights, room) requests over a two month window
fn request_strategy() -> impl Strategy<Value = (i64, i64, u32)> {
    (0i64..60, 1i64..10, 1u32..=20)
}

#[derive(Debug, Clone)]
enum Step {
    Reserve(i64, i64, u32),
    Block(i64, i64, u32, u32, String),
    Draw(String),
}

fn block_name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["alpha", "beta", "gamma"]).prop_map(String::from)
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        request_strategy().prop_map(|(start, nights, room)| Step::Reserve(start, nights, room)),
        (0i64..60, 1i64..10, 1u32..=16, 1u32..=5, block_name_strategy())
            .prop_map(|(start, nights, first, size, name)| Step::Block(start, nights, first, size, name)),
        block_name_strategy().prop_map(Step::Draw),
    ]
}

// Any range at all: inverted, empty, shorter than a night, or a real stay
fn any_range_strategy() -> impl Strategy<Value = (DateTime<Utc>, DateTime<Utc>)> {
    (0i64..60 * 24, -10i64 * 24..10 * 24).prop_map(|(start_hours, length_hours)| {
        let start = day(0) + Duration::hours(start_hours);
        (start, start + Duration::hours(length_hours))
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // No two stored reservations for the same room ever overlap
    #[test]
    fn stored_reservations_never_overlap(requests in prop::collection::vec(request_strategy(), 1..60)) {
        let mut manager = ReservationManager::new();
        for (start, nights, room) in requests {
            let _ = manager.create_reservation(day(start), day(start + nights), room);
        }

        let stored = manager.reservations();
        for (i, a) in stored.iter().enumerate() {
            prop_assert!(a.total_nights() >= 1);
            for b in &stored[i + 1..] {
                if a.room() == b.room() {
                    prop_assert!(!a.dates().overlaps(b.dates()));
                }
            }
        }
    }

    // Every id handed out, directly or by a block draw, resolves to its stay
    #[test]
    fn find_by_id_resolves_created(steps in prop::collection::vec(step_strategy(), 1..40)) {
        let mut manager = ReservationManager::new();
        for step in steps {
            match step {
                Step::Reserve(start, nights, room) => {
                    if let Ok(created) = manager.create_reservation(day(start), day(start + nights), room) {
                        let found = manager.find_by_id(created.id()).unwrap();
                        prop_assert_eq!(found.room(), created.room());
                        prop_assert_eq!(found.dates(), created.dates());
                    }
                }
                Step::Block(start, nights, first, size, name) => {
                    let rooms: Vec<u32> = (first..first + size).collect();
                    let _ = manager.create_block(day(start), day(start + nights), &rooms, &name, 0.2);
                }
                Step::Draw(name) => {
                    let available = manager
                        .find_block(&name)
                        .map(|block| (block.available_rooms().first().copied(), *block.dates()));
                    if let Ok(id) = manager.reserve_from_block(&name) {
                        let (room, dates) = available.unwrap();
                        let found = manager.find_by_id(id).unwrap();
                        prop_assert_eq!(Some(found.room()), room);
                        prop_assert_eq!(found.dates(), &dates);
                        prop_assert_eq!(found.block().map(|b| b.as_str()), Some(name.as_str()));
                    }
                }
            }
        }
    }

    // A request is rejected exactly when it overlaps a stored stay in that room
    #[test]
    fn rejection_matches_overlap(requests in prop::collection::vec(request_strategy(), 1..40)) {
        let mut manager = ReservationManager::new();
        for (start, nights, room) in requests {
            let dates = crate::DateRange::new(day(start), day(start + nights)).unwrap();
            let clash = manager
                .reservations()
                .iter()
                .any(|r| r.room().number() == room && r.dates().overlaps(&dates));

            let result = manager.create_reservation(day(start), day(start + nights), room);
            prop_assert_eq!(result.is_err(), clash);
        }
    }

    // Inverted ranges always fail, whatever the room
    #[test]
    fn inverted_range_always_invalid(start in 0i64..60, back in 0i64..10, room in 0u32..40) {
        let mut manager = ReservationManager::new();
        let result = manager.create_reservation(day(start), day(start - back), room);
        let is_invalid_range = matches!(result, Err(Error::InvalidDateRange { .. }));
        prop_assert!(is_invalid_range);
    }

    // Oversized blocks are always rejected, whatever the dates
    #[test]
    fn oversized_block_always_rejected(extra in 1usize..10, (start, end) in any_range_strategy()) {
        let mut manager = ReservationManager::new();
        let rooms: Vec<u32> = (1..=u32::try_from(Block::MAX_ROOMS + extra).unwrap()).collect();
        let result = manager.create_block(start, end, &rooms, "group", 0.1);
        let is_size_error = matches!(result, Err(Error::InvalidBlockSize { .. }));
        prop_assert!(is_size_error);
    }

    // A block of n rooms yields exactly n draws
    #[test]
    fn block_drains_after_n_draws(n in 1usize..=Block::MAX_ROOMS, percent in 0u32..100) {
        let mut manager = ReservationManager::new();
        let rooms: Vec<u32> = (1..=u32::try_from(n).unwrap()).collect();
        manager
            .create_block(day(0), day(3), &rooms, "group", f64::from(percent) / 100.0)
            .unwrap();

        for _ in 0..n {
            prop_assert!(manager.reserve_from_block("group").is_ok());
        }
        let is_exhausted = matches!(manager.reserve_from_block("group"), Err(Error::BlockExhausted { .. }));
        prop_assert!(is_exhausted);
        prop_assert_eq!(manager.reservations().len(), n);
    }
}
