//! Property-based tests for `Reservation` cost and night calculations.

use super::{Reservation, ReservationId, DEFAULT_NIGHTLY_RATE};
use crate::{DateRange, Discount, Room};
use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

// Stays of one to ninety nights, possibly with a partial trailing day
fn stay_strategy() -> impl Strategy<Value = DateRange> {
    (0i64..365, 1i64..90, 0i64..86_400).prop_map(|(offset, nights, extra)| {
        let start = Utc.with_ymd_and_hms(2019, 1, 1, 14, 8, 45).unwrap() + Duration::days(offset);
        DateRange::new(start, start + Duration::days(nights) + Duration::seconds(extra)).unwrap()
    })
}

fn discount_strategy() -> impl Strategy<Value = Discount> {
    (0u32..100).prop_map(|percent| Discount::try_from(f64::from(percent) / 100.0).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every stay lasts at least one night and costs nights x rate x (1 - discount)
    #[test]
    fn cost_matches_nights(dates in stay_strategy(), discount in discount_strategy(), room in 1u32..=20) {
        let reservation = Reservation::builder(ReservationId::FIRST, Room::new(room), dates)
            .discount(discount)
            .build();

        prop_assert!(reservation.total_nights() >= 1);
        let expected = f64::from(reservation.total_nights()) * DEFAULT_NIGHTLY_RATE * (1.0 - discount.value());
        prop_assert!((reservation.total_cost() - expected).abs() < 1e-6);
    }

    // A discount never raises the price
    #[test]
    fn discount_never_increases_cost(dates in stay_strategy(), discount in discount_strategy()) {
        let full = Reservation::builder(ReservationId::FIRST, Room::new(1), dates).build();
        let discounted = Reservation::builder(ReservationId::FIRST, Room::new(1), dates)
            .discount(discount)
            .build();
        prop_assert!(discounted.total_cost() <= full.total_cost());
    }
}
