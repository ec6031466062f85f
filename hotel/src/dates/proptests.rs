//! Property-based tests for `DateRange`.

use super::{DateRange, SECONDS_PER_NIGHT};
use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, 1, 1, 14, 0, 0).unwrap()
}

// Ranges starting within one year of the epoch and lasting up to 60 days.
fn range_strategy() -> impl Strategy<Value = DateRange> {
    (0i64..365 * SECONDS_PER_NIGHT, 1i64..60 * SECONDS_PER_NIGHT).prop_map(|(offset, length)| {
        let start = epoch() + Duration::seconds(offset);
        DateRange::new(start, start + Duration::seconds(length)).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Overlap is symmetric
    #[test]
    fn overlap_symmetric(a in range_strategy(), b in range_strategy()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    // Every range overlaps itself
    #[test]
    fn overlap_reflexive(a in range_strategy()) {
        prop_assert!(a.overlaps(&a));
    }

    // A range that starts where another ends never overlaps it
    #[test]
    fn back_to_back_never_overlaps(a in range_strategy(), length in 1i64..30 * SECONDS_PER_NIGHT) {
        let next = DateRange::new(a.end(), a.end() + Duration::seconds(length)).unwrap();
        prop_assert!(!a.overlaps(&next));
        prop_assert!(!next.overlaps(&a));
    }

    // Nights never exceed the elapsed days and are off by less than one
    #[test]
    fn nights_is_floor_of_days(a in range_strategy()) {
        let seconds = (a.end() - a.start()).num_seconds();
        let nights = i64::from(a.nights());
        prop_assert!(nights * SECONDS_PER_NIGHT <= seconds);
        prop_assert!(seconds < (nights + 1) * SECONDS_PER_NIGHT);
    }

    // Inverted or empty ranges are always rejected
    #[test]
    fn inverted_range_rejected(offset in 0i64..365 * SECONDS_PER_NIGHT, back in 0i64..30 * SECONDS_PER_NIGHT) {
        let start = epoch() + Duration::seconds(offset);
        prop_assert!(DateRange::new(start, start - Duration::seconds(back)).is_err());
    }
}
