//! Common test utilities for integration tests.
//!
//! This module provides timestamp helpers and a seeded manager mirroring a
//! small hotel's booking sheet.

use chrono::{DateTime, Utc};
use hotel::ReservationManager;

/// Parses a `2019-03-11 14:08:45 -0700` style timestamp into UTC.
#[allow(dead_code)]
pub fn time(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S %z")
        .unwrap()
        .with_timezone(&Utc)
}

/// Timestamp at 14:08:45 -0700 on the given 2019 date (`"03-11"`).
#[allow(dead_code)]
pub fn day(month_day: &str) -> DateTime<Utc> {
    time(&format!("2019-{month_day} 14:08:45 -0700"))
}

/// A manager holding four reservations:
///
/// 1. room 3, 03-11 to 03-15
/// 2. room 20, 03-20 to 03-22
/// 3. room 12, 02-27 to 02-28
/// 4. room 6, 03-19 to 03-21
#[allow(dead_code)]
pub fn seeded_manager() -> ReservationManager {
    let mut manager = ReservationManager::new();
    manager
        .create_reservation(day("03-11"), day("03-15"), 3)
        .unwrap();
    manager
        .create_reservation(day("03-20"), day("03-22"), 20)
        .unwrap();
    manager
        .create_reservation(day("02-27"), day("02-28"), 12)
        .unwrap();
    manager
        .create_reservation(day("03-19"), day("03-21"), 6)
        .unwrap();
    manager
}

/// Adds the "puppies convention" block: rooms 1, 4, 5, 6 and 8 from 03-12
/// to 03-17 at 25% off.
#[allow(dead_code)]
pub fn add_convention_block(manager: &mut ReservationManager) {
    manager
        .create_block(
            day("03-12"),
            day("03-17"),
            &[1, 4, 5, 6, 8],
            "puppies convention",
            0.25,
        )
        .unwrap();
}
