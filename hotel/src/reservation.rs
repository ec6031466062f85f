//! Reservation types for tracking room stays.
//!
//! This module provides the reservation id type, the immutable reservation
//! record and a builder for constructing it with an optional discount and
//! nightly rate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::block::BlockId;
use crate::dates::InvalidDateRangeError;
use crate::{DateRange, Discount, Room};

/// Nightly rate charged when no other rate is configured.
pub const DEFAULT_NIGHTLY_RATE: f64 = 200.0;

/// A sequential reservation identifier assigned by the manager.
///
/// # Examples
///
/// ```
/// use hotel::ReservationId;
///
/// let id = ReservationId::new(1);
/// assert_eq!(id.value(), 1);
/// assert_eq!(id.next(), ReservationId::new(2));
/// assert_eq!(format!("{id}"), "1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(u64);

impl ReservationId {
    /// The first id handed out by a fresh manager.
    pub const FIRST: Self = Self(1);

    /// Wraps a raw id.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the id that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ReservationId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A single stay in one room.
///
/// Nights and cost are computed once at construction and never change.
///
/// Reservations are only created by a [`crate::ReservationManager`], which
/// guarantees every stay lasts at least one night.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use hotel::ReservationManager;
///
/// let mut manager = ReservationManager::new();
/// let reservation = manager
///     .create_reservation(
///         Utc.with_ymd_and_hms(2019, 3, 11, 14, 0, 0).unwrap(),
///         Utc.with_ymd_and_hms(2019, 3, 15, 14, 0, 0).unwrap(),
///         3,
///     )
///     .unwrap();
///
/// assert_eq!(reservation.total_nights(), 4);
/// assert_eq!(reservation.total_cost(), 800.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawReservation")]
pub struct Reservation {
    id: ReservationId,
    room: Room,
    dates: DateRange,
    discount: Discount,
    nightly_rate: f64,
    total_nights: u32,
    total_cost: f64,
    block: Option<BlockId>,
}

impl Reservation {
    /// Creates a builder for an undiscounted reservation at the default
    /// nightly rate.
    ///
    /// `dates` must come from [`DateRange::stay`].
    #[must_use]
    pub(crate) fn builder(id: ReservationId, room: Room, dates: DateRange) -> ReservationBuilder {
        ReservationBuilder {
            id,
            room,
            dates,
            discount: Discount::NONE,
            nightly_rate: DEFAULT_NIGHTLY_RATE,
            block: None,
        }
    }

    /// Returns the reservation id.
    #[must_use]
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the reserved room.
    #[must_use]
    pub const fn room(&self) -> Room {
        self.room
    }

    /// Returns the stay dates.
    #[must_use]
    pub const fn dates(&self) -> &DateRange {
        &self.dates
    }

    /// Returns the check-in timestamp.
    #[must_use]
    pub const fn start_date(&self) -> chrono::DateTime<chrono::Utc> {
        self.dates.start()
    }

    /// Returns the check-out timestamp.
    #[must_use]
    pub const fn end_date(&self) -> chrono::DateTime<chrono::Utc> {
        self.dates.end()
    }

    /// Returns the discount applied to the nightly rate.
    #[must_use]
    pub const fn discount(&self) -> Discount {
        self.discount
    }

    /// Returns the undiscounted nightly rate.
    #[must_use]
    pub const fn nightly_rate(&self) -> f64 {
        self.nightly_rate
    }

    /// Returns the number of nights booked.
    #[must_use]
    pub const fn total_nights(&self) -> u32 {
        self.total_nights
    }

    /// Returns the price of the whole stay.
    #[must_use]
    pub const fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Returns the block this reservation was drawn from, if any.
    #[must_use]
    pub fn block(&self) -> Option<&BlockId> {
        self.block.as_ref()
    }

    /// Returns `true` if this reservation holds `room` at any point of `dates`.
    #[must_use]
    pub fn conflicts_with(&self, room: Room, dates: &DateRange) -> bool {
        self.room == room && self.dates.overlaps(dates)
    }
}

#[derive(Deserialize)]
struct RawReservation {
    id: ReservationId,
    room: Room,
    dates: DateRange,
    discount: Discount,
    nightly_rate: f64,
    block: Option<BlockId>,
}

// Nights and cost are recomputed rather than trusted.
impl TryFrom<RawReservation> for Reservation {
    type Error = InvalidDateRangeError;

    fn try_from(raw: RawReservation) -> Result<Self, Self::Error> {
        let dates = DateRange::stay(raw.dates.start(), raw.dates.end())?;
        let mut builder = Self::builder(raw.id, raw.room, dates)
            .discount(raw.discount)
            .nightly_rate(raw.nightly_rate);
        if let Some(block) = raw.block {
            builder = builder.block(block);
        }
        Ok(builder.build())
    }
}

/// Builder for creating `Reservation` instances.
#[derive(Debug)]
pub struct ReservationBuilder {
    id: ReservationId,
    room: Room,
    dates: DateRange,
    discount: Discount,
    nightly_rate: f64,
    block: Option<BlockId>,
}

impl ReservationBuilder {
    /// Sets the discount.
    #[must_use]
    pub const fn discount(mut self, discount: Discount) -> Self {
        self.discount = discount;
        self
    }

    /// Sets the undiscounted nightly rate.
    #[must_use]
    pub const fn nightly_rate(mut self, nightly_rate: f64) -> Self {
        self.nightly_rate = nightly_rate;
        self
    }

    /// Records the block the room was drawn from.
    #[must_use]
    pub fn block(mut self, block: BlockId) -> Self {
        self.block = Some(block);
        self
    }

    /// Builds the reservation, freezing nights and cost.
    #[must_use]
    pub fn build(self) -> Reservation {
        let total_nights = self.dates.nights();
        let total_cost = self
            .discount
            .apply(f64::from(total_nights) * self.nightly_rate);

        Reservation {
            id: self.id,
            room: self.room,
            dates: self.dates,
            discount: self.discount,
            nightly_rate: self.nightly_rate,
            total_nights,
            total_cost,
            block: self.block,
        }
    }
}

#[cfg(test)]
mod proptests;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2019, month, day, 21, 8, 45).unwrap()
    }

    fn dates(from: (u32, u32), to: (u32, u32)) -> DateRange {
        DateRange::new(at(from.0, from.1), at(to.0, to.1)).unwrap()
    }

    #[test]
    fn test_reservation_id_sequence() {
        assert_eq!(ReservationId::FIRST.value(), 1);
        assert_eq!(ReservationId::FIRST.next().value(), 2);
        assert_eq!(ReservationId::from(7), ReservationId::new(7));
    }

    #[test]
    fn test_four_night_stay() {
        let reservation =
            Reservation::builder(ReservationId::new(1), Room::new(3), dates((3, 11), (3, 15))).build();
        assert_eq!(reservation.total_nights(), 4);
        assert_eq!(reservation.total_cost(), 800.0);
        assert_eq!(reservation.discount(), Discount::NONE);
        assert_eq!(reservation.block(), None);
    }

    #[test]
    fn test_one_night_stay() {
        let reservation =
            Reservation::builder(ReservationId::new(3), Room::new(12), dates((2, 27), (2, 28))).build();
        assert_eq!(reservation.total_nights(), 1);
        assert_eq!(reservation.total_cost(), 200.0);
    }

    #[test]
    fn test_builder_with_discount_and_block() {
        let block = BlockId::new("puppies convention").unwrap();
        let reservation =
            Reservation::builder(ReservationId::new(5), Room::new(1), dates((3, 12), (3, 17)))
                .discount(Discount::try_from(0.25).unwrap())
                .block(block.clone())
                .build();

        assert_eq!(reservation.total_nights(), 5);
        assert_eq!(reservation.total_cost(), 750.0);
        assert_eq!(reservation.block(), Some(&block));
    }

    #[test]
    fn test_builder_with_rate() {
        let reservation =
            Reservation::builder(ReservationId::new(1), Room::new(2), dates((3, 1), (3, 3)))
                .nightly_rate(120.0)
                .build();
        assert_eq!(reservation.nightly_rate(), 120.0);
        assert_eq!(reservation.total_cost(), 240.0);
    }

    #[test]
    fn test_accessors() {
        let reservation =
            Reservation::builder(ReservationId::new(4), Room::new(6), dates((3, 19), (3, 21))).build();
        assert_eq!(reservation.id(), ReservationId::new(4));
        assert_eq!(reservation.room(), Room::new(6));
        assert_eq!(reservation.start_date(), at(3, 19));
        assert_eq!(reservation.end_date(), at(3, 21));
    }

    #[test]
    fn test_conflicts_with() {
        let reservation =
            Reservation::builder(ReservationId::new(4), Room::new(6), dates((3, 19), (3, 21))).build();

        assert!(reservation.conflicts_with(Room::new(6), &dates((3, 19), (3, 26))));
        assert!(!reservation.conflicts_with(Room::new(6), &dates((3, 21), (3, 26))));
        assert!(!reservation.conflicts_with(Room::new(7), &dates((3, 19), (3, 26))));
    }

    #[test]
    fn test_reservation_serde() {
        let reservation =
            Reservation::builder(ReservationId::new(1), Room::new(3), dates((3, 11), (3, 15))).build();
        let json = serde_json::to_string(&reservation).unwrap();
        let deserialized: Reservation = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, reservation);
    }

    #[test]
    fn test_deserialize_recomputes_totals() {
        let json = r#"{"id":2,"room":5,"dates":{"start":"2019-03-11T21:08:45Z","end":"2019-03-13T21:08:45Z"},"discount":0.5,"nightly_rate":200.0,"total_nights":9,"total_cost":1.0,"block":null}"#;
        let reservation: Reservation = serde_json::from_str(json).unwrap();
        assert_eq!(reservation.total_nights(), 2);
        assert_eq!(reservation.total_cost(), 200.0);
    }

    #[test]
    fn test_deserialize_rejects_stay_without_a_night() {
        let json = r#"{"id":2,"room":5,"dates":{"start":"2019-03-11T08:00:00Z","end":"2019-03-11T20:00:00Z"},"discount":0.0,"nightly_rate":200.0,"total_nights":0,"total_cost":0.0,"block":null}"#;
        assert!(serde_json::from_str::<Reservation>(json).is_err());
    }
}
