//! Half-open date ranges with whole-night arithmetic.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seconds in one night of a stay.
pub const SECONDS_PER_NIGHT: i64 = 86_400;

/// A half-open range of timestamps `[start, end)`.
///
/// Two ranges overlap only if each starts before the other ends, so a stay
/// that begins exactly when another ends does not conflict with it.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use hotel::DateRange;
///
/// let first = DateRange::new(
///     Utc.with_ymd_and_hms(2019, 3, 19, 14, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2019, 3, 21, 14, 0, 0).unwrap(),
/// ).unwrap();
/// let second = DateRange::new(
///     Utc.with_ymd_and_hms(2019, 3, 21, 14, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2019, 3, 26, 14, 0, 0).unwrap(),
/// ).unwrap();
///
/// assert_eq!(first.nights(), 2);
/// assert!(!first.overlaps(&second));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateRange {
    /// Creates a new range.
    ///
    /// # Errors
    ///
    /// Returns an error unless `start` is strictly before `end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, InvalidDateRangeError> {
        if start >= end {
            return Err(InvalidDateRangeError {
                start,
                end,
                reason: "start must be before end".into(),
            });
        }
        Ok(Self { start, end })
    }

    /// Creates a range that can be booked: it must span at least one night.
    ///
    /// # Errors
    ///
    /// Returns an error if `start >= end` or fewer than 24 hours separate them.
    pub fn stay(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, InvalidDateRangeError> {
        let range = Self::new(start, end)?;
        if range.nights() < 1 {
            return Err(InvalidDateRangeError {
                start,
                end,
                reason: "a stay must last at least one night".into(),
            });
        }
        Ok(range)
    }

    /// Returns the start of the range.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the end of the range (exclusive).
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whole nights between start and end, rounded down.
    #[must_use]
    pub fn nights(&self) -> u32 {
        let seconds = (self.end - self.start).num_seconds();
        u32::try_from(seconds / SECONDS_PER_NIGHT).unwrap_or(u32::MAX)
    }

    /// Returns `true` if the two ranges share any instant.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[derive(Deserialize)]
struct RawDateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = InvalidDateRangeError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

/// Error type for rejected date ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDateRangeError {
    /// Start of the rejected range.
    pub start: DateTime<Utc>,
    /// End of the rejected range.
    pub end: DateTime<Utc>,
    /// The reason the range was rejected.
    pub reason: String,
}

impl fmt::Display for InvalidDateRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid date range {} to {}: {}",
            self.start, self.end, self.reason
        )
    }
}

impl std::error::Error for InvalidDateRangeError {}

#[cfg(test)]
mod proptests;
