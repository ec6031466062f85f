//! Error types for the hotel library.
//!
//! This module provides the error hierarchy for every reservation, block and
//! configuration operation, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::room::Room;

/// Result type alias for operations that may fail with a hotel error.
///
/// # Examples
///
/// ```
/// use hotel::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(12)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the hotel library.
///
/// Every variant is a caller-input or state-conflict error. None of them are
/// transient, and an operation that returns one leaves the manager unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// The start of a date range is not strictly before its end, or the
    /// range is too short to book.
    #[error("invalid date range {start} to {end}: {reason}")]
    InvalidDateRange {
        /// Start of the rejected range.
        start: DateTime<Utc>,
        /// End of the rejected range.
        end: DateTime<Utc>,
        /// The reason the range is invalid.
        reason: String,
    },

    /// The room number is not part of the hotel's catalog.
    #[error("unknown room {room}")]
    UnknownRoom {
        /// The requested room number.
        room: u32,
    },

    /// The room is already claimed for part of the requested dates.
    #[error("room {room} unavailable: {reason}")]
    RoomUnavailable {
        /// The conflicting room.
        room: Room,
        /// What claims the room.
        reason: RoomUnavailableReason,
    },

    /// A block was requested with too many (or zero) rooms.
    #[error("invalid block size {size}: a block holds between 1 and {max} rooms")]
    InvalidBlockSize {
        /// Number of rooms requested.
        size: usize,
        /// Maximum number of rooms a block may hold.
        max: usize,
    },

    /// No block has the requested id.
    #[error("unknown block '{id}'")]
    UnknownBlock {
        /// The requested block id.
        id: String,
    },

    /// Every room in the block has already been drawn.
    #[error("block '{id}' has no rooms left")]
    BlockExhausted {
        /// The exhausted block id.
        id: String,
    },

    /// A block with the same id already exists.
    #[error("block '{id}' already exists")]
    BlockExists {
        /// The duplicated block id.
        id: String,
    },

    /// A lookup produced no result.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reason why a room is unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomUnavailableReason {
    /// An existing reservation overlaps the requested dates.
    Reserved,
    /// The room is held by a block whose dates overlap.
    Blocked {
        /// Id of the block holding the room.
        block: String,
    },
}

impl std::fmt::Display for RoomUnavailableReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reserved => write!(f, "reserved"),
            Self::Blocked { block } => write!(f, "held by block '{block}'"),
        }
    }
}

impl From<crate::dates::InvalidDateRangeError> for Error {
    fn from(err: crate::dates::InvalidDateRangeError) -> Self {
        Self::InvalidDateRange {
            start: err.start,
            end: err.end,
            reason: err.reason,
        }
    }
}

impl From<crate::discount::InvalidDiscountError> for Error {
    fn from(err: crate::discount::InvalidDiscountError) -> Self {
        Self::Validation {
            field: "discount".into(),
            message: err.to_string(),
        }
    }
}

impl From<crate::block::ValidationError> for Error {
    fn from(err: crate::block::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if the error reports a missing reservation or empty query.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotel::Error;
    ///
    /// let err = Error::NotFound { resource: "reservation 8".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the error is a booking conflict.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::RoomUnavailable { .. })
    }
}
