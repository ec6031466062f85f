//! Room blocks: rooms held at a discount for a group.
//!
//! A block commits up to [`Block::MAX_ROOMS`] rooms for a date range. Rooms
//! are later drawn one at a time, each draw turning into a discounted
//! reservation.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::{DateRange, Discount, Room};

/// A caller-chosen block name.
///
/// # Examples
///
/// ```
/// use hotel::BlockId;
///
/// let id = BlockId::new("  puppies convention ").unwrap();
/// assert_eq!(id.as_str(), "puppies convention");
///
/// assert!(BlockId::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BlockId(String);

impl BlockId {
    /// Creates a block id, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty after trimming.
    pub fn new(id: impl AsRef<str>) -> std::result::Result<Self, ValidationError> {
        let trimmed = id.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError {
                field: "block_id".into(),
                message: "block id must be non-empty after trimming whitespace".into(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BlockId {
    type Error = ValidationError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BlockId> for String {
    fn from(id: BlockId) -> Self {
        id.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A group of rooms held at a discounted rate.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use hotel::{Block, BlockId, DateRange, Discount, Room};
///
/// let dates = DateRange::new(
///     Utc.with_ymd_and_hms(2019, 3, 12, 14, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2019, 3, 17, 14, 0, 0).unwrap(),
/// ).unwrap();
/// let rooms = vec![Room::try_from(1).unwrap(), Room::try_from(4).unwrap()];
/// let mut block = Block::new(
///     BlockId::new("puppies convention").unwrap(),
///     dates,
///     rooms,
///     Discount::try_from(0.25).unwrap(),
/// ).unwrap();
///
/// assert_eq!(block.draw_room().unwrap().number(), 1);
/// assert_eq!(block.draw_room().unwrap().number(), 4);
/// assert!(block.draw_room().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBlock")]
pub struct Block {
    id: BlockId,
    dates: DateRange,
    rooms: Vec<Room>,
    discount: Discount,
    available_rooms: Vec<Room>,
}

impl Block {
    /// Most rooms a single block may hold.
    pub const MAX_ROOMS: usize = 5;

    /// Creates a block with every room available.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBlockSize`] if `rooms` is empty or holds more
    /// than [`Block::MAX_ROOMS`] rooms, and [`Error::Validation`] if a room
    /// is listed twice.
    pub fn new(id: BlockId, dates: DateRange, rooms: Vec<Room>, discount: Discount) -> Result<Self> {
        Self::check_size(rooms.len())?;

        let mut seen = HashSet::with_capacity(rooms.len());
        if let Some(duplicate) = rooms.iter().find(|room| !seen.insert(**room)) {
            return Err(Error::Validation {
                field: "rooms".into(),
                message: format!("room {duplicate} is listed more than once"),
            });
        }

        Ok(Self {
            id,
            dates,
            available_rooms: rooms.clone(),
            rooms,
            discount,
        })
    }

    /// Checks a requested room count against the block size limits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBlockSize`] if `size` is 0 or above the cap.
    pub fn check_size(size: usize) -> Result<()> {
        if size == 0 || size > Self::MAX_ROOMS {
            return Err(Error::InvalidBlockSize {
                size,
                max: Self::MAX_ROOMS,
            });
        }
        Ok(())
    }

    /// Returns the block id.
    #[must_use]
    pub const fn id(&self) -> &BlockId {
        &self.id
    }

    /// Returns the dates the rooms are held for.
    #[must_use]
    pub const fn dates(&self) -> &DateRange {
        &self.dates
    }

    /// Returns every room committed to the block.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Returns the discount granted to rooms drawn from the block.
    #[must_use]
    pub const fn discount(&self) -> Discount {
        self.discount
    }

    /// Returns the rooms not yet drawn, in draw order.
    #[must_use]
    pub fn available_rooms(&self) -> &[Room] {
        &self.available_rooms
    }

    /// Returns `true` while at least one room can still be drawn.
    #[must_use]
    pub fn has_available_rooms(&self) -> bool {
        !self.available_rooms.is_empty()
    }

    /// Returns `true` if `room` is committed to this block.
    #[must_use]
    pub fn holds(&self, room: Room) -> bool {
        self.rooms.contains(&room)
    }

    /// Returns `true` if this block holds `room` at any point of `dates`.
    #[must_use]
    pub fn claims(&self, room: Room, dates: &DateRange) -> bool {
        self.holds(room) && self.dates.overlaps(dates)
    }

    /// Removes and returns the first room still available.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BlockExhausted`] once every room has been drawn.
    pub fn draw_room(&mut self) -> Result<Room> {
        if self.available_rooms.is_empty() {
            return Err(Error::BlockExhausted {
                id: self.id.to_string(),
            });
        }
        Ok(self.available_rooms.remove(0))
    }
}

#[derive(Deserialize)]
struct RawBlock {
    id: BlockId,
    dates: DateRange,
    rooms: Vec<Room>,
    discount: Discount,
    available_rooms: Vec<Room>,
}

impl TryFrom<RawBlock> for Block {
    type Error = Error;

    fn try_from(raw: RawBlock) -> Result<Self> {
        let mut block = Self::new(raw.id, raw.dates, raw.rooms, raw.discount)?;

        let mut seen = HashSet::with_capacity(raw.available_rooms.len());
        if let Some(stray) = raw
            .available_rooms
            .iter()
            .find(|room| !block.holds(**room) || !seen.insert(**room))
        {
            return Err(Error::Validation {
                field: "available_rooms".into(),
                message: format!("room {stray} is not an undrawn room of the block"),
            });
        }

        block.available_rooms = raw.available_rooms;
        Ok(block)
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
