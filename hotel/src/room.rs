//! Room and room catalog types.
//!
//! The hotel owns a fixed catalog of rooms numbered `1..=N`. Rooms are never
//! created or destroyed once a manager has been constructed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A room number (1 or greater).
///
/// Room 0 is never valid. Whether a room actually exists is decided by the
/// [`RoomCatalog`] the manager was built with.
///
/// # Examples
///
/// ```
/// use hotel::Room;
///
/// let room = Room::try_from(12).unwrap();
/// assert_eq!(room.number(), 12);
///
/// assert!(Room::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Room(u32);

impl Room {
    /// The lowest valid room number.
    pub const MIN: u32 = 1;

    pub(crate) const fn new(number: u32) -> Self {
        Self(number)
    }

    /// Returns the room number.
    #[must_use]
    pub const fn number(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Room {
    type Error = InvalidRoomError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value < Self::MIN {
            Err(InvalidRoomError { value })
        } else {
            Ok(Self(value))
        }
    }
}

impl From<Room> for u32 {
    fn from(room: Room) -> Self {
        room.0
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for invalid room numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRoomError {
    /// The invalid room number.
    pub value: u32,
}

impl fmt::Display for InvalidRoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid room {}: room numbers start at 1", self.value)
    }
}

impl std::error::Error for InvalidRoomError {}

/// The fixed set of rooms in the hotel, numbered `1..=count`.
///
/// # Examples
///
/// ```
/// use hotel::RoomCatalog;
///
/// let catalog = RoomCatalog::new(20).unwrap();
/// assert_eq!(catalog.len(), 20);
/// assert!(catalog.contains(20));
/// assert!(!catalog.contains(21));
/// assert!(!catalog.contains(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomCatalog {
    count: u32,
}

impl RoomCatalog {
    /// Number of rooms in a default hotel.
    pub const DEFAULT_ROOM_COUNT: u32 = 20;

    /// Creates a catalog of `count` rooms.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero.
    pub fn new(count: u32) -> crate::Result<Self> {
        if count == 0 {
            return Err(crate::Error::Validation {
                field: "room_count".into(),
                message: "a hotel needs at least one room".into(),
            });
        }
        Ok(Self { count })
    }

    /// Returns the number of rooms.
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.count
    }

    /// Always `false`: a catalog holds at least one room.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if `number` names a room in this catalog.
    #[must_use]
    pub const fn contains(&self, number: u32) -> bool {
        number >= Room::MIN && number <= self.count
    }

    /// Looks up a room by number.
    #[must_use]
    pub const fn get(&self, number: u32) -> Option<Room> {
        if self.contains(number) {
            Some(Room::new(number))
        } else {
            None
        }
    }

    /// Iterates over every room in ascending order.
    ///
    /// ```
    /// use hotel::RoomCatalog;
    ///
    /// let rooms: Vec<u32> = RoomCatalog::new(3).unwrap().iter().map(|r| r.number()).collect();
    /// assert_eq!(rooms, vec![1, 2, 3]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = Room> {
        (Room::MIN..=self.count).map(Room::new)
    }
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self {
            count: Self::DEFAULT_ROOM_COUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_try_from() {
        assert_eq!(Room::try_from(1).unwrap().number(), 1);
        assert_eq!(Room::try_from(20).unwrap().number(), 20);

        let err = Room::try_from(0).unwrap_err();
        assert_eq!(err.value, 0);
        assert!(format!("{err}").contains("invalid room 0"));
    }

    #[test]
    fn test_room_display_and_order() {
        assert_eq!(format!("{}", Room::new(7)), "7");
        assert!(Room::new(3) < Room::new(12));
    }

    #[test]
    fn test_room_serde() {
        let json = serde_json::to_string(&Room::new(5)).unwrap();
        assert_eq!(json, "5");
        let room: Room = serde_json::from_str("5").unwrap();
        assert_eq!(room, Room::new(5));
        assert!(serde_json::from_str::<Room>("0").is_err());
    }

    #[test]
    fn test_catalog_default() {
        let catalog = RoomCatalog::default();
        assert_eq!(catalog.len(), 20);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_catalog_zero_rooms_rejected() {
        assert!(RoomCatalog::new(0).is_err());
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = RoomCatalog::new(5).unwrap();
        assert_eq!(catalog.get(5), Some(Room::new(5)));
        assert_eq!(catalog.get(6), None);
        assert_eq!(catalog.get(0), None);
    }

    #[test]
    fn test_catalog_iter_is_ordered() {
        let rooms: Vec<Room> = RoomCatalog::default().iter().collect();
        assert_eq!(rooms.len(), 20);
        assert_eq!(rooms.first(), Some(&Room::new(1)));
        assert_eq!(rooms.last(), Some(&Room::new(20)));
        assert!(rooms.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
