//! The reservation manager: the in-memory booking store.
//!
//! The manager owns the room catalog, every reservation and every block, and
//! is the only place where they are created or changed. Each mutating
//! operation validates its input, checks the requested rooms against the
//! existing reservations and blocks, and only then appends to the store, so
//! a failed call leaves the manager exactly as it was.

use chrono::{DateTime, Utc};

use crate::block::{Block, BlockId};
use crate::config::{Config, EmptyResultPolicy};
use crate::error::{Error, Result, RoomUnavailableReason};
use crate::reservation::DEFAULT_NIGHTLY_RATE;
use crate::{DateRange, Discount, Reservation, ReservationId, Room, RoomCatalog};

/// In-memory store of reservations and room blocks.
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
/// assert_eq!(reservation.id().value(), 1);
/// assert_eq!(reservation.total_cost(), 800.0);
/// assert_eq!(manager.find_by_id(reservation.id()).unwrap(), &reservation);
/// ```
#[derive(Debug, Clone)]
pub struct ReservationManager {
    catalog: RoomCatalog,
    nightly_rate: f64,
    empty_results: EmptyResultPolicy,
    reservations: Vec<Reservation>,
    blocks: Vec<Block>,
    next_id: ReservationId,
}

impl Default for ReservationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationManager {
    /// Creates an empty manager for a 20-room hotel at the default rate.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(RoomCatalog::default())
    }

    /// Creates an empty manager for the given rooms at the default rate.
    #[must_use]
    pub fn with_catalog(catalog: RoomCatalog) -> Self {
        Self {
            catalog,
            nightly_rate: DEFAULT_NIGHTLY_RATE,
            empty_results: EmptyResultPolicy::default(),
            reservations: Vec::new(),
            blocks: Vec::new(),
            next_id: ReservationId::FIRST,
        }
    }

    /// Creates a manager from configuration, including its pre-defined blocks.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or one of its blocks
    /// cannot be created (for example because two blocks share a room).
    pub fn from_config(config: &Config) -> Result<Self> {
        crate::config::ConfigValidator::validate(config)?;

        let catalog =
            RoomCatalog::new(config.room_count.unwrap_or(Config::DEFAULT_ROOM_COUNT))?;
        let mut manager = Self::with_catalog(catalog);
        manager.nightly_rate = config.nightly_rate.unwrap_or(DEFAULT_NIGHTLY_RATE);
        manager.empty_results = config.empty_results.unwrap_or_default();

        for block in config.blocks.iter().flatten() {
            manager.create_block(
                block.start,
                block.end,
                &block.rooms,
                &block.id,
                block.discount.unwrap_or(0.0),
            )?;
        }

        log::debug!(
            "manager ready: {} rooms at {} per night, {} blocks",
            manager.catalog.len(),
            manager.nightly_rate,
            manager.blocks.len()
        );
        Ok(manager)
    }

    /// Returns the room catalog.
    #[must_use]
    pub const fn catalog(&self) -> &RoomCatalog {
        &self.catalog
    }

    /// Returns the undiscounted nightly rate.
    #[must_use]
    pub const fn nightly_rate(&self) -> f64 {
        self.nightly_rate
    }

    /// Returns how date queries report an empty result.
    #[must_use]
    pub const fn empty_result_policy(&self) -> EmptyResultPolicy {
        self.empty_results
    }

    /// Books `room_id` from `start` until `end`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDateRange`] unless `start < end` with at least one
    ///   night between them
    /// - [`Error::UnknownRoom`] if the room is not in the catalog
    /// - [`Error::RoomUnavailable`] if the room is reserved, or held by a
    ///   block, for any part of the range
    pub fn create_reservation(
        &mut self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        room_id: u32,
    ) -> Result<Reservation> {
        let dates = DateRange::stay(start, end)?;
        let room = self.room(room_id)?;
        self.ensure_available(room, &dates)?;

        let reservation = Reservation::builder(self.take_id(), room, dates)
            .nightly_rate(self.nightly_rate)
            .build();
        log::info!(
            "reserved room {} for {} (reservation {})",
            room,
            dates,
            reservation.id()
        );
        self.reservations.push(reservation.clone());
        Ok(reservation)
    }

    /// Holds `room_ids` from `start` until `end` at a discount.
    ///
    /// Success means every room was free and the block is stored; a copy of
    /// it is returned.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidBlockSize`] if more than [`Block::MAX_ROOMS`] rooms
    ///   (or none) are requested, whatever the dates
    /// - [`Error::InvalidDateRange`] unless `start < end` with at least one
    ///   night between them
    /// - [`Error::Validation`] for a blank id, a discount outside `[0, 1)`,
    ///   or a room listed twice
    /// - [`Error::BlockExists`] if the id is already taken
    /// - [`Error::UnknownRoom`] if a room is not in the catalog
    /// - [`Error::RoomUnavailable`] if a room is reserved, or held by another
    ///   block, for any part of the range
    pub fn create_block(
        &mut self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        room_ids: &[u32],
        block_id: &str,
        discount: f64,
    ) -> Result<Block> {
        Block::check_size(room_ids.len())?;
        let dates = DateRange::stay(start, end)?;
        let id = BlockId::new(block_id)?;
        let discount = Discount::try_from(discount)?;

        if self.blocks.iter().any(|block| block.id() == &id) {
            return Err(Error::BlockExists { id: id.to_string() });
        }

        let rooms = room_ids
            .iter()
            .map(|&number| self.room(number))
            .collect::<Result<Vec<_>>>()?;

        for &room in &rooms {
            self.ensure_available(room, &dates)?;
        }

        let block = Block::new(id, dates, rooms, discount)?;
        log::info!(
            "created block '{}' of {} rooms for {} at {} off",
            block.id(),
            block.rooms().len(),
            dates,
            discount
        );
        self.blocks.push(block.clone());
        Ok(block)
    }

    /// Books the next available room of a block at the block's discount.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownBlock`] if no block has that id
    /// - [`Error::BlockExhausted`] if every room has been drawn
    pub fn reserve_from_block(&mut self, block_id: &str) -> Result<ReservationId> {
        let id = self.next_id;
        let nightly_rate = self.nightly_rate;
        let block = self.block_mut(block_id)?;
        let room = block.draw_room()?;

        let reservation = Reservation::builder(id, room, *block.dates())
            .discount(block.discount())
            .nightly_rate(nightly_rate)
            .block(block.id().clone())
            .build();
        log::info!(
            "drew room {} from block '{}' (reservation {}, {} rooms left)",
            room,
            block.id(),
            id,
            block.available_rooms().len()
        );

        self.next_id = id.next();
        self.reservations.push(reservation);
        Ok(id)
    }

    /// Returns every room in the hotel, in ascending order.
    #[must_use]
    pub fn rooms(&self) -> Vec<Room> {
        self.catalog.iter().collect()
    }

    /// Returns every reservation, in creation order.
    #[must_use]
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Returns every block, in creation order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Looks up a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no reservation has that id.
    pub fn find_by_id(&self, id: ReservationId) -> Result<&Reservation> {
        self.reservations
            .iter()
            .find(|reservation| reservation.id() == id)
            .ok_or_else(|| Error::NotFound {
                resource: format!("reservation {id}"),
            })
    }

    /// Returns every reservation overlapping `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateRange`] unless `start < end`, and
    /// [`Error::NotFound`] when nothing matches under
    /// [`EmptyResultPolicy::Error`].
    pub fn find_by_date(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<&Reservation>> {
        let dates = DateRange::new(start, end)?;
        let found: Vec<&Reservation> = self
            .reservations
            .iter()
            .filter(|reservation| reservation.dates().overlaps(&dates))
            .collect();

        self.non_empty(found, || format!("reservations between {dates}"))
    }

    /// Returns the rooms free for the whole of `[start, end)`.
    ///
    /// A room is free if no reservation for it overlaps the range and no
    /// block holding it overlaps the range, whether or not the room has
    /// been drawn yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateRange`] unless `start < end`, and
    /// [`Error::NotFound`] when every room is taken under
    /// [`EmptyResultPolicy::Error`].
    pub fn find_available_rooms(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Room>> {
        let dates = DateRange::new(start, end)?;
        let available: Vec<Room> = self
            .catalog
            .iter()
            .filter(|&room| self.conflict(room, &dates).is_none())
            .collect();

        self.non_empty(available, || format!("available rooms between {dates}"))
    }

    /// Looks up a block by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownBlock`] if no block has that id.
    pub fn find_block(&self, block_id: &str) -> Result<&Block> {
        let wanted = block_id.trim();
        self.blocks
            .iter()
            .find(|block| block.id().as_str() == wanted)
            .ok_or_else(|| Error::UnknownBlock {
                id: wanted.to_string(),
            })
    }

    /// Returns the rooms of a block that can still be drawn.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownBlock`] if no block has that id.
    pub fn block_available_rooms(&self, block_id: &str) -> Result<&[Room]> {
        self.find_block(block_id).map(Block::available_rooms)
    }

    fn block_mut(&mut self, block_id: &str) -> Result<&mut Block> {
        let wanted = block_id.trim();
        self.blocks
            .iter_mut()
            .find(|block| block.id().as_str() == wanted)
            .ok_or_else(|| Error::UnknownBlock {
                id: wanted.to_string(),
            })
    }

    fn room(&self, number: u32) -> Result<Room> {
        self.catalog.get(number).ok_or_else(|| {
            log::debug!("rejected unknown room {number}");
            Error::UnknownRoom { room: number }
        })
    }

    /// First reservation or block claiming `room` during `dates`.
    fn conflict(&self, room: Room, dates: &DateRange) -> Option<RoomUnavailableReason> {
        if self
            .reservations
            .iter()
            .any(|reservation| reservation.conflicts_with(room, dates))
        {
            return Some(RoomUnavailableReason::Reserved);
        }

        self.blocks
            .iter()
            .find(|block| block.claims(room, dates))
            .map(|block| RoomUnavailableReason::Blocked {
                block: block.id().to_string(),
            })
    }

    fn ensure_available(&self, room: Room, dates: &DateRange) -> Result<()> {
        match self.conflict(room, dates) {
            None => Ok(()),
            Some(reason) => {
                log::debug!("room {room} unavailable for {dates}: {reason}");
                Err(Error::RoomUnavailable { room, reason })
            }
        }
    }

    fn non_empty<T>(&self, items: Vec<T>, describe: impl FnOnce() -> String) -> Result<Vec<T>> {
        if items.is_empty() && self.empty_results == EmptyResultPolicy::Error {
            return Err(Error::NotFound {
                resource: describe(),
            });
        }
        Ok(items)
    }

    fn take_id(&mut self) -> ReservationId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }
}

#[cfg(test)]
mod proptests;
