#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # hotel
//!
//! A library for managing hotel room reservations and discounted room blocks.
//!
//! The [`ReservationManager`] owns a fixed catalog of rooms, every
//! reservation and every block, and guarantees that no two of them claim the
//! same room on overlapping dates.
//!
//! ## Core Types
//!
//! - [`ReservationManager`]: the in-memory booking store
//! - [`Reservation`] and [`ReservationId`]: a single stay in one room
//! - [`Block`] and [`BlockId`]: rooms held at a discount for a group
//! - [`Room`] and [`RoomCatalog`]: room numbers `1..=N`
//! - [`DateRange`] and [`Discount`]: validated stay dates and rate reductions
//! - [`Error`] and [`Result`]: error handling types
//! - [`config::Config`]: layered configuration
//!
//! ## Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use hotel::ReservationManager;
//!
//! let mut manager = ReservationManager::new();
//! let at = |day| Utc.with_ymd_and_hms(2019, 3, day, 14, 0, 0).unwrap();
//!
//! manager.create_block(at(12), at(17), &[1, 4, 5, 6, 8], "puppies convention", 0.25).unwrap();
//! let id = manager.reserve_from_block("puppies convention").unwrap();
//!
//! let reservation = manager.find_by_id(id).unwrap();
//! assert_eq!(reservation.room().number(), 1);
//! assert_eq!(reservation.total_cost(), 750.0);
//! ```

pub mod block;
pub mod config;
pub mod dates;
pub mod discount;
pub mod error;
pub mod logging;
pub mod manager;
pub mod reservation;
pub mod room;

// Re-export key types at crate root for convenience
pub use block::{Block, BlockId};
pub use config::{Config, ConfigBuilder, EmptyResultPolicy};
pub use dates::DateRange;
pub use discount::Discount;
pub use error::{Error, Result, RoomUnavailableReason};
pub use logging::{init_logger, LogLevel, StderrLogger};
pub use manager::ReservationManager;
pub use reservation::{Reservation, ReservationBuilder, ReservationId};
pub use room::{Room, RoomCatalog};
