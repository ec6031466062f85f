//! Configuration schema definitions.
//!
//! This module defines the configuration structure for a hotel: its size,
//! pricing, query behaviour and any room blocks to pre-load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete configuration structure.
///
/// Every field is optional so that configurations from several sources can
/// be layered on top of each other.
///
/// # Examples
///
/// ```
/// use hotel::config::{Config, EmptyResultPolicy};
///
/// let config = Config {
///     room_count: Some(30),
///     empty_results: Some(EmptyResultPolicy::Empty),
///     ..Default::default()
/// };
/// assert_eq!(config.room_count, Some(30));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Number of rooms in the hotel, numbered from 1.
    pub room_count: Option<u32>,

    /// Undiscounted price of one night.
    pub nightly_rate: Option<f64>,

    /// What date queries return when nothing matches.
    pub empty_results: Option<EmptyResultPolicy>,

    /// Room blocks created when the manager is built.
    pub blocks: Option<Vec<BlockDefinition>>,
}

impl Config {
    /// Default number of rooms.
    pub const DEFAULT_ROOM_COUNT: u32 = crate::RoomCatalog::DEFAULT_ROOM_COUNT;

    /// Default nightly rate.
    pub const DEFAULT_NIGHTLY_RATE: f64 = crate::reservation::DEFAULT_NIGHTLY_RATE;

    /// Built-in defaults, used as the lowest-precedence layer.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            room_count: Some(Self::DEFAULT_ROOM_COUNT),
            nightly_rate: Some(Self::DEFAULT_NIGHTLY_RATE),
            empty_results: Some(EmptyResultPolicy::default()),
            blocks: None,
        }
    }
}

/// Behaviour of date queries that match nothing.
///
/// # Examples
///
/// ```
/// use hotel::config::EmptyResultPolicy;
///
/// assert_eq!(EmptyResultPolicy::default(), EmptyResultPolicy::Error);
/// assert_eq!(EmptyResultPolicy::parse("EMPTY").unwrap(), EmptyResultPolicy::Empty);
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmptyResultPolicy {
    /// Report an empty result as [`crate::Error::NotFound`].
    #[default]
    Error,
    /// Return an empty list.
    Empty,
}

impl EmptyResultPolicy {
    /// Parses a policy name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "empty" => Ok(Self::Empty),
            _ => Err(format!("invalid empty result policy: {s}")),
        }
    }
}

impl std::fmt::Display for EmptyResultPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Empty => write!(f, "empty"),
        }
    }
}

/// A room block to create at start-up.
///
/// # Examples
///
/// ```
/// use hotel::config::BlockDefinition;
///
/// let yaml = r#"
/// id: puppies convention
/// start: 2019-03-12T21:08:45Z
/// end: 2019-03-17T21:08:45Z
/// rooms: [1, 4, 5, 6, 8]
/// discount: 0.25
/// "#;
/// let block: BlockDefinition = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(block.rooms.len(), 5);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BlockDefinition {
    /// Block name.
    pub id: String,

    /// First instant the rooms are held.
    pub start: DateTime<Utc>,

    /// Instant the hold ends (exclusive).
    pub end: DateTime<Utc>,

    /// Room numbers committed to the block.
    pub rooms: Vec<u32>,

    /// Fraction off the nightly rate; no discount when omitted.
    pub discount: Option<f64>,
}
