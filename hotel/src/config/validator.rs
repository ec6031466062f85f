//! Configuration validation.

use crate::block::{Block, BlockId};
use crate::config::schema::{BlockDefinition, Config};
use crate::error::{Error, Result};
use crate::{DateRange, Discount};
use std::collections::HashSet;

/// Largest hotel a configuration may describe.
pub const MAX_ROOM_COUNT: u32 = 10_000;

/// Validates configuration values before a manager is built from them.
///
/// # Examples
///
/// ```
/// use hotel::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::defaults()).unwrap();
///
/// let broken = Config { room_count: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&broken).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// Checks field ranges and the shape of each block definition. Whether
    /// blocks conflict with each other is only known once they are created.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] (or the block-specific error) for the
    /// first invalid value found.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(count) = config.room_count {
            Self::validate_room_count(count)?;
        }

        if let Some(rate) = config.nightly_rate {
            Self::validate_nightly_rate(rate)?;
        }

        if let Some(ref blocks) = config.blocks {
            let mut ids = HashSet::new();
            for block in blocks {
                Self::validate_block(block, config.room_count)?;
                if !ids.insert(block.id.trim()) {
                    return Err(Error::BlockExists {
                        id: block.id.trim().to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    fn validate_room_count(count: u32) -> Result<()> {
        if count == 0 {
            return Err(Error::Validation {
                field: "room_count".into(),
                message: "Must be at least 1".into(),
            });
        }
        if count > MAX_ROOM_COUNT {
            return Err(Error::Validation {
                field: "room_count".into(),
                message: format!("Cannot exceed {MAX_ROOM_COUNT}"),
            });
        }
        Ok(())
    }

    fn validate_nightly_rate(rate: f64) -> Result<()> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(Error::Validation {
                field: "nightly_rate".into(),
                message: "Must be a positive number".into(),
            });
        }
        Ok(())
    }

    fn validate_block(block: &BlockDefinition, room_count: Option<u32>) -> Result<()> {
        Block::check_size(block.rooms.len())?;
        BlockId::new(&block.id)?;
        DateRange::stay(block.start, block.end)?;

        if let Some(discount) = block.discount {
            Discount::try_from(discount)?;
        }

        let room_count = room_count.unwrap_or(Config::DEFAULT_ROOM_COUNT);
        if let Some(&room) = block
            .rooms
            .iter()
            .find(|&&room| room == 0 || room > room_count)
        {
            return Err(Error::UnknownRoom { room });
        }

        Ok(())
    }
}
