//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `HOTEL_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, EmptyResultPolicy};
use crate::error::{Error, Result};
use std::env;

/// Overrides the number of rooms.
pub const ROOM_COUNT_VAR: &str = "HOTEL_ROOM_COUNT";

/// Overrides the nightly rate.
pub const NIGHTLY_RATE_VAR: &str = "HOTEL_NIGHTLY_RATE";

/// Overrides the empty result policy (`error` or `empty`).
pub const EMPTY_RESULTS_VAR: &str = "HOTEL_EMPTY_RESULTS";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use hotel::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set to an unparseable value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(count) = env::var(ROOM_COUNT_VAR) {
            config.room_count = Some(count.trim().parse().map_err(|_| Error::Validation {
                field: ROOM_COUNT_VAR.into(),
                message: "Must be a positive integer".into(),
            })?);
        }

        if let Ok(rate) = env::var(NIGHTLY_RATE_VAR) {
            config.nightly_rate = Some(rate.trim().parse().map_err(|_| Error::Validation {
                field: NIGHTLY_RATE_VAR.into(),
                message: "Must be a number".into(),
            })?);
        }

        if let Ok(policy) = env::var(EMPTY_RESULTS_VAR) {
            config.empty_results =
                Some(
                    EmptyResultPolicy::parse(&policy).map_err(|message| Error::Validation {
                        field: EMPTY_RESULTS_VAR.into(),
                        message,
                    })?,
                );
        }

        Ok(())
    }
}
