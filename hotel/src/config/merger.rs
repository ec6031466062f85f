//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use hotel::config::{Config, ConfigMerger};
///
/// let low = Config { room_count: Some(10), ..Default::default() };
/// let high = Config { room_count: Some(30), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.room_count, Some(30));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources, given lowest precedence first, on top of the defaults.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::defaults();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Scalar fields are overwritten when set in `source`. Block lists are
    /// replaced wholesale, never concatenated, so a higher layer can drop
    /// blocks declared below it by setting an empty list.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.room_count.is_some() {
            target.room_count = source.room_count;
        }

        if source.nightly_rate.is_some() {
            target.nightly_rate = source.nightly_rate;
        }

        if source.empty_results.is_some() {
            target.empty_results = source.empty_results;
        }

        if source.blocks.is_some() {
            target.blocks.clone_from(&source.blocks);
        }
    }
}
