//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use hotelier::config::{Config, ConfigMerger};
///
/// let low = Config { max_rooms: Some(10), ..Default::default() };
/// let high = Config { max_rooms: Some(20), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.max_rooms, Some(20));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target. Every field the source sets
    /// overwrites the target; unset fields leave the target alone.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.default_base_price.is_some() {
            target.default_base_price = source.default_base_price;
        }

        if source.max_rooms.is_some() {
            target.max_rooms = source.max_rooms;
        }

        if source.minimum_room_price.is_some() {
            target.minimum_room_price = source.minimum_room_price;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
