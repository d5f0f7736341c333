//! # Configuration
//!
//! Capacity limits, preparation time and channel sizing for one admission service.
//! Everything has a default matching the bar's reference setup; [`BarConfig::from_env`]
//! lets a deployment override any of it.
//!
//! | Variable             | Meaning                               | Default |
//! |----------------------|---------------------------------------|---------|
//! | `BAR_BEER_LIMIT`     | Beers in preparation at the same time | 2       |
//! | `BAR_DRINK_LIMIT`    | Drinks in preparation at the same time| 1       |
//! | `BAR_PREPARATION_MS` | Preparation time in milliseconds      | 5000    |
//! | `BAR_BUFFER_SIZE`    | Request channel capacity              | 32      |

use crate::model::Category;
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PREPARATION_TIME: Duration = Duration::from_secs(5);
pub const DEFAULT_BUFFER_SIZE: usize = 32;
pub const DEFAULT_BEER_LIMIT: usize = 2;
pub const DEFAULT_DRINK_LIMIT: usize = 1;

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error("BAR_BUFFER_SIZE must be at least 1")]
    ZeroBuffer,
}

/// Maximum number of orders per category that may be in preparation at once.
///
/// A category missing from the map is unknown to the service and every order for it
/// is refused with [`OrderError::UnknownCategory`](crate::admission_actor::OrderError::UnknownCategory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityLimits(BTreeMap<Category, usize>);

impl CapacityLimits {
    /// An empty set of limits. Use [`CapacityLimits::with`] to add categories.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with(mut self, category: Category, limit: usize) -> Self {
        self.0.insert(category, limit);
        self
    }

    pub fn limit(&self, category: Category) -> Option<usize> {
        self.0.get(&category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        self.0.iter().map(|(category, limit)| (*category, *limit))
    }
}

impl Default for CapacityLimits {
    fn default() -> Self {
        Self::empty()
            .with(Category::Beer, DEFAULT_BEER_LIMIT)
            .with(Category::Drink, DEFAULT_DRINK_LIMIT)
    }
}

/// Settings for one admission service instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarConfig {
    pub limits: CapacityLimits,
    pub preparation_time: Duration,
    pub buffer_size: usize,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            limits: CapacityLimits::default(),
            preparation_time: DEFAULT_PREPARATION_TIME,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl BarConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |var: &'static str, default: u64| -> Result<u64, ConfigError> {
            match lookup(var) {
                Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                    var,
                    value: value.clone(),
                }),
                None => Ok(default),
            }
        };

        let beer = read("BAR_BEER_LIMIT", DEFAULT_BEER_LIMIT as u64)?;
        let drink = read("BAR_DRINK_LIMIT", DEFAULT_DRINK_LIMIT as u64)?;
        let preparation_ms = read(
            "BAR_PREPARATION_MS",
            DEFAULT_PREPARATION_TIME.as_millis() as u64,
        )?;
        let buffer_size = read("BAR_BUFFER_SIZE", DEFAULT_BUFFER_SIZE as u64)?;
        if buffer_size == 0 {
            return Err(ConfigError::ZeroBuffer);
        }

        Ok(Self {
            limits: CapacityLimits::empty()
                .with(Category::Beer, beer as usize)
                .with(Category::Drink, drink as usize),
            preparation_time: Duration::from_millis(preparation_ms),
            buffer_size: buffer_size as usize,
        })
    }

    pub fn with_limits(mut self, limits: CapacityLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_preparation_time(mut self, preparation_time: Duration) -> Self {
        self.preparation_time = preparation_time;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn defaults_match_the_reference_bar() {
        let config = BarConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, BarConfig::default());
        assert_eq!(config.limits.limit(Category::Beer), Some(2));
        assert_eq!(config.limits.limit(Category::Drink), Some(1));
        assert_eq!(config.preparation_time, Duration::from_secs(5));
    }

    #[test]
    fn overrides_from_variables() {
        let config = BarConfig::from_lookup(lookup(&[
            ("BAR_BEER_LIMIT", "4"),
            ("BAR_DRINK_LIMIT", "0"),
            ("BAR_PREPARATION_MS", "250"),
            ("BAR_BUFFER_SIZE", "8"),
        ]))
        .unwrap();
        assert_eq!(config.limits.limit(Category::Beer), Some(4));
        assert_eq!(config.limits.limit(Category::Drink), Some(0));
        assert_eq!(config.preparation_time, Duration::from_millis(250));
        assert_eq!(config.buffer_size, 8);
    }

    #[test]
    fn rejects_malformed_values() {
        let err = BarConfig::from_lookup(lookup(&[("BAR_BEER_LIMIT", "two")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: "BAR_BEER_LIMIT",
                value: "two".to_string()
            }
        );

        let err = BarConfig::from_lookup(lookup(&[("BAR_BUFFER_SIZE", "0")])).unwrap_err();
        assert_eq!(err, ConfigError::ZeroBuffer);
    }

    #[test]
    fn unknown_categories_have_no_limit() {
        let limits = CapacityLimits::empty().with(Category::Beer, 3);
        assert_eq!(limits.limit(Category::Drink), None);
        assert_eq!(limits.iter().collect::<Vec<_>>(), vec![(Category::Beer, 3)]);
    }
}
