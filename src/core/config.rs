//! Game configuration: the house rules.
//!
//! Two numbers define a game:
//! - `starting_total`: tokens in the pool at the start
//! - `max_taken`: most tokens a side may take in one turn
//!
//! Both are fixed when the engine is built. Changing `max_taken` changes
//! the planner's modulus (`max_taken + 1`) but not the algorithm.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ordinal names used when narrating the agent's n-th token of a turn.
///
/// `max_taken` can never exceed the length of this table.
pub const ORDINALS: [&str; 10] = [
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth", "tenth",
];

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_taken must be at least 1")]
    ZeroMaxTaken,
    #[error("starting_total must be at least 1")]
    EmptyPool,
    #[error("max_taken {max_taken} exceeds the {limit} ordinals available for narration")]
    MaxTakenTooLarge { max_taken: u32, limit: usize },
}

/// House rules for a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Tokens in the pool when a game starts.
    pub starting_total: u32,

    /// Most tokens a side may take in a single turn.
    pub max_taken: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_total: 12,
            max_taken: 3,
        }
    }
}

impl GameConfig {
    /// Create a new configuration. Call `validate` before use.
    #[must_use]
    pub const fn new(starting_total: u32, max_taken: u32) -> Self {
        Self {
            starting_total,
            max_taken,
        }
    }

    /// Set the starting pool size.
    #[must_use]
    pub fn with_starting_total(mut self, total: u32) -> Self {
        self.starting_total = total;
        self
    }

    /// Set the per-turn maximum.
    #[must_use]
    pub fn with_max_taken(mut self, max: u32) -> Self {
        self.max_taken = max;
        self
    }

    /// The allotment the human gets at the very start of a game.
    #[must_use]
    pub fn opening_allotment(&self) -> u32 {
        self.max_taken.min(self.starting_total)
    }

    /// Check that the rules describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_taken == 0 {
            return Err(ConfigError::ZeroMaxTaken);
        }
        if self.starting_total == 0 {
            return Err(ConfigError::EmptyPool);
        }
        if self.max_taken as usize > ORDINALS.len() {
            return Err(ConfigError::MaxTakenTooLarge {
                max_taken: self.max_taken,
                limit: ORDINALS.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.starting_total, 12);
        assert_eq!(config.max_taken, 3);
        assert_eq!(config.opening_allotment(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_starting_total(21)
            .with_max_taken(4);

        assert_eq!(config, GameConfig::new(21, 4));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_opening_allotment_small_pool() {
        let config = GameConfig::new(2, 3);
        assert_eq!(config.opening_allotment(), 2);
    }

    #[test]
    fn test_validate_rejects_bad_rules() {
        assert_eq!(GameConfig::new(12, 0).validate(), Err(ConfigError::ZeroMaxTaken));
        assert_eq!(GameConfig::new(0, 3).validate(), Err(ConfigError::EmptyPool));
        assert_eq!(
            GameConfig::new(50, 11).validate(),
            Err(ConfigError::MaxTakenTooLarge {
                max_taken: 11,
                limit: 10
            })
        );
        assert!(GameConfig::new(50, 10).validate().is_ok());
    }

    #[test]
    fn test_error_messages() {
        let err = GameConfig::new(50, 11).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "max_taken 11 exceeds the 10 ordinals available for narration"
        );
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new(15, 4);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
