//! Rules and game configuration.
//!
//! - `ScoringRules`: fixed category scores, the upper-section bonus and how
//!   three/four-of-a-kind are scored
//! - `RulesConfig`: scoring plus the throw limit
//! - `GameConfig`: rules plus the dice seed
//!
//! All types are serde-serializable so a presentation layer can load them
//! from JSON. The engine never hardcodes these numbers outside `Default`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How three-of-a-kind and four-of-a-kind are scored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KindScoring {
    /// Fixed score per category (20 / 40 by default).
    #[default]
    Fixed,
    /// Sum of all five dice instead of the fixed score.
    SumOfDice,
}

/// Score table for the non-number categories and the bonus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    pub three_of_a_kind: u32,
    pub four_of_a_kind: u32,
    pub full_house: u32,
    pub small_straight: u32,
    pub large_straight: u32,
    pub yahtzee: u32,

    /// Bonus added once the six number categories reach `bonus_threshold`.
    pub bonus: u32,
    pub bonus_threshold: u32,

    /// Scoring mode for three/four-of-a-kind.
    pub kind_scoring: KindScoring,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            three_of_a_kind: 20,
            four_of_a_kind: 40,
            full_house: 30,
            small_straight: 30,
            large_straight: 40,
            yahtzee: 50,
            bonus: 35,
            bonus_threshold: 63,
            kind_scoring: KindScoring::Fixed,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_throws must be at least 1")]
    NoThrowsAllowed,
}

/// Rules of a Yahtzee session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Maximum throws per round (default: 3).
    pub max_throws: u8,

    /// Category scores and bonus.
    pub scoring: ScoringRules,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_throws: 3,
            scoring: ScoringRules::default(),
        }
    }
}

impl RulesConfig {
    /// Set the throw limit.
    #[must_use]
    pub fn with_max_throws(mut self, max_throws: u8) -> Self {
        self.max_throws = max_throws;
        self
    }

    /// Select how three/four-of-a-kind are scored.
    #[must_use]
    pub fn with_kind_scoring(mut self, kind_scoring: KindScoring) -> Self {
        self.scoring.kind_scoring = kind_scoring;
        self
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_throws == 0 {
            return Err(ConfigError::NoThrowsAllowed);
        }
        Ok(())
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rules of play.
    pub rules: RulesConfig,

    /// Dice seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration with default rules and entropy-seeded dice.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use deterministic dice.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the rules.
    #[must_use]
    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }
}
