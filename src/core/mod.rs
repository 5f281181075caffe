//! Core engine types: players, RNG, configuration.
//!
//! These are the building blocks shared by every other module. Rule
//! variations are expressed through `RulesConfig` rather than code changes.

pub mod player;
pub mod rng;
pub mod config;

pub use player::PlayerId;
pub use rng::{GameRng, DIE_FACES};
pub use config::{ConfigError, GameConfig, KindScoring, RulesConfig, ScoringRules};
