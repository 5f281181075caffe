//! # rust-yahtzee
//!
//! Yahtzee rules engine and turn sequencer, sitting between raw dice state
//! and a presentation layer.
//!
//! ## Design Principles
//!
//! 1. **Explicit suspension**: A round that needs a human decision returns a
//!    `DecisionOffer` instead of blocking. Play resumes when the decision is
//!    fed back with the offer's ticket.
//!
//! 2. **Validate-or-reject categories**: Each category constructor either
//!    validates the hand or returns an error; the menu is the set that validates.
//!
//! 3. **Configuration Over Convention**: Throw limit, scores and the
//!    three/four-of-a-kind scoring mode live in `RulesConfig`.
//!
//! 4. **Session-scoped events**: The event bus is injected into a `Game` and
//!    dies with it. No global state.
//!
//! ## Modules
//!
//! - `core`: Player IDs, RNG, configuration
//! - `dice`: Die, hand, dice selection and die sources
//! - `rules`: Category names, category variants and the menu-building engine
//! - `score`: Score board with bonus and completion
//! - `events`: Event bus and notifications
//! - `round`: Per-player round state machine and decisions
//! - `game`: Round-robin orchestrator, leaders and snapshots

pub mod core;
pub mod dice;
pub mod rules;
pub mod score;
pub mod events;
pub mod round;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameRng, KindScoring, PlayerId, RulesConfig, ScoringRules,
};

pub use crate::dice::{DiceError, DiceRoller, DiceSelection, Die, Face, Hand, ScriptedDice};

pub use crate::rules::{Category, CategoryError, CategoryName, RulesEngine};

pub use crate::score::ScoreBoard;

pub use crate::events::{ChangeReason, EventBus, EventKind, Notification};

pub use crate::round::{
    Decision, DecisionError, DecisionOffer, DecisionTicket, Player, RoundContext, RoundState,
    RoundStep, RoundSummary,
};

pub use crate::game::{Game, GameError, GameSnapshot, GameStatus};
