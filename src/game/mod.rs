//! Multi-player orchestration.
//!
//! [`Game`] owns the players, the rules engine, the dice and the event bus.
//! It runs rounds in strict round-robin order (player 0, 1, …, n-1, 0, …),
//! skipping players who are done, and stops once every player is done.
//!
//! The orchestrator is an explicit loop: each call returns either the offer
//! that suspended play or [`GameStatus::Finished`]. Leaders are recomputed
//! on demand from current totals.

mod orchestrator;
mod snapshot;

pub use orchestrator::{Game, GameError, GameStatus, MAX_PLAYERS};
pub use snapshot::{CategorySnapshot, DieSnapshot, GameSnapshot, PlayerSnapshot};
