//! Dice: a single die, the five-dice hand and the sources of randomness.
//!
//! ## Key Components
//!
//! - [`Face`]: a face value validated to `1..=6`
//! - [`Die`]: one six-sided die, unset until first rolled
//! - [`Hand`]: five dice and the throw counter for the round
//! - [`DiceSelection`]: which dice to throw (unique indices in `0..5`)
//! - [`DiceRoller`]: source of faces, implemented by `GameRng` and [`ScriptedDice`]

mod die;
mod hand;

pub use die::{face_name, is_valid_face, DiceRoller, Die, Face, ScriptedDice, FACE_NAMES};
pub use hand::{DiceSelection, DiceValues, Hand, HAND_SIZE};

use thiserror::Error;

/// Dice validation and throw errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("{0} isn't a valid die face")]
    InvalidFace(u8),
    #[error("die index {0} is out of range")]
    IndexOutOfRange(usize),
    #[error("die index {0} selected twice")]
    DuplicateIndex(usize),
    #[error("rolled more than {max} times")]
    ThrowLimitReached { max: u8 },
    #[error("scripted dice need at least one face")]
    EmptyScript,
}
