//! Category rules engine.
//!
//! Given a hand, produce the "menu" of scoring options it validates for:
//!
//! - Ones..Sixes: at least one die of the face; `face × count`
//! - Three/four of a kind: at least 3/4 dice of one face; fixed 20/40 or the
//!   dice sum, depending on `KindScoring`
//! - Full house: exactly two faces, counts 2 and 3; 30
//! - Small/large straight: run of 4/5 consecutive distinct faces; 30/40
//! - Chance: always; dice sum
//! - Yahtzee: all five equal; 50
//!
//! Categories already on the player's score board are excluded from the menu.
//! Any remaining slot may instead be forfeited via `Category::Cancelled`.

mod category;
mod engine;

pub use category::{Category, CategoryError, CategoryName, OfAKind, StraightKind};
pub use engine::RulesEngine;
