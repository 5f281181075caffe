//! Player rounds: roll, decide, re-roll or commit.
//!
//! A round suspends twice in its life: once for the dice selection that
//! starts the first throw, and after every throw for "throw again",
//! "commit a category" or "cancel a category". Each suspension is a
//! [`DecisionOffer`] returned to the caller and published on the event bus;
//! the round resumes when [`Player::resolve`] is fed a matching [`Decision`].

mod decision;
mod player;

pub use decision::{Decision, DecisionError, DecisionOffer, DecisionTicket};
pub use player::{Player, RoundContext, RoundState, RoundStep, RoundSummary};
