//! Decisions awaited from the presentation layer.
//!
//! A suspended round publishes a [`DecisionOffer`]: the decisions it will
//! accept, stamped with a [`DecisionTicket`]. The presentation layer answers
//! with one [`Decision`] and the ticket it was offered. Only the latest offer
//! is live; answers to older tickets are rejected without side effects.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::PlayerId;
use crate::dice::{DiceError, DiceSelection};
use crate::rules::CategoryName;

/// Identifies one suspension point. Issued in increasing order by the event bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DecisionTicket(pub u64);

impl std::fmt::Display for DecisionTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ticket({})", self.0)
    }
}

/// One answer to a pending offer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Throw these dice.
    SelectDice(DiceSelection),
    /// Commit a category from the current menu.
    SelectCategoryToAdd(CategoryName),
    /// Forfeit a not-yet-used category with score 0.
    SelectCategoryToCancel(CategoryName),
}

/// The decisions a suspended round will accept.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOffer {
    pub ticket: DecisionTicket,
    pub player: PlayerId,

    /// Whether `SelectDice` is accepted.
    pub select_dice: bool,

    /// Names accepted by `SelectCategoryToAdd`.
    pub categories_to_add: Vec<CategoryName>,

    /// Names accepted by `SelectCategoryToCancel`.
    pub categories_to_cancel: Vec<CategoryName>,
}

impl DecisionOffer {
    /// Offer that only asks which dice to throw.
    #[must_use]
    pub fn dice_only(ticket: DecisionTicket, player: PlayerId) -> Self {
        Self {
            ticket,
            player,
            select_dice: true,
            categories_to_add: Vec::new(),
            categories_to_cancel: Vec::new(),
        }
    }

    /// Check whether `decision` is one of the offered choices.
    #[must_use]
    pub fn permits(&self, decision: &Decision) -> bool {
        match decision {
            Decision::SelectDice(_) => self.select_dice,
            Decision::SelectCategoryToAdd(name) => self.categories_to_add.contains(name),
            Decision::SelectCategoryToCancel(name) => self.categories_to_cancel.contains(name),
        }
    }

    /// Check whether a dice selection is the only thing offered.
    #[must_use]
    pub fn is_dice_only(&self) -> bool {
        self.select_dice && self.categories_to_add.is_empty() && self.categories_to_cancel.is_empty()
    }
}

/// Rejected decisions. State is never changed by a rejected decision.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error("no decision is pending")]
    NoPendingDecision,
    #[error("{got} is stale, the pending decision is {expected}")]
    StaleTicket {
        expected: DecisionTicket,
        got: DecisionTicket,
    },
    #[error("no more throws allowed ({max} max), select or cancel a category")]
    ThrowLimitReached { max: u8 },
    #[error("category {0} is not on the menu")]
    CategoryNotOffered(CategoryName),
    #[error("category {0} has already been used")]
    CategoryAlreadyUsed(CategoryName),
    #[error("this decision is not offered right now")]
    NotOffered,
    #[error("the dice could not be thrown: {0}")]
    DiceRejected(#[from] DiceError),
}
