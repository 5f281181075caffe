//! Per-player round state machine.
//!
//! ```text
//! Idle ──new_round──► AwaitingDiceSelection ──SelectDice──► Rolled ──► AwaitingDecision
//!                                                              ▲              │
//!                                                              └─SelectDice───┤ (while throws remain)
//!                                                                             │
//!                                    Idle / Done ◄── RoundComplete ◄──Add/Cancel
//! ```
//!
//! `Rolled` and `RoundComplete` are transient: they are passed through inside
//! a single transition. Suspension is a return value, [`RoundStep::Awaiting`],
//! and resuming is a call to [`Player::resolve`] with the offered ticket.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::dice::{DiceRoller, DiceSelection, Hand};
use crate::events::{ChangeReason, EventBus, Notification};
use crate::rules::{Category, CategoryName, RulesEngine};
use crate::score::ScoreBoard;

use super::decision::{Decision, DecisionError, DecisionOffer, DecisionTicket};

/// Where a player is in their round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundState {
    /// No round in progress.
    Idle,
    /// Suspended: waiting for the dice selection that starts the first throw.
    AwaitingDiceSelection,
    /// Dice thrown, menu being computed.
    Rolled,
    /// Suspended: waiting for re-throw, commit or cancel.
    AwaitingDecision,
    /// Category committed, board being checked.
    RoundComplete,
    /// Score board complete. Terminal.
    Done,
}

impl RoundState {
    /// Check whether a decision is awaited.
    #[must_use]
    pub fn is_suspended(self) -> bool {
        matches!(self, RoundState::AwaitingDiceSelection | RoundState::AwaitingDecision)
    }
}

/// Outcome of a finished round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub player: PlayerId,
    pub category: CategoryName,
    pub score: u32,
    pub cancelled: bool,
    /// The score board became complete with this round.
    pub done: bool,
}

/// Result of driving a round forward.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundStep {
    /// Suspended until one of the offered decisions is resolved.
    Awaiting(DecisionOffer),
    /// The round ended with a committed category.
    Finished(RoundSummary),
    /// The player is done; no round was played.
    Skipped,
}

/// Collaborators a round needs while it runs.
pub struct RoundContext<'a> {
    pub rules: &'a RulesEngine,
    pub dice: &'a mut dyn DiceRoller,
    pub bus: &'a mut EventBus,
}

/// A player: one hand, one score board and the round state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    hand: Hand,
    score_board: ScoreBoard,
    current_categories: Vec<Category>,
    state: RoundState,
    pending: Option<DecisionOffer>,
}

impl Player {
    /// Create a player with an empty board under `rules`.
    pub fn new(id: PlayerId, name: impl Into<String>, rules: &RulesEngine) -> Self {
        Self {
            id,
            name: name.into(),
            hand: rules.new_hand(),
            score_board: rules.new_score_board(),
            current_categories: Vec::new(),
            state: RoundState::Idle,
            pending: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn score_board(&self) -> &ScoreBoard {
        &self.score_board
    }

    #[must_use]
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Categories selectable for the just-rolled hand.
    #[must_use]
    pub fn current_categories(&self) -> &[Category] {
        &self.current_categories
    }

    /// The live offer, while suspended.
    #[must_use]
    pub fn pending_offer(&self) -> Option<&DecisionOffer> {
        self.pending.as_ref()
    }

    /// Throws taken this round.
    #[must_use]
    pub fn throws(&self) -> u8 {
        self.hand.rolls()
    }

    #[must_use]
    pub fn remaining_throws(&self) -> u8 {
        self.hand.remaining_rolls()
    }

    /// Check whether another throw is allowed this round.
    #[must_use]
    pub fn can_throw(&self) -> bool {
        self.hand.can_roll()
    }

    /// A player is done exactly when their score board is complete.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.score_board.is_complete()
    }

    /// Start a round: reset the hand and suspend for the first dice selection.
    pub fn new_round(&mut self, ctx: &mut RoundContext<'_>) -> RoundStep {
        ctx.bus.emit(Notification::state_changed(ChangeReason::RoundStarted).with_player(self.id));

        if self.is_done() {
            log::warn!("{} is done, no more throws", self.name);
            self.state = RoundState::Done;
            return RoundStep::Skipped;
        }
        if self.state.is_suspended() {
            log::warn!("{} restarted a round that was still awaiting a decision", self.name);
        }

        self.hand = ctx.rules.new_hand();
        self.current_categories.clear();
        self.state = RoundState::AwaitingDiceSelection;

        let offer = DecisionOffer::dice_only(ctx.bus.issue_ticket(), self.id);
        self.suspend(offer, ctx)
    }

    /// Resume the round with a decision for the pending offer.
    ///
    /// Rejected decisions leave the player untouched and keep the same
    /// offer pending.
    pub fn resolve(
        &mut self,
        ticket: DecisionTicket,
        decision: Decision,
        ctx: &mut RoundContext<'_>,
    ) -> Result<RoundStep, DecisionError> {
        let result = self.transition(ticket, decision, ctx);
        if let Err(err) = &result {
            log::warn!("{} - decision rejected: {}", self.name, err);
        }
        result
    }

    fn transition(
        &mut self,
        ticket: DecisionTicket,
        decision: Decision,
        ctx: &mut RoundContext<'_>,
    ) -> Result<RoundStep, DecisionError> {
        let expected = self
            .pending
            .as_ref()
            .map(|offer| offer.ticket)
            .ok_or(DecisionError::NoPendingDecision)?;
        if expected != ticket {
            return Err(DecisionError::StaleTicket { expected, got: ticket });
        }

        match (self.state, decision) {
            // The first throw always rolls every die.
            (RoundState::AwaitingDiceSelection, Decision::SelectDice(_)) => {
                self.throw(&DiceSelection::all(), ctx)
            }
            (RoundState::AwaitingDecision, Decision::SelectDice(selection)) => {
                if !self.can_throw() {
                    return Err(DecisionError::ThrowLimitReached {
                        max: self.hand.max_throws(),
                    });
                }
                self.throw(&selection, ctx)
            }
            (RoundState::AwaitingDecision, Decision::SelectCategoryToAdd(name)) => {
                let category = self
                    .current_categories
                    .iter()
                    .find(|c| c.name() == name)
                    .cloned();
                match category {
                    Some(category) => Ok(self.end_round(category, ctx)),
                    None if self.score_board.has_category(name) => {
                        Err(DecisionError::CategoryAlreadyUsed(name))
                    }
                    None => Err(DecisionError::CategoryNotOffered(name)),
                }
            }
            (RoundState::AwaitingDecision, Decision::SelectCategoryToCancel(name)) => {
                if self.score_board.has_category(name) {
                    return Err(DecisionError::CategoryAlreadyUsed(name));
                }
                Ok(self.end_round(Category::cancelled(name), ctx))
            }
            _ => Err(DecisionError::NotOffered),
        }
    }

    /// A throw the hand rejects leaves the round and its pending offer as they were.
    fn throw(
        &mut self,
        selection: &DiceSelection,
        ctx: &mut RoundContext<'_>,
    ) -> Result<RoundStep, DecisionError> {
        self.hand.roll(selection, &mut *ctx.dice)?;
        self.pending = None;
        self.state = RoundState::Rolled;
        log::debug!("{} - Got these values: {:?}", self.name, self.hand.values());
        ctx.bus.emit(Notification::state_changed(ChangeReason::DiceRolled).with_player(self.id));

        self.current_categories = ctx.rules.menu(&self.hand, &self.score_board);
        if log::log_enabled!(log::Level::Debug) {
            for category in &self.current_categories {
                log::debug!(
                    "{} - You could do {}, score = {}",
                    self.name,
                    category,
                    ctx.rules.score(category)
                );
            }
        }

        self.state = RoundState::AwaitingDecision;
        let offer = DecisionOffer {
            ticket: ctx.bus.issue_ticket(),
            player: self.id,
            select_dice: self.can_throw(),
            categories_to_add: self.current_categories.iter().map(Category::name).collect(),
            categories_to_cancel: ctx.rules.cancellable(&self.score_board),
        };
        Ok(self.suspend(offer, ctx))
    }

    fn end_round(&mut self, category: Category, ctx: &mut RoundContext<'_>) -> RoundStep {
        self.pending = None;
        self.state = RoundState::RoundComplete;

        let summary_category = category.name();
        let cancelled = category.is_cancelled();
        let score = ctx.rules.score(&category);
        self.score_board.add_category(category);
        self.current_categories.clear();

        log::info!(
            "{} - {} for {} points, total {}",
            self.name,
            if cancelled { "cancelled" } else { "scored" },
            score,
            self.score_board.total()
        );

        let done = self.is_done();
        self.state = if done { RoundState::Done } else { RoundState::Idle };
        ctx.bus.emit(Notification::state_changed(ChangeReason::RoundEnded).with_player(self.id));

        RoundStep::Finished(RoundSummary {
            player: self.id,
            category: summary_category,
            score,
            cancelled,
            done,
        })
    }

    fn suspend(&mut self, offer: DecisionOffer, ctx: &mut RoundContext<'_>) -> RoundStep {
        self.pending = Some(offer.clone());
        ctx.bus.emit(Notification::awaiting(offer.clone()));
        RoundStep::Awaiting(offer)
    }
}
