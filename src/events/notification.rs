//! Notifications published on the event bus.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::round::DecisionOffer;

/// Event kinds listeners can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Game state changed; the payload, if any, lists the awaited decisions.
    StateChanged,
}

impl EventKind {
    /// Notification name as seen by the presentation layer.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EventKind::StateChanged => "state changed",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What caused a state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeReason {
    PlayerAdded,
    GameStarted,
    RoundStarted,
    DiceRolled,
    /// A round suspended; the notification carries the offer.
    AwaitingDecision,
    RoundEnded,
    GameStopped,
}

/// One published notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: EventKind,
    pub reason: ChangeReason,

    /// Player the change concerns, if any.
    pub player: Option<PlayerId>,

    /// Decisions currently awaited. Present only while suspended.
    pub offer: Option<DecisionOffer>,
}

impl Notification {
    /// A payload-free "state changed" notification.
    #[must_use]
    pub fn state_changed(reason: ChangeReason) -> Self {
        Self {
            kind: EventKind::StateChanged,
            reason,
            player: None,
            offer: None,
        }
    }

    /// A "state changed" notification carrying the awaited decisions.
    #[must_use]
    pub fn awaiting(offer: DecisionOffer) -> Self {
        Self {
            kind: EventKind::StateChanged,
            reason: ChangeReason::AwaitingDecision,
            player: Some(offer.player),
            offer: Some(offer),
        }
    }

    /// Set the associated player (builder pattern).
    #[must_use]
    pub fn with_player(mut self, player: PlayerId) -> Self {
        self.player = Some(player);
        self
    }
}
