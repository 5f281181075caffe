//! Turn orchestrator: round-robin rounds until every player is done.

use thiserror::Error;

use crate::core::{ConfigError, GameConfig, GameRng, PlayerId};
use crate::dice::DiceRoller;
use crate::events::{ChangeReason, EventBus, Notification};
use crate::round::{Decision, DecisionError, DecisionOffer, DecisionTicket, Player, RoundContext, RoundStep};
use crate::rules::RulesEngine;

use super::snapshot::GameSnapshot;

/// Maximum players in one game.
pub const MAX_PLAYERS: usize = 255;

/// Errors from setting up or starting a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("a game needs at least one player")]
    NoPlayers,
    #[error("at most 255 players supported")]
    TooManyPlayers,
    #[error("the game has already started")]
    AlreadyStarted,
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Where the game stands after a call that drives it forward.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Suspended until the offer is resolved through [`Game::resolve`].
    AwaitingDecision(DecisionOffer),
    /// Every player is done; the game has stopped.
    Finished,
}

/// A Yahtzee game session.
///
/// ## Example
///
/// ```
/// use rust_yahtzee::core::GameConfig;
/// use rust_yahtzee::dice::DiceSelection;
/// use rust_yahtzee::events::EventBus;
/// use rust_yahtzee::game::{Game, GameStatus};
/// use rust_yahtzee::round::Decision;
///
/// let mut game = Game::new(GameConfig::new().with_seed(42), EventBus::new()).unwrap();
/// game.add_player("ada").unwrap();
///
/// let mut status = game.start().unwrap();
/// while let GameStatus::AwaitingDecision(offer) = status {
///     let decision = match offer.categories_to_add.first() {
///         _ if offer.is_dice_only() => Decision::SelectDice(DiceSelection::all()),
///         Some(&name) => Decision::SelectCategoryToAdd(name),
///         None => Decision::SelectCategoryToCancel(offer.categories_to_cancel[0]),
///     };
///     status = game.resolve(offer.ticket, decision).unwrap();
/// }
///
/// assert!(game.is_done());
/// assert!(!game.is_started());
/// ```
pub struct Game {
    rules: RulesEngine,
    dice: Box<dyn DiceRoller>,
    bus: EventBus,
    players: Vec<Player>,
    current: Option<usize>,
    started: bool,
}

impl Game {
    /// Create a game. Dice come from a `GameRng` seeded per `config.seed`.
    pub fn new(config: GameConfig, bus: EventBus) -> Result<Self, GameError> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_dice(config, bus, rng)
    }

    /// Create a game rolling dice from `dice`.
    pub fn with_dice(
        config: GameConfig,
        bus: EventBus,
        dice: impl DiceRoller + 'static,
    ) -> Result<Self, GameError> {
        config.rules.validate()?;

        Ok(Self {
            rules: RulesEngine::new(config.rules),
            dice: Box::new(dice),
            bus,
            players: Vec::new(),
            current: None,
            started: false,
        })
    }

    /// Add a player. Only allowed before the game starts.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<PlayerId, GameError> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(GameError::TooManyPlayers);
        }

        let id = PlayerId::new(self.players.len() as u8);
        self.players.push(Player::new(id, name, &self.rules));
        self.bus
            .emit(Notification::state_changed(ChangeReason::PlayerAdded).with_player(id));
        Ok(id)
    }

    /// Start the game and run until the first suspension.
    pub fn start(&mut self) -> Result<GameStatus, GameError> {
        if self.players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        if self.started {
            return Err(GameError::AlreadyStarted);
        }

        log::info!("The game starts");
        self.started = true;
        self.current = None;
        self.bus.emit(Notification::state_changed(ChangeReason::GameStarted));

        Ok(self.play_rounds())
    }

    /// Stop the game and publish a final notification.
    pub fn stop(&mut self) {
        log::info!("The game ends");
        self.started = false;
        self.bus.emit(Notification::state_changed(ChangeReason::GameStopped));
    }

    /// Feed a decision to the active player's pending offer and run until the
    /// next suspension or the end of the game.
    pub fn resolve(
        &mut self,
        ticket: DecisionTicket,
        decision: Decision,
    ) -> Result<GameStatus, DecisionError> {
        let index = self
            .current
            .filter(|_| self.started)
            .ok_or(DecisionError::NoPendingDecision)?;

        let mut ctx = RoundContext {
            rules: &self.rules,
            dice: self.dice.as_mut(),
            bus: &mut self.bus,
        };
        match self.players[index].resolve(ticket, decision, &mut ctx)? {
            RoundStep::Awaiting(offer) => Ok(GameStatus::AwaitingDecision(offer)),
            RoundStep::Finished(_) | RoundStep::Skipped => Ok(self.play_rounds()),
        }
    }

    /// Advance round by round until a player suspends or everyone is done.
    fn play_rounds(&mut self) -> GameStatus {
        loop {
            if self.is_done() {
                self.stop();
                return GameStatus::Finished;
            }

            let index = self.current.map_or(0, |i| (i + 1) % self.players.len());
            self.current = Some(index);

            let mut ctx = RoundContext {
                rules: &self.rules,
                dice: self.dice.as_mut(),
                bus: &mut self.bus,
            };
            match self.players[index].new_round(&mut ctx) {
                RoundStep::Awaiting(offer) => return GameStatus::AwaitingDecision(offer),
                RoundStep::Finished(_) | RoundStep::Skipped => continue,
            }
        }
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Every player is done.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.players.iter().all(Player::is_done)
    }

    /// The player whose turn is active, once the game has started.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.current.and_then(|i| self.players.get(i))
    }

    /// The offer currently awaiting a decision, if any.
    #[must_use]
    pub fn pending_offer(&self) -> Option<&DecisionOffer> {
        if !self.started {
            return None;
        }
        self.current_player().and_then(Player::pending_offer)
    }

    /// Players sharing the highest total, ties included.
    #[must_use]
    pub fn leaders(&self) -> Vec<&Player> {
        let Some(best) = self.players.iter().map(|p| p.score_board().total()).max() else {
            return Vec::new();
        };
        self.players
            .iter()
            .filter(|p| p.score_board().total() == best)
            .collect()
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    #[must_use]
    pub fn rules(&self) -> &RulesEngine {
        &self.rules
    }

    /// The session's event bus, for registering listeners.
    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    /// Read-only view for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("rules", &self.rules)
            .field("bus", &self.bus)
            .field("players", &self.players)
            .field("current", &self.current)
            .field("started", &self.started)
            .finish_non_exhaustive()
    }
}
