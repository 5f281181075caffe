//! Read-only state snapshot for the presentation layer.
//!
//! Field names serialize in camelCase so the snapshot can be handed to a
//! JavaScript view as-is.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::round::Player;
use crate::rules::CategoryName;

use super::orchestrator::Game;

/// One score card row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySnapshot {
    pub name: CategoryName,
    pub is_already_done: bool,
    /// Committed score, 0 when not committed.
    pub score: u32,
    /// On the menu for the just-rolled hand.
    pub is_selectable: bool,
    /// Score if selected now, 0 when not selectable.
    pub score_if_selected: u32,
}

/// One player's column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
    pub has_bonus: bool,
    pub bonus_amount: u32,
    pub is_current: bool,
    pub remaining_throws: u8,
    pub is_done: bool,
    pub categories: Vec<CategorySnapshot>,
}

/// One die of the active hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DieSnapshot {
    pub value: u8,
    pub name: String,
}

/// Whole-game view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub has_started: bool,
    pub is_done: bool,
    pub current_player: Option<PlayerId>,
    pub leaders: Vec<PlayerId>,
    pub players: Vec<PlayerSnapshot>,
    /// Active player's dice, once rolled.
    pub current_hand: Option<Vec<DieSnapshot>>,
}

impl GameSnapshot {
    /// Capture the current state of `game`.
    #[must_use]
    pub fn capture(game: &Game) -> Self {
        let current = game.current_player().map(Player::id);

        let players = game
            .players()
            .iter()
            .map(|p| capture_player(game, p, current == Some(p.id())))
            .collect();

        let current_hand = game.current_player().and_then(|p| {
            let dice = p.hand().dice();
            dice.iter()
                .map(|die| {
                    Some(DieSnapshot {
                        value: die.value()?,
                        name: die.name()?.to_string(),
                    })
                })
                .collect::<Option<Vec<_>>>()
        });

        Self {
            has_started: game.is_started(),
            is_done: game.is_done(),
            current_player: current,
            leaders: game.leaders().into_iter().map(Player::id).collect(),
            players,
            current_hand,
        }
    }

    /// Snapshot of one player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&PlayerSnapshot> {
        self.players.iter().find(|p| p.id == id)
    }
}

impl PlayerSnapshot {
    /// Row for `name`.
    #[must_use]
    pub fn category(&self, name: CategoryName) -> Option<&CategorySnapshot> {
        self.categories.iter().find(|c| c.name == name)
    }
}

fn capture_player(game: &Game, player: &Player, is_current: bool) -> PlayerSnapshot {
    let board = player.score_board();
    let rules = game.rules();

    let categories = CategoryName::ALL
        .iter()
        .map(|&name| {
            let possible = player.current_categories().iter().find(|c| c.name() == name);
            CategorySnapshot {
                name,
                is_already_done: board.has_category(name),
                score: board.score_of(name).unwrap_or(0),
                is_selectable: game.is_started() && possible.is_some(),
                score_if_selected: possible.map_or(0, |c| rules.score(c)),
            }
        })
        .collect();

    PlayerSnapshot {
        id: player.id(),
        name: player.name().to_string(),
        score: board.total(),
        has_bonus: board.has_bonus(),
        bonus_amount: rules.scoring().bonus,
        is_current,
        remaining_throws: player.remaining_throws(),
        is_done: player.is_done(),
        categories,
    }
}
