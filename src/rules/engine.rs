//! Menu building: every category a hand validates for.
//!
//! The engine tries each variant constructor and keeps the ones that
//! succeed. Construction errors never leave this module.

use crate::core::{RulesConfig, ScoringRules};
use crate::dice::Hand;
use crate::score::ScoreBoard;

use super::category::{Category, CategoryName, StraightKind};

/// Rules engine for one game session.
///
/// Holds the `RulesConfig` so scoring variations (like summing the dice for
/// three/four-of-a-kind) are a property of the session, not of a category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RulesEngine {
    config: RulesConfig,
}

impl RulesEngine {
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn scoring(&self) -> &ScoringRules {
        &self.config.scoring
    }

    /// Score of a category under this session's rules.
    #[must_use]
    pub fn score(&self, category: &Category) -> u32 {
        category.score(&self.config.scoring)
    }

    /// An empty score board scored under this session's rules.
    #[must_use]
    pub fn new_score_board(&self) -> ScoreBoard {
        ScoreBoard::new(self.config.scoring)
    }

    /// A fresh hand with this session's throw limit.
    #[must_use]
    pub fn new_hand(&self) -> Hand {
        Hand::new(self.config.max_throws)
    }

    /// All categories valid for `hand`, one per name, in score card order.
    ///
    /// An unrolled hand validates nothing.
    #[must_use]
    pub fn candidates(&self, hand: &Hand) -> Vec<Category> {
        let mut attempts = Vec::with_capacity(24);

        for face in 1..=6u8 {
            attempts.push(Category::number_run(face, hand));
            attempts.push(Category::of_a_kind(face, 3, hand));
            attempts.push(Category::of_a_kind(face, 4, hand));
        }
        attempts.push(Category::full_house(hand));
        attempts.push(Category::straight(StraightKind::Small, hand));
        attempts.push(Category::straight(StraightKind::Large, hand));
        attempts.push(Category::chance(hand));
        attempts.push(Category::yahtzee(hand));

        let mut valid: Vec<Category> = attempts.into_iter().filter_map(Result::ok).collect();
        valid.sort_by_key(Category::name);
        valid.dedup_by_key(|c| c.name());
        valid
    }

    /// Menu for the active round: candidates not yet committed on `board`.
    #[must_use]
    pub fn menu(&self, hand: &Hand, board: &ScoreBoard) -> Vec<Category> {
        self.candidates(hand)
            .into_iter()
            .filter(|c| !board.has_category(c.name()))
            .collect()
    }

    /// Names that may be forfeited: every slot not yet committed.
    #[must_use]
    pub fn cancellable(&self, board: &ScoreBoard) -> Vec<CategoryName> {
        board.remaining_category_names()
    }
}
