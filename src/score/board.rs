//! Score board: the categories a player has committed.

use im::Vector;
use serde::Serialize;

use crate::core::ScoringRules;
use crate::rules::{Category, CategoryName};

/// Committed categories, unique by name.
///
/// Backed by `im::Vector` so snapshots of a board are O(1) to clone.
/// Serialize-only: entries arrive one at a time through `add_category`,
/// which keeps names unique.
///
/// ```
/// use rust_yahtzee::dice::Hand;
/// use rust_yahtzee::rules::{Category, CategoryName};
/// use rust_yahtzee::score::ScoreBoard;
///
/// let mut board = ScoreBoard::default();
/// let hand = Hand::from_values([1, 1, 1, 1, 1]).unwrap();
///
/// assert!(board.add_category(Category::yahtzee(&hand).unwrap()));
/// assert_eq!(board.total(), 50);
/// assert!(board.has_category(CategoryName::Yahtzee));
///
/// // Re-adding a name is rejected.
/// assert!(!board.add_category(Category::cancelled(CategoryName::Yahtzee)));
/// assert_eq!(board.total(), 50);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreBoard {
    categories: Vector<Category>,
    rules: ScoringRules,
}

impl ScoreBoard {
    /// An empty board scored under `rules`.
    #[must_use]
    pub fn new(rules: ScoringRules) -> Self {
        Self {
            categories: Vector::new(),
            rules,
        }
    }

    /// Commit a category.
    ///
    /// Returns `false` and leaves the board unchanged if a category with the
    /// same name is already committed.
    pub fn add_category(&mut self, category: Category) -> bool {
        let name = category.name();
        if self.has_category(name) {
            log::warn!("Category {} has already been done", name);
            return false;
        }

        self.categories.push_back(category);
        true
    }

    /// Check whether `name` is committed.
    #[must_use]
    pub fn has_category(&self, name: CategoryName) -> bool {
        self.categories.iter().any(|c| c.name() == name)
    }

    /// The committed category for `name`.
    #[must_use]
    pub fn category(&self, name: CategoryName) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }

    /// Committed score for `name`, if committed.
    #[must_use]
    pub fn score_of(&self, name: CategoryName) -> Option<u32> {
        self.category(name).map(|c| c.score(&self.rules))
    }

    /// Committed categories in commit order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Number of committed categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Sum of the six number categories.
    #[must_use]
    pub fn upper_total(&self) -> u32 {
        self.categories
            .iter()
            .filter(|c| c.is_number_run())
            .map(|c| c.score(&self.rules))
            .sum()
    }

    /// Check whether the number categories reached the bonus threshold.
    #[must_use]
    pub fn has_bonus(&self) -> bool {
        self.upper_total() >= self.rules.bonus_threshold
    }

    /// Bonus currently earned: the bonus amount or 0.
    #[must_use]
    pub fn bonus(&self) -> u32 {
        if self.has_bonus() {
            self.rules.bonus
        } else {
            0
        }
    }

    /// Sum of committed scores plus the bonus.
    #[must_use]
    pub fn total(&self) -> u32 {
        let committed: u32 = self.categories.iter().map(|c| c.score(&self.rules)).sum();
        committed + self.bonus()
    }

    /// Names not yet committed, in score card order.
    #[must_use]
    pub fn remaining_category_names(&self) -> Vec<CategoryName> {
        CategoryName::ALL
            .iter()
            .copied()
            .filter(|&name| !self.has_category(name))
            .collect()
    }

    /// Check whether all 13 names are committed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.categories.len() == CategoryName::COUNT
    }

    /// Rules this board scores under.
    #[must_use]
    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new(ScoringRules::default())
    }
}
