//! Scoring categories.
//!
//! Each variant of [`Category`] has a fallible constructor that validates a
//! hand. A rejected construction is not a failure of play: it only means the
//! option is absent from the menu for that hand.
//!
//! Scores are derived from the dice captured at construction and the
//! [`ScoringRules`] in force, never stored.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{KindScoring, ScoringRules};
use crate::dice::{is_valid_face, DiceValues, Face, Hand};

/// The 13 named slots of a score card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CategoryName {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Chance,
    Yahtzee,
}

impl CategoryName {
    /// Number of categories on a score card.
    pub const COUNT: usize = 13;

    /// Every category, in score card order.
    pub const ALL: [CategoryName; Self::COUNT] = [
        CategoryName::Ones,
        CategoryName::Twos,
        CategoryName::Threes,
        CategoryName::Fours,
        CategoryName::Fives,
        CategoryName::Sixes,
        CategoryName::ThreeOfAKind,
        CategoryName::FourOfAKind,
        CategoryName::FullHouse,
        CategoryName::SmallStraight,
        CategoryName::LargeStraight,
        CategoryName::Chance,
        CategoryName::Yahtzee,
    ];

    /// The number category for a face (`1` → `Ones`).
    #[must_use]
    pub fn for_face(face: u8) -> Option<Self> {
        Face::new(face).ok().map(Self::number)
    }

    /// The number category counting `face`.
    #[must_use]
    pub fn number(face: Face) -> Self {
        Self::ALL[face.index()]
    }

    /// The face counted by a number category.
    #[must_use]
    pub fn face(self) -> Option<u8> {
        match self {
            CategoryName::Ones => Some(1),
            CategoryName::Twos => Some(2),
            CategoryName::Threes => Some(3),
            CategoryName::Fours => Some(4),
            CategoryName::Fives => Some(5),
            CategoryName::Sixes => Some(6),
            _ => None,
        }
    }

    /// Check whether this is one of the six number categories.
    #[must_use]
    pub fn is_number(self) -> bool {
        self.face().is_some()
    }

    /// Stable identifier used in snapshots.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryName::Ones => "Ones",
            CategoryName::Twos => "Twos",
            CategoryName::Threes => "Threes",
            CategoryName::Fours => "Fours",
            CategoryName::Fives => "Fives",
            CategoryName::Sixes => "Sixes",
            CategoryName::ThreeOfAKind => "ThreeOfAKind",
            CategoryName::FourOfAKind => "FourOfAKind",
            CategoryName::FullHouse => "FullHouse",
            CategoryName::SmallStraight => "SmallStraight",
            CategoryName::LargeStraight => "LargeStraight",
            CategoryName::Chance => "Chance",
            CategoryName::Yahtzee => "Yahtzee",
        }
    }
}

impl std::fmt::Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three or four of a kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OfAKind {
    Three,
    Four,
}

impl OfAKind {
    /// Parse the matching-dice count (3 or 4).
    pub fn from_count(count: u8) -> Result<Self, CategoryError> {
        match count {
            3 => Ok(OfAKind::Three),
            4 => Ok(OfAKind::Four),
            other => Err(CategoryError::InvalidKind(other)),
        }
    }

    /// Dice that must match.
    #[must_use]
    pub fn required(self) -> usize {
        match self {
            OfAKind::Three => 3,
            OfAKind::Four => 4,
        }
    }
}

/// Small (run of 4) or large (run of 5) straight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StraightKind {
    Small,
    Large,
}

impl StraightKind {
    /// Minimum run of consecutive distinct faces.
    #[must_use]
    pub fn required_run(self) -> usize {
        match self {
            StraightKind::Small => 4,
            StraightKind::Large => 5,
        }
    }
}

/// Why a category cannot be built from a hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    #[error("{0} isn't a valid die number")]
    InvalidFace(u8),
    #[error("category must be either a 3 or a 4 of a kind, got {0} instead")]
    InvalidKind(u8),
    #[error("got {found} times the number {face} only, need at least {needed}")]
    NotEnoughMatching { face: u8, found: usize, needed: usize },
    #[error("a full house needs 2 dice of one value and 3 of another")]
    NotAFullHouse,
    #[error("this straight requires at least {needed} consecutive numbers")]
    NoStraight { needed: usize },
    #[error("yahtzee requires 5 dice with the same value")]
    NotAYahtzee,
    #[error("the hand has not been rolled yet")]
    HandNotRolled,
}

/// A scoring option built from a hand, or a forfeited slot.
///
/// Serialize-only: categories are built from hands through the constructors
/// below, never read back in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    /// Ones..Sixes: `face × count of dice showing face`.
    NumberRun { face: Face, dice: DiceValues },
    /// Three or four dice of one face.
    OfAKind { kind: OfAKind, dice: DiceValues },
    /// Two of one face, three of another.
    FullHouse,
    /// Run of consecutive distinct faces.
    Straight(StraightKind),
    /// Any hand: sum of the dice.
    Chance { dice: DiceValues },
    /// Five of a kind.
    Yahtzee,
    /// A slot forfeited with score 0.
    Cancelled(CategoryName),
}

fn rolled(hand: &Hand) -> Result<DiceValues, CategoryError> {
    hand.values().ok_or(CategoryError::HandNotRolled)
}

fn count_face(dice: &DiceValues, face: u8) -> usize {
    dice.iter().filter(|&&d| d == face).count()
}

fn sum(dice: &DiceValues) -> u32 {
    dice.iter().map(|&d| u32::from(d)).sum()
}

/// Longest run of consecutive distinct faces.
///
/// Duplicates neither break nor extend a run: `[2, 2, 3, 4, 5]` has a run of 4.
fn longest_run(dice: &DiceValues) -> usize {
    let mut present = [false; 7];
    for &d in dice {
        present[d as usize] = true;
    }

    let mut best = 0;
    let mut current = 0;
    for &is_present in &present[1..] {
        if is_present {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }
    best
}

impl Category {
    /// Ones..Sixes: valid if at least one die shows `face`.
    pub fn number_run(face: u8, hand: &Hand) -> Result<Self, CategoryError> {
        let face = Face::new(face).map_err(|_| CategoryError::InvalidFace(face))?;
        let dice = rolled(hand)?;
        if count_face(&dice, face.get()) == 0 {
            return Err(CategoryError::NotEnoughMatching {
                face: face.get(),
                found: 0,
                needed: 1,
            });
        }
        Ok(Category::NumberRun { face, dice })
    }

    /// Three or four of a kind of `face`; `count` must be 3 or 4.
    pub fn of_a_kind(face: u8, count: u8, hand: &Hand) -> Result<Self, CategoryError> {
        if !is_valid_face(face) {
            return Err(CategoryError::InvalidFace(face));
        }
        let kind = OfAKind::from_count(count)?;
        let dice = rolled(hand)?;

        let found = count_face(&dice, face);
        if found < kind.required() {
            return Err(CategoryError::NotEnoughMatching {
                face,
                found,
                needed: kind.required(),
            });
        }
        Ok(Category::OfAKind { kind, dice })
    }

    /// Exactly two distinct faces with multiplicities 2 and 3.
    pub fn full_house(hand: &Hand) -> Result<Self, CategoryError> {
        let dice = rolled(hand)?;

        let mut counts: Vec<usize> = (1..=6)
            .map(|face| count_face(&dice, face))
            .filter(|&c| c > 0)
            .collect();
        counts.sort_unstable();

        if counts != [2, 3] {
            return Err(CategoryError::NotAFullHouse);
        }
        Ok(Category::FullHouse)
    }

    /// Small or large straight.
    pub fn straight(kind: StraightKind, hand: &Hand) -> Result<Self, CategoryError> {
        let dice = rolled(hand)?;
        let needed = kind.required_run();
        if longest_run(&dice) < needed {
            return Err(CategoryError::NoStraight { needed });
        }
        Ok(Category::Straight(kind))
    }

    /// Always valid once the hand is rolled.
    pub fn chance(hand: &Hand) -> Result<Self, CategoryError> {
        Ok(Category::Chance {
            dice: rolled(hand)?,
        })
    }

    /// All five dice equal.
    pub fn yahtzee(hand: &Hand) -> Result<Self, CategoryError> {
        let dice = rolled(hand)?;
        if count_face(&dice, dice[0]) < dice.len() {
            return Err(CategoryError::NotAYahtzee);
        }
        Ok(Category::Yahtzee)
    }

    /// Forfeit `name` with score 0. Always valid.
    #[must_use]
    pub fn cancelled(name: CategoryName) -> Self {
        Category::Cancelled(name)
    }

    /// The score card slot this category fills.
    #[must_use]
    pub fn name(&self) -> CategoryName {
        match self {
            Category::NumberRun { face, .. } => CategoryName::number(*face),
            Category::OfAKind { kind: OfAKind::Three, .. } => CategoryName::ThreeOfAKind,
            Category::OfAKind { kind: OfAKind::Four, .. } => CategoryName::FourOfAKind,
            Category::FullHouse => CategoryName::FullHouse,
            Category::Straight(StraightKind::Small) => CategoryName::SmallStraight,
            Category::Straight(StraightKind::Large) => CategoryName::LargeStraight,
            Category::Chance { .. } => CategoryName::Chance,
            Category::Yahtzee => CategoryName::Yahtzee,
            Category::Cancelled(name) => *name,
        }
    }

    /// Score under `rules`.
    #[must_use]
    pub fn score(&self, rules: &ScoringRules) -> u32 {
        match self {
            Category::NumberRun { face, dice } => {
                u32::from(face.get()) * count_face(dice, face.get()) as u32
            }
            Category::OfAKind { kind, dice } => match rules.kind_scoring {
                KindScoring::SumOfDice => sum(dice),
                KindScoring::Fixed => match kind {
                    OfAKind::Three => rules.three_of_a_kind,
                    OfAKind::Four => rules.four_of_a_kind,
                },
            },
            Category::FullHouse => rules.full_house,
            Category::Straight(StraightKind::Small) => rules.small_straight,
            Category::Straight(StraightKind::Large) => rules.large_straight,
            Category::Chance { dice } => sum(dice),
            Category::Yahtzee => rules.yahtzee,
            Category::Cancelled(_) => 0,
        }
    }

    /// Check whether this counts toward the upper-section bonus.
    #[must_use]
    pub fn is_number_run(&self) -> bool {
        matches!(self, Category::NumberRun { .. })
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Category::Cancelled(_))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::NumberRun { face, dice } => {
                write!(f, "Sequence of {}s, got {}", face, count_face(dice, face.get()))
            }
            Category::OfAKind { kind, .. } => write!(f, "{} of a kind", kind.required()),
            Category::FullHouse => f.write_str("Full house"),
            Category::Straight(StraightKind::Small) => f.write_str("Small straight"),
            Category::Straight(StraightKind::Large) => f.write_str("Large straight"),
            Category::Chance { .. } => f.write_str("Chance"),
            Category::Yahtzee => f.write_str("Yahtzee!!"),
            Category::Cancelled(name) => write!(f, "Cancelled {}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(values: DiceValues) -> Hand {
        Hand::from_values(values).unwrap()
    }

    #[test]
    fn test_category_name_faces() {
        assert_eq!(CategoryName::for_face(1), Some(CategoryName::Ones));
        assert_eq!(CategoryName::for_face(6), Some(CategoryName::Sixes));
        assert_eq!(CategoryName::for_face(7), None);
        assert_eq!(CategoryName::Fours.face(), Some(4));
        assert_eq!(CategoryName::Chance.face(), None);
        assert_eq!(CategoryName::ALL.iter().filter(|n| n.is_number()).count(), 6);
        assert_eq!(CategoryName::FullHouse.to_string(), "FullHouse");
    }

    #[test]
    fn test_number_run() {
        let rules = ScoringRules::default();
        let h = hand([3, 3, 1, 3, 6]);

        let threes = Category::number_run(3, &h).unwrap();
        assert_eq!(threes.name(), CategoryName::Threes);
        assert_eq!(threes.score(&rules), 9);
        assert_eq!(threes.to_string(), "Sequence of 3s, got 3");

        assert_eq!(
            Category::number_run(2, &h),
            Err(CategoryError::NotEnoughMatching { face: 2, found: 0, needed: 1 })
        );
        assert_eq!(Category::number_run(0, &h), Err(CategoryError::InvalidFace(0)));
    }

    #[test]
    fn test_of_a_kind_fixed_scores() {
        let rules = ScoringRules::default();
        let h = hand([5, 5, 5, 5, 2]);

        let three = Category::of_a_kind(5, 3, &h).unwrap();
        let four = Category::of_a_kind(5, 4, &h).unwrap();
        assert_eq!(three.name(), CategoryName::ThreeOfAKind);
        assert_eq!(four.name(), CategoryName::FourOfAKind);
        assert_eq!(three.score(&rules), 20);
        assert_eq!(four.score(&rules), 40);
    }

    #[test]
    fn test_of_a_kind_sum_of_dice() {
        let rules = ScoringRules {
            kind_scoring: KindScoring::SumOfDice,
            ..ScoringRules::default()
        };
        let h = hand([4, 4, 4, 1, 2]);

        let three = Category::of_a_kind(4, 3, &h).unwrap();
        assert_eq!(three.score(&rules), 15);
    }

    #[test]
    fn test_of_a_kind_rejections() {
        let h = hand([4, 4, 4, 1, 2]);

        assert_eq!(
            Category::of_a_kind(4, 4, &h),
            Err(CategoryError::NotEnoughMatching { face: 4, found: 3, needed: 4 })
        );
        assert_eq!(Category::of_a_kind(4, 2, &h), Err(CategoryError::InvalidKind(2)));
        assert_eq!(Category::of_a_kind(9, 3, &h), Err(CategoryError::InvalidFace(9)));
    }

    #[test]
    fn test_full_house() {
        assert_eq!(Category::full_house(&hand([2, 3, 2, 3, 2])), Ok(Category::FullHouse));
        assert_eq!(
            Category::full_house(&hand([2, 2, 2, 2, 3])),
            Err(CategoryError::NotAFullHouse)
        );
        assert_eq!(
            Category::full_house(&hand([6, 6, 6, 6, 6])),
            Err(CategoryError::NotAFullHouse)
        );
        assert_eq!(
            Category::full_house(&hand([1, 1, 2, 2, 3])),
            Err(CategoryError::NotAFullHouse)
        );
    }

    #[test]
    fn test_straights() {
        let small = StraightKind::Small;
        let large = StraightKind::Large;

        assert!(Category::straight(small, &hand([1, 2, 3, 4, 6])).is_ok());
        assert!(Category::straight(large, &hand([1, 2, 3, 4, 6])).is_err());

        assert!(Category::straight(small, &hand([5, 4, 3, 2, 1])).is_ok());
        assert!(Category::straight(large, &hand([5, 4, 3, 2, 1])).is_ok());

        assert!(Category::straight(small, &hand([2, 2, 3, 4, 5])).is_ok());
        assert_eq!(
            Category::straight(large, &hand([2, 2, 3, 4, 5])),
            Err(CategoryError::NoStraight { needed: 5 })
        );
    }

    #[test]
    fn test_duplicates_do_not_extend_runs() {
        assert_eq!(longest_run(&[3, 3, 4, 4, 5]), 3);
        assert_eq!(longest_run(&[1, 1, 1, 1, 1]), 1);
        assert_eq!(longest_run(&[1, 2, 4, 5, 6]), 3);
        assert_eq!(longest_run(&[6, 5, 4, 3, 3]), 4);
        assert!(Category::straight(StraightKind::Small, &hand([3, 3, 4, 4, 5])).is_err());
    }

    #[test]
    fn test_chance_and_yahtzee() {
        let rules = ScoringRules::default();

        let chance = Category::chance(&hand([1, 2, 3, 4, 6])).unwrap();
        assert_eq!(chance.score(&rules), 16);

        let yahtzee = Category::yahtzee(&hand([6, 6, 6, 6, 6])).unwrap();
        assert_eq!(yahtzee.score(&rules), 50);
        assert_eq!(yahtzee.to_string(), "Yahtzee!!");
        assert_eq!(
            Category::yahtzee(&hand([6, 6, 6, 6, 5])),
            Err(CategoryError::NotAYahtzee)
        );
    }

    #[test]
    fn test_cancelled() {
        let rules = ScoringRules::default();
        let cancelled = Category::cancelled(CategoryName::Yahtzee);

        assert_eq!(cancelled.name(), CategoryName::Yahtzee);
        assert_eq!(cancelled.score(&rules), 0);
        assert!(cancelled.is_cancelled());
        assert!(!cancelled.is_number_run());
    }

    #[test]
    fn test_number_run_name_follows_face() {
        let h = hand([1, 2, 3, 4, 5]);
        for face in 1..=5u8 {
            let category = Category::number_run(face, &h).unwrap();
            assert_eq!(category.name(), CategoryName::for_face(face).unwrap());
            assert_eq!(category.name().face(), Some(face));
        }
        assert_eq!(CategoryName::number(Face::new(6).unwrap()), CategoryName::Sixes);
        assert_eq!(Category::number_run(9, &h), Err(CategoryError::InvalidFace(9)));
    }

    #[test]
    fn test_category_serializes_face_as_number() {
        let category = Category::number_run(3, &hand([3, 3, 1, 2, 4])).unwrap();
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["NumberRun"]["face"], 3);
    }

    #[test]
    fn test_unrolled_hand_rejected() {
        let h = Hand::new(3);
        assert_eq!(Category::chance(&h), Err(CategoryError::HandNotRolled));
        assert_eq!(Category::number_run(1, &h), Err(CategoryError::HandNotRolled));
    }
}
