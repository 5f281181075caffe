//! The five dice a player works with during a round.
//!
//! A `Hand` is created fresh at the start of every round and counts how many
//! times it has been thrown. Throws past the limit leave the dice untouched.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::die::{DiceRoller, Die};
use super::DiceError;

/// Number of dice in a hand.
pub const HAND_SIZE: usize = 5;

/// Face values of a fully rolled hand.
pub type DiceValues = [u8; HAND_SIZE];

/// A validated set of dice indices to throw: unique, in `0..5`, ascending.
///
/// ```
/// use rust_yahtzee::dice::DiceSelection;
///
/// let selection = DiceSelection::new([4, 0, 2]).unwrap();
/// assert_eq!(selection.indices(), &[0, 2, 4]);
/// assert!(DiceSelection::new([1, 1]).is_err());
/// assert!(DiceSelection::new([5]).is_err());
/// ```
///
/// Serialized as a plain index list; deserialization goes through
/// [`DiceSelection::new`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct DiceSelection {
    indices: SmallVec<[u8; HAND_SIZE]>,
}

impl DiceSelection {
    /// Validate a set of indices.
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Result<Self, DiceError> {
        let mut out: SmallVec<[u8; HAND_SIZE]> = SmallVec::new();

        for index in indices {
            if index >= HAND_SIZE {
                return Err(DiceError::IndexOutOfRange(index));
            }
            if out.contains(&(index as u8)) {
                return Err(DiceError::DuplicateIndex(index));
            }
            out.push(index as u8);
        }

        out.sort_unstable();
        Ok(Self { indices: out })
    }

    /// Every die.
    #[must_use]
    pub fn all() -> Self {
        Self {
            indices: (0..HAND_SIZE as u8).collect(),
        }
    }

    /// No dice.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Selected indices, ascending.
    #[must_use]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Check whether die `index` is selected.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.iter().any(|&i| i as usize == index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl TryFrom<Vec<usize>> for DiceSelection {
    type Error = DiceError;

    fn try_from(indices: Vec<usize>) -> Result<Self, Self::Error> {
        DiceSelection::new(indices)
    }
}

impl From<DiceSelection> for Vec<usize> {
    fn from(selection: DiceSelection) -> Self {
        selection.indices.iter().map(|&i| usize::from(i)).collect()
    }
}

/// Five dice plus the number of throws taken this round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    dice: [Die; HAND_SIZE],
    rolls: u8,
    max_throws: u8,
}

impl Hand {
    /// A fresh, unrolled hand allowing `max_throws` throws.
    #[must_use]
    pub fn new(max_throws: u8) -> Self {
        Self {
            dice: [Die::new(); HAND_SIZE],
            rolls: 0,
            max_throws,
        }
    }

    /// A hand already showing `values`, counted as thrown once.
    ///
    /// Used to evaluate arbitrary hands against the rules engine.
    pub fn from_values(values: DiceValues) -> Result<Self, DiceError> {
        let mut dice = [Die::new(); HAND_SIZE];
        for (die, &face) in dice.iter_mut().zip(values.iter()) {
            *die = Die::showing(face)?;
        }

        Ok(Self {
            dice,
            rolls: 1,
            max_throws: crate::core::RulesConfig::default().max_throws,
        })
    }

    /// Throw the selected dice.
    ///
    /// Past the throw limit this is a no-op: dice are unchanged, the counter
    /// does not move and `ThrowLimitReached` is returned. A throw that hits
    /// an index outside the hand or a face outside `1..=6` is rejected the
    /// same way.
    pub fn roll(
        &mut self,
        selection: &DiceSelection,
        roller: &mut dyn DiceRoller,
    ) -> Result<(), DiceError> {
        if !self.can_roll() {
            log::error!("Rolled more than {} times", self.max_throws);
            return Err(DiceError::ThrowLimitReached {
                max: self.max_throws,
            });
        }

        let mut dice = self.dice;
        for &index in selection.indices() {
            let index = usize::from(index);
            let die = dice
                .get_mut(index)
                .ok_or(DiceError::IndexOutOfRange(index))?;
            if let Err(err) = die.roll(roller) {
                log::error!("Die {} - {}", index, err);
                return Err(err);
            }
        }

        self.dice = dice;
        self.rolls += 1;
        Ok(())
    }

    /// Throws taken this round.
    #[must_use]
    pub fn rolls(&self) -> u8 {
        self.rolls
    }

    /// Throw limit for this round.
    #[must_use]
    pub fn max_throws(&self) -> u8 {
        self.max_throws
    }

    /// Throws left this round.
    #[must_use]
    pub fn remaining_rolls(&self) -> u8 {
        self.max_throws.saturating_sub(self.rolls)
    }

    /// Check whether another throw is allowed.
    #[must_use]
    pub fn can_roll(&self) -> bool {
        self.rolls < self.max_throws
    }

    /// The dice, in slot order.
    #[must_use]
    pub fn dice(&self) -> &[Die; HAND_SIZE] {
        &self.dice
    }

    /// Face values, or `None` while any die is still unrolled.
    #[must_use]
    pub fn values(&self) -> Option<DiceValues> {
        let mut values = [0u8; HAND_SIZE];
        for (out, die) in values.iter_mut().zip(self.dice.iter()) {
            *out = die.value()?;
        }
        Some(values)
    }

    /// Check whether every die shows a face.
    #[must_use]
    pub fn is_rolled(&self) -> bool {
        self.values().is_some()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new(crate::core::RulesConfig::default().max_throws)
    }
}
