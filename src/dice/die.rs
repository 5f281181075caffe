//! A single six-sided die and the sources that roll it.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, DIE_FACES};

use super::DiceError;

/// Symbolic names of the six faces, indexed by `face - 1`.
pub const FACE_NAMES: [&str; 6] = ["one", "two", "three", "four", "five", "six"];

/// Check a face value is in `1..=6`.
#[must_use]
pub fn is_valid_face(face: u8) -> bool {
    (1..=DIE_FACES).contains(&face)
}

/// Source of die faces.
///
/// `GameRng` is the source used in play. `ScriptedDice` replays a fixed
/// sequence, for tests and replays.
pub trait DiceRoller {
    /// Produce the next face, in `1..=6`.
    fn roll_die(&mut self) -> u8;
}

impl DiceRoller for GameRng {
    fn roll_die(&mut self) -> u8 {
        GameRng::roll_die(self)
    }
}

/// A die source that replays a fixed script of faces, cycling when exhausted.
///
/// ```
/// use rust_yahtzee::dice::{DiceRoller, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([6, 5]).unwrap();
/// assert_eq!(dice.roll_die(), 6);
/// assert_eq!(dice.roll_die(), 5);
/// assert_eq!(dice.roll_die(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    script: Vec<u8>,
    queue: VecDeque<u8>,
}

impl ScriptedDice {
    /// Create a scripted source. Every face must be in `1..=6`.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Result<Self, DiceError> {
        let script: Vec<u8> = faces.into_iter().collect();
        if script.is_empty() {
            return Err(DiceError::EmptyScript);
        }
        if let Some(&bad) = script.iter().find(|&&f| !is_valid_face(f)) {
            return Err(DiceError::InvalidFace(bad));
        }

        Ok(Self {
            queue: script.iter().copied().collect(),
            script,
        })
    }

    /// Append more faces to the end of the pending queue.
    pub fn push(&mut self, faces: impl IntoIterator<Item = u8>) -> Result<(), DiceError> {
        for face in faces {
            if !is_valid_face(face) {
                return Err(DiceError::InvalidFace(face));
            }
            self.queue.push_back(face);
        }
        Ok(())
    }
}

impl DiceRoller for ScriptedDice {
    fn roll_die(&mut self) -> u8 {
        if self.queue.is_empty() {
            self.queue.extend(self.script.iter().copied());
        }
        // The script is never empty, so the queue was just refilled.
        self.queue.pop_front().unwrap_or(1)
    }
}

/// A face value known to be in `1..=6`.
///
/// Deserialization goes through [`Face::new`], so an out-of-range number is
/// rejected at the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Face(u8);

impl Face {
    /// Validate a face value.
    pub fn new(face: u8) -> Result<Self, DiceError> {
        if !is_valid_face(face) {
            return Err(DiceError::InvalidFace(face));
        }
        Ok(Self(face))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Position in `FACE_NAMES` and `CategoryName::ALL` (`face - 1`).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Symbolic name ("one".."six").
    #[must_use]
    pub fn name(self) -> &'static str {
        FACE_NAMES[self.index()]
    }
}

impl TryFrom<u8> for Face {
    type Error = DiceError;

    fn try_from(face: u8) -> Result<Self, Self::Error> {
        Face::new(face)
    }
}

impl From<Face> for u8 {
    fn from(face: Face) -> Self {
        face.0
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A six-sided die holding its last-rolled face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    value: Option<Face>,
}

impl Die {
    /// A die that has not been rolled yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// A die showing `face`.
    pub fn showing(face: u8) -> Result<Self, DiceError> {
        Ok(Self {
            value: Some(Face::new(face)?),
        })
    }

    /// Roll the die, returning the new face.
    ///
    /// A face outside `1..=6` from `roller` is rejected and the die keeps
    /// its previous value.
    pub fn roll(&mut self, roller: &mut dyn DiceRoller) -> Result<u8, DiceError> {
        let face = Face::new(roller.roll_die())?;
        self.value = Some(face);
        Ok(face.get())
    }

    /// Last rolled face, `None` before the first roll.
    #[must_use]
    pub fn value(&self) -> Option<u8> {
        self.value.map(Face::get)
    }

    /// Last rolled face as a validated [`Face`].
    #[must_use]
    pub fn face(&self) -> Option<Face> {
        self.value
    }

    /// Symbolic name of the face ("one".."six").
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        self.value.map(Face::name)
    }
}

/// Symbolic name of a face value.
#[must_use]
pub fn face_name(face: u8) -> Option<&'static str> {
    Face::new(face).ok().map(Face::name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_die_is_unset() {
        let die = Die::new();
        assert_eq!(die.value(), None);
        assert_eq!(die.name(), None);
    }

    #[test]
    fn test_roll_sets_value() {
        let mut die = Die::new();
        let mut rng = GameRng::new(42);

        for _ in 0..50 {
            let face = die.roll(&mut rng).unwrap();
            assert_eq!(die.value(), Some(face));
            assert!(is_valid_face(face));
        }
    }

    #[test]
    fn test_showing_validates() {
        assert_eq!(Die::showing(4).unwrap().name(), Some("four"));
        assert_eq!(Die::showing(0), Err(DiceError::InvalidFace(0)));
        assert_eq!(Die::showing(7), Err(DiceError::InvalidFace(7)));
    }

    #[test]
    fn test_face_names() {
        assert_eq!(face_name(1), Some("one"));
        assert_eq!(face_name(6), Some("six"));
        assert_eq!(face_name(0), None);
    }

    #[test]
    fn test_scripted_dice_cycles() {
        let mut dice = ScriptedDice::new([1, 2, 3]).unwrap();
        let faces: Vec<_> = (0..7).map(|_| dice.roll_die()).collect();
        assert_eq!(faces, vec![1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn test_scripted_dice_push() {
        let mut dice = ScriptedDice::new([1]).unwrap();
        dice.push([6, 6]).unwrap();
        assert_eq!(dice.roll_die(), 1);
        assert_eq!(dice.roll_die(), 6);
        assert_eq!(dice.roll_die(), 6);
        assert_eq!(dice.roll_die(), 1);
        assert_eq!(dice.push([9]), Err(DiceError::InvalidFace(9)));
    }

    #[test]
    fn test_scripted_dice_rejects_bad_scripts() {
        assert_eq!(
            ScriptedDice::new(Vec::new()).unwrap_err(),
            DiceError::EmptyScript
        );
        assert_eq!(
            ScriptedDice::new([3, 0]).unwrap_err(),
            DiceError::InvalidFace(0)
        );
    }

    struct LoadedDice(u8);

    impl DiceRoller for LoadedDice {
        fn roll_die(&mut self) -> u8 {
            self.0
        }
    }

    #[test]
    fn test_roll_rejects_out_of_range_face() {
        let mut die = Die::showing(3).unwrap();

        assert_eq!(die.roll(&mut LoadedDice(7)), Err(DiceError::InvalidFace(7)));
        assert_eq!(die.roll(&mut LoadedDice(0)), Err(DiceError::InvalidFace(0)));
        assert_eq!(die.value(), Some(3));

        assert_eq!(die.roll(&mut LoadedDice(5)), Ok(5));
        assert_eq!(die.name(), Some("five"));
    }

    #[test]
    fn test_face_validation() {
        let face = Face::new(6).unwrap();
        assert_eq!(face.get(), 6);
        assert_eq!(face.index(), 5);
        assert_eq!(face.name(), "six");
        assert_eq!(Face::new(9), Err(DiceError::InvalidFace(9)));
        assert_eq!(Face::try_from(0u8), Err(DiceError::InvalidFace(0)));
    }

    #[test]
    fn test_die_deserialization_validates_face() {
        let die = Die::showing(2).unwrap();
        let json = serde_json::to_string(&die).unwrap();
        assert_eq!(json, r#"{"value":2}"#);
        assert_eq!(serde_json::from_str::<Die>(&json).unwrap(), die);

        assert!(serde_json::from_str::<Die>(r#"{"value":9}"#).is_err());
        assert!(serde_json::from_str::<Die>(r#"{"value":0}"#).is_err());
        assert_eq!(serde_json::from_str::<Die>(r#"{"value":null}"#).unwrap(), Die::new());
    }
}
