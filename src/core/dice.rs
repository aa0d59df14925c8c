//! Dice and roll outcomes.
//!
//! `Dice` rolls a fixed number of dice and remembers the last outcome.
//! The outcome is also returned as a `Roll` so callers thread it through
//! the rules explicitly instead of reading it back from the dice.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rng::GameRng;

/// Faces on a standard die.
pub const STANDARD_SIDES: u8 = 6;

/// Ordered die values from one roll.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roll {
    values: SmallVec<[u8; 2]>,
}

impl Roll {
    /// Create a roll from explicit die values.
    #[must_use]
    pub fn new(values: &[u8]) -> Self {
        Self {
            values: SmallVec::from_slice(values),
        }
    }

    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Sum of all dice.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.values.iter().map(|&v| u32::from(v)).sum()
    }

    /// Two or more dice, all showing the same face.
    #[must_use]
    pub fn is_double(&self) -> bool {
        self.values.len() >= 2 && self.values.iter().all(|&v| v == self.values[0])
    }

    /// The last die value, if any dice were rolled.
    #[must_use]
    pub fn last(&self) -> Option<u8> {
        self.values.last().copied()
    }
}

/// Where face values come from.
#[derive(Clone, Debug)]
enum DiceSource {
    Random(GameRng),
    /// Cycles through fixed faces. Used for deterministic play and tests.
    Scripted { faces: Vec<u8>, cursor: usize },
}

/// A set of identical dice rolled together.
///
/// ## Usage
///
/// ```
/// use board_race::core::Dice;
///
/// let mut dice = Dice::scripted(2, &[3, 3, 2, 5]);
/// assert_eq!(dice.roll().total(), 6);
/// assert_eq!(dice.last_values(), &[3, 3]);
/// assert_eq!(dice.roll().values(), &[2, 5]);
/// ```
#[derive(Clone, Debug)]
pub struct Dice {
    count: usize,
    sides: u8,
    source: DiceSource,
    last: Roll,
}

impl Dice {
    /// `count` six-sided dice driven by `rng`.
    #[must_use]
    pub fn new(count: usize, rng: GameRng) -> Self {
        assert!(count > 0, "Must roll at least 1 die");
        Self {
            count,
            sides: STANDARD_SIDES,
            source: DiceSource::Random(rng),
            last: Roll::default(),
        }
    }

    /// `count` dice whose faces repeat `faces` in order.
    #[must_use]
    pub fn scripted(count: usize, faces: &[u8]) -> Self {
        assert!(count > 0, "Must roll at least 1 die");
        assert!(!faces.is_empty(), "Scripted dice need at least one face");
        Self {
            count,
            sides: STANDARD_SIDES,
            source: DiceSource::Scripted {
                faces: faces.to_vec(),
                cursor: 0,
            },
            last: Roll::default(),
        }
    }

    /// Number of dice per roll.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Roll every die and remember the outcome.
    pub fn roll(&mut self) -> Roll {
        let sides = self.sides;
        let values: SmallVec<[u8; 2]> = (0..self.count)
            .map(|_| match &mut self.source {
                DiceSource::Random(rng) => rng.roll_die(sides),
                DiceSource::Scripted { faces, cursor } => {
                    let face = faces[*cursor % faces.len()];
                    *cursor += 1;
                    face
                }
            })
            .collect();
        self.last = Roll { values };
        self.last.clone()
    }

    /// Values of the most recent roll; empty before the first roll.
    #[must_use]
    pub fn last_values(&self) -> &[u8] {
        self.last.values()
    }
}
