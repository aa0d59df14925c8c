//! Board configuration records.
//!
//! External loaders hand the engine one of these at `new_game`:
//! - `LinearBoardConfig`: size plus hazard (snake) and ladder teleports
//! - `BoardConfig::Ludo`: the fixed ring-and-lanes topology
//!
//! Configuration is validated once, up front. A board that passes
//! `validate()` cannot fail later.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// Largest accepted linear board, in steps from start to finish.
pub const MAX_BOARD_SIZE: u32 = 10_000;

/// Linear race board: tiles `0..=size` with teleport pairs.
///
/// ## Example
///
/// ```
/// use board_race::core::LinearBoardConfig;
///
/// let config = LinearBoardConfig::new(30)
///     .with_hazard(27, 5)
///     .with_ladder(3, 22);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearBoardConfig {
    /// Id of the terminal tile. The start tile is always 0.
    pub size: u32,

    /// Hazard head -> tail. Usually a tail lies behind its head.
    #[serde(default)]
    pub hazards: FxHashMap<u32, u32>,

    /// Ladder foot -> top.
    #[serde(default)]
    pub ladders: FxHashMap<u32, u32>,
}

impl LinearBoardConfig {
    /// Create a board with no teleports.
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self {
            size,
            hazards: FxHashMap::default(),
            ladders: FxHashMap::default(),
        }
    }

    /// Add a hazard that sends a piece from `head` back to `tail`.
    #[must_use]
    pub fn with_hazard(mut self, head: u32, tail: u32) -> Self {
        self.hazards.insert(head, tail);
        self
    }

    /// Add a ladder that lifts a piece from `foot` up to `top`.
    #[must_use]
    pub fn with_ladder(mut self, foot: u32, top: u32) -> Self {
        self.ladders.insert(foot, top);
        self
    }

    /// Check the board can be built.
    ///
    /// Rejects boards with fewer than two or more than [`MAX_BOARD_SIZE`]
    /// steps, teleports that start on
    /// the start or terminal tile, tails off the board, teleports onto
    /// their own head, a head used by both maps, and a tail that is itself
    /// a head.
    pub fn validate(&self) -> Result<()> {
        if self.size < 2 {
            return Err(EngineError::Configuration(format!(
                "board size must be at least 2, got {}",
                self.size
            )));
        }
        if self.size > MAX_BOARD_SIZE {
            return Err(EngineError::Configuration(format!(
                "board size must be at most {MAX_BOARD_SIZE}, got {}",
                self.size
            )));
        }

        for (&head, &tail) in &self.hazards {
            self.check_teleport("hazard", head, tail)?;
        }

        for (&foot, &top) in &self.ladders {
            self.check_teleport("ladder", foot, top)?;
            if self.hazards.contains_key(&foot) {
                return Err(EngineError::Configuration(format!(
                    "tile {foot} is both a hazard head and a ladder foot"
                )));
            }
        }

        if let Some(tail) = self.teleports().values().find(|t| self.teleport_from(**t).is_some()) {
            return Err(EngineError::Configuration(format!(
                "teleport destination {tail} is itself a teleport head"
            )));
        }

        Ok(())
    }

    /// All teleports, hazards and ladders merged into one head -> tail table.
    #[must_use]
    pub fn teleports(&self) -> FxHashMap<u32, u32> {
        self.hazards
            .iter()
            .chain(self.ladders.iter())
            .map(|(&head, &tail)| (head, tail))
            .collect()
    }

    fn teleport_from(&self, head: u32) -> Option<u32> {
        self.hazards
            .get(&head)
            .or_else(|| self.ladders.get(&head))
            .copied()
    }

    fn check_teleport(&self, kind: &str, head: u32, tail: u32) -> Result<()> {
        if head == 0 || head >= self.size {
            return Err(EngineError::Configuration(format!(
                "{kind} head {head} must lie strictly between the start and tile {}",
                self.size
            )));
        }
        if tail > self.size {
            return Err(EngineError::Configuration(format!(
                "{kind} tail {tail} is off the board (size {})",
                self.size
            )));
        }
        if tail == head {
            return Err(EngineError::Configuration(format!(
                "{kind} {head}->{tail} goes nowhere"
            )));
        }
        Ok(())
    }
}

/// Board selection for a new game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardConfig {
    /// Linear race with teleports, two dice, one piece each.
    Linear(LinearBoardConfig),
    /// Fixed 52-tile ring with four goal lanes, one die, four pieces each.
    Ludo,
}

impl BoardConfig {
    pub fn validate(&self) -> Result<()> {
        match self {
            BoardConfig::Linear(config) => config.validate(),
            BoardConfig::Ludo => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = LinearBoardConfig::new(100)
            .with_hazard(98, 12)
            .with_ladder(4, 40);

        assert_eq!(config.size, 100);
        assert_eq!(config.hazards.get(&98), Some(&12));
        assert_eq!(config.ladders.get(&4), Some(&40));
        assert!(config.validate().is_ok());

        let teleports = config.teleports();
        assert_eq!(teleports.len(), 2);
        assert_eq!(teleports[&4], 40);
    }

    #[test]
    fn test_too_small() {
        assert!(matches!(
            LinearBoardConfig::new(1).validate(),
            Err(EngineError::Configuration(_))
        ));
        assert!(LinearBoardConfig::new(2).validate().is_ok());
    }

    #[test]
    fn test_too_large() {
        assert!(LinearBoardConfig::new(MAX_BOARD_SIZE).validate().is_ok());
        for size in [MAX_BOARD_SIZE + 1, u32::MAX] {
            assert!(matches!(
                LinearBoardConfig::new(size).validate(),
                Err(EngineError::Configuration(_))
            ));
        }

        let json = r#"{"size": 4294967295}"#;
        let config: LinearBoardConfig = serde_json::from_str(json).unwrap();
        assert!(BoardConfig::Linear(config).validate().is_err());
    }

    #[test]
    fn test_rejects_teleport_on_start_or_end() {
        let on_start = LinearBoardConfig::new(10).with_ladder(0, 5);
        assert!(on_start.validate().is_err());

        let on_end = LinearBoardConfig::new(10).with_hazard(10, 2);
        assert!(on_end.validate().is_err());

        let off_board = LinearBoardConfig::new(10).with_ladder(3, 11);
        assert!(off_board.validate().is_err());
    }

    #[test]
    fn test_teleports_go_somewhere() {
        assert!(LinearBoardConfig::new(10).with_hazard(4, 4).validate().is_err());
        assert!(LinearBoardConfig::new(10).with_ladder(6, 6).validate().is_err());
        // Either map may point either way.
        assert!(LinearBoardConfig::new(10).with_hazard(4, 6).validate().is_ok());
        assert!(LinearBoardConfig::new(10).with_ladder(6, 4).validate().is_ok());
    }

    #[test]
    fn test_rejects_shared_and_chained_heads() {
        let shared = LinearBoardConfig::new(10).with_hazard(5, 1).with_ladder(5, 8);
        assert!(shared.validate().is_err());

        let chained = LinearBoardConfig::new(10).with_ladder(2, 6).with_hazard(6, 1);
        assert!(chained.validate().is_err());
    }

    #[test]
    fn test_deserialize_loader_record() {
        let json = r#"{"size": 5, "hazards": {"4": 1}}"#;
        let config: LinearBoardConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.size, 5);
        assert_eq!(config.hazards[&4], 1);
        assert!(config.ladders.is_empty());
        assert!(BoardConfig::Linear(config).validate().is_ok());
        assert!(BoardConfig::Ludo.validate().is_ok());
    }
}
