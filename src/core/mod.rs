//! Core engine types: players, dice, RNG, configuration, state, errors.
//!
//! This module contains the building blocks shared by both games. Games
//! differ only in the boards, rule engines, and strategies built on top.

pub mod error;
pub mod player;
pub mod rng;
pub mod dice;
pub mod config;
pub mod state;

pub use error::{EngineError, Result};
pub use player::{LudoColor, Player, PlayerId, PlayerPiece, Token};
pub use rng::{GameRng, GameRngState};
pub use dice::{Dice, Roll, STANDARD_SIDES};
pub use config::{BoardConfig, LinearBoardConfig, MAX_BOARD_SIZE};
pub use state::{GameState, MAX_PLAYERS};
