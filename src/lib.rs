//! # board-race
//!
//! A turn engine for dice-driven race games: a linear board with hazards
//! and ladders, and four-color ludo.
//!
//! ## Design Principles
//!
//! 1. **Board as Graph**: Tiles live in an arena and link by index.
//!    Boards expose the same `MovementGraph` whatever their shape.
//!
//! 2. **Strategy per Game**: Movement belongs to a `GameStrategy`, effects
//!    and win checks to its `RuleEngine`. The turn coordinator knows
//!    neither game.
//!
//! 3. **Deterministic When Asked**: Dice draw from a seedable ChaCha8 RNG,
//!    so a seeded session replays exactly.
//!
//! ## Modules
//!
//! - `core`: Players, tokens, dice, RNG, configuration, state, errors
//! - `board`: Tiles, the linear board, the ludo path
//! - `rules`: RuleEngine trait and the two rule sets
//! - `strategy`: GameStrategy trait and the two strategies
//! - `game`: Turn state machine and session facade
//! - `roster`: Player rows exchanged with loaders

pub mod core;
pub mod board;
pub mod rules;
pub mod strategy;
pub mod game;
pub mod roster;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, Dice, EngineError, GameRng, GameRngState, GameState, LinearBoardConfig,
    LudoColor, Player, PlayerId, PlayerPiece, Result, Roll, Token,
};

pub use crate::board::{LinearBoard, LudoPath, MovementGraph, Tile, TileId};

pub use crate::rules::{LudoRuleEngine, RuleEngine, SnlRuleEngine};

pub use crate::strategy::{GameStrategy, LudoGameStrategy, SnlGameStrategy};

pub use crate::game::{DefaultGame, GameSession, PlayerSnapshot, TurnPhase};

pub use crate::roster::{decode_rows, encode_rows, PlayerRow, RosterError};
