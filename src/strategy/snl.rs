//! Linear race strategy.

use std::sync::Arc;

use super::GameStrategy;
use crate::board::{LinearBoard, MovementGraph, TileId};
use crate::core::{EngineError, GameState, LinearBoardConfig, PlayerId, Result, Token};
use crate::rules::{RuleEngine, SnlRuleEngine};

/// A combined roll of exactly this many pips never moves the piece.
pub const VOID_ROLL: i32 = 12;

/// Two dice, one piece per player, start on tile 0.
#[derive(Clone, Debug)]
pub struct SnlGameStrategy {
    board: Arc<LinearBoard>,
    rules: SnlRuleEngine,
}

impl SnlGameStrategy {
    /// Validate `config` and build the board and rules from it.
    pub fn new(config: &LinearBoardConfig) -> Result<Self> {
        config.validate()?;
        let board = Arc::new(LinearBoard::new(config.size)?);
        let rules = SnlRuleEngine::new(Arc::clone(&board), config);
        Ok(Self { board, rules })
    }

    #[must_use]
    pub fn board(&self) -> &LinearBoard {
        &self.board
    }
}

impl GameStrategy for SnlGameStrategy {
    fn rules(&self) -> &dyn RuleEngine {
        &self.rules
    }

    fn graph(&self) -> &dyn MovementGraph {
        &*self.board
    }

    fn pieces_per_player(&self) -> usize {
        1
    }

    fn dice_count(&self) -> usize {
        2
    }

    fn validate_player(&self, _token: &Token, _state: &GameState) -> Result<()> {
        Ok(())
    }

    /// `piece` is ignored: each player has exactly one.
    fn resolve_move(
        &self,
        player: PlayerId,
        _piece: usize,
        steps: i32,
        state: &GameState,
    ) -> Result<Option<TileId>> {
        let current = state
            .player(player)
            .ok_or_else(|| EngineError::InvalidArgument(format!("{player} is not seated")))?
            .current_tile()
            .unwrap_or(TileId(0));

        if steps == VOID_ROLL {
            return Ok(None);
        }

        self.board.advance(current, steps).map(Some)
    }

    /// Always moves the player's only piece.
    fn move_piece(
        &self,
        player: PlayerId,
        _piece: usize,
        steps: i32,
        state: &mut GameState,
    ) -> Result<Option<TileId>> {
        super::place_piece(self, player, 0, steps, state)
    }
}
