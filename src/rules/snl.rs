//! Rules for the linear race (snakes and ladders).

use std::sync::Arc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;

use super::engine::RuleEngine;
use crate::board::{LinearBoard, MovementGraph, TileId};
use crate::core::{GameState, LinearBoardConfig, PlayerId};

/// Rules for the linear race.
///
/// - Extra turn: a double, except double six.
/// - Landing on a teleport head moves the piece to its tail.
/// - Opponents on the resulting tile go back to the start, unless the
///   resulting tile is the start itself.
/// - Win: standing on the terminal tile.
#[derive(Clone, Debug)]
pub struct SnlRuleEngine {
    board: Arc<LinearBoard>,
    teleports: FxHashMap<TileId, TileId>,
}

impl SnlRuleEngine {
    /// Build from a validated board configuration.
    pub fn new(board: Arc<LinearBoard>, config: &LinearBoardConfig) -> Self {
        let teleports = config
            .teleports()
            .into_iter()
            .map(|(head, tail)| (TileId(head), TileId(tail)))
            .collect();
        Self { board, teleports }
    }

    /// Where a piece landing on `tile` finally rests.
    #[must_use]
    pub fn destination(&self, tile: TileId) -> TileId {
        self.teleports.get(&tile).copied().unwrap_or(tile)
    }

    #[must_use]
    pub fn board(&self) -> &LinearBoard {
        &self.board
    }
}

impl RuleEngine for SnlRuleEngine {
    fn grants_extra_turn(&self, _player: PlayerId, dice: &[u8], _state: &GameState) -> bool {
        matches!(dice, [a, b] if a == b && *a != 6)
    }

    fn apply_post_landing_effects(
        &self,
        player: PlayerId,
        piece: usize,
        landed: TileId,
        state: &mut GameState,
    ) {
        let destination = self.destination(landed);
        if destination != landed {
            debug!(%player, from = landed.raw(), to = destination.raw(), "teleport");
        }
        state.set_piece_tile(player, piece, Some(destination));

        let start = self.board.start();
        if Some(destination) == start {
            return;
        }

        let captured: SmallVec<[(PlayerId, usize); 4]> = state
            .occupants(destination)
            .filter(|&(owner, _)| owner != player)
            .collect();
        for (victim, victim_piece) in captured {
            debug!(%player, %victim, tile = destination.raw(), "capture, back to start");
            state.set_piece_tile(victim, victim_piece, start);
        }
    }

    fn has_won(&self, player: PlayerId, state: &GameState) -> bool {
        state
            .player(player)
            .and_then(|p| p.current_tile())
            .is_some_and(|tile| self.board.is_end(tile))
    }
}
