//! Rules for the four-color ring race (ludo).

use std::sync::Arc;

use smallvec::SmallVec;
use tracing::debug;

use super::engine::RuleEngine;
use crate::board::{lane, LudoPath, TileId, ENTRY_ROLL};
use crate::core::{GameState, PlayerId};

/// Rules for ludo.
///
/// - Extra turn: the die shows a six.
/// - Landing on a ring tile sends every opponent piece there home.
///   A player's own pieces and all goal-lane tiles are safe.
/// - Win: every piece on the color's final goal tile.
#[derive(Clone, Debug)]
pub struct LudoRuleEngine {
    path: Arc<LudoPath>,
}

impl LudoRuleEngine {
    pub fn new(path: Arc<LudoPath>) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &LudoPath {
        &self.path
    }
}

impl RuleEngine for LudoRuleEngine {
    fn grants_extra_turn(&self, _player: PlayerId, dice: &[u8], _state: &GameState) -> bool {
        dice.last().is_some_and(|&face| i32::from(face) == ENTRY_ROLL)
    }

    fn apply_post_landing_effects(
        &self,
        player: PlayerId,
        piece: usize,
        landed: TileId,
        state: &mut GameState,
    ) {
        state.set_piece_tile(player, piece, Some(landed));

        if !self.path.is_ring(landed) {
            return;
        }

        let captured: SmallVec<[(PlayerId, usize); 4]> = state
            .occupants(landed)
            .filter(|&(owner, _)| owner != player)
            .collect();
        for (victim, victim_piece) in captured {
            debug!(%player, %victim, piece = victim_piece, tile = landed.raw(), "capture, sent home");
            state.set_piece_tile(victim, victim_piece, None);
        }
    }

    fn has_won(&self, player: PlayerId, state: &GameState) -> bool {
        let Some(player) = state.player(player) else {
            return false;
        };
        let Some(color) = player.color() else {
            return false;
        };
        let final_goal = lane(color).final_goal;
        player.pieces.iter().all(|p| p.tile == Some(final_goal))
    }
}
