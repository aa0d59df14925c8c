//! Game strategies: how one piece moves for one game.
//!
//! A strategy owns its movement graph and rule engine. The turn
//! coordinator only talks to the strategy; the strategy resolves movement
//! on its graph and delegates everything else to its rules.

pub mod snl;
pub mod ludo;

pub use snl::SnlGameStrategy;
pub use ludo::LudoGameStrategy;

use std::fmt::Debug;

use crate::board::{MovementGraph, TileId};
use crate::core::{GameState, PlayerId, Result, Roll, Token};
use crate::rules::RuleEngine;

/// Per-game movement policy.
///
/// ## Implementation Notes
///
/// - `resolve_move` is pure; `move_piece` applies it
/// - `Ok(None)` from either means a legal "no movement" outcome
/// - Effects, extra turns, and wins are the rule engine's business
pub trait GameStrategy: Debug {
    /// The rule engine this strategy delegates to.
    fn rules(&self) -> &dyn RuleEngine;

    /// The board pieces move on.
    fn graph(&self) -> &dyn MovementGraph;

    /// Pieces each player moves.
    fn pieces_per_player(&self) -> usize;

    /// Dice rolled per turn.
    fn dice_count(&self) -> usize;

    /// Check that a player with `token` may join the current roster.
    fn validate_player(&self, token: &Token, state: &GameState) -> Result<()>;

    /// Where a piece would land after `steps`, without moving it.
    fn resolve_move(
        &self,
        player: PlayerId,
        piece: usize,
        steps: i32,
        state: &GameState,
    ) -> Result<Option<TileId>>;

    /// Put every piece in its starting state.
    fn initialize_game(&self, state: &mut GameState) {
        let start = self.graph().start();
        for player in state.players_mut() {
            for piece in player.pieces.iter_mut() {
                piece.tile = start;
            }
        }
    }

    /// Decide whether `roll` earns `player` another roll.
    fn process_dice_roll(&self, player: PlayerId, roll: &Roll, state: &GameState) -> bool {
        self.rules().grants_extra_turn(player, roll.values(), state)
    }

    /// Move a piece `steps` forward. Returns the tile it lands on, or
    /// `None` when the move is legal but goes nowhere.
    fn move_piece(
        &self,
        player: PlayerId,
        piece: usize,
        steps: i32,
        state: &mut GameState,
    ) -> Result<Option<TileId>> {
        place_piece(self, player, piece, steps, state)
    }

    /// Whether `piece` would actually go somewhere with `steps`.
    fn can_move(&self, player: PlayerId, piece: usize, steps: i32, state: &GameState) -> bool {
        matches!(self.resolve_move(player, piece, steps, state), Ok(Some(_)))
    }

    fn check_win_condition(&self, player: PlayerId, state: &GameState) -> bool {
        self.rules().has_won(player, state)
    }

    /// Run post-landing effects for a piece now on `destination`.
    fn apply_special_rules(
        &self,
        player: PlayerId,
        piece: usize,
        destination: TileId,
        state: &mut GameState,
    ) {
        self.rules()
            .apply_post_landing_effects(player, piece, destination, state);
    }
}

/// Resolve a move and put `piece` on the result, if any.
fn place_piece<S: GameStrategy + ?Sized>(
    strategy: &S,
    player: PlayerId,
    piece: usize,
    steps: i32,
    state: &mut GameState,
) -> Result<Option<TileId>> {
    let destination = strategy.resolve_move(player, piece, steps, state)?;
    if destination.is_some() {
        state.set_piece_tile(player, piece, destination);
    }
    Ok(destination)
}
