//! Rule engine trait for game implementations.
//!
//! Games implement `RuleEngine` to define their rules:
//! - When a roll earns another roll
//! - What happens after a piece lands (teleports, captures)
//! - When a player has won

use std::fmt::Debug;

use crate::core::{GameState, PlayerId};
use crate::board::TileId;

/// Rule engine trait.
///
/// Rule engines are stateless policy objects. Everything they read or
/// change is passed in, so each decision is a function of its arguments.
///
/// ## Implementation Notes
///
/// - `grants_extra_turn`: sees the individual die values, not just the sum
/// - `apply_post_landing_effects`: runs after the piece is already on
///   `landed`; may move any piece on the table
/// - `has_won`: must stay true once true
pub trait RuleEngine: Debug {
    /// Does this roll let `player` roll again?
    fn grants_extra_turn(&self, player: PlayerId, dice: &[u8], state: &GameState) -> bool;

    /// Resolve teleports and captures for a piece that just landed.
    fn apply_post_landing_effects(
        &self,
        player: PlayerId,
        piece: usize,
        landed: TileId,
        state: &mut GameState,
    );

    /// Has `player` met the win condition?
    fn has_won(&self, player: PlayerId, state: &GameState) -> bool;
}
