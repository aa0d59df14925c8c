//! Mutable table state: the roster, every piece, and whose turn it is.
//!
//! Boards are immutable and owned by the strategy; everything a turn
//! changes lives here so rule engines can mutate it through one `&mut`.

use super::player::{Player, PlayerId};
use crate::board::TileId;

/// Largest roster a game can seat; seats are addressed by `PlayerId(u8)`.
pub const MAX_PLAYERS: usize = u8::MAX as usize;

/// Roster, piece positions, and the current seat.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    players: Vec<Player>,
    current: usize,
}

impl GameState {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.players.len())
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&Player> {
        self.players.get(player.index())
    }

    pub fn player_mut(&mut self, player: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(player.index())
    }

    /// Seat a new player at the end of the roster.
    ///
    /// Panics past [`MAX_PLAYERS`]; callers check the limit first.
    pub fn push_player(&mut self, player: Player) -> PlayerId {
        assert!(self.players.len() < MAX_PLAYERS, "At most 255 players supported");
        self.players.push(player);
        PlayerId((self.players.len() - 1) as u8)
    }

    /// Replace the roster order. The turn goes back to the first seat.
    pub fn reorder_players(&mut self, order: impl FnOnce(&mut Vec<Player>)) {
        order(&mut self.players);
        self.current = 0;
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId(self.current as u8)
    }

    /// Give the turn back to the first seat.
    pub fn reset_turn(&mut self) {
        self.current = 0;
    }

    /// Pass the turn to the next seat, wrapping around.
    pub fn advance_turn(&mut self) -> PlayerId {
        if !self.players.is_empty() {
            self.current = (self.current + 1) % self.players.len();
        }
        self.current_player()
    }

    /// Every `(player, piece)` standing on `tile`.
    pub fn occupants(&self, tile: TileId) -> impl Iterator<Item = (PlayerId, usize)> + '_ {
        self.players.iter().enumerate().flat_map(move |(seat, player)| {
            player
                .pieces
                .iter()
                .enumerate()
                .filter(move |(_, piece)| piece.tile == Some(tile))
                .map(move |(index, _)| (PlayerId(seat as u8), index))
        })
    }

    /// Move one piece. Out-of-range indices are ignored.
    pub fn set_piece_tile(&mut self, player: PlayerId, piece: usize, tile: Option<TileId>) {
        if let Some(p) = self
            .players
            .get_mut(player.index())
            .and_then(|p| p.pieces.get_mut(piece))
        {
            p.tile = tile;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::Token;
    use chrono::NaiveDate;

    fn player(name: &str, pieces: usize) -> Player {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        Player::new(name, Token::new("x"), date, pieces)
    }

    #[test]
    fn test_roster_and_turns() {
        let mut state = GameState::new();
        assert_eq!(state.player_count(), 0);
        assert_eq!(state.advance_turn(), PlayerId(0));

        assert_eq!(state.push_player(player("a", 1)), PlayerId(0));
        assert_eq!(state.push_player(player("b", 1)), PlayerId(1));
        assert_eq!(state.push_player(player("c", 1)), PlayerId(2));

        assert_eq!(state.current_player(), PlayerId(0));
        assert_eq!(state.advance_turn(), PlayerId(1));
        assert_eq!(state.advance_turn(), PlayerId(2));
        assert_eq!(state.advance_turn(), PlayerId(0));
    }

    #[test]
    fn test_occupants() {
        let mut state = GameState::new();
        state.push_player(player("a", 2));
        state.push_player(player("b", 2));

        state.set_piece_tile(PlayerId(0), 1, Some(TileId(5)));
        state.set_piece_tile(PlayerId(1), 0, Some(TileId(5)));
        state.set_piece_tile(PlayerId(1), 1, Some(TileId(6)));
        // Ignored: no such piece.
        state.set_piece_tile(PlayerId(1), 7, Some(TileId(5)));

        let on_five: Vec<_> = state.occupants(TileId(5)).collect();
        assert_eq!(on_five, vec![(PlayerId(0), 1), (PlayerId(1), 0)]);
        assert_eq!(state.occupants(TileId(9)).count(), 0);
    }

    #[test]
    fn test_reorder_resets_turn() {
        let mut state = GameState::new();
        state.push_player(player("a", 1));
        state.push_player(player("b", 1));
        state.advance_turn();

        state.reorder_players(|players| players.reverse());
        assert_eq!(state.current_player(), PlayerId(0));
        assert_eq!(state.players()[0].name, "b");
    }
}
