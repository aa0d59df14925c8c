//! Ludo strategy.

use std::sync::Arc;

use super::GameStrategy;
use crate::board::{LudoPath, MovementGraph, TileId};
use crate::core::{EngineError, GameState, LudoColor, PlayerId, Result, Token};
use crate::rules::{LudoRuleEngine, RuleEngine};

/// Pieces per ludo player.
pub const PIECES_PER_PLAYER: usize = 4;

/// One die, four pieces per player, pieces start at home.
#[derive(Clone, Debug)]
pub struct LudoGameStrategy {
    path: Arc<LudoPath>,
    rules: LudoRuleEngine,
}

impl Default for LudoGameStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl LudoGameStrategy {
    #[must_use]
    pub fn new() -> Self {
        let path = Arc::new(LudoPath::new());
        let rules = LudoRuleEngine::new(Arc::clone(&path));
        Self { path, rules }
    }

    #[must_use]
    pub fn path(&self) -> &LudoPath {
        &self.path
    }
}

impl GameStrategy for LudoGameStrategy {
    fn rules(&self) -> &dyn RuleEngine {
        &self.rules
    }

    fn graph(&self) -> &dyn MovementGraph {
        &*self.path
    }

    fn pieces_per_player(&self) -> usize {
        PIECES_PER_PLAYER
    }

    fn dice_count(&self) -> usize {
        1
    }

    /// One player per color, at most four.
    fn validate_player(&self, token: &Token, state: &GameState) -> Result<()> {
        let color = token.color().ok_or_else(|| {
            EngineError::InvalidArgument(format!("'{token}' is not a ludo color"))
        })?;
        if state.player_count() >= LudoColor::ALL.len() {
            return Err(EngineError::InvalidArgument(
                "ludo seats at most four players".into(),
            ));
        }
        if state.players().iter().any(|p| p.color() == Some(color)) {
            return Err(EngineError::InvalidArgument(format!(
                "{color} is already taken"
            )));
        }
        Ok(())
    }

    fn resolve_move(
        &self,
        player: PlayerId,
        piece: usize,
        steps: i32,
        state: &GameState,
    ) -> Result<Option<TileId>> {
        let seated = state
            .player(player)
            .ok_or_else(|| EngineError::InvalidArgument(format!("{player} is not seated")))?;
        if piece >= seated.piece_count() {
            return Err(EngineError::InvalidArgument(format!(
                "piece {piece} out of range, {player} has {}",
                seated.piece_count()
            )));
        }
        let color = seated.color().ok_or_else(|| {
            EngineError::InvalidArgument(format!("{player} has no ludo color"))
        })?;

        let current = seated.piece_tile(piece);
        if current.is_some_and(|tile| self.path.is_end(tile)) {
            return Ok(None);
        }

        let destination = self.path.next_tile(current, steps, color)?;
        Ok(destination.filter(|&tile| Some(tile) != current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::lane;
    use crate::core::{Player, Roll};
    use chrono::NaiveDate;

    fn setup(colors: &[LudoColor]) -> (LudoGameStrategy, GameState) {
        let strategy = LudoGameStrategy::new();
        let mut state = GameState::new();
        let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        for color in colors {
            let token = Token::from(*color);
            strategy.validate_player(&token, &state).unwrap();
            state.push_player(Player::new(color.name(), token, date, PIECES_PER_PLAYER));
        }
        strategy.initialize_game(&mut state);
        (strategy, state)
    }

    #[test]
    fn test_initialize_puts_pieces_home() {
        let (_, state) = setup(&[LudoColor::Blue, LudoColor::Red]);
        for player in state.players() {
            assert_eq!(player.piece_count(), 4);
            assert!(player.pieces.iter().all(|p| p.is_home()));
        }
    }

    #[test]
    fn test_home_needs_six() {
        let (strategy, mut state) = setup(&[LudoColor::Blue, LudoColor::Red, LudoColor::Green, LudoColor::Yellow]);
        for (seat, entry) in [1, 14, 27, 40].into_iter().enumerate() {
            let player = PlayerId(seat as u8);
            assert_eq!(strategy.move_piece(player, 0, 5, &mut state).unwrap(), None);
            assert!(state.players()[seat].pieces[0].is_home());

            assert_eq!(
                strategy.move_piece(player, 0, 6, &mut state).unwrap(),
                Some(TileId(entry))
            );
            assert_eq!(state.players()[seat].piece_tile(0), Some(TileId(entry)));
        }
    }

    #[test]
    fn test_piece_index_validated() {
        let (strategy, mut state) = setup(&[LudoColor::Blue]);
        assert!(matches!(
            strategy.move_piece(PlayerId(0), 4, 6, &mut state),
            Err(EngineError::InvalidArgument(_))
        ));
        assert!(!strategy.can_move(PlayerId(0), 4, 6, &state));
    }

    #[test]
    fn test_finished_piece_stays() {
        let (strategy, mut state) = setup(&[LudoColor::Yellow]);
        let final_goal = lane(LudoColor::Yellow).final_goal;
        state.set_piece_tile(PlayerId(0), 2, Some(final_goal));
        assert_eq!(strategy.move_piece(PlayerId(0), 2, 3, &mut state).unwrap(), None);
        assert!(!strategy.can_move(PlayerId(0), 2, 6, &state));
    }

    #[test]
    fn test_zero_steps_goes_nowhere() {
        let (strategy, mut state) = setup(&[LudoColor::Blue]);
        state.set_piece_tile(PlayerId(0), 0, Some(TileId(7)));
        assert_eq!(strategy.move_piece(PlayerId(0), 0, 0, &mut state).unwrap(), None);
    }

    #[test]
    fn test_validate_player_roster_rules() {
        let (strategy, state) = setup(&[LudoColor::Blue, LudoColor::Red]);
        assert!(strategy.validate_player(&Token::new("green"), &state).is_ok());
        assert!(strategy.validate_player(&Token::new("BLUE"), &state).is_err());
        assert!(strategy.validate_player(&Token::new("hat"), &state).is_err());

        let (strategy, full) = setup(&LudoColor::ALL);
        assert!(strategy.validate_player(&Token::new("red"), &full).is_err());
    }

    #[test]
    fn test_extra_turn_on_six() {
        let (strategy, state) = setup(&[LudoColor::Blue]);
        assert!(strategy.process_dice_roll(PlayerId(0), &Roll::new(&[6]), &state));
        assert!(!strategy.process_dice_roll(PlayerId(0), &Roll::new(&[4]), &state));
    }
}
