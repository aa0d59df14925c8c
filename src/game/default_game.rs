//! Turn coordinator.
//!
//! ## Turn phases
//!
//! ```text
//! AwaitingRoll --roll_dice--> [move, effects] --> AwaitingRoll (same or next player)
//!      |                                      \-> Won
//!      \--roll_dice (several movable pieces)--> PieceSelection
//! PieceSelection --select_piece, apply_piece_movement--> [effects] --> AwaitingRoll | Won
//! ```
//!
//! Effects are applied inside the call that moves the piece, so no caller
//! ever observes a half-finished turn.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use super::snapshot::PlayerSnapshot;
use crate::board::MovementGraph;
use crate::core::{
    Dice, EngineError, GameState, Player, PlayerId, Result, Roll, Token, MAX_PLAYERS,
};
use crate::roster::PlayerRow;
use crate::strategy::GameStrategy;

/// Observable turn state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// The current player must roll.
    AwaitingRoll,
    /// Several pieces can use the pending roll; one must be chosen.
    PieceSelection,
    /// A player has won. Terminal.
    Won,
}

/// A roll waiting for the player to pick a piece.
#[derive(Clone, Debug)]
struct PendingMove {
    roll: Roll,
    movable: SmallVec<[usize; 4]>,
    selected: Option<usize>,
}

/// One running game: roster, dice, strategy, and turn order.
///
/// ## Example
///
/// ```
/// use board_race::core::{Dice, LinearBoardConfig, Token};
/// use board_race::game::DefaultGame;
/// use board_race::strategy::SnlGameStrategy;
/// use chrono::NaiveDate;
///
/// let strategy = SnlGameStrategy::new(&LinearBoardConfig::new(20)).unwrap();
/// let mut game = DefaultGame::new(Box::new(strategy), Dice::scripted(2, &[2, 3])).unwrap();
/// let born = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
/// game.add_player("Ann", Token::new("boot"), born).unwrap();
/// game.add_player("Bob", Token::new("car"), born).unwrap();
///
/// assert_eq!(game.roll_dice().unwrap(), 5);
/// assert_eq!(game.current_player_name(), Some("Bob"));
/// ```
#[derive(Debug)]
pub struct DefaultGame {
    strategy: Box<dyn GameStrategy>,
    dice: Dice,
    state: GameState,
    phase: TurnPhase,
    pending: Option<PendingMove>,
    last_roll: Option<Roll>,
    winner: Option<PlayerId>,
    rolls: u32,
}

impl DefaultGame {
    /// Create a game with an empty roster.
    ///
    /// Fails with a configuration error if `dice` rolls a different number
    /// of dice than the strategy plays with.
    pub fn new(strategy: Box<dyn GameStrategy>, dice: Dice) -> Result<Self> {
        if dice.count() != strategy.dice_count() {
            return Err(EngineError::Configuration(format!(
                "this board rolls {} dice, got {}",
                strategy.dice_count(),
                dice.count()
            )));
        }
        Ok(Self {
            strategy,
            dice,
            state: GameState::new(),
            phase: TurnPhase::AwaitingRoll,
            pending: None,
            last_roll: None,
            winner: None,
            rolls: 0,
        })
    }

    // === Roster ===

    /// Append a player. Their pieces start in the game's start state.
    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        token: Token,
        birth_date: NaiveDate,
    ) -> Result<PlayerId> {
        let player = self.build_player(name.into(), token, birth_date, &self.state)?;
        let id = self.state.push_player(player);
        info!(%id, name = %self.state.players()[id.index()].name, "player added");
        Ok(id)
    }

    /// Append every row, or none of them if any row is rejected.
    ///
    /// Returns the number of players added.
    pub fn import_players(&mut self, rows: &[PlayerRow]) -> Result<usize> {
        let mut scratch = self.state.clone();
        for row in rows {
            let player = self.build_player(
                row.name.clone(),
                Token::new(row.token.as_str()),
                row.birth_date,
                &scratch,
            )?;
            scratch.push_player(player);
        }
        let added = scratch.player_count() - self.state.player_count();
        self.state = scratch;
        info!(added, "roster imported");
        Ok(added)
    }

    /// The roster as plain rows, in seat order.
    #[must_use]
    pub fn export_players(&self) -> Vec<PlayerRow> {
        self.state.players().iter().map(PlayerRow::from).collect()
    }

    fn build_player(
        &self,
        name: String,
        token: Token,
        birth_date: NaiveDate,
        state: &GameState,
    ) -> Result<Player> {
        if name.trim().is_empty() {
            return Err(EngineError::InvalidArgument("player name is empty".into()));
        }
        if state.player_count() >= MAX_PLAYERS {
            return Err(EngineError::InvalidArgument(format!(
                "roster is full ({MAX_PLAYERS} players)"
            )));
        }
        self.strategy.validate_player(&token, state)?;

        let mut player = Player::new(name, token, birth_date, self.strategy.pieces_per_player());
        let start = self.strategy.graph().start();
        for piece in player.pieces.iter_mut() {
            piece.tile = start;
        }
        Ok(player)
    }

    /// Seat the youngest player first. Equal birth dates keep roster order.
    ///
    /// Only allowed before the first roll.
    pub fn order_by_birth_date(&mut self) -> Result<()> {
        if self.rolls > 0 {
            return Err(EngineError::Precondition(
                "turn order is fixed once the first die is rolled",
            ));
        }
        self.state
            .reorder_players(|players| players.sort_by(|a, b| b.birth_date.cmp(&a.birth_date)));
        Ok(())
    }

    // === Turn actions ===

    /// Roll for the current player.
    ///
    /// Single-piece games resolve the move immediately. Multi-piece games
    /// move automatically when at most one piece can use the roll, and
    /// otherwise wait in [`TurnPhase::PieceSelection`].
    ///
    /// Returns the dice total; 0 when nobody is seated.
    pub fn roll_dice(&mut self) -> Result<u32> {
        match self.phase {
            TurnPhase::Won => return Err(EngineError::GameOver),
            TurnPhase::PieceSelection => {
                return Err(EngineError::Precondition("a piece must be moved first"))
            }
            TurnPhase::AwaitingRoll => {}
        }
        if self.state.player_count() == 0 {
            return Ok(0);
        }

        let player = self.state.current_player();
        let roll = self.dice.roll();
        let total = roll.total();
        self.rolls += 1;
        self.last_roll = Some(roll.clone());
        debug!(%player, dice = ?roll.values(), total, "rolled");

        if self.strategy.pieces_per_player() == 1 {
            self.resolve_move(player, 0, roll)?;
            return Ok(total);
        }

        let steps = total as i32;
        let movable: SmallVec<[usize; 4]> = (0..self.strategy.pieces_per_player())
            .filter(|&piece| self.strategy.can_move(player, piece, steps, &self.state))
            .collect();

        match movable.len() {
            0 => {
                debug!(%player, "no piece can move");
                self.finish_turn(player, &roll);
            }
            1 => {
                self.resolve_move(player, movable[0], roll)?;
            }
            _ => {
                self.phase = TurnPhase::PieceSelection;
                self.pending = Some(PendingMove {
                    roll,
                    movable,
                    selected: None,
                });
            }
        }

        Ok(total)
    }

    /// Choose which piece the pending roll moves.
    ///
    /// May be called again to change the choice before moving.
    pub fn select_piece(&mut self, piece: usize) -> Result<()> {
        if self.phase == TurnPhase::Won {
            return Err(EngineError::GameOver);
        }
        let pieces = self.strategy.pieces_per_player();
        let Some(pending) = self.pending.as_mut() else {
            return Err(EngineError::Precondition("roll the dice before selecting a piece"));
        };
        if piece >= pieces {
            return Err(EngineError::InvalidArgument(format!(
                "piece {piece} out of range, players have {pieces}"
            )));
        }
        if !pending.movable.contains(&piece) {
            return Err(EngineError::InvalidArgument(format!(
                "piece {piece} cannot move {}",
                pending.roll.total()
            )));
        }
        pending.selected = Some(piece);
        Ok(())
    }

    /// Move the selected piece by the pending roll.
    ///
    /// Returns the steps moved: the roll total, or 0 if the piece stayed.
    pub fn apply_piece_movement(&mut self) -> Result<u32> {
        if self.phase == TurnPhase::Won {
            return Err(EngineError::GameOver);
        }
        let Some(pending) = self.pending.as_ref() else {
            return Err(EngineError::Precondition("roll the dice before moving a piece"));
        };
        let Some(piece) = pending.selected else {
            return Err(EngineError::Precondition("select a piece before moving"));
        };

        let roll = pending.roll.clone();
        let player = self.state.current_player();
        self.resolve_move(player, piece, roll)
    }

    /// Back to the first seat with every piece in its start state.
    pub fn reset_game(&mut self) {
        self.strategy.initialize_game(&mut self.state);
        self.state.reset_turn();
        self.phase = TurnPhase::AwaitingRoll;
        self.pending = None;
        self.last_roll = None;
        self.winner = None;
        self.rolls = 0;
        info!(players = self.state.player_count(), "game reset");
    }

    /// Move, apply effects, then settle the turn. Returns the steps moved.
    fn resolve_move(&mut self, player: PlayerId, piece: usize, roll: Roll) -> Result<u32> {
        let steps = roll.total() as i32;
        let moved = match self.strategy.move_piece(player, piece, steps, &mut self.state)? {
            Some(destination) => {
                debug!(%player, piece, tile = destination.raw(), "moved");
                self.strategy
                    .apply_special_rules(player, piece, destination, &mut self.state);
                roll.total()
            }
            None => {
                debug!(%player, piece, steps, "no movement");
                0
            }
        };

        if self.strategy.check_win_condition(player, &self.state) {
            info!(%player, "winner");
            self.winner = Some(player);
            self.phase = TurnPhase::Won;
            self.pending = None;
            return Ok(moved);
        }

        self.finish_turn(player, &roll);
        Ok(moved)
    }

    /// Keep the turn on an extra-turn roll, otherwise pass it on.
    fn finish_turn(&mut self, player: PlayerId, roll: &Roll) {
        self.pending = None;
        self.phase = TurnPhase::AwaitingRoll;
        if self.strategy.process_dice_roll(player, roll, &self.state) {
            debug!(%player, "extra turn");
        } else {
            let next = self.state.advance_turn();
            debug!(%next, "turn passes");
        }
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player()
    }

    /// Name of the player whose turn it is; `None` with an empty roster.
    #[must_use]
    pub fn current_player_name(&self) -> Option<&str> {
        self.state
            .player(self.state.current_player())
            .map(|p| p.name.as_str())
    }

    /// Pieces that can use the pending roll, while selecting.
    #[must_use]
    pub fn movable_pieces(&self) -> &[usize] {
        self.pending
            .as_ref()
            .map(|p| p.movable.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn last_roll(&self) -> Option<&Roll> {
        self.last_roll.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn strategy(&self) -> &dyn GameStrategy {
        self.strategy.as_ref()
    }

    /// The board, for presentation layers.
    #[must_use]
    pub fn graph(&self) -> &dyn MovementGraph {
        self.strategy.graph()
    }

    /// Read-only view of every player, in seat order.
    #[must_use]
    pub fn player_snapshots(&self) -> Vec<PlayerSnapshot> {
        let current = self.state.current_player();
        self.state
            .player_ids()
            .zip(self.state.players())
            .map(|(id, player)| PlayerSnapshot::new(player, id == current))
            .collect()
    }
}
