//! The engine's outer surface.
//!
//! `GameSession` is what menus, boards, and loaders talk to. It holds at
//! most one [`DefaultGame`] and rejects turn actions until `new_game`
//! has established one.

use chrono::NaiveDate;
use tracing::info;

use super::default_game::{DefaultGame, TurnPhase};
use super::snapshot::PlayerSnapshot;
use crate::core::{BoardConfig, Dice, EngineError, GameRng, PlayerId, Result, Token};
use crate::roster::PlayerRow;
use crate::strategy::{GameStrategy, LudoGameStrategy, SnlGameStrategy};

const NO_GAME: &str = "no game in progress; call new_game first";

/// Entry point for presentation and persistence layers.
///
/// ## Example
///
/// ```
/// use board_race::core::{BoardConfig, LudoColor, Token};
/// use board_race::game::GameSession;
/// use chrono::NaiveDate;
///
/// let mut session = GameSession::with_seed(7);
/// session.new_game(BoardConfig::Ludo).unwrap();
/// let born = NaiveDate::from_ymd_opt(1988, 8, 8).unwrap();
/// session.add_player("Ann", Token::from(LudoColor::Blue), born).unwrap();
/// session.add_player("Bob", Token::from(LudoColor::Red), born).unwrap();
///
/// let total = session.roll_dice().unwrap();
/// assert!((1..=6).contains(&total));
/// assert!(!session.has_winner());
/// ```
#[derive(Debug, Default)]
pub struct GameSession {
    game: Option<DefaultGame>,
    seed: Option<u64>,
}

impl GameSession {
    /// A session whose dice are seeded from entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A session whose every new game rolls the same sequence.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            game: None,
            seed: Some(seed),
        }
    }

    /// Replace any current game with a fresh one on `config`.
    ///
    /// On error the previous game, if any, is kept.
    pub fn new_game(&mut self, config: BoardConfig) -> Result<()> {
        let strategy = Self::build_strategy(&config)?;
        let rng = self.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let dice = Dice::new(strategy.dice_count(), rng);
        self.install(strategy, dice)
    }

    /// Like [`new_game`](Self::new_game), rolling `dice` instead.
    pub fn new_game_with_dice(&mut self, config: BoardConfig, dice: Dice) -> Result<()> {
        let strategy = Self::build_strategy(&config)?;
        self.install(strategy, dice)
    }

    fn build_strategy(config: &BoardConfig) -> Result<Box<dyn GameStrategy>> {
        config.validate()?;
        Ok(match config {
            BoardConfig::Linear(linear) => Box::new(SnlGameStrategy::new(linear)?),
            BoardConfig::Ludo => Box::new(LudoGameStrategy::new()),
        })
    }

    fn install(&mut self, strategy: Box<dyn GameStrategy>, dice: Dice) -> Result<()> {
        let pieces = strategy.pieces_per_player();
        let tiles = strategy.graph().tiles().len();
        let dice_count = dice.count();
        self.game = Some(DefaultGame::new(strategy, dice)?);
        info!(pieces, dice = dice_count, tiles, "new game");
        Ok(())
    }

    fn game(&self) -> Result<&DefaultGame> {
        self.game.as_ref().ok_or(EngineError::Precondition(NO_GAME))
    }

    fn game_mut(&mut self) -> Result<&mut DefaultGame> {
        self.game.as_mut().ok_or(EngineError::Precondition(NO_GAME))
    }

    /// The running game, if any.
    #[must_use]
    pub fn current_game(&self) -> Option<&DefaultGame> {
        self.game.as_ref()
    }

    // === Players ===

    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        token: impl Into<Token>,
        birth_date: NaiveDate,
    ) -> Result<PlayerId> {
        self.game_mut()?.add_player(name, token.into(), birth_date)
    }

    /// Seat the youngest player first; only before the first roll.
    pub fn order_by_birth_date(&mut self) -> Result<()> {
        self.game_mut()?.order_by_birth_date()
    }

    /// Add players from loader rows, all or none.
    pub fn import_players(&mut self, rows: &[PlayerRow]) -> Result<usize> {
        self.game_mut()?.import_players(rows)
    }

    /// Current roster as loader rows; empty without a game.
    #[must_use]
    pub fn export_players(&self) -> Vec<PlayerRow> {
        self.game
            .as_ref()
            .map(DefaultGame::export_players)
            .unwrap_or_default()
    }

    // === Turn actions ===

    pub fn roll_dice(&mut self) -> Result<u32> {
        self.game_mut()?.roll_dice()
    }

    pub fn select_piece(&mut self, piece: usize) -> Result<()> {
        self.game_mut()?.select_piece(piece)
    }

    pub fn apply_piece_movement(&mut self) -> Result<u32> {
        self.game_mut()?.apply_piece_movement()
    }

    pub fn reset_game(&mut self) -> Result<()> {
        self.game_mut()?.reset_game();
        Ok(())
    }

    // === Queries ===

    #[must_use]
    pub fn has_winner(&self) -> bool {
        self.game.as_ref().is_some_and(DefaultGame::has_winner)
    }

    pub fn current_player_name(&self) -> Result<&str> {
        self.game()?
            .current_player_name()
            .ok_or(EngineError::Precondition("no players seated"))
    }

    pub fn phase(&self) -> Result<TurnPhase> {
        Ok(self.game()?.phase())
    }

    /// Per-player views in seat order; empty without a game.
    #[must_use]
    pub fn player_snapshots(&self) -> Vec<PlayerSnapshot> {
        self.game
            .as_ref()
            .map(DefaultGame::player_snapshots)
            .unwrap_or_default()
    }
}
