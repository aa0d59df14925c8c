//! Player identification, tokens, and pieces.
//!
//! ## PlayerId
//!
//! Seat index into the roster, 0-based. Seat order is turn order.
//!
//! ## Player / PlayerPiece
//!
//! A player owns one or more pieces exclusively. A piece's tile is `None`
//! while it is at home (not yet in play).

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::TileId;
use crate::core::error::EngineError;

/// Player identifier, a seat in the roster.
///
/// Player indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a roster of `player_count` players.
    ///
    /// ```
    /// use board_race::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// The seat after this one, wrapping around the roster.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        Self(((self.index() + 1) % player_count) as u8)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// The four ludo colors, in ring order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LudoColor {
    Blue,
    Red,
    Green,
    Yellow,
}

impl LudoColor {
    /// All colors, ordered by their quadrant on the ring.
    pub const ALL: [LudoColor; 4] = [
        LudoColor::Blue,
        LudoColor::Red,
        LudoColor::Green,
        LudoColor::Yellow,
    ];

    /// Quadrant index (0-3).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Upper-case name, as stored in roster rows.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            LudoColor::Blue => "BLUE",
            LudoColor::Red => "RED",
            LudoColor::Green => "GREEN",
            LudoColor::Yellow => "YELLOW",
        }
    }
}

impl fmt::Display for LudoColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LudoColor {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LudoColor::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::InvalidArgument(format!("unknown color '{s}'")))
    }
}

/// A player's token: a free-form marker in the linear game, a color in ludo.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token(pub String);

impl Token {
    /// Create a token from any string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Interpret this token as a ludo color, if it names one.
    #[must_use]
    pub fn color(&self) -> Option<LudoColor> {
        self.0.parse().ok()
    }

    /// The raw token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<LudoColor> for Token {
    fn from(color: LudoColor) -> Self {
        Self(color.name().to_string())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One piece on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPiece {
    /// Current tile; `None` while at home.
    pub tile: Option<TileId>,
}

impl PlayerPiece {
    /// A piece that has not entered play.
    #[must_use]
    pub const fn at_home() -> Self {
        Self { tile: None }
    }

    /// A piece standing on `tile`.
    #[must_use]
    pub const fn on(tile: TileId) -> Self {
        Self { tile: Some(tile) }
    }

    #[must_use]
    pub const fn is_home(&self) -> bool {
        self.tile.is_none()
    }
}

/// A participant: identity plus the pieces they move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub birth_date: NaiveDate,
    pub token: Token,
    /// One piece in the linear game, four in ludo.
    pub pieces: SmallVec<[PlayerPiece; 4]>,
}

impl Player {
    /// Create a player with `piece_count` pieces at home.
    pub fn new(
        name: impl Into<String>,
        token: Token,
        birth_date: NaiveDate,
        piece_count: usize,
    ) -> Self {
        assert!(piece_count > 0, "Must have at least 1 piece");
        Self {
            name: name.into(),
            birth_date,
            token,
            pieces: (0..piece_count).map(|_| PlayerPiece::at_home()).collect(),
        }
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Tile of the given piece, `None` if at home or out of range.
    #[must_use]
    pub fn piece_tile(&self, piece: usize) -> Option<TileId> {
        self.pieces.get(piece).and_then(|p| p.tile)
    }

    /// Tile of the first piece; the linear game's single position.
    #[must_use]
    pub fn current_tile(&self) -> Option<TileId> {
        self.piece_tile(0)
    }

    /// The ludo color this player's token names, if any.
    #[must_use]
    pub fn color(&self) -> Option<LudoColor> {
        self.token.color()
    }
}
