//! Read-only player views for presentation layers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::Player;

/// One player as a UI sees it.
///
/// Piece positions are raw tile ids with 0 meaning home (ludo) or the
/// start tile (linear board); the two coincide by construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub token: String,
    pub pieces: Vec<u32>,
    pub is_turn: bool,
    pub birth_date: NaiveDate,
}

impl PlayerSnapshot {
    #[must_use]
    pub fn new(player: &Player, is_turn: bool) -> Self {
        Self {
            name: player.name.clone(),
            token: player.token.as_str().to_string(),
            pieces: player
                .pieces
                .iter()
                .map(|p| p.tile.map_or(0, |t| t.raw()))
                .collect(),
            is_turn,
            birth_date: player.birth_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TileId;
    use crate::core::{LudoColor, Token};

    #[test]
    fn test_snapshot_encodes_home_as_zero() {
        let date = NaiveDate::from_ymd_opt(1995, 4, 4).unwrap();
        let mut player = Player::new("Cy", Token::from(LudoColor::Green), date, 4);
        player.pieces[1].tile = Some(TileId(27));

        let snapshot = PlayerSnapshot::new(&player, true);
        assert_eq!(snapshot.name, "Cy");
        assert_eq!(snapshot.token, "GREEN");
        assert_eq!(snapshot.pieces, vec![0, 27, 0, 0]);
        assert!(snapshot.is_turn);
        assert_eq!(snapshot.birth_date, date);
    }

    #[test]
    fn test_snapshot_json() {
        let date = NaiveDate::from_ymd_opt(1995, 4, 4).unwrap();
        let player = Player::new("Cy", Token::new("hat"), date, 1);
        let json = serde_json::to_string(&PlayerSnapshot::new(&player, false)).unwrap();
        assert!(json.contains("\"birth_date\":\"1995-04-04\""));
        assert!(json.contains("\"pieces\":[0]"));
    }
}
