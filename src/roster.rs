//! Persistence boundary for player rosters.
//!
//! The engine trades plain `{name, token, birth_date}` rows with external
//! loaders. It never touches files; `encode_rows`/`decode_rows` only turn
//! rows into bytes and back.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::Player;

/// One roster entry as stored by a loader.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRow {
    pub name: String,
    pub token: String,
    pub birth_date: NaiveDate,
}

impl From<&Player> for PlayerRow {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            token: player.token.as_str().to_string(),
            birth_date: player.birth_date,
        }
    }
}

/// Roster encoding failures.
#[derive(thiserror::Error, Debug)]
pub enum RosterError {
    #[error("roster encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

/// Encode rows in the compact binary roster format.
pub fn encode_rows(rows: &[PlayerRow]) -> Result<Vec<u8>, RosterError> {
    Ok(bincode::serialize(rows)?)
}

/// Decode rows written by [`encode_rows`].
pub fn decode_rows(bytes: &[u8]) -> Result<Vec<PlayerRow>, RosterError> {
    Ok(bincode::deserialize(bytes)?)
}
