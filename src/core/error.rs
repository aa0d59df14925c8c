//! Engine error taxonomy.
//!
//! Rejected calls never mutate state. Legal no-ops (rolling with an empty
//! roster, a home piece without a 6, the linear game's 12) are not errors;
//! they return a zero or "no movement" result instead.

/// Errors surfaced by engine operations.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Board or topology configuration is unusable. Raised at construction.
    #[error("invalid board configuration: {0}")]
    Configuration(String),

    /// An operation was called in the wrong order (e.g. before `new_game`).
    #[error("precondition failed: {0}")]
    Precondition(&'static str),

    /// An argument is out of range: piece index, step count, tile, token.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The game already has a winner; no further turn actions are accepted.
    #[error("game is over")]
    GameOver,
}

/// Engine result alias.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::Configuration("board size must be at least 2".into());
        assert_eq!(
            err.to_string(),
            "invalid board configuration: board size must be at least 2"
        );

        let err = EngineError::Precondition("no game in progress");
        assert_eq!(err.to_string(), "precondition failed: no game in progress");

        assert_eq!(EngineError::GameOver.to_string(), "game is over");
    }
}
