//! Turn coordination and the session facade.
//!
//! ## Layers
//!
//! - [`DefaultGame`]: one game's turn state machine over a strategy
//! - [`GameSession`]: owns at most one game, builds it from a [`BoardConfig`]
//! - [`PlayerSnapshot`]: read-only player view for UIs
//!
//! [`BoardConfig`]: crate::core::BoardConfig

pub mod default_game;
pub mod session;
pub mod snapshot;

pub use default_game::{DefaultGame, TurnPhase};
pub use session::GameSession;
pub use snapshot::PlayerSnapshot;
