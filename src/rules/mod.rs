//! Rule engines: per-game win, extra-turn, and landing semantics.
//!
//! Strategies call into a `RuleEngine` for everything game-specific that
//! is not plain movement:
//! - Extra turns
//! - Post-landing effects (teleports, captures)
//! - Win conditions

pub mod engine;
pub mod snl;
pub mod ludo;

pub use engine::RuleEngine;
pub use snl::SnlRuleEngine;
pub use ludo::LudoRuleEngine;
