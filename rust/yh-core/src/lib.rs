//! yh-core: Yahtzee hand scoring rules, rule registry, dice tray and scorecard.

pub mod config;
pub mod dice;
pub mod game;
pub mod hand;
pub mod registry;
pub mod rule;
pub mod scorecard;

pub use config::{ConfigError, RulesConfig};
pub use dice::{seeded_rng, DiceError, DiceTray};
pub use game::{choose_category, keep_for, play_game, Game, GameError, GameRecord, TurnRecord};
pub use hand::{face_word, Hand, HandError, NUM_DICE, NUM_FACES};
pub use registry::{Category, Registry, RegistryError, RuleEntry, NUM_CATEGORIES};
pub use rule::{Rule, RuleError, StraightMode};
pub use scorecard::{Row, Scorecard, ScorecardError};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");


#[cfg(test)]
mod hand_tests;
#[cfg(test)]
mod rule_tests;
