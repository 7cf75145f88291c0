//! Dice engine for the Farhome tabletop ruleset.
//!
//! Parses letter formulas such as `3s2e4w` into dice pools, rolls them
//! against per-die face tables, tallies successes, crits, and wounds, and
//! formats the result for chat. Rerolls keep the original dice and append
//! the new ones.

pub mod chat;
pub mod config;
pub mod dice;
pub mod error;
pub mod evaluate;
pub mod format;
pub mod formula;
pub mod monoid;
pub mod random;

pub use chat::{ChatCommand, ChatReply, Roller};
pub use config::RollerConfig;
pub use dice::{DicePool, Die, Face, Roll, RollValues};
pub use error::{FarhomeError, FarhomeResult};
pub use evaluate::{combine, evaluate, reroll};
pub use format::{RollReport, RollView, SummaryView};
pub use formula::{FormulaParser, LetterParser, ParserRegistry};
pub use monoid::{Additive, combine_all};
pub use random::{RandomSource, ScriptedRandom, SecureRandom, SeededRandom};
