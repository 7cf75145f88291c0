//! Error types for the dice engine.

use std::ops::Range;

use crate::dice::{Die, Face};

/// Errors that can occur while parsing, rolling, or formatting dice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FarhomeError {
    /// No registered parser accepted the formula.
    #[error("invalid dice formula \"{formula}\", allowed letters: {help}")]
    FormulaParse {
        /// The formula exactly as it was given.
        formula: String,
        /// Help text listing the legal letters and their meaning.
        help: String,
        /// Byte range of the first offending token in the trimmed formula.
        span: Range<usize>,
    },

    /// The formula asks for more dice than a roll may hold.
    #[error("dice formula \"{formula}\" asks for {count} dice, at most {max} allowed")]
    TooManyDice {
        /// The formula exactly as it was given.
        formula: String,
        /// Number of dice the formula asks for.
        count: u64,
        /// The largest pool allowed.
        max: u64,
    },

    /// A face id could not be resolved.
    #[error("unknown face: {0}")]
    UnknownFace(String),

    /// A die id could not be resolved.
    #[error("unknown die: {0}")]
    UnknownDie(String),

    /// No image exists for a face on the given die.
    #[error("no image for face '{face}' on die '{die}'")]
    UnknownImage {
        /// The die that was looked up.
        die: Die,
        /// The face that has no entry for that die.
        face: Face,
    },

    /// A scripted random source ran out of values.
    #[error("out of entropy")]
    OutOfEntropy,

    /// A random source produced an index outside of the requested bound.
    #[error("random index {index} out of range 0..{bound}")]
    InvalidIndex {
        /// The produced index.
        index: usize,
        /// The exclusive upper bound that was requested.
        bound: usize,
    },

    /// A reroll selection referenced a die that does not exist.
    #[error("no die at position {0}")]
    InvalidSelection(usize),

    /// A reroll selection referenced a die that was already rerolled.
    #[error("die at position {0} is disabled and cannot be rerolled")]
    DieDisabled(usize),

    /// The roller configuration is malformed.
    #[error("invalid roller config: {0}")]
    InvalidConfig(String),
}

/// Convenience result type for dice operations.
pub type FarhomeResult<T> = Result<T, FarhomeError>;
