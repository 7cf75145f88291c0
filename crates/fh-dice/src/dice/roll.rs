//! Rolled dice and tally aggregation.

use serde::{Deserialize, Serialize};

use super::{Die, Face};
use crate::monoid::{Additive, combine_all};

/// The result of rolling a single die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roll {
    /// The category of die that was rolled.
    pub die: Die,
    /// The face that came up.
    pub face: Face,
    /// True if this die was produced by a reroll.
    #[serde(default)]
    pub rerolled: bool,
}

impl Roll {
    /// A roll from an initial evaluation.
    pub fn new(die: Die, face: Face) -> Self {
        Self {
            die,
            face,
            rerolled: false,
        }
    }

    /// Mark this roll as produced by a reroll.
    pub fn into_rerolled(self) -> Self {
        Self {
            rerolled: true,
            ..self
        }
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.die, self.face)?;
        if self.rerolled {
            write!(f, " (rerolled)")?;
        }
        Ok(())
    }
}

/// Summed successes, crits, and wounds of a set of rolls.
///
/// Negative faces cancel positive ones, so any field may go below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RollValues {
    /// Net successes.
    pub successes: i32,
    /// Net critical hits.
    pub crits: i32,
    /// Net wounds.
    pub wounds: i32,
}

impl RollValues {
    /// Create a tally.
    pub const fn new(successes: i32, crits: i32, wounds: i32) -> Self {
        Self {
            successes,
            crits,
            wounds,
        }
    }

    /// Tally every roll. Every face has a fixed contribution, see [`Face::tally`].
    pub fn of<'a>(rolls: impl IntoIterator<Item = &'a Roll>) -> Self {
        combine_all(rolls.into_iter().map(|roll| roll.face.tally()))
    }

    /// Returns true if every field is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl Additive for RollValues {
    fn zero() -> Self {
        Self::default()
    }

    fn add(self, other: Self) -> Self {
        Self {
            successes: self.successes + other.successes,
            crits: self.crits + other.crits,
            wounds: self.wounds + other.wounds,
        }
    }
}

impl std::fmt::Display for RollValues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} successes, {} crits, {} wounds",
            self.successes, self.crits, self.wounds
        )
    }
}
