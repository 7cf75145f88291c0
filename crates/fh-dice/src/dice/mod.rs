//! Dice categories, faces, pools, and rolls.
//!
//! Farhome uses ten six-sided dice. Each die category has its own face
//! table, so rolling a die means picking one of six symbolic faces rather
//! than a number.

pub mod face;
pub mod pool;
pub mod roll;
pub mod table;

pub use face::Face;
pub use pool::DicePool;
pub use roll::{Roll, RollValues};
pub use table::{FACES_PER_DIE, face_table};

use serde::{Deserialize, Serialize};

use crate::error::{FarhomeError, FarhomeResult};

/// A die category.
///
/// The declaration order is the evaluation order: a pool is always rolled
/// hero dice first and wound dice last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Die {
    /// Hero die, the best success die.
    Hero,
    /// Superior die.
    Superior,
    /// Enhanced die.
    Enhanced,
    /// Normal die.
    Normal,
    /// Bad die, mostly failures.
    Bad,
    /// Terrible die, only failures and blanks.
    Terrible,
    /// Superior defense die.
    SuperiorDefense,
    /// Defense die.
    Defense,
    /// Guaranteed wound die, always a wound.
    GuaranteedWound,
    /// Wound die, a wound on half of its faces.
    Wound,
}

impl Die {
    /// Number of die categories.
    pub const COUNT: usize = 10;

    /// Every die category in evaluation order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Hero,
        Self::Superior,
        Self::Enhanced,
        Self::Normal,
        Self::Bad,
        Self::Terrible,
        Self::SuperiorDefense,
        Self::Defense,
        Self::GuaranteedWound,
        Self::Wound,
    ];

    /// Position of this die in [`Die::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The stable string id used in rendered views.
    pub fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Superior => "superior",
            Self::Enhanced => "enhanced",
            Self::Normal => "normal",
            Self::Bad => "bad",
            Self::Terrible => "terrible",
            Self::SuperiorDefense => "superior-defense",
            Self::Defense => "defense",
            Self::GuaranteedWound => "guaranteed-wound",
            Self::Wound => "wound",
        }
    }

    /// Human readable name, used in parser help text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Superior => "superior",
            Self::Enhanced => "enhanced",
            Self::Normal => "normal",
            Self::Bad => "bad",
            Self::Terrible => "terrible",
            Self::SuperiorDefense => "superior defense",
            Self::Defense => "defense",
            Self::GuaranteedWound => "guaranteed wound",
            Self::Wound => "wound",
        }
    }

    /// The formula letter selecting this die.
    pub fn letter(self) -> char {
        match self {
            Self::Hero => 'h',
            Self::Superior => 's',
            Self::Enhanced => 'e',
            Self::Normal => 'n',
            Self::Bad => 'b',
            Self::Terrible => 't',
            Self::SuperiorDefense => 'd',
            Self::Defense => 'f',
            Self::GuaranteedWound => 'g',
            Self::Wound => 'w',
        }
    }

    /// Resolve a die from its string id.
    pub fn from_id(id: &str) -> FarhomeResult<Self> {
        Self::ALL
            .into_iter()
            .find(|die| die.id() == id)
            .ok_or_else(|| FarhomeError::UnknownDie(id.to_string()))
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_all_order() {
        for (i, die) in Die::ALL.iter().enumerate() {
            assert_eq!(die.index(), i);
        }
    }

    #[test]
    fn ids_round_trip() {
        for die in Die::ALL {
            assert_eq!(Die::from_id(die.id()), Ok(die));
        }
        assert_eq!(
            Die::from_id("d20"),
            Err(FarhomeError::UnknownDie("d20".to_string()))
        );
    }

    #[test]
    fn letters_are_unique() {
        let mut letters: Vec<char> = Die::ALL.iter().map(|d| d.letter()).collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), Die::ALL.len());
    }

    #[test]
    fn display() {
        assert_eq!(Die::SuperiorDefense.to_string(), "superior-defense");
        assert_eq!(Die::Hero.to_string(), "hero");
    }

    #[test]
    fn serde_uses_ids() {
        let json = serde_json::to_string(&Die::GuaranteedWound).unwrap();
        assert_eq!(json, "\"guaranteed-wound\"");
    }
}
