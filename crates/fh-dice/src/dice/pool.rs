//! Dice pool construction.

use serde::{Deserialize, Serialize};

use super::Die;
use super::roll::Roll;
use crate::monoid::{Additive, combine_all};

/// How many dice of each category to roll.
///
/// Pools are values: combining two pools produces a new one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DicePool {
    counts: [u32; Die::COUNT],
}

impl DicePool {
    /// Create an empty dice pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// A pool holding `count` dice of a single category.
    pub fn single(die: Die, count: u32) -> Self {
        Self::new().add(die, count)
    }

    /// Add `count` dice of the given category, saturating at `u32::MAX`.
    pub fn add(mut self, die: Die, count: u32) -> Self {
        self.counts[die.index()] = self.counts[die.index()].saturating_add(count);
        self
    }

    /// Add `count` dice of the given category.
    ///
    /// Returns `None` if the category count would overflow.
    pub fn checked_add(mut self, die: Die, count: u32) -> Option<Self> {
        self.counts[die.index()] = self.counts[die.index()].checked_add(count)?;
        Some(self)
    }

    /// A pool with one die per roll, matching the rolls' categories.
    pub fn from_rolls<'a>(rolls: impl IntoIterator<Item = &'a Roll>) -> Self {
        combine_all(rolls.into_iter().map(|roll| Self::single(roll.die, 1)))
    }

    /// Number of dice of one category.
    pub fn count(&self, die: Die) -> u32 {
        self.counts[die.index()]
    }

    /// Total number of dice in the pool.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&count| u64::from(count)).sum()
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Non-empty categories with their counts, in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (Die, u32)> + '_ {
        Die::ALL
            .into_iter()
            .map(|die| (die, self.count(die)))
            .filter(|&(_, count)| count > 0)
    }
}

impl Additive for DicePool {
    fn zero() -> Self {
        Self::default()
    }

    fn add(self, other: Self) -> Self {
        other
            .iter()
            .fold(self, |pool, (die, count)| DicePool::add(pool, die, count))
    }
}

/// Renders the canonical formula, e.g. `3s2e4w`.
impl std::fmt::Display for DicePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (die, count) in self.iter() {
            if count > 1 {
                write!(f, "{count}")?;
            }
            write!(f, "{}", die.letter())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::Face;

    #[test]
    fn empty_pool() {
        let pool = DicePool::new();
        assert_eq!(pool.total(), 0);
        assert!(pool.is_empty());
        assert_eq!(pool.iter().count(), 0);
    }

    #[test]
    fn add_dice() {
        let pool = DicePool::new().add(Die::Hero, 2).add(Die::Wound, 3);
        assert_eq!(pool.count(Die::Hero), 2);
        assert_eq!(pool.count(Die::Wound), 3);
        assert_eq!(pool.total(), 5);
        assert!(!pool.is_empty());
    }

    #[test]
    fn additive_sums_componentwise() {
        let a = DicePool::single(Die::Superior, 2).add(Die::Bad, 1);
        let b = DicePool::single(Die::Superior, 1).add(Die::Defense, 4);
        let sum = Additive::add(a, b);
        assert_eq!(sum.count(Die::Superior), 3);
        assert_eq!(sum.count(Die::Bad), 1);
        assert_eq!(sum.count(Die::Defense), 4);
        assert_eq!(Additive::add(a, DicePool::zero()), a);
    }

    #[test]
    fn total_does_not_overflow_at_category_limit() {
        let pool = DicePool::new()
            .add(Die::Hero, u32::MAX)
            .add(Die::Superior, 1);
        assert_eq!(pool.total(), u64::from(u32::MAX) + 1);
        assert!(!pool.is_empty());
    }

    #[test]
    fn checked_add_rejects_overflow() {
        let full = DicePool::single(Die::Hero, u32::MAX);
        assert_eq!(full.checked_add(Die::Hero, 1), None);
        assert_eq!(
            full.checked_add(Die::Wound, 1),
            Some(full.add(Die::Wound, 1))
        );
    }

    #[test]
    fn from_rolls_counts_each_die_once() {
        let rolls = [
            Roll::new(Die::Enhanced, Face::Blank),
            Roll::new(Die::Enhanced, Face::Success),
            Roll::new(Die::Wound, Face::Wound),
        ];
        let pool = DicePool::from_rolls(&rolls);
        assert_eq!(pool.count(Die::Enhanced), 2);
        assert_eq!(pool.count(Die::Wound), 1);
        assert_eq!(pool.total(), 3);
    }

    #[test]
    fn iter_follows_evaluation_order() {
        let pool = DicePool::new().add(Die::Wound, 1).add(Die::Hero, 1);
        let dice: Vec<Die> = pool.iter().map(|(d, _)| d).collect();
        assert_eq!(dice, vec![Die::Hero, Die::Wound]);
    }

    #[test]
    fn display_is_canonical_formula() {
        let pool = DicePool::new()
            .add(Die::Wound, 4)
            .add(Die::Superior, 3)
            .add(Die::Enhanced, 2)
            .add(Die::Hero, 1);
        assert_eq!(pool.to_string(), "h3s2e4w");
    }
}
