//! Rolling pools, tallying rolls, and rerolling.

use tracing::{debug, trace};

use crate::dice::{DicePool, FACES_PER_DIE, Roll, RollValues, face_table};
use crate::error::FarhomeResult;
use crate::random::RandomSource;

/// Roll every die in the pool.
///
/// Dice come out grouped by category in [`Die::ALL`](crate::Die::ALL)
/// order. Each die draws exactly one index from `rng`.
pub fn evaluate<R>(pool: &DicePool, rng: &mut R) -> FarhomeResult<Vec<Roll>>
where
    R: RandomSource + ?Sized,
{
    debug!(%pool, dice = pool.total(), "evaluating pool");
    let mut rolls = Vec::with_capacity(usize::try_from(pool.total()).unwrap_or_default());
    for (die, count) in pool.iter() {
        let table = face_table(die);
        for _ in 0..count {
            let index = rng.index(FACES_PER_DIE)?;
            let face = table[index];
            trace!(%die, index, %face, "rolled");
            rolls.push(Roll::new(die, face));
        }
    }
    Ok(rolls)
}

/// Tally a sequence of rolls.
pub fn combine(rolls: &[Roll]) -> RollValues {
    RollValues::of(rolls)
}

/// Keep `kept` untouched and roll a fresh die for each die in `to_reroll`.
///
/// The result is `kept` followed by the new dice, which are marked as
/// rerolled.
pub fn reroll<R>(kept: &[Roll], to_reroll: &[Roll], rng: &mut R) -> FarhomeResult<Vec<Roll>>
where
    R: RandomSource + ?Sized,
{
    let pool = DicePool::from_rolls(to_reroll);
    debug!(kept = kept.len(), %pool, "rerolling");
    let fresh = evaluate(&pool, rng)?;
    Ok(kept
        .iter()
        .copied()
        .chain(fresh.into_iter().map(Roll::into_rerolled))
        .collect())
}
