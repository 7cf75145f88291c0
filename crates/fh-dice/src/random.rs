//! Random sources for the roll evaluator.
//!
//! The evaluator never reaches for a global RNG. Callers pass a
//! [`RandomSource`], which lets tests script every face.

use std::collections::VecDeque;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::error::{FarhomeError, FarhomeResult};

/// Produces uniformly distributed indices.
pub trait RandomSource {
    /// A uniform index in `0..bound`.
    fn index(&mut self, bound: usize) -> FarhomeResult<usize>;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn index(&mut self, bound: usize) -> FarhomeResult<usize> {
        (**self).index(bound)
    }
}

/// Scale a uniform 32-bit sample into `0..bound` by floor division.
fn scale(sample: u32, bound: usize) -> usize {
    ((u64::from(sample) * bound as u64) >> 32) as usize
}

/// Production source backed by the thread-local CSPRNG.
#[derive(Debug, Clone, Default)]
pub struct SecureRandom {
    rng: ThreadRng,
}

impl SecureRandom {
    /// Create a source drawing from the operating system seeded thread RNG.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl RandomSource for SecureRandom {
    fn index(&mut self, bound: usize) -> FarhomeResult<usize> {
        Ok(scale(self.rng.random::<u32>(), bound))
    }
}

/// Reproducible source for seeded sessions.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a source from a seed. The same seed always yields the same indices.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn index(&mut self, bound: usize) -> FarhomeResult<usize> {
        Ok(scale(self.rng.random::<u32>(), bound))
    }
}

/// A finite, pre-scripted sequence of indices.
///
/// Running past the end is an error, not a wrap-around.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<usize>,
}

impl ScriptedRandom {
    /// Script the given indices, returned in order.
    pub fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Script the same index `count` times.
    pub fn repeat(value: usize, count: usize) -> Self {
        Self::new(std::iter::repeat_n(value, count))
    }

    /// How many scripted indices are left.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn index(&mut self, bound: usize) -> FarhomeResult<usize> {
        let index = self.values.pop_front().ok_or(FarhomeError::OutOfEntropy)?;
        if index >= bound {
            return Err(FarhomeError::InvalidIndex { index, bound });
        }
        Ok(index)
    }
}
