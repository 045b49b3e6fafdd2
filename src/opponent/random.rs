//! Injectable sources of randomness for tie-breaking

use std::collections::VecDeque;

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Uniform index picker.
pub trait RandomSource {
    /// Pick an index in `0..upper`. `upper` is never zero.
    fn pick(&mut self, upper: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn pick(&mut self, upper: usize) -> usize {
        (**self).pick(upper)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn pick(&mut self, upper: usize) -> usize {
        (**self).pick(upper)
    }
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// `StdRng`-backed source, reproducible when seeded
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
    seed: Option<u64>,
}

impl SeededSource {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: build_rng(seed),
            seed,
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Seeded from the thread RNG
    pub fn from_entropy() -> Self {
        Self::new(None)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for SeededSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for SeededSource {
    fn pick(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }
}

/// Replays a fixed list of picks.
///
/// Each scripted value is reduced modulo `upper`. Once the script runs out
/// the source counts upward from zero, so a resampling loop always reaches
/// every index eventually.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    picks: VecDeque<usize>,
    fallback: usize,
}

impl ScriptedSource {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            fallback: 0,
        }
    }

    /// Scripted picks not yet consumed
    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl RandomSource for ScriptedSource {
    fn pick(&mut self, upper: usize) -> usize {
        if let Some(next) = self.picks.pop_front() {
            return next % upper;
        }
        let value = self.fallback % upper;
        self.fallback = self.fallback.wrapping_add(1);
        value
    }
}
