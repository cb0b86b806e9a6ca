use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Uniform integer selection used for word and hint picks.
pub trait RandomSource {
    /// Returns an index in `[0, n)`. Panics when `n == 0`.
    fn uniform_index(&mut self, n: usize) -> usize;
}

/// Random source backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform_index(&mut self, n: usize) -> usize {
        assert!(n > 0, "uniform_index called with an empty range");
        self.rng.gen_range(0..n)
    }
}

/// Replays a fixed queue of picks, each reduced modulo `n`. Once the queue is
/// exhausted every pick is 0. Used to make games reproducible in tests.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    picks: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new<I: IntoIterator<Item = usize>>(picks: I) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    pub fn push(&mut self, pick: usize) {
        self.picks.push_back(pick);
    }

    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform_index(&mut self, n: usize) -> usize {
        assert!(n > 0, "uniform_index called with an empty range");
        self.picks.pop_front().unwrap_or(0) % n
    }
}
