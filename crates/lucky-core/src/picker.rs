//! Candidate selection

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses an index into a non-empty pool
pub trait CandidatePicker: std::fmt::Debug + Send {
    /// Return an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform picker backed by any `rand` generator
#[derive(Debug)]
pub struct RandomPicker<R> {
    rng: R,
}

impl<R> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<StdRng> {
    /// Picker seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic picker, for reproducible draws
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + std::fmt::Debug + Send> CandidatePicker for RandomPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Picker that replays a fixed sequence of indices, wrapping around
#[derive(Debug, Clone)]
pub struct ScriptedPicker {
    indices: Vec<usize>,
    cursor: usize,
}

impl ScriptedPicker {
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self {
            indices: indices.into(),
            cursor: 0,
        }
    }
}

impl CandidatePicker for ScriptedPicker {
    fn pick(&mut self, len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let index = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        index % len
    }
}
