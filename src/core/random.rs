//! Injected randomness
//!
//! Every engine call that needs randomness takes a `RandomSource` argument
//! instead of reaching for a global generator, so tests can replay fixed
//! sequences. Any `FnMut() -> f64` closure is a source.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed floats in `[0, 1)`
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_f64(&mut self) -> f64 {
        self()
    }
}

/// Adapter over any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_f64(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Non-deterministic source backed by the thread-local generator
pub fn thread_source() -> RngSource<ThreadRng> {
    RngSource(rand::thread_rng())
}

/// Reproducible source for a given seed
pub fn seeded_source(seed: u64) -> RngSource<StdRng> {
    RngSource(StdRng::seed_from_u64(seed))
}

/// Cycles through a fixed list of values
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    position: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, position: 0 }
    }

    /// `n` evenly spaced midpoints of `[0, 1)`
    pub fn uniform_grid(n: usize) -> Self {
        let values = (0..n).map(|i| (i as f64 + 0.5) / n as f64).collect();
        Self::new(values)
    }
}

impl RandomSource for SequenceSource {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

/// `floor(r * len)`, clamped into `0..len`. `len` must be non-zero.
pub(crate) fn random_index<R: RandomSource + ?Sized>(rng: &mut R, len: usize) -> usize {
    let scaled = (rng.next_f64() * len as f64).floor();
    // `as` saturates: negatives and NaN land on 0
    (scaled as usize).min(len - 1)
}
