//! Randomness sources for price jitter and synthetic hotel generation.
//!
//! The pricing functions never reach for a global RNG. Callers hand in a
//! [`RandomSource`]: production code uses [`ThreadRandom`], reproducible
//! fixtures use [`SeededRandom`], and tests pin the draws with
//! [`FixedRandom`] or [`SequenceRandom`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in `[0, upper)`, computed as `floor(next_unit() * upper)`.
    ///
    /// Returns 0 when `upper` is 0.
    fn below(&mut self, upper: u32) -> u32 {
        if upper == 0 {
            return 0;
        }
        let sample = clamp_unit(self.next_unit());
        ((sample * f64::from(upper)).floor() as u32).min(upper - 1)
    }

    /// Uniformly pick one element of a non-empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let len = u32::try_from(items.len()).unwrap_or(u32::MAX);
        if len == 0 {
            return None;
        }
        items.get(self.below(len) as usize)
    }
}

/// Force a sample into `[0, 1)`; NaN becomes 0.
pub(crate) fn clamp_unit(sample: f64) -> f64 {
    if sample.is_nan() || sample < 0.0 {
        0.0
    } else if sample >= 1.0 {
        1.0 - f64::EPSILON
    } else {
        sample
    }
}

/// Thread-local RNG, re-fetched on every draw so the source stays `Send`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Deterministic RNG seeded from a caller-supplied value.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Always returns the same sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRandom(pub f64);

impl FixedRandom {
    /// The sample that yields a jitter factor of exactly 1.0.
    pub fn neutral() -> Self {
        Self(0.5)
    }
}

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// Cycles through a fixed list of samples. An empty list always yields 0.
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    samples: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples, cursor: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sample = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        sample
    }
}
