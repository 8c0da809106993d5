//! Injected random source
//!
//! The random pattern never touches a process-global generator. Callers hand
//! in anything implementing [`RandomSource`]; [`SeededSource`] is the stock
//! reproducible implementation.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Capability consumed by the random pattern
pub trait RandomSource {
    /// Uniform sample in the closed range `[low, high]`.
    ///
    /// Float rounding may yield `high` itself. Returns `low` when the range
    /// is empty.
    fn next_uniform(&mut self, low: f32, high: f32) -> f32;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_uniform(&mut self, low: f32, high: f32) -> f32 {
        (**self).next_uniform(low, high)
    }
}

/// PCG32-backed source, fully determined by its seed
#[derive(Debug, Clone)]
pub struct SeededSource {
    seed: u64,
    rng: Pcg32,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this source was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Rewind to the initial seeded state
    pub fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
    }
}

impl RandomSource for SeededSource {
    fn next_uniform(&mut self, low: f32, high: f32) -> f32 {
        if high <= low {
            return low;
        }
        let t: f32 = self.rng.random();
        (low + (high - low) * t).clamp(low, high)
    }
}
