//! Random source used by spawning and asteroid generation
//!
//! Any `rand::Rng` works; games default to a seeded `Pcg32` so a run can be
//! reproduced from its seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform draws needed by the simulation
pub trait RandomSource {
    /// Uniform real in `[min, max)`. Returns `min` for an empty range.
    fn uniform(&mut self, min: f32, max: f32) -> f32;
    /// Uniform integer in `[min, max]`
    fn int_inclusive(&mut self, min: i32, max: i32) -> i32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.random_range(min..max)
    }

    fn int_inclusive(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.random_range(min..=max)
    }
}

/// Create the default generator for a run seed
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}
