//! Random number plumbing.
//!
//! The engine never reaches for a global generator. Every operation that
//! needs randomness takes a `&mut R` where `R: RandomSource`, and
//! [`RandomSource`] is implemented for every [`rand::Rng`], so a seeded
//! [`StdRng`] gives fully reproducible runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// The two draws the genetic engine is built on.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Uniform integer in `[min, max]` (both inclusive).
    ///
    /// # Panics
    /// Panics if `min > max`.
    fn next_int(&mut self, min: usize, max: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn next_uniform(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn next_int(&mut self, min: usize, max: usize) -> usize {
        assert!(min <= max, "empty integer range [{min}, {max}]");
        self.random_range(min..=max)
    }
}

/// Creates a deterministic generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Derives a seed from the wall clock.
///
/// A clock set before the Unix epoch yields seed 0 rather than failing.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
