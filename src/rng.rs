//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct wraps the `rand` crate's `StdRng` and
//! provides the two kinds of draws the planner consumes: uniform
//! floating-point values and uniform indices. Seeding it explicitly makes a
//! whole optimization run reproducible, since every stochastic operator draws
//! from the single generator owned by the caller.
//!
//! ## Example
//!
//! ```rust
//! use crewplan::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let p = rng.uniform(0.0, 1.0);
//! assert!((0.0..1.0).contains(&p));
//! let idx = rng.index(5);
//! assert!(idx < 5);
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` that provides the uniform
/// draws used by selection, crossover, mutation, and repair.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible runs, tests, and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates a uniform floating-point number in `[from, to)`.
    ///
    /// # Panics
    ///
    /// Panics if `from >= to`.
    pub fn uniform(&mut self, from: f64, to: f64) -> f64 {
        self.rng.gen_range(from..to)
    }

    /// Generates a uniform index in `[0, upper)`.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is zero.
    pub fn index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    /// Generates a uniform index in `[lower, upper)`.
    ///
    /// Used for interior crossover split points, which must never fall on a
    /// matrix boundary.
    ///
    /// # Panics
    ///
    /// Panics if `lower >= upper`.
    pub fn index_in(&mut self, lower: usize, upper: usize) -> usize {
        self.rng.gen_range(lower..upper)
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
