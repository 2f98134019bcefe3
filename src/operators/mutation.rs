//! # Allocation Mutation
//!
//! Perturbs offspring by re-drawing individual allocation cells. Every cell of
//! every individual is considered independently: with the configured
//! probability its value is replaced by a uniform draw from
//! [`ALLOCATION_LEVELS`], irrespective of the previous value. Re-drawing the
//! same value is possible and intentional.

use crate::population::{Population, ALLOCATION_LEVELS};
use crate::rng::RandomNumberGenerator;

/// Per-cell uniform redraw mutation over the allocation domain.
#[derive(Debug, Clone)]
pub struct AllocationMutation {
    probability: f64,
}

impl AllocationMutation {
    /// Creates a mutation operator with the given per-cell probability.
    pub fn new(probability: f64) -> Self {
        Self { probability }
    }

    /// Mutates `population` in place.
    ///
    /// The caller holds the population exclusively; no other component
    /// retains a reference to it across calls.
    pub fn apply(&self, population: &mut Population, rng: &mut RandomNumberGenerator) {
        for individual in population.iter_mut() {
            for cell in individual.cells_mut() {
                if rng.uniform(0.0, 1.0) < self.probability {
                    *cell = ALLOCATION_LEVELS[rng.index(ALLOCATION_LEVELS.len())];
                }
            }
        }
    }
}
