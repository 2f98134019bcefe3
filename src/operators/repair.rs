//! # Constraint Repair
//!
//! The sole feasibility-restoring mechanism of the loop. Recombination can
//! leave zero-filled offspring and mutation can empty a task column; repair
//! scans every individual and assigns [`REPAIR_ALLOCATION`] to one uniformly
//! random worker for each task nobody is staffed on. It runs after
//! initialization and after every crossover-and-mutation pass, never skipped,
//! so the fitness evaluator can rely on every task column summing above zero.

use crate::population::{Population, REPAIR_ALLOCATION};
use crate::rng::RandomNumberGenerator;

/// Restores the every-task-staffed invariant of a population.
#[derive(Debug, Clone, Default)]
pub struct ConstraintRepair;

impl ConstraintRepair {
    /// Creates a new `ConstraintRepair` operator.
    pub fn new() -> Self {
        Self
    }

    /// Repairs `population` in place.
    ///
    /// One random draw is consumed per empty task column, and none for
    /// columns already staffed, so repairing an already-feasible population
    /// leaves both the population and the random stream untouched.
    pub fn apply(&self, population: &mut Population, rng: &mut RandomNumberGenerator) {
        for individual in population.iter_mut() {
            let workers = individual.workers();
            for task in 0..individual.tasks() {
                if individual.task_allocation(task) == 0.0 {
                    let worker = rng.index(workers);
                    individual.set_allocation(worker, task, REPAIR_ALLOCATION);
                }
            }
        }
    }
}
