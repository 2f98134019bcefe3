//! # Grid Crossover
//!
//! Recombination builds a complete next generation of the same size as the
//! current one, two offspring per step. Each step draws a parent pair by
//! roulette-wheel selection and then takes one of three paths:
//!
//! - past the replacement threshold, both parents are copied through
//!   unmodified (the elitist pass-through region);
//! - inside the threshold, with probability `pc`, a two-point grid crossover
//!   exchanges opposite quadrants of the two allocation matrices around a
//!   random interior (worker, task) split point;
//! - inside the threshold, when the probability check fails, both offspring
//!   slots stay zero-filled. This is a deliberate policy rather than a
//!   fallback to copying parents; constraint repair later patches the
//!   degenerate individuals.
//!
//! The pass-through is taken when the running offspring count *exceeds* the
//! threshold, not below it, so the crossover region covers the minority of
//! the population. That ordering materially changes convergence behavior and
//! is preserved exactly.

use crate::error::{PlannerError, Result};
use crate::population::{Individual, Population};
use crate::rng::RandomNumberGenerator;

use super::selection::RouletteWheel;

/// Two-point grid crossover over worker×task allocation matrices.
#[derive(Debug, Clone)]
pub struct GridCrossover {
    probability: f64,
    replacement_fraction: f64,
    wheel: RouletteWheel,
}

impl GridCrossover {
    /// Creates a crossover operator with the given crossover probability and
    /// replacement fraction.
    pub fn new(probability: f64, replacement_fraction: f64) -> Self {
        Self {
            probability,
            replacement_fraction,
            wheel: RouletteWheel::new(),
        }
    }

    /// Verifies that interior split indices exist for a `workers`×`tasks`
    /// matrix.
    ///
    /// A split index must be strictly interior, never on the boundary, so
    /// each dimension needs at least two rows or columns to cut between.
    pub fn check_dimensions(workers: usize, tasks: usize) -> Result<()> {
        if workers < 2 || tasks < 2 {
            return Err(PlannerError::Configuration(format!(
                "grid crossover needs at least 2 workers and 2 tasks for interior splits, got {}x{}",
                workers, tasks
            )));
        }
        Ok(())
    }

    /// Produces the next generation from `population` and its `fitness`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for undersized dimensions or a fitness
    /// vector whose length disagrees with the population, and propagates
    /// selection errors from the roulette wheel.
    pub fn next_generation(
        &self,
        population: &Population,
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population> {
        if population.is_empty() {
            return Err(PlannerError::EmptyPopulation);
        }
        if fitness.len() != population.len() {
            return Err(PlannerError::Configuration(format!(
                "fitness vector length ({}) doesn't match population length ({})",
                fitness.len(),
                population.len()
            )));
        }

        let workers = population.member(0).workers();
        let tasks = population.member(0).tasks();
        Self::check_dimensions(workers, tasks)?;

        let n = population.len();
        let replacement_quantity = (n as f64 * self.replacement_fraction) as usize;
        let mut next: Vec<Individual> = Vec::with_capacity(n);

        while next.len() < n {
            let (first, second) = self.wheel.select_pair(fitness, rng)?;

            let (child1, child2) = if next.len() > replacement_quantity {
                // Elitist pass-through: both parents survive unmodified.
                (
                    population.member(first).clone(),
                    population.member(second).clone(),
                )
            } else if rng.uniform(0.0, 1.0) < self.probability {
                let i = rng.index_in(1, workers);
                let j = rng.index_in(1, tasks);
                grid_crossover(population.member(first), population.member(second), i, j)
            } else {
                // Failed probability check leaves both slots zero-filled.
                (
                    Individual::zeroed(workers, tasks),
                    Individual::zeroed(workers, tasks),
                )
            };

            next.push(child1);
            if next.len() < n {
                next.push(child2);
            }
        }

        Ok(Population::from_members(next))
    }
}

/// Recombines two parents around the interior split point (`i`, `j`).
///
/// Offspring 1 takes the (rows < `i`, cols < `j`) and (rows ≥ `i`, cols ≥
/// `j`) quadrants from `parent1` and the complementary two quadrants from
/// `parent2`; offspring 2 is the same construction with the parents swapped.
///
/// Exposed separately from [`GridCrossover`] so the recombination geometry
/// can be tested deterministically.
pub fn grid_crossover(
    parent1: &Individual,
    parent2: &Individual,
    i: usize,
    j: usize,
) -> (Individual, Individual) {
    let workers = parent1.workers();
    let tasks = parent1.tasks();
    let mut child1 = Individual::zeroed(workers, tasks);
    let mut child2 = Individual::zeroed(workers, tasks);

    for w in 0..workers {
        for t in 0..tasks {
            let diagonal = (w < i) == (t < j);
            let (from1, from2) = if diagonal {
                (parent1, parent2)
            } else {
                (parent2, parent1)
            };
            child1.set_allocation(w, t, from1.allocation(w, t));
            child2.set_allocation(w, t, from2.allocation(w, t));
        }
    }

    (child1, child2)
}
