//! # Planner
//!
//! The generational loop driving the whole search. The driver owns the only
//! mutable population; every generation it asks the operators, in a fixed
//! order, to produce the replacement: recombine → mutate → repair → evaluate.
//! Summary statistics and the fittest individual of each generation are
//! appended to a history, and the run's product is that history plus the
//! individual from the generation with the globally highest max fitness.
//!
//! The loop is linear with no branching states and runs for a fixed number of
//! generations; there is no early-stopping or convergence criterion.

use tracing::{debug, info};

use super::options::PlannerOptions;
use crate::{
    error::{PlannerError, Result},
    fitness::FitnessEvaluator,
    operators::{AllocationMutation, ConstraintRepair, GridCrossover},
    population::{Individual, Population},
    problem::ProblemDefinition,
    rng::RandomNumberGenerator,
};

/// The constant every cell of the initial population is set to.
///
/// The initial population is deliberately uniform rather than randomized;
/// diversity comes entirely from mutation and the zero-filled offspring of
/// failed crossover draws.
const INITIAL_ALLOCATION: f64 = 0.5;

/// Summary of one generation: fitness statistics plus the generation's
/// fittest individual. Appended to the run history, never rewritten.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationRecord {
    /// Lowest fitness in the generation.
    pub min_fitness: f64,
    /// Highest fitness in the generation.
    pub max_fitness: f64,
    /// Mean fitness of the generation.
    pub mean_fitness: f64,
    /// The generation's fittest individual.
    pub best: Individual,
}

/// The final product of a run: the per-generation history and the best
/// assignment found anywhere in it.
///
/// The full population is deliberately not exposed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanOutcome {
    /// The individual with the globally highest max fitness across all
    /// recorded generations.
    pub best: Individual,
    /// The fitness of `best`; equals the maximum over the history's
    /// `max_fitness` values.
    pub best_fitness: f64,
    /// One record per generation, in order.
    pub history: Vec<GenerationRecord>,
}

/// Drives the genetic search over worker-to-task assignments.
#[derive(Debug, Clone)]
pub struct Planner {
    problem: ProblemDefinition,
    options: PlannerOptions,
}

impl Planner {
    /// Creates a planner, validating the options and the dimensional
    /// requirements of grid crossover up front.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` for an invalid option bundle or
    /// a problem with fewer than two workers or two tasks.
    pub fn new(problem: ProblemDefinition, options: PlannerOptions) -> Result<Self> {
        options.validate()?;
        GridCrossover::check_dimensions(problem.worker_count(), problem.task_count())?;
        Ok(Self { problem, options })
    }

    /// The problem this planner searches over.
    pub fn problem(&self) -> &ProblemDefinition {
        &self.problem
    }

    /// The options this planner runs with.
    pub fn options(&self) -> &PlannerOptions {
        &self.options
    }

    /// Runs the full generational loop and returns the history and the best
    /// assignment found.
    ///
    /// All randomness flows through `rng`, so seeding it fixes the entire
    /// run.
    ///
    /// # Errors
    ///
    /// Propagates selection and fitness-calculation errors from the
    /// operators; none are expected for a validated configuration.
    pub fn run(&self, rng: &mut RandomNumberGenerator) -> Result<PlanOutcome> {
        let workers = self.problem.worker_count();
        let tasks = self.problem.task_count();
        let size = self.options.get_population_size();
        let generations = self.options.get_max_generations();

        let evaluator =
            FitnessEvaluator::new(&self.problem, self.options.get_w1(), self.options.get_w2());
        let crossover = GridCrossover::new(
            self.options.get_crossover_probability(),
            self.options.get_replacement_fraction(),
        );
        let mutation = AllocationMutation::new(self.options.get_mutation_probability());
        let repair = ConstraintRepair::new();

        let mut population = Population::uniform(size, workers, tasks, INITIAL_ALLOCATION);
        repair.apply(&mut population, rng);
        let mut scores = evaluator.evaluate(&population)?;

        let mut history: Vec<GenerationRecord> = Vec::with_capacity(generations);

        for generation in 0..generations {
            let mut next = crossover.next_generation(&population, &scores.fitness, rng)?;
            mutation.apply(&mut next, rng);
            repair.apply(&mut next, rng);

            debug_assert!(next.iter().all(Individual::is_feasible));
            scores = evaluator.evaluate(&next)?;

            let best_index = scores.best_index().ok_or(PlannerError::EmptyPopulation)?;
            let record = GenerationRecord {
                min_fitness: scores.min_fitness(),
                max_fitness: scores.max_fitness(),
                mean_fitness: scores.mean_fitness(),
                best: next.member(best_index).clone(),
            };
            debug!(
                generation,
                min_fitness = record.min_fitness,
                max_fitness = record.max_fitness,
                mean_fitness = record.mean_fitness,
                "generation complete"
            );

            history.push(record);
            population = next;
        }

        let best_generation = history
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| {
                a.max_fitness
                    .partial_cmp(&b.max_fitness)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| i)
            .ok_or(PlannerError::EmptyPopulation)?;

        let best_record = &history[best_generation];
        info!(
            generations,
            best_generation,
            best_fitness = best_record.max_fitness,
            "planning run complete"
        );

        Ok(PlanOutcome {
            best: best_record.best.clone(),
            best_fitness: best_record.max_fitness,
            history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem() -> ProblemDefinition {
        ProblemDefinition::new(
            vec![vec![1, 0], vec![0, 1], vec![1, 1]],
            vec![4.0, 2.0],
            vec![10.0, 20.0, 15.0],
            vec![vec![1, 1], vec![0, 1]],
        )
        .unwrap()
    }

    fn options() -> PlannerOptions {
        PlannerOptions::builder()
            .population_size(10)
            .max_generations(5)
            .weights(0.5, 0.5)
            .build()
    }

    #[test]
    fn test_run_produces_one_record_per_generation() {
        let planner = Planner::new(problem(), options()).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let outcome = planner.run(&mut rng).unwrap();
        assert_eq!(outcome.history.len(), 5);
    }

    #[test]
    fn test_best_fitness_equals_history_maximum() {
        let planner = Planner::new(problem(), options()).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let outcome = planner.run(&mut rng).unwrap();
        let history_max = outcome
            .history
            .iter()
            .map(|r| r.max_fitness)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(outcome.best_fitness, history_max);
    }

    #[test]
    fn test_best_individual_is_feasible() {
        let planner = Planner::new(problem(), options()).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let outcome = planner.run(&mut rng).unwrap();
        assert!(outcome.best.is_feasible());
        assert_eq!(outcome.best.workers(), 3);
        assert_eq!(outcome.best.tasks(), 2);
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let planner = Planner::new(problem(), options()).unwrap();

        let outcome1 = planner.run(&mut RandomNumberGenerator::from_seed(9)).unwrap();
        let outcome2 = planner.run(&mut RandomNumberGenerator::from_seed(9)).unwrap();

        assert_eq!(outcome1, outcome2);
    }

    #[test]
    fn test_record_statistics_are_ordered() {
        let planner = Planner::new(problem(), options()).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let outcome = planner.run(&mut rng).unwrap();
        for record in &outcome.history {
            assert!(record.min_fitness <= record.mean_fitness);
            assert!(record.mean_fitness <= record.max_fitness);
        }
    }

    #[test]
    fn test_invalid_options_rejected_at_construction() {
        let options = PlannerOptions::builder().population_size(0).build();
        assert!(matches!(
            Planner::new(problem(), options),
            Err(PlannerError::Configuration(_))
        ));
    }

    #[test]
    fn test_single_task_problem_rejected() {
        let problem = ProblemDefinition::new(
            vec![vec![1], vec![1]],
            vec![4.0],
            vec![10.0, 20.0],
            vec![vec![1]],
        )
        .unwrap();
        assert!(matches!(
            Planner::new(problem, options()),
            Err(PlannerError::Configuration(_))
        ));
    }
}
