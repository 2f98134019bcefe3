//! # Fitness Evaluator
//!
//! Converts a population into per-individual (time, cost, skill-match)
//! triples and a scalar fitness. Time and cost are normalized against
//! reference maxima computed once from the problem definition, so they stay
//! constant across generations. The scalar combines the three objectives in a
//! ratio form that rewards low cost and low duration, gated multiplicatively
//! by skill coverage:
//!
//! ```text
//! fitness = skill_match * (w1 / cost + w2 / time)
//! ```
//!
//! Zero skill coverage therefore yields zero fitness, and an individual is
//! better the cheaper and faster its plan is. Evaluation never mutates the
//! population, so a future parallel extension could score individuals
//! independently over an immutable snapshot.

use crate::error::{PlannerError, Result};
use crate::population::Population;
use crate::problem::ProblemDefinition;

/// Parallel per-individual score vectors for one evaluated population.
///
/// Recomputed every generation, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationScores {
    /// Normalized project duration per individual.
    pub time: Vec<f64>,
    /// Normalized project cost per individual.
    pub cost: Vec<f64>,
    /// Fraction of required skills covered, averaged over tasks, per individual.
    pub skill_match: Vec<f64>,
    /// Scalar fitness per individual.
    pub fitness: Vec<f64>,
}

impl PopulationScores {
    /// The lowest fitness in the population.
    pub fn min_fitness(&self) -> f64 {
        self.fitness.iter().fold(f64::INFINITY, |a, &b| a.min(b))
    }

    /// The highest fitness in the population.
    pub fn max_fitness(&self) -> f64 {
        self.fitness
            .iter()
            .fold(f64::NEG_INFINITY, |a, &b| a.max(b))
    }

    /// The mean fitness of the population.
    pub fn mean_fitness(&self) -> f64 {
        self.fitness.iter().sum::<f64>() / self.fitness.len() as f64
    }

    /// Index of the fittest individual, or `None` for an empty population.
    pub fn best_index(&self) -> Option<usize> {
        self.fitness
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i)
    }
}

/// Scores whole populations against a borrowed problem definition.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator<'a> {
    problem: &'a ProblemDefinition,
    w1: f64,
    w2: f64,
    max_time: f64,
    max_cost: f64,
}

impl<'a> FitnessEvaluator<'a> {
    /// Creates an evaluator for `problem` with cost weight `w1` and time
    /// weight `w2`, precomputing the normalization maxima.
    pub fn new(problem: &'a ProblemDefinition, w1: f64, w2: f64) -> Self {
        Self {
            problem,
            w1,
            w2,
            max_time: problem.max_time(),
            max_cost: problem.max_cost(),
        }
    }

    /// Scores every individual in `population`.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::EmptyPopulation` for an empty population,
    /// `PlannerError::Feasibility` if an individual leaves a task unstaffed
    /// (unreachable when constraint repair ran beforehand), and
    /// `PlannerError::FitnessCalculation` if a normalized time or cost is
    /// zero or any computed value is non-finite.
    pub fn evaluate(&self, population: &Population) -> Result<PopulationScores> {
        if population.is_empty() {
            return Err(PlannerError::EmptyPopulation);
        }

        let n = population.len();
        let mut scores = PopulationScores {
            time: Vec::with_capacity(n),
            cost: Vec::with_capacity(n),
            skill_match: Vec::with_capacity(n),
            fitness: Vec::with_capacity(n),
        };

        for (index, individual) in population.iter().enumerate() {
            let mut time = 0.0;
            let mut cost = 0.0;
            let mut skill_match_sum = 0.0;

            for task in 0..self.problem.task_count() {
                let effort = individual.task_allocation(task);
                if effort <= 0.0 {
                    return Err(PlannerError::Feasibility(format!(
                        "individual {} has no worker assigned to task {}",
                        index, task
                    )));
                }

                let task_time = self.problem.months_for_task(task) / effort;
                let crew_rate: f64 = (0..self.problem.worker_count())
                    .filter(|&w| individual.allocation(w, task) != 0.0)
                    .map(|w| self.problem.cost_of_worker(w))
                    .sum();

                time += task_time;
                cost += task_time * crew_rate;
                skill_match_sum += self.task_skill_match(individual, task);
            }

            let time = time / self.max_time;
            let cost = cost / self.max_cost;
            let skill_match = skill_match_sum / self.problem.task_count() as f64;

            if !(time > 0.0) || !(cost > 0.0) || !time.is_finite() || !cost.is_finite() {
                return Err(PlannerError::FitnessCalculation(format!(
                    "individual {} has degenerate normalized time {} or cost {}",
                    index, time, cost
                )));
            }

            let fitness = skill_match * (self.w1 / cost + self.w2 / time);
            if !fitness.is_finite() {
                return Err(PlannerError::FitnessCalculation(format!(
                    "individual {} has non-finite fitness {}",
                    index, fitness
                )));
            }

            scores.time.push(time);
            scores.cost.push(cost);
            scores.skill_match.push(skill_match);
            scores.fitness.push(fitness);
        }

        Ok(scores)
    }

    /// The fraction of `task`'s required skills held by at least one assigned
    /// worker. A task that requires no skills counts as fully matched.
    fn task_skill_match(&self, individual: &crate::population::Individual, task: usize) -> f64 {
        let mut required = 0usize;
        let mut covered = 0usize;

        for skill in 0..self.problem.skill_count() {
            if !self.problem.task_requires_skill(task, skill) {
                continue;
            }
            required += 1;
            let has = (0..self.problem.worker_count()).any(|w| {
                individual.allocation(w, task) != 0.0 && self.problem.worker_has_skill(w, skill)
            });
            if has {
                covered += 1;
            }
        }

        if required == 0 {
            1.0
        } else {
            covered as f64 / required as f64
        }
    }
}
