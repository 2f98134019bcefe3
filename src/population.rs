//! # Chromosome and Population Model
//!
//! An [`Individual`] is a W×T matrix of allocation fractions: the value at
//! (worker, task) is the fraction of a month that worker devotes to that task,
//! always one of [`ALLOCATION_LEVELS`]. Zero means unassigned. A
//! [`Population`] is an ordered collection of individuals whose order carries
//! no meaning beyond serving as a selection index.
//!
//! A population is created once at generation zero and replaced wholesale each
//! generation; no individual survives by identity across generations except
//! through the elitist pass-through region of recombination.

use crate::error::{PlannerError, Result};

/// The discrete domain of allocation values: a worker devotes 0, ¼, ½, ¾, or
/// a full month to a task.
pub const ALLOCATION_LEVELS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// The allocation assigned by constraint repair to an otherwise unstaffed task.
pub const REPAIR_ALLOCATION: f64 = 0.25;

/// A single candidate assignment: a W×T matrix of allocation fractions,
/// stored row-major (one row per worker).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    workers: usize,
    tasks: usize,
    genes: Vec<f64>,
}

impl Individual {
    /// Creates an individual with every cell set to `value`.
    pub fn filled(workers: usize, tasks: usize, value: f64) -> Self {
        Self {
            workers,
            tasks,
            genes: vec![value; workers * tasks],
        }
    }

    /// Creates an all-zero individual (no worker assigned to any task).
    ///
    /// Zero-filled individuals are deliberately produced by recombination when
    /// the crossover probability check fails; constraint repair later restores
    /// their feasibility.
    pub fn zeroed(workers: usize, tasks: usize) -> Self {
        Self::filled(workers, tasks, 0.0)
    }

    /// Number of workers `W`.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Number of tasks `T`.
    pub fn tasks(&self) -> usize {
        self.tasks
    }

    /// The allocation fraction of `worker` on `task`.
    pub fn allocation(&self, worker: usize, task: usize) -> f64 {
        self.genes[worker * self.tasks + task]
    }

    /// Sets the allocation fraction of `worker` on `task`.
    pub fn set_allocation(&mut self, worker: usize, task: usize, value: f64) {
        self.genes[worker * self.tasks + task] = value;
    }

    /// Total allocation across all workers for `task` (the task column sum).
    pub fn task_allocation(&self, task: usize) -> f64 {
        (0..self.workers).map(|w| self.allocation(w, task)).sum()
    }

    /// Whether every task has at least one worker assigned.
    pub fn is_feasible(&self) -> bool {
        (0..self.tasks).all(|t| self.task_allocation(t) > 0.0)
    }

    /// Iterates over all cells mutably, in row-major order.
    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut f64> {
        self.genes.iter_mut()
    }
}

/// An ordered, fixed-size collection of candidate assignments.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    members: Vec<Individual>,
}

impl Population {
    /// Creates a population of `size` individuals with every allocation set to
    /// `value`.
    ///
    /// The generational loop initializes with the constant midpoint 0.5 rather
    /// than random values; the initial population is uniform by design.
    pub fn uniform(size: usize, workers: usize, tasks: usize, value: f64) -> Self {
        Self {
            members: (0..size)
                .map(|_| Individual::filled(workers, tasks, value))
                .collect(),
        }
    }

    /// Wraps an existing set of individuals.
    pub fn from_members(members: Vec<Individual>) -> Self {
        Self { members }
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the population has no individuals.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The individual at `index`.
    pub fn member(&self, index: usize) -> &Individual {
        &self.members[index]
    }

    /// Iterates over the individuals in population order.
    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.members.iter()
    }

    /// Iterates mutably over the individuals in population order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Individual> {
        self.members.iter_mut()
    }

    /// Verifies that every member has shape `workers`×`tasks`.
    pub fn check_shape(&self, workers: usize, tasks: usize) -> Result<()> {
        if self.is_empty() {
            return Err(PlannerError::EmptyPopulation);
        }
        for (i, member) in self.members.iter().enumerate() {
            if member.workers() != workers || member.tasks() != tasks {
                return Err(PlannerError::Configuration(format!(
                    "individual {} has shape {}x{}, expected {}x{}",
                    i,
                    member.workers(),
                    member.tasks(),
                    workers,
                    tasks
                )));
            }
        }
        Ok(())
    }
}
