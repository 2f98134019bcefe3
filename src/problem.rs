//! # Problem Definition
//!
//! The `ProblemDefinition` struct holds the immutable inputs of a staffing
//! problem: which skills each worker has, how much effort each task needs,
//! what each worker costs, and which skills each task requires. It is loaded
//! once, validated up front, and consumed read-only by every other component
//! for the whole run.
//!
//! ## Example
//!
//! ```rust
//! use crewplan::problem::ProblemDefinition;
//!
//! let problem = ProblemDefinition::new(
//!     vec![vec![1, 0], vec![0, 1], vec![1, 1]], // worker skills
//!     vec![4.0, 2.0],                           // effort-months per task
//!     vec![10.0, 20.0, 15.0],                   // cost rate per worker
//!     vec![vec![1, 1], vec![0, 1]],             // required skills per task
//! )
//! .unwrap();
//!
//! assert_eq!(problem.worker_count(), 3);
//! assert_eq!(problem.task_count(), 2);
//! assert_eq!(problem.skill_count(), 2);
//! ```

use crate::error::{PlannerError, Result};

/// Immutable description of a staffing problem with `W` workers, `T` tasks,
/// and `S` skills.
///
/// All four tables are validated on construction: matrices must be
/// rectangular with binary entries, vector lengths must agree with the matrix
/// dimensions, and effort and cost values must be strictly positive.
/// Mismatched shapes are a configuration error and fail before the run starts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProblemDefinition {
    /// W×S binary matrix: `skill_table[w][s] == 1` iff worker `w` has skill `s`.
    skill_table: Vec<Vec<u8>>,
    /// Length-T vector of total effort-months required per task.
    months_per_task: Vec<f64>,
    /// Length-W vector of cost rates per worker.
    cost_per_person: Vec<f64>,
    /// T×S binary matrix of required skills per task.
    skills_per_task: Vec<Vec<u8>>,
}

impl ProblemDefinition {
    /// Builds a problem definition, validating shapes and value ranges.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` if any table is empty or ragged,
    /// if the worker/task/skill dimensions disagree between tables, if a
    /// matrix entry is not 0 or 1, or if an effort or cost value is not
    /// strictly positive.
    pub fn new(
        skill_table: Vec<Vec<u8>>,
        months_per_task: Vec<f64>,
        cost_per_person: Vec<f64>,
        skills_per_task: Vec<Vec<u8>>,
    ) -> Result<Self> {
        if skill_table.is_empty() {
            return Err(PlannerError::Configuration(
                "skill table must have at least one worker row".to_string(),
            ));
        }
        if months_per_task.is_empty() {
            return Err(PlannerError::Configuration(
                "months-per-task vector must have at least one task".to_string(),
            ));
        }

        let skill_count = skill_table[0].len();
        if skill_count == 0 {
            return Err(PlannerError::Configuration(
                "skill table must have at least one skill column".to_string(),
            ));
        }

        validate_binary_matrix(&skill_table, skill_count, "skill table")?;
        validate_binary_matrix(&skills_per_task, skill_count, "skills-per-task table")?;

        if skills_per_task.len() != months_per_task.len() {
            return Err(PlannerError::Configuration(format!(
                "skills-per-task rows ({}) don't match months-per-task length ({})",
                skills_per_task.len(),
                months_per_task.len()
            )));
        }
        if cost_per_person.len() != skill_table.len() {
            return Err(PlannerError::Configuration(format!(
                "cost-per-person length ({}) doesn't match skill table rows ({})",
                cost_per_person.len(),
                skill_table.len()
            )));
        }

        if let Some(m) = months_per_task.iter().find(|&&m| !(m > 0.0)) {
            return Err(PlannerError::Configuration(format!(
                "months per task must be strictly positive, found {}",
                m
            )));
        }
        if let Some(c) = cost_per_person.iter().find(|&&c| !(c > 0.0)) {
            return Err(PlannerError::Configuration(format!(
                "cost per person must be strictly positive, found {}",
                c
            )));
        }

        Ok(Self {
            skill_table,
            months_per_task,
            cost_per_person,
            skills_per_task,
        })
    }

    /// Number of workers `W`.
    pub fn worker_count(&self) -> usize {
        self.skill_table.len()
    }

    /// Number of tasks `T`.
    pub fn task_count(&self) -> usize {
        self.months_per_task.len()
    }

    /// Number of skills `S`.
    pub fn skill_count(&self) -> usize {
        self.skill_table[0].len()
    }

    /// Whether worker `worker` has skill `skill`.
    pub fn worker_has_skill(&self, worker: usize, skill: usize) -> bool {
        self.skill_table[worker][skill] == 1
    }

    /// Whether task `task` requires skill `skill`.
    pub fn task_requires_skill(&self, task: usize, skill: usize) -> bool {
        self.skills_per_task[task][skill] == 1
    }

    /// Total effort-months required by task `task`.
    pub fn months_for_task(&self, task: usize) -> f64 {
        self.months_per_task[task]
    }

    /// Cost rate of worker `worker`.
    pub fn cost_of_worker(&self, worker: usize) -> f64 {
        self.cost_per_person[worker]
    }

    /// Upper reference duration used to normalize project time: the sum of
    /// all task efforts.
    pub fn max_time(&self) -> f64 {
        self.months_per_task.iter().sum()
    }

    /// Upper reference cost used to normalize project cost: the total effort
    /// priced at the most expensive worker's rate.
    pub fn max_cost(&self) -> f64 {
        let max_rate = self
            .cost_per_person
            .iter()
            .fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        self.max_time() * max_rate
    }
}

fn validate_binary_matrix(matrix: &[Vec<u8>], width: usize, name: &str) -> Result<()> {
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != width {
            return Err(PlannerError::Configuration(format!(
                "{} row {} has {} columns, expected {}",
                name,
                i,
                row.len(),
                width
            )));
        }
        if let Some(&v) = row.iter().find(|&&v| v > 1) {
            return Err(PlannerError::Configuration(format!(
                "{} row {} contains non-binary entry {}",
                name, i, v
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_problem() -> ProblemDefinition {
        ProblemDefinition::new(
            vec![vec![1, 0], vec![0, 1], vec![1, 1]],
            vec![4.0, 2.0],
            vec![10.0, 20.0, 15.0],
            vec![vec![1, 1], vec![0, 1]],
        )
        .unwrap()
    }

    #[test]
    fn test_dimensions() {
        let problem = valid_problem();
        assert_eq!(problem.worker_count(), 3);
        assert_eq!(problem.task_count(), 2);
        assert_eq!(problem.skill_count(), 2);
    }

    #[test]
    fn test_accessors() {
        let problem = valid_problem();
        assert!(problem.worker_has_skill(0, 0));
        assert!(!problem.worker_has_skill(0, 1));
        assert!(problem.task_requires_skill(0, 0));
        assert!(!problem.task_requires_skill(1, 0));
        assert_eq!(problem.months_for_task(0), 4.0);
        assert_eq!(problem.cost_of_worker(1), 20.0);
    }

    #[test]
    fn test_normalization_constants() {
        let problem = valid_problem();
        assert_eq!(problem.max_time(), 6.0);
        assert_eq!(problem.max_cost(), 120.0);
    }

    #[test]
    fn test_empty_skill_table_rejected() {
        let result = ProblemDefinition::new(vec![], vec![1.0], vec![], vec![vec![1]]);
        assert!(matches!(result, Err(PlannerError::Configuration(_))));
    }

    #[test]
    fn test_ragged_skill_table_rejected() {
        let result = ProblemDefinition::new(
            vec![vec![1, 0], vec![1]],
            vec![1.0],
            vec![10.0, 20.0],
            vec![vec![1, 0]],
        );
        assert!(matches!(result, Err(PlannerError::Configuration(_))));
    }

    #[test]
    fn test_mismatched_cost_vector_rejected() {
        let result = ProblemDefinition::new(
            vec![vec![1], vec![1]],
            vec![1.0],
            vec![10.0],
            vec![vec![1]],
        );
        assert!(matches!(result, Err(PlannerError::Configuration(_))));
    }

    #[test]
    fn test_mismatched_requirement_rows_rejected() {
        let result = ProblemDefinition::new(
            vec![vec![1], vec![1]],
            vec![1.0, 2.0],
            vec![10.0, 20.0],
            vec![vec![1]],
        );
        assert!(matches!(result, Err(PlannerError::Configuration(_))));
    }

    #[test]
    fn test_non_binary_entry_rejected() {
        let result = ProblemDefinition::new(
            vec![vec![2]],
            vec![1.0],
            vec![10.0],
            vec![vec![1]],
        );
        assert!(matches!(result, Err(PlannerError::Configuration(_))));
    }

    #[test]
    fn test_non_positive_months_rejected() {
        let result = ProblemDefinition::new(
            vec![vec![1]],
            vec![0.0],
            vec![10.0],
            vec![vec![1]],
        );
        assert!(matches!(result, Err(PlannerError::Configuration(_))));
    }

    #[test]
    fn test_non_positive_cost_rejected() {
        let result = ProblemDefinition::new(
            vec![vec![1]],
            vec![1.0],
            vec![-5.0],
            vec![vec![1]],
        );
        assert!(matches!(result, Err(PlannerError::Configuration(_))));
    }
}
