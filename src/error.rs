//! # Error Types
//!
//! This module defines the error taxonomy for the planner. Every failure is
//! local, synchronous, and aborts the run — there is no retry or best-effort
//! mode, because the algorithm is itself a stochastic search and a failed run
//! carries no partial result worth preserving.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use crewplan::error::{PlannerError, Result};
//!
//! fn check_probability(p: f64) -> Result<()> {
//!     if !(0.0..=1.0).contains(&p) {
//!         return Err(PlannerError::Configuration(format!(
//!             "probability {} is outside [0, 1]",
//!             p
//!         )));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running the planner.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Malformed or inconsistent problem shapes, out-of-range probabilities,
    /// non-positive population size or generation count, or dimensions too
    /// small for interior crossover splits. Detected before the run starts.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// A task column with zero total allocation reached the fitness evaluator.
    /// Constraint repair runs before every evaluation, so this is a defensive
    /// check for a condition that is unreachable by construction.
    #[error("Feasibility error: {0}")]
    Feasibility(String),

    /// Error that occurs when a fitness calculation produces a zero or
    /// non-finite intermediate value.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Negative or all-zero fitness values entering the roulette-wheel
    /// cumulative-sum scan, which would leave the probability simplex
    /// ill-defined.
    #[error("Selection error: {0}")]
    Selection(String),
}

/// A specialized Result type for planner operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `PlannerError`.
pub type Result<T> = std::result::Result<T, PlannerError>;
