pub mod error;
pub mod evolution;
pub mod fitness;
pub mod operators;
pub mod population;
pub mod problem;
pub mod rng;

// Re-export commonly used types for convenience
pub use error::{PlannerError, Result};
pub use evolution::{PlanOutcome, Planner, PlannerOptions};
pub use population::{Individual, Population, ALLOCATION_LEVELS};
pub use problem::ProblemDefinition;
