//! # Genetic Operators
//!
//! The stochastic operators of the generational loop: fitness-proportionate
//! parent selection, two-point grid crossover, per-cell allocation mutation,
//! and the constraint repair that restores feasibility afterwards. Each
//! operator receives the population (or score vectors) by reference per call
//! and retains nothing across calls; the driver alone sequences them.

pub mod crossover;
pub mod mutation;
pub mod repair;
pub mod selection;

pub use crossover::{grid_crossover, GridCrossover};
pub use mutation::AllocationMutation;
pub use repair::ConstraintRepair;
pub use selection::RouletteWheel;
