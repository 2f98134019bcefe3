//! # Evolution
//!
//! The optimizer driver and its configuration: [`options::PlannerOptions`]
//! holds the run parameters and [`launcher::Planner`] executes the
//! generational loop.

pub mod launcher;
pub mod options;

pub use launcher::{GenerationRecord, PlanOutcome, Planner};
pub use options::{PlannerOptions, PlannerOptionsBuilder};
