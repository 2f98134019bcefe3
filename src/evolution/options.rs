//! # PlannerOptions
//!
//! The `PlannerOptions` struct represents the configuration of an
//! optimization run: population size, generation count, fitness weights, and
//! the operator probabilities. Options are validated once before a run
//! starts; an invalid bundle aborts with a configuration error and no partial
//! output.
//!
//! ## Example
//!
//! ```rust
//! use crewplan::evolution::options::PlannerOptions;
//!
//! let options = PlannerOptions::builder()
//!     .population_size(50)
//!     .max_generations(200)
//!     .weights(0.6, 0.4)
//!     .crossover_probability(0.8)
//!     .mutation_probability(0.05)
//!     .replacement_fraction(0.3)
//!     .build();
//!
//! assert!(options.validate().is_ok());
//! ```

use crate::error::{PlannerError, Result};

/// Configuration options for an optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerOptions {
    population_size: usize,
    max_generations: usize,
    w1: f64,
    w2: f64,
    crossover_probability: f64,
    mutation_probability: f64,
    replacement_fraction: f64,
}

impl PlannerOptions {
    /// Creates options with every parameter specified.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        population_size: usize,
        max_generations: usize,
        w1: f64,
        w2: f64,
        crossover_probability: f64,
        mutation_probability: f64,
        replacement_fraction: f64,
    ) -> Self {
        Self {
            population_size,
            max_generations,
            w1,
            w2,
            crossover_probability,
            mutation_probability,
            replacement_fraction,
        }
    }

    /// Number of individuals in every generation.
    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    /// Number of generations the loop runs; there is no early stopping.
    pub fn get_max_generations(&self) -> usize {
        self.max_generations
    }

    /// Weight of the inverse normalized cost term in the fitness scalar.
    pub fn get_w1(&self) -> f64 {
        self.w1
    }

    /// Weight of the inverse normalized time term in the fitness scalar.
    pub fn get_w2(&self) -> f64 {
        self.w2
    }

    /// Probability that a parent pair inside the replacement region is
    /// recombined.
    pub fn get_crossover_probability(&self) -> f64 {
        self.crossover_probability
    }

    /// Per-cell probability of re-drawing an allocation during mutation.
    pub fn get_mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    /// Fraction of the population subject to crossover; the remainder is the
    /// elitist pass-through region.
    pub fn get_replacement_fraction(&self) -> f64 {
        self.replacement_fraction
    }

    /// Returns a builder for creating a `PlannerOptions` instance.
    pub fn builder() -> PlannerOptionsBuilder {
        PlannerOptionsBuilder::default()
    }

    /// Validates the option bundle.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` if the population size or
    /// generation count is zero, a weight is not strictly positive, or a
    /// probability/fraction falls outside [0, 1].
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(PlannerError::Configuration(
                "population size must be positive".to_string(),
            ));
        }
        if self.max_generations == 0 {
            return Err(PlannerError::Configuration(
                "max generations must be positive".to_string(),
            ));
        }
        if !(self.w1 > 0.0) || !(self.w2 > 0.0) {
            return Err(PlannerError::Configuration(format!(
                "fitness weights must be strictly positive, got w1={} w2={}",
                self.w1, self.w2
            )));
        }
        for (name, value) in [
            ("crossover probability", self.crossover_probability),
            ("mutation probability", self.mutation_probability),
            ("replacement fraction", self.replacement_fraction),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PlannerError::Configuration(format!(
                    "{} must lie in [0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            w1: 0.5,
            w2: 0.5,
            crossover_probability: 0.8,
            mutation_probability: 0.05,
            replacement_fraction: 0.3,
        }
    }
}

/// Builder for `PlannerOptions`.
///
/// Provides a fluent interface; unspecified parameters fall back to the
/// defaults of [`PlannerOptions::default`].
#[derive(Debug, Clone, Default)]
pub struct PlannerOptionsBuilder {
    population_size: Option<usize>,
    max_generations: Option<usize>,
    w1: Option<f64>,
    w2: Option<f64>,
    crossover_probability: Option<f64>,
    mutation_probability: Option<f64>,
    replacement_fraction: Option<f64>,
}

impl PlannerOptionsBuilder {
    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the number of generations.
    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    /// Sets both fitness weights.
    pub fn weights(mut self, w1: f64, w2: f64) -> Self {
        self.w1 = Some(w1);
        self.w2 = Some(w2);
        self
    }

    /// Sets the crossover probability.
    pub fn crossover_probability(mut self, value: f64) -> Self {
        self.crossover_probability = Some(value);
        self
    }

    /// Sets the mutation probability.
    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = Some(value);
        self
    }

    /// Sets the replacement fraction.
    pub fn replacement_fraction(mut self, value: f64) -> Self {
        self.replacement_fraction = Some(value);
        self
    }

    /// Builds the `PlannerOptions` instance.
    pub fn build(self) -> PlannerOptions {
        let defaults = PlannerOptions::default();
        PlannerOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            max_generations: self.max_generations.unwrap_or(defaults.max_generations),
            w1: self.w1.unwrap_or(defaults.w1),
            w2: self.w2.unwrap_or(defaults.w2),
            crossover_probability: self
                .crossover_probability
                .unwrap_or(defaults.crossover_probability),
            mutation_probability: self
                .mutation_probability
                .unwrap_or(defaults.mutation_probability),
            replacement_fraction: self
                .replacement_fraction
                .unwrap_or(defaults.replacement_fraction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_valid() {
        assert!(PlannerOptions::default().validate().is_ok());
    }

    #[test]
    fn test_builder_fills_unspecified_fields_with_defaults() {
        let options = PlannerOptions::builder()
            .population_size(10)
            .max_generations(5)
            .build();

        assert_eq!(options.get_population_size(), 10);
        assert_eq!(options.get_max_generations(), 5);
        assert_eq!(options.get_w1(), 0.5);
        assert_eq!(options.get_crossover_probability(), 0.8);
    }

    #[test]
    fn test_zero_population_size_rejected() {
        let options = PlannerOptions::builder().population_size(0).build();
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_zero_generations_rejected() {
        let options = PlannerOptions::builder().max_generations(0).build();
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_non_positive_weight_rejected() {
        let options = PlannerOptions::builder().weights(0.0, 0.5).build();
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_out_of_range_probability_rejected() {
        let options = PlannerOptions::builder().crossover_probability(1.5).build();
        assert!(options.validate().is_err());

        let options = PlannerOptions::builder()
            .mutation_probability(-0.1)
            .build();
        assert!(options.validate().is_err());

        let options = PlannerOptions::builder().replacement_fraction(2.0).build();
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_boundary_probabilities_accepted() {
        let options = PlannerOptions::builder()
            .crossover_probability(0.0)
            .mutation_probability(1.0)
            .replacement_fraction(1.0)
            .build();
        assert!(options.validate().is_ok());
    }
}
