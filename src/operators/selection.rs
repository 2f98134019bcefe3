//! # Roulette-Wheel Selection
//!
//! Fitness-proportionate selection over raw fitness values. The wheel is the
//! cumulative sum of the fitness vector in population order; a uniform draw in
//! `[0, total)` lands on the first index whose cumulative value reaches it.
//! Each call selects an independent parent pair with replacement, so the same
//! individual may serve as both parents.
//!
//! The scalarization in [`crate::fitness`] guarantees non-negative fitness;
//! negative values or an all-zero vector would leave the wheel's probability
//! simplex ill-defined and are rejected as a selection error.

use crate::error::{PlannerError, Result};
use crate::rng::RandomNumberGenerator;

/// A selection strategy that draws parents with probability proportional to
/// their fitness.
#[derive(Debug, Clone, Default)]
pub struct RouletteWheel;

impl RouletteWheel {
    /// Creates a new `RouletteWheel` strategy.
    pub fn new() -> Self {
        Self
    }

    /// Selects one index by spinning the wheel once.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::EmptyPopulation` for an empty fitness vector and
    /// `PlannerError::Selection` if any fitness value is negative or the total
    /// is not strictly positive.
    pub fn select(&self, fitness: &[f64], rng: &mut RandomNumberGenerator) -> Result<usize> {
        if fitness.is_empty() {
            return Err(PlannerError::EmptyPopulation);
        }
        if let Some(&f) = fitness.iter().find(|&&f| f < 0.0) {
            return Err(PlannerError::Selection(format!(
                "roulette-wheel selection requires non-negative fitness, found {}",
                f
            )));
        }

        let mut cumulative = Vec::with_capacity(fitness.len());
        let mut total = 0.0;
        for &f in fitness {
            total += f;
            cumulative.push(total);
        }

        if !(total > 0.0) || !total.is_finite() {
            return Err(PlannerError::Selection(format!(
                "roulette-wheel selection requires a positive finite total fitness, got {}",
                total
            )));
        }

        let eta = rng.uniform(0.0, total);
        for (i, &cum) in cumulative.iter().enumerate() {
            if cum >= eta {
                return Ok(i);
            }
        }

        // Floating-point accumulation can leave the draw past the last
        // cumulative value.
        Ok(fitness.len() - 1)
    }

    /// Selects a parent pair: two independent spins, with replacement.
    pub fn select_pair(
        &self,
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<(usize, usize)> {
        let first = self.select(fitness, rng)?;
        let second = self.select(fitness, rng)?;
        Ok((first, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_returns_valid_index() {
        let wheel = RouletteWheel::new();
        let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
        let mut rng = RandomNumberGenerator::from_seed(42);

        for _ in 0..50 {
            let idx = wheel.select(&fitness, &mut rng).unwrap();
            assert!(idx < fitness.len());
        }
    }

    #[test]
    fn test_selection_frequency_matches_fitness_share() {
        // With fitness [1, 3], the second individual owns 75% of the wheel.
        let wheel = RouletteWheel::new();
        let fitness = vec![1.0, 3.0];
        let mut rng = RandomNumberGenerator::from_seed(7);

        let trials = 20_000;
        let mut second = 0usize;
        for _ in 0..trials {
            if wheel.select(&fitness, &mut rng).unwrap() == 1 {
                second += 1;
            }
        }

        let frequency = second as f64 / trials as f64;
        assert!(
            (frequency - 0.75).abs() < 0.02,
            "expected ~0.75, got {}",
            frequency
        );
    }

    #[test]
    fn test_zero_fitness_individual_is_never_selected() {
        let wheel = RouletteWheel::new();
        let fitness = vec![0.0, 1.0];
        let mut rng = RandomNumberGenerator::from_seed(3);

        for _ in 0..100 {
            assert_eq!(wheel.select(&fitness, &mut rng).unwrap(), 1);
        }
    }

    #[test]
    fn test_select_pair_with_replacement() {
        // A single dominant individual must be selectable as both parents.
        let wheel = RouletteWheel::new();
        let fitness = vec![1e-9, 1.0];
        let mut rng = RandomNumberGenerator::from_seed(11);

        let (a, b) = wheel.select_pair(&fitness, &mut rng).unwrap();
        assert_eq!(a, 1);
        assert_eq!(b, 1);
    }

    #[test]
    fn test_empty_fitness_rejected() {
        let wheel = RouletteWheel::new();
        let mut rng = RandomNumberGenerator::from_seed(1);
        assert!(matches!(
            wheel.select(&[], &mut rng),
            Err(PlannerError::EmptyPopulation)
        ));
    }

    #[test]
    fn test_negative_fitness_rejected() {
        let wheel = RouletteWheel::new();
        let mut rng = RandomNumberGenerator::from_seed(1);
        let result = wheel.select(&[0.5, -0.1, 0.2], &mut rng);
        assert!(matches!(result, Err(PlannerError::Selection(_))));
    }

    #[test]
    fn test_all_zero_fitness_rejected() {
        let wheel = RouletteWheel::new();
        let mut rng = RandomNumberGenerator::from_seed(1);
        let result = wheel.select(&[0.0, 0.0, 0.0], &mut rng);
        assert!(matches!(result, Err(PlannerError::Selection(_))));
    }
}
