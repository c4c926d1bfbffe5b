//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::GaError;

/// Population size of the classic configuration.
pub const DEFAULT_POPULATION_SIZE: usize = 6;

/// Generations run before the loop stops. There is no early stopping.
pub const DEFAULT_MAX_GENERATIONS: usize = 10_000;

/// Probability that a child receives one bit flip.
pub const MUTATION_PROB: f64 = 0.10;

/// How many times the second parent is redrawn while it equals the first.
pub const PARENT_RETRY_LIMIT: usize = 100;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 6);
/// assert_eq!(config.max_generations, 10_000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(500)
///     .with_mutation_probability(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Number of generations to run.
    pub max_generations: usize,

    /// Probability (0.0–1.0) that a child is mutated.
    ///
    /// A mutation flips exactly one gene.
    pub mutation_probability: f64,

    /// Redraw budget for the second parent when it duplicates the first.
    pub parent_retry_limit: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from the wall clock.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            max_generations: DEFAULT_MAX_GENERATIONS,
            mutation_probability: MUTATION_PROB,
            parent_retry_limit: PARENT_RETRY_LIMIT,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the parent redraw budget.
    pub fn with_parent_retry_limit(mut self, limit: usize) -> Self {
        self.parent_retry_limit = limit;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Gene size is a property of the problem and is checked by
    /// [`KnapsackProblem::new`](crate::knapsack::KnapsackProblem::new).
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size < 1 {
            return Err(GaError::PopulationTooSmall {
                size: self.population_size,
            });
        }
        if self.max_generations == 0 {
            return Err(GaError::ZeroGenerations);
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(GaError::InvalidMutationProbability {
                probability: self.mutation_probability,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 6);
        assert_eq!(config.max_generations, 10_000);
        assert!((config.mutation_probability - 0.1).abs() < 1e-10);
        assert_eq!(config.parent_retry_limit, 100);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(50)
            .with_max_generations(200)
            .with_mutation_probability(0.3)
            .with_parent_retry_limit(5)
            .with_seed(42);

        assert_eq!(config.population_size, 50);
        assert_eq!(config.max_generations, 200);
        assert!((config.mutation_probability - 0.3).abs() < 1e-10);
        assert_eq!(config.parent_retry_limit, 5);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_single_individual_ok() {
        assert!(GaConfig::default().with_population_size(1).validate().is_ok());
    }

    #[test]
    fn test_validate_empty_population() {
        let config = GaConfig::default().with_population_size(0);
        assert_eq!(
            config.validate(),
            Err(GaError::PopulationTooSmall { size: 0 })
        );
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert_eq!(config.validate(), Err(GaError::ZeroGenerations));
    }

    #[test]
    fn test_validate_mutation_probability() {
        let mut config = GaConfig::default();
        config.mutation_probability = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(GaError::InvalidMutationProbability { .. })
        ));
    }

    #[test]
    fn test_clamp_mutation_probability() {
        let high = GaConfig::default().with_mutation_probability(2.0);
        let low = GaConfig::default().with_mutation_probability(-0.5);
        assert!((high.mutation_probability - 1.0).abs() < 1e-10);
        assert!((low.mutation_probability - 0.0).abs() < 1e-10);
    }
}
