//! Error taxonomy for the knapsack GA.
//!
//! Everything the engine does is in-memory arithmetic, so the only failures
//! are configurations the algorithm cannot run on and the fatal case of a
//! population whose fitness total cannot be normalized.

/// Errors raised while building a problem, validating a configuration, or
/// running the evolutionary loop.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    #[error("InvalidConfig: population_size must be at least 1, got {size}")]
    PopulationTooSmall { size: usize },

    #[error("InvalidConfig: max_generations must be at least 1")]
    ZeroGenerations,

    #[error("InvalidConfig: mutation_probability must be within [0, 1], got {probability}")]
    InvalidMutationProbability { probability: f64 },

    #[error("InvalidProblem: at least 2 items are required for crossover, got {gene_size}")]
    GeneSizeTooSmall { gene_size: usize },

    #[error("InvalidProblem: capacity must be finite and non-negative, got {capacity}")]
    InvalidCapacity { capacity: f64 },

    #[error(
        "InvalidProblem: item {index} must have finite, non-negative weight and benefit. weight = {weight}, benefit = {benefit}"
    )]
    InvalidItem {
        index: usize,
        weight: f64,
        benefit: f64,
    },

    #[error("DegenerateFitness: population fitness total cannot be normalized, total = {total}")]
    DegenerateFitness { total: f64 },
}

impl GaError {
    pub(crate) fn invalid_item(index: usize, weight: f64, benefit: f64) -> Self {
        Self::InvalidItem {
            index,
            weight,
            benefit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = GaError::PopulationTooSmall { size: 0 };
        assert!(err.to_string().contains("got 0"));

        let err = GaError::invalid_item(3, -1.0, 2.0);
        let msg = err.to_string();
        assert!(msg.contains("item 3"), "{msg}");
        assert!(msg.contains("weight = -1"), "{msg}");
    }
}
