//! 0/1 knapsack optimization by genetic algorithm.
//!
//! Given items with a weight and a benefit and a knapsack of limited
//! capacity, the engine searches for the subset of items with the largest
//! total benefit that still fits.
//!
//! - [`knapsack`]: Problem data, weight/fitness evaluation, and the final
//!   [`Knapsack`](knapsack::Knapsack) packing
//! - [`ga`]: The evolutionary engine: population, selection, crossover,
//!   mutation, and the generational loop
//! - [`random`]: The injected random source every operator draws from
//!
//! # Example
//!
//! ```
//! use knapsack_ga::ga::GaConfig;
//! use knapsack_ga::knapsack::SampleProblem;
//!
//! let config = GaConfig::default().with_seed(7);
//! let (result, knapsack) = knapsack_ga::solve(&SampleProblem, &config).unwrap();
//! assert_eq!(knapsack.compartments(), result.best.genes());
//! ```

pub mod error;
pub mod ga;
pub mod knapsack;
pub mod random;

pub use error::GaError;

use ga::{GaConfig, GaResult, GaRunner, TracingReporter};
use knapsack::{Knapsack, ProblemProvider};

/// Fetches a problem, evolves it with progress logged through `tracing`,
/// and packs the best individual found.
pub fn solve<P: ProblemProvider + ?Sized>(
    provider: &P,
    config: &GaConfig,
) -> Result<(GaResult, Knapsack), GaError> {
    let problem = provider.provide()?;
    let result = GaRunner::run(&problem, config, TracingReporter)?;
    let knapsack = result.materialize(&problem);
    Ok((result, knapsack))
}
