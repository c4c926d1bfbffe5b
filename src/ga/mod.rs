//! Genetic Algorithm engine for the 0/1 knapsack problem.
//!
//! Candidate packings are bit strings, one gene per item. The engine evolves
//! a small, fixed-size population by fitness-proportionate selection,
//! single-point crossover and single-bit mutation, replacing the whole
//! population every generation and remembering the best individual ever
//! produced.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, generation budget,
//!   mutation probability, parent retry budget, seed)
//! - [`Individual`]: A candidate packing with derived weight, fitness and
//!   mating probability
//! - [`Population`]: A generation, with mating-probability normalization
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final optimization result with statistics
//! - [`Reporter`]: Receives initial-best, improvement and finish events
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and flip mutation on `&[bool]`
//! - [`selection`]: Roulette wheel selection and distinct-parent pairing
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod individual;
pub mod operators;
mod population;
mod report;
mod runner;
pub mod selection;

pub use config::{
    GaConfig, DEFAULT_MAX_GENERATIONS, DEFAULT_POPULATION_SIZE, MUTATION_PROB, PARENT_RETRY_LIMIT,
};
pub use individual::Individual;
pub use population::Population;
pub use report::{NoopReporter, RecordingReporter, Reporter, TracingReporter};
pub use runner::{GaResult, GaRunner};
