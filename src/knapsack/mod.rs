//! Knapsack problem data and the final packing.
//!
//! - [`KnapsackProblem`]: the item catalog plus capacity, and the pure
//!   weight/fitness evaluation every individual is scored with
//! - [`ProblemProvider`]: where a run gets its problem from
//! - [`Knapsack`]: the packing decision projected from the best individual

mod packing;
mod problem;

pub use packing::Knapsack;
pub use problem::{Item, KnapsackProblem, ProblemProvider, SampleProblem, LOWEST_FITNESS};
