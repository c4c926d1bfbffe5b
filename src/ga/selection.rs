//! Parent selection.
//!
//! Parents are drawn by fitness-proportionate (roulette wheel) selection
//! over the mating probabilities assigned by
//! [`Population::assign_mating_probabilities`].
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::population::Population;
use crate::random::RandomSource;

/// Roulette wheel selection. Returns a member index.
///
/// Draws `r` uniformly from `[0, 1)` and walks the population in order,
/// accumulating mating probabilities; the first member whose cumulative
/// probability reaches `r` wins. If rounding leaves the running sum short
/// of `r`, the last member is returned.
///
/// # Complexity
/// O(n) per selection
pub fn select<R: RandomSource>(population: &Population, rng: &mut R) -> usize {
    let n = population.len();
    assert!(n > 0, "cannot select from empty population");

    let threshold = rng.next_uniform();
    let mut cumulative = 0.0;
    for (i, ind) in population.iter().enumerate() {
        cumulative += ind.mating_probability();
        if threshold <= cumulative {
            return i;
        }
    }

    n - 1 // floating-point fallback
}

/// Selects two parents, preferring gene-wise distinct ones.
///
/// While the second pick has the same genes as the first it is redrawn, up
/// to `retry_limit` times. After that the last draw is accepted even if it
/// is still identical, so a converged population can keep breeding.
pub fn distinct_pair<R: RandomSource>(
    population: &Population,
    retry_limit: usize,
    rng: &mut R,
) -> (usize, usize) {
    let first = select(population, rng);
    let mut second = select(population, rng);

    let mut retries = 0;
    while population[first].same_genes(&population[second]) && retries < retry_limit {
        second = select(population, rng);
        retries += 1;
    }

    if retries == retry_limit && population[first].same_genes(&population[second]) {
        tracing::trace!(first, second, retry_limit, "accepting identical parents");
    }

    (first, second)
}
