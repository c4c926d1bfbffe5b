//! Bit-string genetic operators.
//!
//! Crossover and mutation for chromosomes encoded as `&[bool]`, one gene
//! per knapsack item.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: prefix from one parent, suffix from the
//!   other; a single child per call
//!
//! # Mutation Operators
//!
//! - [`flip_mutation`]: one mutation event flips exactly one gene, O(1)
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use crate::random::RandomSource;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover producing one child.
///
/// # Algorithm
///
/// 1. Draw a cut index `c` uniformly from `[0, n - 2]`
/// 2. Copy `parent_a[0..=c]` into the child
/// 3. Copy `parent_b[c + 1..n]` into the child
///
/// The cut never falls on the last index, so the child always carries at
/// least one gene from each parent. With `n == 2` the cut is always 0 and
/// the child is `[a[0], b[1]]`.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or fewer than 2 genes.
pub fn single_point_crossover<R: RandomSource>(
    parent_a: &[bool],
    parent_b: &[bool],
    rng: &mut R,
) -> Vec<bool> {
    let n = parent_a.len();
    assert_eq!(n, parent_b.len(), "parents must have equal length");
    assert!(n >= 2, "crossover needs at least 2 genes");

    let cut = rng.next_int(0, n - 2);

    let mut child = Vec::with_capacity(n);
    child.extend_from_slice(&parent_a[..=cut]);
    child.extend_from_slice(&parent_b[cut + 1..]);
    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Flips one random gene with the given probability.
///
/// The trigger is a single uniform draw per call, not one draw per gene:
/// a triggered event changes exactly one bit, an untriggered one changes
/// nothing. Returns the flipped index.
///
/// # Panics
/// Panics if `genes` is empty and the mutation triggers.
pub fn flip_mutation<R: RandomSource>(
    genes: &mut [bool],
    probability: f64,
    rng: &mut R,
) -> Option<usize> {
    if rng.next_uniform() >= probability {
        return None;
    }
    assert!(!genes.is_empty(), "cannot mutate an empty chromosome");
    let idx = rng.next_int(0, genes.len() - 1);
    genes[idx] = !genes[idx];
    Some(idx)
}

// ============================================================================
// Tests
// ============================================================================
