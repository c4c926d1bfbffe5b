//! Item catalog, capacity, and fitness evaluation.

use crate::error::GaError;

/// Fitness assigned to any selection that exceeds the capacity.
///
/// Kept above zero so that a population made only of overweight
/// individuals still has a positive fitness total.
pub const LOWEST_FITNESS: f64 = 1.0;

/// One item that may be packed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub weight: f64,
    pub benefit: f64,
}

impl Item {
    pub fn new(weight: f64, benefit: f64) -> Self {
        Self { weight, benefit }
    }
}

/// A 0/1 knapsack instance: a fixed, ordered item catalog and a capacity.
///
/// Gene `j` of every individual refers to `items()[j]`, so the item count is
/// the gene size of the run.
///
/// # Examples
///
/// ```
/// use knapsack_ga::knapsack::{Item, KnapsackProblem};
///
/// let problem = KnapsackProblem::new(
///     10.0,
///     vec![Item::new(6.0, 5.0), Item::new(5.0, 4.0), Item::new(4.0, 3.0)],
/// )
/// .unwrap();
///
/// assert_eq!(problem.fitness(&[true, false, true]), 8.0);
/// // 11 > 10: overweight selections collapse to the penalty floor.
/// assert_eq!(problem.fitness(&[true, true, false]), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackProblem {
    capacity: f64,
    items: Vec<Item>,
}

impl KnapsackProblem {
    /// Builds a problem, rejecting instances the engine cannot run on.
    ///
    /// Requires at least two items (single-point crossover needs a cut
    /// between two genes), a finite non-negative capacity, and items with
    /// finite non-negative weight and benefit.
    pub fn new(capacity: f64, items: Vec<Item>) -> Result<Self, GaError> {
        if items.len() < 2 {
            return Err(GaError::GeneSizeTooSmall {
                gene_size: items.len(),
            });
        }
        if !capacity.is_finite() || capacity < 0.0 {
            return Err(GaError::InvalidCapacity { capacity });
        }
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        for (index, item) in items.iter().enumerate() {
            if !valid(item.weight) || !valid(item.benefit) {
                return Err(GaError::invalid_item(index, item.weight, item.benefit));
            }
        }
        Ok(Self { capacity, items })
    }

    /// The five-item default instance with capacity 15.
    ///
    /// Its optimum packs items 1..=4 for weight 8 and benefit 15.
    pub fn sample() -> Self {
        Self {
            capacity: 15.0,
            items: vec![
                Item::new(12.0, 4.0),
                Item::new(2.0, 2.0),
                Item::new(1.0, 1.0),
                Item::new(4.0, 10.0),
                Item::new(1.0, 2.0),
            ],
        }
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of genes an individual needs for this problem.
    pub fn gene_size(&self) -> usize {
        self.items.len()
    }

    /// Total weight of the items whose gene is set.
    pub fn weight(&self, genes: &[bool]) -> f64 {
        self.selected(genes).map(|item| item.weight).sum()
    }

    /// Total benefit of the items whose gene is set, ignoring capacity.
    pub fn benefit(&self, genes: &[bool]) -> f64 {
        self.selected(genes).map(|item| item.benefit).sum()
    }

    pub fn is_feasible(&self, genes: &[bool]) -> bool {
        self.weight(genes) <= self.capacity
    }

    /// Total benefit when the selection fits, [`LOWEST_FITNESS`] otherwise.
    ///
    /// This is a hard cutoff: an overweight selection scores the floor no
    /// matter how valuable it is.
    pub fn fitness(&self, genes: &[bool]) -> f64 {
        let (weight, benefit) = self
            .selected(genes)
            .fold((0.0, 0.0), |(w, b), item| (w + item.weight, b + item.benefit));
        if weight > self.capacity {
            LOWEST_FITNESS
        } else {
            benefit
        }
    }

    fn selected<'a>(&'a self, genes: &'a [bool]) -> impl Iterator<Item = &'a Item> + 'a {
        assert_eq!(
            genes.len(),
            self.items.len(),
            "gene count must match item count"
        );
        self.items
            .iter()
            .zip(genes)
            .filter(|(_, included)| **included)
            .map(|(item, _)| item)
    }
}

/// Supplies the problem a run is solved against.
///
/// How the data is produced (defaults, a file, user input) is up to the
/// implementation; the engine only needs it to stay fixed for one run.
pub trait ProblemProvider {
    fn provide(&self) -> Result<KnapsackProblem, GaError>;
}

impl ProblemProvider for KnapsackProblem {
    fn provide(&self) -> Result<KnapsackProblem, GaError> {
        Ok(self.clone())
    }
}

/// Provides [`KnapsackProblem::sample`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleProblem;

impl ProblemProvider for SampleProblem {
    fn provide(&self) -> Result<KnapsackProblem, GaError> {
        Ok(KnapsackProblem::sample())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sample_instance() {
        let problem = KnapsackProblem::sample();
        assert_eq!(problem.gene_size(), 5);
        assert!((problem.capacity() - 15.0).abs() < 1e-12);

        let optimum = [false, true, true, true, true];
        assert!((problem.weight(&optimum) - 8.0).abs() < 1e-12);
        assert!((problem.fitness(&optimum) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_overweight_hits_penalty_floor() {
        let problem = KnapsackProblem::sample();
        // 12 + 4 = 16 > 15, despite a benefit of 14.
        let genes = [true, false, false, true, false];
        assert!((problem.weight(&genes) - 16.0).abs() < 1e-12);
        assert!((problem.benefit(&genes) - 14.0).abs() < 1e-12);
        assert!(!problem.is_feasible(&genes));
        assert_eq!(problem.fitness(&genes), LOWEST_FITNESS);
    }

    #[test]
    fn test_exact_capacity_is_feasible() {
        let problem =
            KnapsackProblem::new(5.0, vec![Item::new(3.0, 1.0), Item::new(2.0, 7.0)]).unwrap();
        assert!(problem.is_feasible(&[true, true]));
        assert!((problem.fitness(&[true, true]) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_selection_scores_zero() {
        let problem = KnapsackProblem::sample();
        let genes = [false; 5];
        assert_eq!(problem.weight(&genes), 0.0);
        assert_eq!(problem.fitness(&genes), 0.0);
    }

    #[test]
    fn test_rejects_single_item() {
        let err = KnapsackProblem::new(10.0, vec![Item::new(1.0, 1.0)]).unwrap_err();
        assert_eq!(err, GaError::GeneSizeTooSmall { gene_size: 1 });
    }

    #[test]
    fn test_rejects_bad_capacity() {
        let items = vec![Item::new(1.0, 1.0), Item::new(2.0, 2.0)];
        assert!(matches!(
            KnapsackProblem::new(-1.0, items.clone()),
            Err(GaError::InvalidCapacity { .. })
        ));
        assert!(matches!(
            KnapsackProblem::new(f64::NAN, items),
            Err(GaError::InvalidCapacity { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_item() {
        let items = vec![Item::new(1.0, 1.0), Item::new(2.0, -2.0)];
        let err = KnapsackProblem::new(10.0, items).unwrap_err();
        assert!(matches!(err, GaError::InvalidItem { index: 1, .. }));
    }

    #[test]
    #[should_panic(expected = "gene count must match item count")]
    fn test_gene_length_mismatch_panics() {
        KnapsackProblem::sample().weight(&[true, false]);
    }

    #[test]
    fn test_providers() {
        assert_eq!(SampleProblem.provide().unwrap(), KnapsackProblem::sample());
        let problem =
            KnapsackProblem::new(3.0, vec![Item::new(1.0, 1.0), Item::new(1.0, 1.0)]).unwrap();
        assert_eq!(problem.provide().unwrap(), problem);
    }

    fn problem_and_genes() -> impl Strategy<Value = (KnapsackProblem, Vec<bool>)> {
        prop::collection::vec((0.0f64..50.0, 0.0f64..50.0), 2..16).prop_flat_map(|raw| {
            let n = raw.len();
            let items: Vec<Item> = raw.into_iter().map(|(w, b)| Item::new(w, b)).collect();
            (0.0f64..200.0, Just(items), prop::collection::vec(any::<bool>(), n))
                .prop_map(|(cap, items, genes)| (KnapsackProblem::new(cap, items).unwrap(), genes))
        })
    }

    proptest! {
        #[test]
        fn prop_fitness_is_benefit_or_floor((problem, genes) in problem_and_genes()) {
            let fitness = problem.fitness(&genes);
            if problem.weight(&genes) > problem.capacity() {
                prop_assert_eq!(fitness, LOWEST_FITNESS);
            } else {
                prop_assert!((fitness - problem.benefit(&genes)).abs() < 1e-9);
            }
        }

        #[test]
        fn prop_evaluation_is_pure((problem, genes) in problem_and_genes()) {
            prop_assert_eq!(problem.weight(&genes).to_bits(), problem.weight(&genes).to_bits());
            prop_assert_eq!(problem.fitness(&genes).to_bits(), problem.fitness(&genes).to_bits());
        }
    }
}
