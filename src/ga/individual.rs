//! Candidate solutions.

use std::fmt;

use super::operators::{flip_mutation, single_point_crossover};
use crate::knapsack::KnapsackProblem;
use crate::random::RandomSource;

/// A candidate packing: one gene per item plus the values derived from it.
///
/// `weight` and `fitness` are only meaningful after [`evaluate`](Self::evaluate);
/// `mating_probability` only within the population that last normalized it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    genes: Vec<bool>,
    weight: f64,
    fitness: f64,
    mating_probability: f64,
}

impl Individual {
    /// Wraps a gene vector. Derived fields start at zero.
    pub fn from_genes(genes: Vec<bool>) -> Self {
        Self {
            genes,
            weight: 0.0,
            fitness: 0.0,
            mating_probability: 0.0,
        }
    }

    /// Draws every gene independently and uniformly from {0, 1}.
    pub fn random<R: RandomSource>(gene_size: usize, rng: &mut R) -> Self {
        let genes = (0..gene_size).map(|_| rng.next_int(0, 1) == 1).collect();
        Self::from_genes(genes)
    }

    /// Single-point crossover of two parents; see [`single_point_crossover`].
    ///
    /// The child is not evaluated.
    pub fn reproduce<R: RandomSource>(parent_a: &Self, parent_b: &Self, rng: &mut R) -> Self {
        Self::from_genes(single_point_crossover(&parent_a.genes, &parent_b.genes, rng))
    }

    /// With `probability`, flips one uniformly chosen gene.
    ///
    /// Returns the flipped index. Derived fields are stale afterwards until
    /// [`evaluate`](Self::evaluate) runs.
    pub fn mutate<R: RandomSource>(&mut self, probability: f64, rng: &mut R) -> Option<usize> {
        flip_mutation(&mut self.genes, probability, rng)
    }

    /// Recomputes weight and fitness against `problem`.
    pub fn evaluate(&mut self, problem: &KnapsackProblem) {
        self.weight = problem.weight(&self.genes);
        self.fitness = problem.fitness(&self.genes);
    }

    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    pub fn gene_size(&self) -> usize {
        self.genes.len()
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn mating_probability(&self) -> f64 {
        self.mating_probability
    }

    /// Gene-wise equality, ignoring derived fields.
    pub fn same_genes(&self, other: &Self) -> bool {
        self.genes == other.genes
    }

    /// Genes as a `0`/`1` string, item 0 first.
    pub fn gene_string(&self) -> String {
        self.genes.iter().map(|&g| if g { '1' } else { '0' }).collect()
    }

    pub(crate) fn set_mating_probability(&mut self, p: f64) {
        self.mating_probability = p;
    }

    pub(crate) fn clear_derived(&mut self) {
        self.weight = 0.0;
        self.fitness = 0.0;
        self.mating_probability = 0.0;
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Weight: {:.2}", self.weight)?;
        writeln!(f, "Fitness: {:.2}", self.fitness)?;
        write!(f, "Gene: {}", self.gene_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_random_has_gene_size() {
        let mut rng = create_rng(42);
        for n in [2, 5, 17] {
            assert_eq!(Individual::random(n, &mut rng).gene_size(), n);
        }
    }

    #[test]
    fn test_random_genes_are_mixed() {
        let mut rng = create_rng(42);
        let ind = Individual::random(1000, &mut rng);
        let ones = ind.genes().iter().filter(|&&g| g).count();
        assert!((400..600).contains(&ones), "expected ~500 ones, got {ones}");
    }

    #[test]
    fn test_evaluate() {
        let problem = KnapsackProblem::sample();
        let mut ind = Individual::from_genes(vec![false, true, true, true, true]);
        assert_eq!(ind.fitness(), 0.0);

        ind.evaluate(&problem);
        assert!((ind.weight() - 8.0).abs() < 1e-12);
        assert!((ind.fitness() - 15.0).abs() < 1e-12);

        // Re-evaluating an unchanged individual changes nothing.
        let before = ind.clone();
        ind.evaluate(&problem);
        assert_eq!(ind, before);
    }

    #[test]
    fn test_mutate_then_evaluate() {
        let problem = KnapsackProblem::sample();
        let mut rng = create_rng(3);
        let mut ind = Individual::from_genes(vec![false; 5]);
        ind.evaluate(&problem);

        let flipped = ind.mutate(1.0, &mut rng).expect("probability 1 always mutates");
        ind.evaluate(&problem);
        assert!((ind.weight() - problem.items()[flipped].weight).abs() < 1e-12);
    }

    #[test]
    fn test_same_genes_ignores_derived() {
        let problem = KnapsackProblem::sample();
        let a = Individual::from_genes(vec![true, false, true, false, true]);
        let mut b = a.clone();
        b.evaluate(&problem);
        assert!(a.same_genes(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_clear_derived_keeps_genes() {
        let mut ind = Individual::from_genes(vec![true, true, false, false, true]);
        ind.evaluate(&KnapsackProblem::sample());
        ind.set_mating_probability(0.5);
        ind.clear_derived();
        assert_eq!(ind.genes(), &[true, true, false, false, true]);
        assert_eq!(ind.weight(), 0.0);
        assert_eq!(ind.fitness(), 0.0);
        assert_eq!(ind.mating_probability(), 0.0);
    }

    #[test]
    fn test_display() {
        let mut ind = Individual::from_genes(vec![false, true, true, true, true]);
        ind.evaluate(&KnapsackProblem::sample());
        assert_eq!(ind.to_string(), "Weight: 8.00\nFitness: 15.00\nGene: 01111");
    }
}
