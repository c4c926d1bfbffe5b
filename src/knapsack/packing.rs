//! The packing decision.

use std::fmt;

use super::problem::KnapsackProblem;
use crate::ga::Individual;

/// A knapsack with one compartment per item, each either packed or empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knapsack {
    capacity: f64,
    compartments: Vec<bool>,
}

impl Knapsack {
    /// An empty knapsack sized for `problem`.
    pub fn for_problem(problem: &KnapsackProblem) -> Self {
        Self {
            capacity: problem.capacity(),
            compartments: vec![false; problem.gene_size()],
        }
    }

    /// Copies `best`'s genes into the compartments, index for index.
    ///
    /// No capacity check happens here; feasibility was already priced into
    /// the individual's fitness.
    ///
    /// # Panics
    /// Panics if the gene count differs from the compartment count.
    pub fn fill(&mut self, best: &Individual) {
        assert_eq!(
            best.gene_size(),
            self.compartments.len(),
            "individual does not match knapsack size"
        );
        self.compartments.copy_from_slice(best.genes());
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn compartments(&self) -> &[bool] {
        &self.compartments
    }

    pub fn is_packed(&self, index: usize) -> bool {
        self.compartments.get(index).copied().unwrap_or(false)
    }

    /// Indices of packed items, ascending.
    pub fn selected_items(&self) -> Vec<usize> {
        self.compartments
            .iter()
            .enumerate()
            .filter_map(|(i, &packed)| packed.then_some(i))
            .collect()
    }

    pub fn total_weight(&self, problem: &KnapsackProblem) -> f64 {
        problem.weight(&self.compartments)
    }

    pub fn total_benefit(&self, problem: &KnapsackProblem) -> f64 {
        problem.benefit(&self.compartments)
    }
}

impl fmt::Display for Knapsack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits: String = self
            .compartments
            .iter()
            .map(|&c| if c { '1' } else { '0' })
            .collect();
        write!(f, "Capacity: {:.2}, Compartments: {bits}", self.capacity)
    }
}
