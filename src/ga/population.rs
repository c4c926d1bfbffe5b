//! Fixed-size populations and mating-probability normalization.

use std::fmt;

use super::individual::Individual;
use crate::error::GaError;
use crate::knapsack::KnapsackProblem;
use crate::random::RandomSource;

/// An ordered, fixed-size collection of individuals.
///
/// After [`assign_mating_probabilities`](Self::assign_mating_probabilities)
/// the mating probabilities sum to 1. Any change to a member's fitness
/// invalidates them until the next call.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Creates `size` random, evaluated individuals and normalizes their
    /// mating probabilities.
    ///
    /// # Errors
    /// [`GaError::PopulationTooSmall`] when `size == 0`.
    pub fn initialize<R: RandomSource>(
        size: usize,
        problem: &KnapsackProblem,
        rng: &mut R,
    ) -> Result<Self, GaError> {
        if size == 0 {
            return Err(GaError::PopulationTooSmall { size });
        }
        let individuals = (0..size)
            .map(|_| {
                let mut ind = Individual::random(problem.gene_size(), rng);
                ind.evaluate(problem);
                ind
            })
            .collect();
        let mut population = Self { individuals };
        population.assign_mating_probabilities()?;
        Ok(population)
    }

    /// Wraps already-built individuals without touching derived fields.
    ///
    /// # Panics
    /// Panics if `individuals` is empty.
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        assert!(!individuals.is_empty(), "population must not be empty");
        Self { individuals }
    }

    /// Sets each mating probability to `fitness / total_fitness`.
    ///
    /// The fitness penalty floor keeps the total positive whenever any
    /// member is overweight. A total of exactly zero can still occur (every
    /// member packs nothing of value); the wheel then falls back to equal
    /// shares so selection stays defined.
    ///
    /// # Errors
    /// [`GaError::DegenerateFitness`] when the total is negative or not
    /// finite. The population is left unchanged.
    pub fn assign_mating_probabilities(&mut self) -> Result<(), GaError> {
        let total = self.total_fitness();
        if !total.is_finite() || total < 0.0 {
            return Err(GaError::DegenerateFitness { total });
        }
        if total == 0.0 {
            let share = 1.0 / self.individuals.len() as f64;
            for ind in &mut self.individuals {
                ind.set_mating_probability(share);
            }
            return Ok(());
        }
        for ind in &mut self.individuals {
            let p = ind.fitness() / total;
            ind.set_mating_probability(p);
        }
        Ok(())
    }

    /// Zeroes weight, fitness and mating probability of every member.
    ///
    /// Genes are kept; they are about to be overwritten.
    pub fn reset(&mut self) {
        for ind in &mut self.individuals {
            ind.clear_derived();
        }
    }

    pub fn total_fitness(&self) -> f64 {
        self.individuals.iter().map(Individual::fitness).sum()
    }

    pub fn mating_probability_sum(&self) -> f64 {
        self.individuals.iter().map(Individual::mating_probability).sum()
    }

    /// The member with the highest fitness; the first one on ties.
    pub fn fittest(&self) -> &Individual {
        self.individuals
            .iter()
            .reduce(|best, ind| if ind.fitness() > best.fitness() { ind } else { best })
            .expect("population must not be empty")
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Always false for a constructed population; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Overwrites slot `index`. Used while filling a next-generation buffer.
    pub(crate) fn replace(&mut self, index: usize, individual: Individual) {
        self.individuals[index] = individual;
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Individual {
        &self.individuals[index]
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ind) in self.individuals.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f)?;
            }
            writeln!(f, "Individual {}", i + 1)?;
            write!(f, "{ind}")?;
        }
        Ok(())
    }
}
