//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → selection → crossover → mutation → evaluation → replace
//! → repeat, for a fixed number of generations.

use super::config::GaConfig;
use super::individual::Individual;
use super::population::Population;
use super::report::Reporter;
use super::selection::distinct_pair;
use crate::error::GaError;
use crate::knapsack::{Knapsack, KnapsackProblem};
use crate::random::{clock_seed, create_rng, RandomSource};
use tracing::instrument;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best individual seen during the entire run.
    pub best: Individual,

    /// Total number of generations executed.
    pub generations: usize,

    /// How many times the best individual was replaced.
    pub improvements: usize,

    /// Best fitness before the first generation and after each one
    /// (`generations + 1` entries).
    pub fitness_history: Vec<f64>,
}

impl GaResult {
    /// Projects the best individual onto a fresh knapsack for `problem`.
    pub fn materialize(&self, problem: &KnapsackProblem) -> Knapsack {
        let mut knapsack = Knapsack::for_problem(problem);
        knapsack.fill(&self.best);
        knapsack
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use knapsack_ga::ga::{GaConfig, GaRunner, NoopReporter};
/// use knapsack_ga::knapsack::KnapsackProblem;
///
/// let problem = KnapsackProblem::sample();
/// let config = GaConfig::default().with_max_generations(200).with_seed(42);
/// let result = GaRunner::run(&problem, &config, NoopReporter).unwrap();
/// assert_eq!(result.generations, 200);
/// assert_eq!(result.fitness_history.len(), 201);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed`, or from the
    /// wall clock when no seed is set.
    ///
    /// # Errors
    /// Rejects an invalid configuration or problem before any generation
    /// runs; see [`run_with_rng`](Self::run_with_rng).
    #[instrument(
        level = "info",
        skip_all,
        fields(
            population_size = config.population_size,
            max_generations = config.max_generations,
            seed = ?config.seed,
        )
    )]
    pub fn run<Rep: Reporter>(
        problem: &KnapsackProblem,
        config: &GaConfig,
        reporter: Rep,
    ) -> Result<GaResult, GaError> {
        let mut rng = create_rng(config.seed.unwrap_or_else(clock_seed));
        Self::run_with_rng(problem, config, &mut rng, reporter)
    }

    /// Runs the GA drawing every random decision from `rng`.
    ///
    /// The starting best is the first member of the initial population, not
    /// its fittest. Each generation fills a fresh buffer: every slot gets a
    /// child of two roulette-selected parents, mutated with
    /// `config.mutation_probability` and evaluated; a child whose fitness
    /// strictly exceeds the best replaces it. The buffer then becomes the
    /// current population.
    ///
    /// # Errors
    /// - [`GaError::PopulationTooSmall`], [`GaError::ZeroGenerations`],
    ///   [`GaError::InvalidMutationProbability`] from [`GaConfig::validate`]
    /// - [`GaError::GeneSizeTooSmall`] for a problem with fewer than 2 items
    /// - [`GaError::DegenerateFitness`] if a generation's fitness total
    ///   cannot be normalized
    pub fn run_with_rng<R: RandomSource, Rep: Reporter>(
        problem: &KnapsackProblem,
        config: &GaConfig,
        rng: &mut R,
        mut reporter: Rep,
    ) -> Result<GaResult, GaError> {
        config.validate()?;
        // Problems built through `new` already satisfy this; deserialized
        // ones may not.
        if problem.gene_size() < 2 {
            return Err(GaError::GeneSizeTooSmall {
                gene_size: problem.gene_size(),
            });
        }

        tracing::info!(
            items = problem.gene_size(),
            capacity = problem.capacity(),
            "Starting evolution"
        );

        // 1. Initialize and evaluate
        let mut population = Population::initialize(config.population_size, problem, rng)?;

        // 2. Starting best
        let mut best = population[0].clone();
        reporter.on_initial_best(&best);

        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best.fitness());
        let mut improvements = 0usize;

        // Slots are overwritten every generation; only the genes' storage is
        // reused between swaps.
        let mut next = population.clone();

        // 3. Evolutionary loop
        for generation in 1..=config.max_generations {
            next.reset();

            for slot in 0..population.len() {
                let (a, b) = distinct_pair(&population, config.parent_retry_limit, rng);
                let mut child = Individual::reproduce(&population[a], &population[b], rng);
                child.mutate(config.mutation_probability, rng);
                child.evaluate(problem);

                if child.fitness() > best.fitness() {
                    best = child.clone();
                    improvements += 1;
                    reporter.on_improvement(generation, &best);
                }

                next.replace(slot, child);
            }

            next.assign_mating_probabilities()?;
            std::mem::swap(&mut population, &mut next);

            fitness_history.push(best.fitness());
        }

        let result = GaResult {
            best,
            generations: config.max_generations,
            improvements,
            fitness_history,
        };
        reporter.on_finished(&result);

        tracing::info!(
            fitness = result.best.fitness(),
            weight = result.best.weight(),
            improvements = result.improvements,
            "Evolution finished"
        );

        Ok(result)
    }
}

// ============================================================================
// Tests
// ============================================================================
