//! Progress notifications out of the evolutionary loop.
//!
//! The loop never prints. It calls a [`Reporter`] synchronously at three
//! points and ignores what the reporter does with the information.

use super::individual::Individual;
use super::runner::GaResult;

/// Receives the best-so-far individual as the run progresses.
///
/// Every method defaults to a no-op, so implementors only override the
/// events they care about.
pub trait Reporter {
    /// The starting best, before the first generation.
    fn on_initial_best(&mut self, _best: &Individual) {}

    /// A child in `generation` (1-based) strictly beat the previous best.
    fn on_improvement(&mut self, _generation: usize, _best: &Individual) {}

    /// The run has used its whole generation budget.
    fn on_finished(&mut self, _result: &GaResult) {}
}

/// Ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl Reporter for NoopReporter {}

/// Emits each event as a `tracing` event.
///
/// Improvements are logged at `debug`, start and finish at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn on_initial_best(&mut self, best: &Individual) {
        tracing::info!(
            fitness = best.fitness(),
            weight = best.weight(),
            genes = %best.gene_string(),
            "Initial best individual"
        );
    }

    fn on_improvement(&mut self, generation: usize, best: &Individual) {
        tracing::debug!(
            generation,
            fitness = best.fitness(),
            weight = best.weight(),
            genes = %best.gene_string(),
            "Best individual improved"
        );
    }

    fn on_finished(&mut self, result: &GaResult) {
        tracing::info!(
            generations = result.generations,
            improvements = result.improvements,
            fitness = result.best.fitness(),
            weight = result.best.weight(),
            genes = %result.best.gene_string(),
            "Evolution finished"
        );
    }
}

/// Keeps every event in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    pub initial: Option<Individual>,
    pub improvements: Vec<(usize, Individual)>,
    pub finished: Option<Individual>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for RecordingReporter {
    fn on_initial_best(&mut self, best: &Individual) {
        self.initial = Some(best.clone());
    }

    fn on_improvement(&mut self, generation: usize, best: &Individual) {
        self.improvements.push((generation, best.clone()));
    }

    fn on_finished(&mut self, result: &GaResult) {
        self.finished = Some(result.best.clone());
    }
}

impl<T: Reporter + ?Sized> Reporter for &mut T {
    fn on_initial_best(&mut self, best: &Individual) {
        (**self).on_initial_best(best);
    }

    fn on_improvement(&mut self, generation: usize, best: &Individual) {
        (**self).on_improvement(generation, best);
    }

    fn on_finished(&mut self, result: &GaResult) {
        (**self).on_finished(result);
    }
}
