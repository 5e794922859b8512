//! Interchangeable strategies for summing pair energies.
//!
//! | evaluator | pairs examined | pairs accumulated |
//! |---|---|---|
//! | [`BruteForceEvaluator`] | all `n·(n−1)/2` | all |
//! | [`CutoffEvaluator`] | all `n·(n−1)/2` | separation `< cutoff` |
//! | [`CellListEvaluator`] | those in nearby grid cells | separation `< cutoff` |
//!
//! For a cutoff larger than every separation in the system all three return the
//! same total up to floating-point rounding; the cutoff and cell-list evaluators
//! agree for any cutoff.

pub mod brute_force;
pub mod cell_list;
pub mod cutoff;

pub use brute_force::BruteForceEvaluator;
pub use cell_list::CellListEvaluator;
pub use cutoff::CutoffEvaluator;

use super::config::EvaluatorKind;
use super::progress::ProgressReporter;

/// Result of one energy summation.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Total binding energy in joules.
    pub energy: f64,
    /// Number of unordered pairs that contributed to `energy`.
    pub pair_count: u64,
}

pub trait EnergyEvaluator {
    fn kind(&self) -> EvaluatorKind;

    /// Sums the binding energy, reporting loop progress to `reporter`.
    fn evaluate_with(&self, reporter: &ProgressReporter) -> Evaluation;

    /// Total binding energy in joules.
    fn evaluate(&self) -> f64 {
        self.evaluate_with(&ProgressReporter::new()).energy
    }
}
