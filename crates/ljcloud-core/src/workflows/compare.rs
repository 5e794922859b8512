use super::energy::{EnergyReport, evaluate};
use crate::core::models::cloud::ParticleCloud;
use crate::engine::config::{EnergyConfig, EvaluatorKind};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument, warn};

/// Results of every evaluator on the same particles and parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    /// One report per evaluator, in [`EvaluatorKind::ALL`] order.
    pub reports: Vec<EnergyReport>,
    /// Largest separation between any two particles (meters).
    pub max_separation: f64,
    pub cutoff: f64,
}

impl ComparisonReport {
    pub fn report_for(&self, kind: EvaluatorKind) -> Option<&EnergyReport> {
        self.reports.iter().find(|r| r.evaluator == kind)
    }

    /// Whether the cutoff is longer than every separation in the system, the
    /// only case in which the brute-force total is expected to match the others.
    pub fn cutoff_covers_system(&self) -> bool {
        self.cutoff > self.max_separation
    }

    /// Largest `|a − b| / max(|a|, |b|)` over all pairs of results that are
    /// expected to agree. Zero when every such pair matches exactly.
    pub fn max_relative_deviation(&self) -> f64 {
        let comparable: Vec<&EnergyReport> = self
            .reports
            .iter()
            .filter(|r| self.cutoff_covers_system() || r.evaluator.uses_cutoff())
            .collect();

        let mut worst = 0.0_f64;
        for (i, a) in comparable.iter().enumerate() {
            for b in &comparable[i + 1..] {
                worst = worst.max(relative_deviation(a.joules, b.joules));
            }
        }
        worst
    }

    pub fn is_consistent(&self, tolerance: f64) -> bool {
        self.max_relative_deviation() <= tolerance
    }
}

fn relative_deviation(a: f64, b: f64) -> f64 {
    let scale = a.abs().max(b.abs());
    if scale == 0.0 { 0.0 } else { (a - b).abs() / scale }
}

/// Runs every evaluator on `cloud` and collects their results and timings.
///
/// The evaluator selected in `config` is ignored; all three run in
/// [`EvaluatorKind::ALL`] order.
#[instrument(skip_all, name = "compare_workflow", fields(particles = cloud.len()))]
pub fn run(
    cloud: &ParticleCloud,
    config: &EnergyConfig,
    reporter: &ProgressReporter,
) -> Result<ComparisonReport, EngineError> {
    let max_separation = cloud.max_separation();
    if config.cutoff <= max_separation {
        warn!(
            cutoff = config.cutoff,
            max_separation, "Cutoff is shorter than the system; brute force will not match the cutoff evaluators."
        );
    }

    let mut reports = Vec::with_capacity(EvaluatorKind::ALL.len());
    for kind in EvaluatorKind::ALL {
        let report = evaluate(cloud, config, kind, reporter)?;
        reporter.report(Progress::Message(format!(
            "{kind}: {:.6e} J in {:.3?}",
            report.joules, report.elapsed
        )));
        reports.push(report);
    }

    let comparison = ComparisonReport {
        reports,
        max_separation,
        cutoff: config.cutoff,
    };
    info!(
        max_relative_deviation = comparison.max_relative_deviation(),
        "Comparison finished."
    );
    Ok(comparison)
}
