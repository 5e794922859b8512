use crate::core::grid::SpatialGrid;
use crate::core::models::cloud::ParticleCloud;
use crate::core::potential::units::to_electronvolts;
use crate::engine::config::{EnergyConfig, EvaluatorKind};
use crate::engine::error::EngineError;
use crate::engine::evaluators::{
    BruteForceEvaluator, CellListEvaluator, CutoffEvaluator, EnergyEvaluator, Evaluation,
};
use crate::engine::progress::{Progress, ProgressReporter};
use std::time::{Duration, Instant};
use tracing::{info, instrument};

/// Outcome of a single evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyReport {
    pub evaluator: EvaluatorKind,
    pub particle_count: usize,
    /// Unordered pairs that contributed to the total.
    pub pair_count: u64,
    /// Total binding energy in joules.
    pub joules: f64,
    /// Wall-clock time of the summation, including grid construction.
    pub elapsed: Duration,
}

impl EnergyReport {
    pub fn electronvolts(&self) -> f64 {
        to_electronvolts(self.joules)
    }
}

/// Evaluates the binding energy of `cloud` with the evaluator named in `config`.
///
/// # Errors
///
/// Returns [`EngineError::NonFiniteEnergy`] if the sum is not finite, which
/// happens when two particles share a position.
#[instrument(skip_all, name = "energy_workflow", fields(particles = cloud.len(), evaluator = %config.evaluator))]
pub fn run(
    cloud: &ParticleCloud,
    config: &EnergyConfig,
    reporter: &ProgressReporter,
) -> Result<EnergyReport, EngineError> {
    info!("Starting energy evaluation.");
    let report = evaluate(cloud, config, config.evaluator, reporter)?;
    info!(
        joules = report.joules,
        pairs = report.pair_count,
        elapsed_ms = report.elapsed.as_secs_f64() * 1e3,
        "Energy evaluation finished."
    );
    Ok(report)
}

/// Runs `kind` on `cloud`, using the potential, cutoff and cell size of `config`.
pub(crate) fn evaluate(
    cloud: &ParticleCloud,
    config: &EnergyConfig,
    kind: EvaluatorKind,
    reporter: &ProgressReporter,
) -> Result<EnergyReport, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: phase_name(kind),
    });

    let started = Instant::now();
    let evaluation = match kind {
        EvaluatorKind::BruteForce => {
            BruteForceEvaluator::new(cloud, config.potential).evaluate_with(reporter)
        }
        EvaluatorKind::Cutoff => {
            CutoffEvaluator::new(cloud, config.potential, config.cutoff)?.evaluate_with(reporter)
        }
        EvaluatorKind::CellList => {
            let grid = SpatialGrid::from_cloud(cloud, config.cell_size)?;
            CellListEvaluator::new(&grid, config.potential, config.cutoff)?
                .evaluate_with(reporter)
        }
    };
    let elapsed = started.elapsed();

    reporter.report(Progress::PhaseFinish);

    let Evaluation { energy, pair_count } = evaluation;
    if !energy.is_finite() {
        return Err(EngineError::NonFiniteEnergy {
            evaluator: kind,
            value: energy,
        });
    }

    Ok(EnergyReport {
        evaluator: kind,
        particle_count: cloud.len(),
        pair_count,
        joules: energy,
        elapsed,
    })
}

fn phase_name(kind: EvaluatorKind) -> &'static str {
    match kind {
        EvaluatorKind::BruteForce => "Brute-force summation",
        EvaluatorKind::Cutoff => "Cutoff summation",
        EvaluatorKind::CellList => "Cell-list summation",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::position::Position;
    use crate::engine::config::EnergyConfigBuilder;
    use std::sync::{Arc, Mutex};

    const SIGMA: f64 = 3.41e-10;

    fn dimer(separation: f64) -> ParticleCloud {
        ParticleCloud::new(vec![
            Position::new(0.0, 0.0, 0.0),
            Position::new(separation, 0.0, 0.0),
        ])
    }

    #[test]
    fn run_uses_the_configured_evaluator() {
        let cloud = dimer(4.0e-10);
        for kind in EvaluatorKind::ALL {
            let config = EnergyConfigBuilder::new().evaluator(kind).build().unwrap();
            let report = run(&cloud, &config, &ProgressReporter::new()).unwrap();
            assert_eq!(report.evaluator, kind);
            assert_eq!(report.particle_count, 2);
            assert_eq!(report.pair_count, 1);
            assert!((report.joules - config.potential.energy(4.0e-10)).abs() < 1e-30);
        }
    }

    #[test]
    fn electronvolts_converts_the_joule_total() {
        let cloud = dimer(4.0e-10);
        let report = run(&cloud, &EnergyConfig::default(), &ProgressReporter::new()).unwrap();
        assert_eq!(report.electronvolts(), to_electronvolts(report.joules));
        assert!(report.electronvolts() < 0.0);
    }

    #[test]
    fn coincident_particles_are_reported_as_non_finite() {
        let cloud = dimer(0.0);
        let result = run(&cloud, &EnergyConfig::default(), &ProgressReporter::new());
        assert!(matches!(
            result,
            Err(EngineError::NonFiniteEnergy {
                evaluator: EvaluatorKind::CellList,
                ..
            })
        ));
    }

    #[test]
    fn empty_cloud_evaluates_to_zero() {
        let cloud = ParticleCloud::default();
        for kind in EvaluatorKind::ALL {
            let config = EnergyConfigBuilder::new().evaluator(kind).build().unwrap();
            let report = run(&cloud, &config, &ProgressReporter::new()).unwrap();
            assert_eq!(report.joules, 0.0);
            assert_eq!(report.pair_count, 0);
        }
    }

    #[test]
    fn pairs_beyond_the_cutoff_are_dropped_by_cutoff_evaluators_only() {
        let cloud = dimer(3.0 * SIGMA);
        for kind in EvaluatorKind::ALL {
            let config = EnergyConfigBuilder::new()
                .evaluator(kind)
                .cutoff(2.0 * SIGMA)
                .build()
                .unwrap();
            let report = run(&cloud, &config, &ProgressReporter::new()).unwrap();
            assert_eq!(report.pair_count, u64::from(!kind.uses_cutoff()));
        }
    }

    #[test]
    fn run_reports_phase_boundaries_around_the_summation() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event: Progress| {
            sink.lock().unwrap().push(event);
        }));

        run(&dimer(4.0e-10), &EnergyConfig::default(), &reporter).unwrap();

        let events = events.lock().unwrap();
        assert!(matches!(
            events.first(),
            Some(Progress::PhaseStart {
                name: "Cell-list summation"
            })
        ));
        assert!(matches!(events.last(), Some(Progress::PhaseFinish)));
        assert!(
            events
                .iter()
                .any(|e| matches!(e, Progress::TaskStart { total_steps: 2 }))
        );
    }
}
