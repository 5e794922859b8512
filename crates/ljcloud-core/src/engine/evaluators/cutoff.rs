use super::{EnergyEvaluator, Evaluation};
use crate::core::error::{ParameterError, ensure_positive};
use crate::core::models::cloud::ParticleCloud;
use crate::core::potential::lennard_jones::LennardJones;
use crate::engine::config::EvaluatorKind;
use crate::engine::progress::{ProgressReporter, TaskTicker};
use tracing::{debug, instrument};

/// Visits every unordered pair but only accumulates those closer than the cutoff.
///
/// Still O(n²): every separation is computed. Pairs at exactly the cutoff are
/// excluded.
pub struct CutoffEvaluator<'a> {
    cloud: &'a ParticleCloud,
    potential: LennardJones,
    cutoff: f64,
}

impl<'a> CutoffEvaluator<'a> {
    pub fn new(
        cloud: &'a ParticleCloud,
        potential: LennardJones,
        cutoff: f64,
    ) -> Result<Self, ParameterError> {
        Ok(Self {
            cloud,
            potential,
            cutoff: ensure_positive("cutoff", cutoff)?,
        })
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }
}

impl EnergyEvaluator for CutoffEvaluator<'_> {
    fn kind(&self) -> EvaluatorKind {
        EvaluatorKind::Cutoff
    }

    #[instrument(skip_all, name = "cutoff_evaluation", fields(particles = self.cloud.len(), cutoff = self.cutoff))]
    fn evaluate_with(&self, reporter: &ProgressReporter) -> Evaluation {
        let positions = self.cloud.positions();
        let mut ticker = TaskTicker::start(reporter, positions.len() as u64);

        let mut total = 0.0;
        let mut pair_count = 0u64;
        for (i, p) in positions.iter().enumerate() {
            for q in &positions[i + 1..] {
                let separation = p.distance_to(q);
                if separation < self.cutoff {
                    total += self.potential.energy(separation);
                    pair_count += 1;
                }
            }
            ticker.step();
        }
        ticker.finish();

        debug!(pair_count, energy = total, "Cutoff summation complete.");
        Evaluation {
            energy: total,
            pair_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::super::BruteForceEvaluator;
    use super::*;

    #[test]
    fn new_rejects_non_positive_cutoff() {
        let cloud = ParticleCloud::default();
        let lj = LennardJones::default();
        assert!(CutoffEvaluator::new(&cloud, lj, 0.0).is_err());
        assert!(CutoffEvaluator::new(&cloud, lj, -1.0).is_err());
    }

    #[test]
    fn empty_and_single_particle_systems_have_exactly_zero_energy() {
        let lj = LennardJones::default();
        let empty = ParticleCloud::default();
        let single = cloud_of(&[[0.0, 0.0, 0.0]]);
        assert_eq!(CutoffEvaluator::new(&empty, lj, SIGMA).unwrap().evaluate(), 0.0);
        assert_eq!(CutoffEvaluator::new(&single, lj, SIGMA).unwrap().evaluate(), 0.0);
    }

    #[test]
    fn matches_brute_force_when_cutoff_covers_the_system() {
        let lj = LennardJones::default();
        let cloud = random_box(80, 2.0e-9, 17);
        let cutoff = cloud.max_separation() * 1.01;

        let brute = BruteForceEvaluator::new(&cloud, lj).evaluate_with(&ProgressReporter::new());
        let cut = CutoffEvaluator::new(&cloud, lj, cutoff)
            .unwrap()
            .evaluate_with(&ProgressReporter::new());

        assert_eq!(cut.pair_count, brute.pair_count);
        assert!(relative_error(cut.energy, brute.energy) < 1e-12);
    }

    #[test]
    fn pairs_at_exactly_the_cutoff_are_excluded() {
        let lj = LennardJones::default();
        let cloud = cloud_of(&[[0.0, 0.0, 0.0], [4.0e-10, 0.0, 0.0]]);

        let at = CutoffEvaluator::new(&cloud, lj, 4.0e-10)
            .unwrap()
            .evaluate_with(&ProgressReporter::new());
        assert_eq!(at.pair_count, 0);
        assert_eq!(at.energy, 0.0);

        let beyond = CutoffEvaluator::new(&cloud, lj, 4.0001e-10)
            .unwrap()
            .evaluate_with(&ProgressReporter::new());
        assert_eq!(beyond.pair_count, 1);
        assert_eq!(beyond.energy, lj.energy(4.0e-10));
    }

    #[test]
    fn only_pairs_inside_the_cutoff_contribute() {
        let points = [
            [0.0, 0.0, 0.0],
            [3.5e-10, 0.0, 0.0],
            [1.0e-9, 0.0, 0.0],
            [1.0e-9, 3.9e-10, 0.0],
        ];
        let lj = LennardJones::default();
        let cutoff = 5.0e-10;
        let cloud = cloud_of(&points);
        let evaluation = CutoffEvaluator::new(&cloud, lj, cutoff)
            .unwrap()
            .evaluate_with(&ProgressReporter::new());

        assert_eq!(evaluation.pair_count, 2);
        let expected = lj.energy(3.5e-10) + lj.energy(3.9e-10);
        assert!(relative_error(evaluation.energy, expected) < 1e-12);
        assert!(relative_error(evaluation.energy, hand_sum(&points, &lj, cutoff)) < 1e-12);
    }

    #[test]
    fn result_is_independent_of_particle_order() {
        let lj = LennardJones::default();
        let cloud = random_box(60, 3.0e-9, 23);
        let cutoff = 2.5 * SIGMA;
        let forward = CutoffEvaluator::new(&cloud, lj, cutoff).unwrap().evaluate();
        let backward = CutoffEvaluator::new(&reversed(&cloud), lj, cutoff)
            .unwrap()
            .evaluate();
        assert!(relative_error(backward, forward) < 1e-9);
    }
}
