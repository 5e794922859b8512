use super::{EnergyEvaluator, Evaluation};
use crate::core::models::cloud::ParticleCloud;
use crate::core::potential::lennard_jones::LennardJones;
use crate::engine::config::EvaluatorKind;
use crate::engine::progress::{ProgressReporter, TaskTicker};
use tracing::{debug, instrument};

/// Sums the potential over every unordered pair exactly once.
///
/// O(n²) time and O(1) extra space. This is the reference the accelerated
/// evaluators are validated against.
pub struct BruteForceEvaluator<'a> {
    cloud: &'a ParticleCloud,
    potential: LennardJones,
}

impl<'a> BruteForceEvaluator<'a> {
    pub fn new(cloud: &'a ParticleCloud, potential: LennardJones) -> Self {
        Self { cloud, potential }
    }
}

impl EnergyEvaluator for BruteForceEvaluator<'_> {
    fn kind(&self) -> EvaluatorKind {
        EvaluatorKind::BruteForce
    }

    #[instrument(skip_all, name = "brute_force_evaluation", fields(particles = self.cloud.len()))]
    fn evaluate_with(&self, reporter: &ProgressReporter) -> Evaluation {
        let positions = self.cloud.positions();
        let mut ticker = TaskTicker::start(reporter, positions.len() as u64);

        let mut total = 0.0;
        for (i, p) in positions.iter().enumerate() {
            for q in &positions[i + 1..] {
                total += self.potential.energy(p.distance_to(q));
            }
            ticker.step();
        }
        ticker.finish();

        let pair_count = self.cloud.pair_count();
        debug!(pair_count, energy = total, "Brute-force summation complete.");
        Evaluation {
            energy: total,
            pair_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;

    #[test]
    fn empty_and_single_particle_systems_have_exactly_zero_energy() {
        let lj = LennardJones::default();
        let empty = ParticleCloud::default();
        let single = cloud_of(&[[1.0e-10, 2.0e-10, 3.0e-10]]);
        assert_eq!(BruteForceEvaluator::new(&empty, lj).evaluate(), 0.0);
        assert_eq!(BruteForceEvaluator::new(&single, lj).evaluate(), 0.0);
    }

    #[test]
    fn two_particles_at_sigma_have_zero_energy() {
        let cloud = cloud_of(&[[0.0, 0.0, 0.0], [SIGMA, 0.0, 0.0]]);
        let energy = BruteForceEvaluator::new(&cloud, LennardJones::default()).evaluate();
        assert!(energy.abs() < 1e-16);
    }

    #[test]
    fn equilateral_triangle_of_side_sigma_has_zero_energy() {
        let h = SIGMA * 3.0_f64.sqrt() / 2.0;
        let cloud = cloud_of(&[[0.0, 0.0, 0.0], [SIGMA, 0.0, 0.0], [SIGMA / 2.0, h, 0.0]]);
        let energy = BruteForceEvaluator::new(&cloud, LennardJones::default()).evaluate();
        assert!(energy.abs() < 1e-16);
    }

    #[test]
    fn total_matches_hand_computed_pair_sum() {
        let points = [
            [0.0, 0.0, 0.0],
            [3.8e-10, 0.0, 0.0],
            [0.0, 4.1e-10, 0.0],
            [0.0, 0.0, 5.0e-10],
            [3.0e-10, 3.0e-10, 3.0e-10],
        ];
        let lj = LennardJones::default();
        let cloud = cloud_of(&points);
        let evaluation = BruteForceEvaluator::new(&cloud, lj).evaluate_with(&ProgressReporter::new());

        assert_eq!(evaluation.pair_count, 10);
        let expected = hand_sum(&points, &lj, f64::INFINITY);
        assert!(relative_error(evaluation.energy, expected) < 1e-12);
    }

    #[test]
    fn result_is_independent_of_particle_order() {
        let lj = LennardJones::default();
        let cloud = random_box(60, 2.0e-9, 5);
        let forward = BruteForceEvaluator::new(&cloud, lj).evaluate();
        let backward = BruteForceEvaluator::new(&reversed(&cloud), lj).evaluate();
        assert!(relative_error(backward, forward) < 1e-9);
    }
}
