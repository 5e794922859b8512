use ljcloud::core::io::traits::ParticleFile;
use ljcloud::core::io::xyz::{XyzCsvError, XyzCsvFile};
use ljcloud::core::models::cloud::ParticleCloud;
use ljcloud::core::models::position::Position;
use ljcloud::core::potential::lennard_jones::lennard_jones_12_6;
use ljcloud::core::utils::sphere::points_on_sphere;
use ljcloud::engine::config::{EnergyConfigBuilder, EvaluatorKind};
use ljcloud::engine::progress::ProgressReporter;
use ljcloud::workflows::{compare, energy};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use tempfile::NamedTempFile;

const SIGMA: f64 = 3.41e-10;
const EPSILON: f64 = 1.65e-21;

fn write_fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn triangle_file_evaluates_to_the_hand_computed_energy() {
    let file = write_fixture(
        "# three argon atoms\n\
         0.0, 0.0, 0.0\n\
         4.1e-10, 0.0, 0.0\n\
         \n\
         0.0, 3.41e-10, 0.0\n",
    );
    let cloud = XyzCsvFile::read_from_path(file.path()).unwrap();
    assert_eq!(cloud.len(), 3);

    let hypotenuse = (4.1e-10_f64.powi(2) + 3.41e-10_f64.powi(2)).sqrt();
    let expected = lennard_jones_12_6(4.1e-10, SIGMA, EPSILON)
        + lennard_jones_12_6(3.41e-10, SIGMA, EPSILON)
        + lennard_jones_12_6(hypotenuse, SIGMA, EPSILON);

    for kind in EvaluatorKind::ALL {
        let config = EnergyConfigBuilder::new().evaluator(kind).build().unwrap();
        let report = energy::run(&cloud, &config, &ProgressReporter::new()).unwrap();
        assert_eq!(report.pair_count, 3, "{kind}");
        assert!(
            ((report.joules - expected) / expected).abs() < 1e-12,
            "{kind}: {} vs {expected}",
            report.joules
        );
    }
}

#[test]
fn malformed_file_is_rejected_before_any_evaluation() {
    let file = write_fixture("0.0,0.0,0.0\n1.0e-10,abc,0.0\n");
    let result = XyzCsvFile::read_from_path(file.path());
    assert!(matches!(result, Err(XyzCsvError::Csv { line: 2, .. })));
}

#[test]
fn generated_sphere_survives_a_file_round_trip_and_compares_consistently() {
    let mut rng = StdRng::seed_from_u64(2024);
    let cloud = points_on_sphere(300, 2.0e-9, &mut rng).unwrap();

    let file = NamedTempFile::new().unwrap();
    XyzCsvFile::write_to_path(&cloud, file.path()).unwrap();
    let reloaded = XyzCsvFile::read_from_path(file.path()).unwrap();
    assert_eq!(reloaded, cloud);

    let config = EnergyConfigBuilder::new().cutoff(5.0e-9).build().unwrap();
    let report = compare::run(&reloaded, &config, &ProgressReporter::new()).unwrap();
    assert!(report.cutoff_covers_system());
    assert!(report.is_consistent(1e-6), "{report:?}");
}

#[test]
fn particle_order_in_the_file_does_not_change_the_energy() {
    let mut rng = StdRng::seed_from_u64(99);
    let cloud = points_on_sphere(200, 1.5e-9, &mut rng).unwrap();
    let reversed: ParticleCloud = cloud.iter().rev().copied().collect::<Vec<Position>>().into();

    let config = EnergyConfigBuilder::new().cutoff(2.5 * SIGMA).build().unwrap();
    let forward = energy::run(&cloud, &config, &ProgressReporter::new()).unwrap();
    let backward = energy::run(&reversed, &config, &ProgressReporter::new()).unwrap();

    assert_eq!(forward.pair_count, backward.pair_count);
    assert!(((forward.joules - backward.joules) / forward.joules).abs() < 1e-9);
}
