use super::{format_energy, load_cloud};
use crate::cli::CompareArgs;
use crate::config::PartialEnergyConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use ljcloud::engine::progress::ProgressReporter;
use ljcloud::workflows;
use tracing::{info, warn};

pub fn run(args: CompareArgs, progress: &CliProgressHandler) -> Result<()> {
    let config = PartialEnergyConfig::load(&args.params)?.merge_with_cli(&args.params, None)?;
    let cloud = load_cloud(&args.params.input)?;

    let reporter = ProgressReporter::with_callback(progress.get_callback());
    info!("Invoking the core comparison workflow...");
    let comparison = workflows::compare::run(&cloud, &config.energy, &reporter)?;

    println!(
        "{} particle(s), cutoff {:.4e} m, largest separation {:.4e} m",
        cloud.len(),
        comparison.cutoff,
        comparison.max_separation
    );
    println!("{:<12} {:>10} {:>18} {:>12}", "evaluator", "pairs", "energy", "elapsed");
    for report in &comparison.reports {
        println!(
            "{:<12} {:>10} {:>18} {:>12}",
            report.evaluator.as_str(),
            report.pair_count,
            format_energy(report.joules, config.electronvolts),
            format!("{:.3?}", report.elapsed)
        );
    }

    let deviation = comparison.max_relative_deviation();
    if comparison.is_consistent(args.tolerance) {
        println!("Consistent: max relative deviation {deviation:.3e}");
    } else {
        warn!(deviation, tolerance = args.tolerance, "Evaluators disagree.");
        println!(
            "Inconsistent: max relative deviation {deviation:.3e} exceeds {:.3e}",
            args.tolerance
        );
    }
    if !comparison.cutoff_covers_system() {
        println!("Note: the cutoff is shorter than the system, so brute force is not compared.");
    }
    Ok(())
}
