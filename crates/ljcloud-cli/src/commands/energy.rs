use super::{format_energy, load_cloud};
use crate::cli::EnergyArgs;
use crate::config::PartialEnergyConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use ljcloud::engine::progress::ProgressReporter;
use ljcloud::workflows;
use tracing::info;

pub fn run(args: EnergyArgs, progress: &CliProgressHandler) -> Result<()> {
    let partial_config = PartialEnergyConfig::load(&args.params)?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args.params, args.evaluator.map(Into::into))?;

    let cloud = load_cloud(&args.params.input)?;

    let reporter = ProgressReporter::with_callback(progress.get_callback());
    info!("Invoking the core energy workflow...");
    let report = workflows::energy::run(&cloud, &config.energy, &reporter)?;

    println!("Evaluator:  {}", report.evaluator);
    println!("Particles:  {}", report.particle_count);
    println!("Pairs:      {}", report.pair_count);
    println!(
        "Energy:     {}",
        format_energy(report.joules, config.electronvolts)
    );
    println!("Elapsed:    {:.3?}", report.elapsed);
    Ok(())
}
