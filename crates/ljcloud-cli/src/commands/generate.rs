use crate::cli::GenerateArgs;
use crate::error::{CliError, Result};
use ljcloud::core::io::{traits::ParticleFile, xyz::XyzCsvFile};
use ljcloud::core::utils::sphere::points_on_sphere;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

pub fn run(args: GenerateArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let cloud = points_on_sphere(args.count, args.radius, &mut rng)
        .map_err(|e| CliError::Argument(e.to_string()))?;

    info!("Writing {} particle(s) to {:?}", cloud.len(), &args.output);
    XyzCsvFile::write_to_path(&cloud, &args.output).map_err(|e| CliError::FileParsing {
        path: args.output.clone(),
        source: e.into(),
    })?;

    println!(
        "Wrote {} particle(s) on a sphere of radius {:e} m to {}",
        cloud.len(),
        args.radius,
        args.output.display()
    );
    Ok(())
}
