pub mod compare;
pub mod energy;
pub mod generate;

use crate::error::{CliError, Result};
use ljcloud::core::io::{traits::ParticleFile, xyz::XyzCsvFile};
use ljcloud::core::models::cloud::ParticleCloud;
use ljcloud::core::potential::units::to_electronvolts;
use std::path::Path;
use tracing::info;

fn load_cloud(path: &Path) -> Result<ParticleCloud> {
    info!("Loading particles from {:?}", path);
    let cloud = XyzCsvFile::read_from_path(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    info!("Loaded {} particle(s).", cloud.len());
    Ok(cloud)
}

/// Renders a joule value in the unit selected on the command line.
fn format_energy(joules: f64, electronvolts: bool) -> String {
    if electronvolts {
        format!("{:.6e} eV", to_electronvolts(joules))
    } else {
        format!("{:.6e} J", joules)
    }
}
