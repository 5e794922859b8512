use crate::cli::ParameterArgs;
use crate::error::{CliError, Result};
use ljcloud::engine::config::{EnergyConfig, EnergyConfigBuilder, EvaluatorKind};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialPotentialConfig {
    #[serde(rename = "particle-size")]
    particle_size: Option<f64>,
    #[serde(rename = "dispersion-energy")]
    dispersion_energy: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialEvaluationConfig {
    evaluator: Option<EvaluatorKind>,
    cutoff: Option<f64>,
    #[serde(rename = "cell-size")]
    cell_size: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    electronvolts: Option<bool>,
}

/// Settings as read from a TOML file, before CLI overrides and defaults.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialEnergyConfig {
    potential: Option<PartialPotentialConfig>,
    evaluation: Option<PartialEvaluationConfig>,
    output: Option<PartialOutputConfig>,
}

/// Fully resolved settings for one command invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub energy: EnergyConfig,
    pub electronvolts: bool,
}

impl PartialEnergyConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads `args.config` if one was given, otherwise starts from an empty config.
    pub fn load(args: &ParameterArgs) -> Result<Self> {
        match &args.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolves the final settings. Precedence, highest first: CLI flag,
    /// `--set` value, file value, built-in default.
    pub fn merge_with_cli(
        mut self,
        args: &ParameterArgs,
        evaluator: Option<EvaluatorKind>,
    ) -> Result<ResolvedConfig> {
        self.apply_set_values(&args.set_values)?;

        let potential = self.potential.take().unwrap_or_default();
        let evaluation = self.evaluation.take().unwrap_or_default();
        let output = self.output.take().unwrap_or_default();

        let mut builder = EnergyConfigBuilder::new();
        if let Some(sigma) = args.particle_size.or(potential.particle_size) {
            builder = builder.particle_size(sigma);
        }
        if let Some(epsilon) = args.dispersion_energy.or(potential.dispersion_energy) {
            builder = builder.dispersion_energy(epsilon);
        }
        if let Some(cutoff) = args.cutoff.or(evaluation.cutoff) {
            builder = builder.cutoff(cutoff);
        }
        if let Some(cell_size) = args.cell_size.or(evaluation.cell_size) {
            builder = builder.cell_size(cell_size);
        }
        if let Some(kind) = evaluator.or(evaluation.evaluator) {
            builder = builder.evaluator(kind);
        }

        let energy = builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;
        let electronvolts = args.electronvolts || output.electronvolts.unwrap_or(false);

        debug!(?energy, electronvolts, "Resolved configuration.");
        Ok(ResolvedConfig {
            energy,
            electronvolts,
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let (key, value_str) = (key.trim(), value_str.trim());

            match key {
                "potential.particle-size" => {
                    self.potential
                        .get_or_insert_with(Default::default)
                        .particle_size = Some(parse_value(key, value_str)?);
                }
                "potential.dispersion-energy" => {
                    self.potential
                        .get_or_insert_with(Default::default)
                        .dispersion_energy = Some(parse_value(key, value_str)?);
                }
                "evaluation.evaluator" => {
                    self.evaluation
                        .get_or_insert_with(Default::default)
                        .evaluator = Some(
                        EvaluatorKind::from_str(value_str)
                            .map_err(|e| CliError::Config(e.to_string()))?,
                    );
                }
                "evaluation.cutoff" => {
                    self.evaluation
                        .get_or_insert_with(Default::default)
                        .cutoff = Some(parse_value(key, value_str)?);
                }
                "evaluation.cell-size" => {
                    self.evaluation
                        .get_or_insert_with(Default::default)
                        .cell_size = Some(parse_value(key, value_str)?);
                }
                "output.electronvolts" => {
                    self.output
                        .get_or_insert_with(Default::default)
                        .electronvolts = Some(parse_value(key, value_str)?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value_str: &str) -> Result<T> {
    value_str.parse().map_err(|_| {
        CliError::Config(format!(
            "Invalid value for {}: '{}' ({} expected)",
            key,
            value_str,
            std::any::type_name::<T>()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands, EnergyArgs};
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    fn write_config_file(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("ljcloud.toml");
        fs::write(&path, content).unwrap();
        path
    }

    fn parse_energy_args(extra: &[&str]) -> EnergyArgs {
        let mut argv = vec!["ljcloud", "energy", "-i", "cloud.csv"];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Energy(args) => args,
            other => panic!("expected the energy command, got {other:?}"),
        }
    }

    fn resolve(extra: &[&str]) -> Result<ResolvedConfig> {
        let args = parse_energy_args(extra);
        PartialEnergyConfig::load(&args.params)?
            .merge_with_cli(&args.params, args.evaluator.map(Into::into))
    }

    #[test]
    fn no_config_file_resolves_to_core_defaults() {
        let resolved = resolve(&[]).unwrap();
        assert_eq!(resolved.energy, EnergyConfig::default());
        assert!(!resolved.electronvolts);
    }

    #[test]
    fn file_values_are_loaded() {
        let dir = tempdir().unwrap();
        let path = write_config_file(
            &dir,
            r#"
            [potential]
            particle-size = 3.0e-10
            dispersion-energy = 1.0e-21

            [evaluation]
            evaluator = "cutoff"
            cutoff = 1.5e-9
            cell-size = 7.5e-10

            [output]
            electronvolts = true
            "#,
        );

        let resolved = resolve(&["-c", path.to_str().unwrap()]).unwrap();
        assert_eq!(resolved.energy.potential.particle_size(), 3.0e-10);
        assert_eq!(resolved.energy.potential.dispersion_energy(), 1.0e-21);
        assert_eq!(resolved.energy.evaluator, EvaluatorKind::Cutoff);
        assert_eq!(resolved.energy.cutoff, 1.5e-9);
        assert_eq!(resolved.energy.cell_size, 7.5e-10);
        assert!(resolved.electronvolts);
    }

    #[test]
    fn set_values_override_file_and_cli_flags_override_both() {
        let dir = tempdir().unwrap();
        let path = write_config_file(
            &dir,
            r#"
            [evaluation]
            evaluator = "brute-force"
            cutoff = 1.0e-9
            cell-size = 5.0e-10
            "#,
        );

        let resolved = resolve(&[
            "-c",
            path.to_str().unwrap(),
            "--cutoff",
            "3.0e-9",
            "-S",
            "evaluation.cutoff=2.0e-9",
            "-S",
            "evaluation.cell-size=6.0e-10",
            "-S",
            "evaluation.evaluator=cell-list",
        ])
        .unwrap();

        assert_eq!(resolved.energy.cutoff, 3.0e-9);
        assert_eq!(resolved.energy.cell_size, 6.0e-10);
        assert_eq!(resolved.energy.evaluator, EvaluatorKind::CellList);

        let flagged = resolve(&[
            "-c",
            path.to_str().unwrap(),
            "-e",
            "cutoff",
            "-S",
            "evaluation.evaluator=cell-list",
        ])
        .unwrap();
        assert_eq!(flagged.energy.evaluator, EvaluatorKind::Cutoff);
    }

    #[test]
    fn unknown_file_field_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = write_config_file(&dir, "[evaluation]\nneighbour-list = true\n");
        let result = resolve(&["-c", path.to_str().unwrap()]);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let result = resolve(&["-c", missing.to_str().unwrap()]);
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn malformed_set_values_are_rejected() {
        for bad in [
            "evaluation.cutoff",
            "evaluation.cutoff=abc",
            "evaluation.evaluator=octree",
            "potential.charge=1.0",
        ] {
            let result = resolve(&["-S", bad]);
            assert!(
                matches!(result, Err(CliError::Config(_))),
                "'{bad}' should be rejected"
            );
        }
    }

    #[test]
    fn non_positive_parameters_are_configuration_errors() {
        let result = resolve(&["--particle-size=-3.4e-10"]);
        match result {
            Err(CliError::Config(message)) => assert!(message.contains("particle_size")),
            other => panic!("expected a configuration error, got {other:?}"),
        }
    }

    #[test]
    fn changing_sigma_rescales_default_cutoff_and_cell_size() {
        let resolved = resolve(&["-S", "potential.particle-size=2.0e-10"]).unwrap();
        assert_eq!(resolved.energy.cutoff, 2.0e-9);
        assert_eq!(resolved.energy.cell_size, 1.0e-9);
    }
}
