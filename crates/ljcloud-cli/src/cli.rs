use clap::{Args, Parser, Subcommand, ValueEnum};
use ljcloud::engine::config::EvaluatorKind;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "ljcloud CLI - Lennard-Jones binding energy of particle clouds, by brute force or with a cell list.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the total binding energy of a particle file.
    Energy(EnergyArgs),
    /// Run every evaluator on the same particle file and compare results and timings.
    Compare(CompareArgs),
    /// Write a random particle cloud on the surface of a sphere.
    Generate(GenerateArgs),
}

/// Inputs and physical parameters shared by `energy` and `compare`.
#[derive(Args, Debug)]
pub struct ParameterArgs {
    /// Path to the particle file (one `x,y,z` line per particle, in meters).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the particle size σ in meters.
    #[arg(long, value_name = "FLOAT")]
    pub particle_size: Option<f64>,

    /// Override the dispersion energy ε in joules.
    #[arg(long, value_name = "FLOAT")]
    pub dispersion_energy: Option<f64>,

    /// Override the cutoff distance in meters (default: 10σ).
    #[arg(long, value_name = "FLOAT")]
    pub cutoff: Option<f64>,

    /// Override the grid cell edge length in meters (default: 5σ).
    #[arg(long, value_name = "FLOAT")]
    pub cell_size: Option<f64>,

    /// Print energies in electronvolts instead of joules.
    #[arg(long = "ev")]
    pub electronvolts: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S evaluation.cutoff=1.7e-9
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `energy` subcommand.
#[derive(Args, Debug)]
pub struct EnergyArgs {
    #[command(flatten)]
    pub params: ParameterArgs,

    /// Override the evaluator used to enumerate pairs.
    #[arg(short, long, value_enum, value_name = "NAME")]
    pub evaluator: Option<EvaluatorArg>,
}

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    #[command(flatten)]
    pub params: ParameterArgs,

    /// Largest relative deviation between comparable results still reported as consistent.
    #[arg(long, default_value_t = 1e-6, value_name = "FLOAT")]
    pub tolerance: f64,
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path of the particle file to write.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Number of particles.
    #[arg(short = 'n', long, required = true, value_name = "INT")]
    pub count: usize,

    /// Sphere radius in meters.
    #[arg(short, long, required = true, value_name = "FLOAT")]
    pub radius: f64,

    /// Seed for a reproducible cloud. A random seed is used if omitted.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluatorArg {
    /// Every pair, no cutoff.
    BruteForce,
    /// Every pair, skipping those beyond the cutoff.
    Cutoff,
    /// Neighboring grid cells only.
    CellList,
}

impl From<EvaluatorArg> for EvaluatorKind {
    fn from(arg: EvaluatorArg) -> Self {
        match arg {
            EvaluatorArg::BruteForce => EvaluatorKind::BruteForce,
            EvaluatorArg::Cutoff => EvaluatorKind::Cutoff,
            EvaluatorArg::CellList => EvaluatorKind::CellList,
        }
    }
}
