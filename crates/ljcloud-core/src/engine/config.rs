use crate::core::error::{ParameterError, ensure_positive};
use crate::core::potential::lennard_jones::{
    DEFAULT_DISPERSION_ENERGY, DEFAULT_PARTICLE_SIZE, LennardJones,
};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default cutoff distance, in multiples of the particle size σ.
pub const DEFAULT_CUTOFF_FACTOR: f64 = 10.0;
/// Default grid cell edge, in multiples of the particle size σ.
pub const DEFAULT_CELL_SIZE_FACTOR: f64 = 5.0;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error(transparent)]
    InvalidParameter(#[from] ParameterError),
    #[error("Unknown evaluator '{0}'. Expected one of: brute-force, cutoff, cell-list")]
    UnknownEvaluator(String),
}

/// Strategy used to enumerate particle pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvaluatorKind {
    /// Every unordered pair, no cutoff. The reference result.
    BruteForce,
    /// Every unordered pair, skipping those at or beyond the cutoff.
    Cutoff,
    /// Only pairs in neighboring grid cells, skipping those at or beyond the cutoff.
    #[default]
    CellList,
}

impl EvaluatorKind {
    pub const ALL: [EvaluatorKind; 3] = [
        EvaluatorKind::BruteForce,
        EvaluatorKind::Cutoff,
        EvaluatorKind::CellList,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluatorKind::BruteForce => "brute-force",
            EvaluatorKind::Cutoff => "cutoff",
            EvaluatorKind::CellList => "cell-list",
        }
    }

    pub fn uses_cutoff(&self) -> bool {
        !matches!(self, EvaluatorKind::BruteForce)
    }
}

impl fmt::Display for EvaluatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvaluatorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "brute-force" | "brute" => Ok(EvaluatorKind::BruteForce),
            "cutoff" => Ok(EvaluatorKind::Cutoff),
            "cell-list" | "grid" => Ok(EvaluatorKind::CellList),
            _ => Err(ConfigError::UnknownEvaluator(s.to_string())),
        }
    }
}

/// Everything an energy evaluation needs besides the particles themselves.
///
/// Values are validated once by [`EnergyConfigBuilder::build`] and are immutable
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyConfig {
    pub potential: LennardJones,
    /// Pairs at or beyond this separation (meters) are excluded by cutoff-based evaluators.
    pub cutoff: f64,
    /// Edge length (meters) of the cubic cells of the spatial grid.
    pub cell_size: f64,
    pub evaluator: EvaluatorKind,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        let potential = LennardJones::default();
        Self {
            potential,
            cutoff: DEFAULT_CUTOFF_FACTOR * potential.particle_size(),
            cell_size: DEFAULT_CELL_SIZE_FACTOR * potential.particle_size(),
            evaluator: EvaluatorKind::default(),
        }
    }
}

#[derive(Default)]
pub struct EnergyConfigBuilder {
    particle_size: Option<f64>,
    dispersion_energy: Option<f64>,
    cutoff: Option<f64>,
    cell_size: Option<f64>,
    evaluator: Option<EvaluatorKind>,
}

impl EnergyConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn particle_size(mut self, sigma: f64) -> Self {
        self.particle_size = Some(sigma);
        self
    }
    pub fn dispersion_energy(mut self, epsilon: f64) -> Self {
        self.dispersion_energy = Some(epsilon);
        self
    }
    pub fn cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = Some(cutoff);
        self
    }
    pub fn cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = Some(cell_size);
        self
    }
    pub fn evaluator(mut self, evaluator: EvaluatorKind) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    /// Validates the collected values, filling unset ones from the defaults.
    ///
    /// The cutoff and cell size default to multiples of the *configured* particle
    /// size, so changing σ alone rescales both.
    pub fn build(self) -> Result<EnergyConfig, ConfigError> {
        let potential = LennardJones::new(
            self.particle_size.unwrap_or(DEFAULT_PARTICLE_SIZE),
            self.dispersion_energy.unwrap_or(DEFAULT_DISPERSION_ENERGY),
        )?;
        let sigma = potential.particle_size();

        let cutoff = ensure_positive(
            "cutoff",
            self.cutoff.unwrap_or(DEFAULT_CUTOFF_FACTOR * sigma),
        )?;
        let cell_size = ensure_positive(
            "cell_size",
            self.cell_size.unwrap_or(DEFAULT_CELL_SIZE_FACTOR * sigma),
        )?;

        Ok(EnergyConfig {
            potential,
            cutoff,
            cell_size,
            evaluator: self.evaluator.unwrap_or_default(),
        })
    }
}
