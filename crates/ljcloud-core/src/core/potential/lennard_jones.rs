use crate::core::error::{ParameterError, ensure_positive};

/// Default particle size σ in meters (argon).
pub const DEFAULT_PARTICLE_SIZE: f64 = 3.41e-10;
/// Default dispersion energy ε in joules (argon).
pub const DEFAULT_DISPERSION_ENERGY: f64 = 1.65e-21;

/// Lennard-Jones 12-6 pair energy `4ε·s⁶·(s⁶ − 1)` with `s = σ / r`.
///
/// `dist` must be strictly positive. Two coincident particles (`dist == 0`)
/// divide by zero and produce a non-finite energy; callers own that data-quality
/// concern.
#[inline]
pub fn lennard_jones_12_6(dist: f64, particle_size: f64, dispersion_energy: f64) -> f64 {
    let s = particle_size / dist;
    let s6 = s.powi(6);
    4.0 * dispersion_energy * s6 * (s6 - 1.0)
}

/// Validated Lennard-Jones parameters shared by every pair in a system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LennardJones {
    particle_size: f64,
    dispersion_energy: f64,
}

impl LennardJones {
    /// Creates a parameter set, rejecting non-finite or non-positive values.
    ///
    /// # Arguments
    ///
    /// * `particle_size` - σ, the separation at which the potential crosses zero, in meters.
    /// * `dispersion_energy` - ε, the depth of the potential well, in joules.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] naming the offending parameter.
    pub fn new(particle_size: f64, dispersion_energy: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            particle_size: ensure_positive("particle_size", particle_size)?,
            dispersion_energy: ensure_positive("dispersion_energy", dispersion_energy)?,
        })
    }

    pub fn particle_size(&self) -> f64 {
        self.particle_size
    }

    pub fn dispersion_energy(&self) -> f64 {
        self.dispersion_energy
    }

    /// Pair energy in joules at separation `dist` (meters).
    #[inline]
    pub fn energy(&self, dist: f64) -> f64 {
        lennard_jones_12_6(dist, self.particle_size, self.dispersion_energy)
    }

    /// Separation of minimum energy, `2^(1/6)·σ`.
    pub fn equilibrium_distance(&self) -> f64 {
        2.0_f64.powf(1.0 / 6.0) * self.particle_size
    }
}

impl Default for LennardJones {
    fn default() -> Self {
        Self {
            particle_size: DEFAULT_PARTICLE_SIZE,
            dispersion_energy: DEFAULT_DISPERSION_ENERGY,
        }
    }
}
