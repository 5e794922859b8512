use crate::core::models::cloud::ParticleCloud;
use crate::core::models::position::Position;
use rand::Rng;
use std::f64::consts::TAU;
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SphereError {
    #[error("Invalid sphere radius: {0}. Radius must be finite and positive")]
    InvalidRadius(f64),
}

/// Samples `count` points uniformly over the surface of a sphere centred on the origin.
///
/// Draws `z` uniformly in `[-radius, radius]` and an azimuth `φ` uniformly in
/// `[0, 2π)`; by Archimedes' hat-box theorem this covers the surface uniformly.
#[instrument(level = "debug", skip(rng))]
pub fn points_on_sphere(
    count: usize,
    radius: f64,
    rng: &mut impl Rng,
) -> Result<ParticleCloud, SphereError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(SphereError::InvalidRadius(radius));
    }

    let cloud = (0..count)
        .map(|_| {
            let z = rng.gen_range(-radius..=radius);
            let phi = rng.gen_range(0.0..TAU);
            let ring = (radius * radius - z * z).max(0.0).sqrt();
            Position::new(ring * phi.cos(), ring * phi.sin(), z)
        })
        .collect();
    Ok(cloud)
}
