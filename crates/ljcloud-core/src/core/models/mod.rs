//! # Core Models Module
//!
//! Data structures describing a cloud of point particles.
//!
//! ## Key Components
//!
//! - [`position`] - An immutable 3D coordinate in meters with a distance operation
//! - [`cloud`] - An ordered, read-only collection of positions
//!
//! ## Usage
//!
//! ```ignore
//! use ljcloud::core::models::{cloud::ParticleCloud, position::Position};
//!
//! let cloud: ParticleCloud = vec![
//!     Position::new(0.0, 0.0, 0.0),
//!     Position::new(3.41e-10, 0.0, 0.0),
//! ]
//! .into_iter()
//! .collect();
//! assert_eq!(cloud.len(), 2);
//! ```

pub mod cloud;
pub mod position;
