//! # Core Module
//!
//! Stateless building blocks for binding-energy calculations.
//!
//! - **Particle Representation** ([`models`]) - Immutable positions and flat particle collections
//! - **Interatomic Potential** ([`potential`]) - The Lennard-Jones 12-6 function, its parameters,
//!   and post-hoc unit conversion
//! - **Spatial Partitioning** ([`grid`]) - Uniform cubic cells mapping cell coordinates to particles
//! - **File I/O** ([`io`]) - Reading and writing particle coordinate files
//! - **Fixtures** ([`utils`]) - Synthetic geometries such as points on a sphere
//! - **Validation** ([`error`]) - Shared checks for physical parameters
//!
//! Everything in this module is built once and then only read; none of it performs
//! I/O during an energy summation.

pub mod error;
pub mod grid;
pub mod io;
pub mod models;
pub mod potential;
pub mod utils;
