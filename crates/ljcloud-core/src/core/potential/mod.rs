//! # Potential Module
//!
//! The Lennard-Jones 12-6 interatomic potential and the conversions applied to its
//! results.
//!
//! ## Key Components
//!
//! - [`lennard_jones`] - The pure pair-energy function and the validated
//!   [`LennardJones`](lennard_jones::LennardJones) parameter set (σ, ε)
//! - [`units`] - Post-hoc conversion of energies from joules to electronvolts
//!
//! The potential is a free function of the separation and two explicit parameters;
//! it holds no state and knows nothing about the collection the particles live in.
//!
//! ```ignore
//! use ljcloud::core::potential::lennard_jones::{lennard_jones_12_6, LennardJones};
//!
//! let argon = LennardJones::default();
//! let e = lennard_jones_12_6(6.82e-10, argon.particle_size(), argon.dispersion_energy());
//! assert_eq!(e, argon.energy(6.82e-10));
//! ```

pub mod lennard_jones;
pub mod units;
