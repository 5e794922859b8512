//! # ljcloud Core Library
//!
//! Computes the total Lennard-Jones binding energy of a cloud of point particles,
//! either by visiting every pair or by restricting the summation to nearby pairs
//! with a uniform spatial grid (a "cell list").
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Immutable data models (`Position`, `ParticleCloud`),
//!   the pure Lennard-Jones potential, the `SpatialGrid` cell list, and file I/O.
//!
//! - **[`engine`]: The Logic Core.** Validated configuration, progress reporting and the
//!   three interchangeable energy evaluators (brute force, cutoff, cell list).
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together into complete
//!   procedures: a single energy evaluation, or a side-by-side comparison of every
//!   evaluator with timings.

pub mod core;
pub mod engine;
pub mod workflows;
