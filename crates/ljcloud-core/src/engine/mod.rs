//! # Engine Module
//!
//! The pairwise-summation engine: how particle pairs are enumerated and how their
//! Lennard-Jones energies are accumulated into a single total.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Validated potential parameters, cutoff, grid cell size,
//!   and the choice of evaluator
//! - **Evaluators** ([`evaluators`]) - Brute-force, cutoff-filtered and cell-list strategies
//!   behind one [`EnergyEvaluator`](evaluators::EnergyEvaluator) trait
//! - **Progress Monitoring** ([`progress`]) - Optional callbacks fired as summation proceeds
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! Every evaluator is single-threaded and performs no I/O. The particle data it reads
//! is fully loaded and immutable before summation starts.

pub mod config;
pub mod error;
pub mod evaluators;
pub mod progress;
