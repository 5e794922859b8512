//! # Workflows Module
//!
//! High-level entry points that run a complete energy calculation on a loaded
//! [`ParticleCloud`](crate::core::models::cloud::ParticleCloud).
//!
//! ## Overview
//!
//! A workflow takes a validated [`EnergyConfig`](crate::engine::config::EnergyConfig),
//! builds whatever acceleration structure the chosen evaluator needs, runs it with
//! progress reporting and returns a report with the result and its wall-clock cost.
//!
//! ## Architecture
//!
//! - **Energy Workflow** ([`energy`]) - One evaluation with the configured evaluator
//! - **Comparison Workflow** ([`compare`]) - Every evaluator on the same input, with
//!   timings and the largest relative deviation between their results

pub mod compare;
pub mod energy;
