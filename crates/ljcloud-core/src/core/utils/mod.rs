//! Synthetic particle geometries used as fixtures and benchmarks.

pub mod sphere;
