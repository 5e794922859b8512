//! # Spatial Grid Module
//!
//! A uniform cell list: space is cut into cubic cells of a fixed edge length and
//! every particle is filed under the cell its position falls into. Energy
//! evaluators use it to visit only particles in nearby cells.
//!
//! - [`cell`] - Integer cell coordinates and the floor-division that produces them
//! - [`spatial_grid`] - The lazily populated mapping from cells to particle buckets

pub mod cell;
pub mod spatial_grid;

pub use cell::CellCoord;
pub use spatial_grid::{GridEntry, SpatialGrid};
