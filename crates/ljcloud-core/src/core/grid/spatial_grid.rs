use super::cell::CellCoord;
use crate::core::error::{ParameterError, ensure_positive};
use crate::core::models::cloud::ParticleCloud;
use crate::core::models::position::Position;
use std::collections::HashMap;

/// A particle filed in a [`SpatialGrid`] bucket.
///
/// `index` is the particle's insertion order and is the identity used to stop a
/// particle from pairing with itself, even when another particle shares its
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridEntry {
    pub index: usize,
    pub position: Position,
}

/// Uniform cell list mapping [`CellCoord`]s to buckets of particles.
///
/// Buckets are created on first insertion and never removed, so every key in the
/// map refers to an occupied cell. The edge length is fixed for the lifetime of
/// the grid; a different cell size means building a new grid.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cell_size: f64,
    cells: HashMap<CellCoord, Vec<GridEntry>>,
    len: usize,
}

impl SpatialGrid {
    /// Creates an empty grid with cubic cells of edge `cell_size` meters.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if `cell_size` is not finite and positive.
    pub fn new(cell_size: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            cell_size: ensure_positive("cell_size", cell_size)?,
            cells: HashMap::new(),
            len: 0,
        })
    }

    /// Builds a grid holding every particle of `cloud`, preserving cloud indices.
    pub fn from_cloud(cloud: &ParticleCloud, cell_size: f64) -> Result<Self, ParameterError> {
        let mut grid = Self::new(cell_size)?;
        for position in cloud {
            grid.insert(*position);
        }
        Ok(grid)
    }

    /// Files `position` under its cell and returns the index it was given.
    pub fn insert(&mut self, position: Position) -> usize {
        let index = self.len;
        let cell = self.cell_of(&position);
        self.cells
            .entry(cell)
            .or_default()
            .push(GridEntry { index, position });
        self.len += 1;
        index
    }

    /// Contents of `cell`, or an empty slice if nothing was ever inserted there.
    pub fn retrieve(&self, cell: &CellCoord) -> &[GridEntry] {
        self.cells.get(cell).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn cell_of(&self, position: &Position) -> CellCoord {
        CellCoord::containing(position, self.cell_size)
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Total number of particles inserted.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }

    /// Iterates over occupied cells and their buckets in unspecified order.
    pub fn cells(&self) -> impl Iterator<Item = (&CellCoord, &[GridEntry])> {
        self.cells
            .iter()
            .map(|(cell, entries)| (cell, entries.as_slice()))
    }

    /// Occupied cells sorted by coordinate, for reproducible traversal.
    pub fn sorted_cells(&self) -> Vec<CellCoord> {
        let mut keys: Vec<CellCoord> = self.cells.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Size of the fullest bucket.
    pub fn max_occupancy(&self) -> usize {
        self.cells.values().map(Vec::len).max().unwrap_or(0)
    }
}
