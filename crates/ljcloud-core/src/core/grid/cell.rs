use crate::core::models::position::Position;
use std::fmt;

/// Integer coordinates of a cubic grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl CellCoord {
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// The cell `(⌊x/s⌋, ⌊y/s⌋, ⌊z/s⌋)` containing `position` for edge length `s`.
    ///
    /// Floor division keeps cells uniform across the origin: `-0.5·s` lands in
    /// cell `-1`, not cell `0`.
    #[inline]
    pub fn containing(position: &Position, cell_size: f64) -> Self {
        Self {
            x: (position.x() / cell_size).floor() as i64,
            y: (position.y() / cell_size).floor() as i64,
            z: (position.z() / cell_size).floor() as i64,
        }
    }

    #[inline]
    pub fn offset(&self, [dx, dy, dz]: [i64; 3]) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            z: self.z.saturating_add(dz),
        }
    }

    /// Component-wise difference `self - origin`.
    #[inline]
    pub fn delta_from(&self, origin: &CellCoord) -> [i64; 3] {
        [
            self.x.saturating_sub(origin.x),
            self.y.saturating_sub(origin.y),
            self.z.saturating_sub(origin.z),
        ]
    }
}

impl From<(i64, i64, i64)> for CellCoord {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}
