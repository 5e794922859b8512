use nalgebra::Point3;
use std::fmt;

/// The location of a single particle in 3D space, in meters.
///
/// A `Position` carries no identity beyond its coordinates. Collections that
/// need to tell two coincident particles apart do so by index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position(Point3<f64>);

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Point3::new(x, y, z))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Euclidean separation between `self` and `other`, in meters.
    #[inline]
    pub fn distance_to(&self, other: &Position) -> f64 {
        nalgebra::distance(&self.0, &other.0)
    }

    pub fn as_point(&self) -> &Point3<f64> {
        &self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }
}

impl From<Point3<f64>> for Position {
    fn from(point: Point3<f64>) -> Self {
        Self(point)
    }
}

impl From<[f64; 3]> for Position {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Position {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:e}, {:e}, {:e})", self.x(), self.y(), self.z())
    }
}
