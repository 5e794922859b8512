use super::position::Position;

/// An ordered, read-only sequence of particle positions.
///
/// The order in which particles are stored never changes the total energy;
/// it only fixes the index each particle is known by.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleCloud {
    positions: Vec<Position>,
}

impl ParticleCloud {
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Position> {
        self.positions.get(index)
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.positions.iter()
    }

    /// Number of unordered pairs `n·(n−1)/2`.
    pub fn pair_count(&self) -> u64 {
        let n = self.positions.len() as u64;
        n * n.saturating_sub(1) / 2
    }

    /// Largest separation between any two particles, or `0.0` for fewer than two.
    ///
    /// This is an O(n²) scan and is meant for diagnostics, not for the hot path.
    pub fn max_separation(&self) -> f64 {
        let mut max = 0.0_f64;
        for (i, a) in self.positions.iter().enumerate() {
            for b in &self.positions[i + 1..] {
                max = max.max(a.distance_to(b));
            }
        }
        max
    }
}

impl FromIterator<Position> for ParticleCloud {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Position>> for ParticleCloud {
    fn from(positions: Vec<Position>) -> Self {
        Self::new(positions)
    }
}

impl<'a> IntoIterator for &'a ParticleCloud {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}
