use super::{EnergyEvaluator, Evaluation};
use crate::core::error::{ParameterError, ensure_positive};
use crate::core::grid::{CellCoord, GridEntry, SpatialGrid};
use crate::core::potential::lennard_jones::LennardJones;
use crate::engine::config::EvaluatorKind;
use crate::engine::progress::{ProgressReporter, TaskTicker};
use itertools::iproduct;
use tracing::{debug, instrument};

/// Relative tolerance applied when deciding whether two cells can hold an
/// interacting pair, absorbing rounding in the cell assignment.
const STENCIL_SLACK: f64 = 1e-9;

/// How neighbor cells of a home cell are found.
#[derive(Debug, Clone, PartialEq)]
enum Stencil {
    /// Fixed offsets, looked up in the grid for every home cell.
    Offsets(Vec<[i64; 3]>),
    /// Every occupied cell is tested against the home cell. Used when the
    /// offset cube would contain more cells than the grid has occupied.
    ScanOccupied,
}

/// Sums pair energies using only particles in nearby cells of a [`SpatialGrid`].
///
/// Every particle scans its own cell and each cell within reach of the cutoff,
/// so each unordered pair is seen twice, once from either side, and the total is
/// halved once at the end. Self-pairs are excluded by grid index rather than by
/// coordinates, so distinct particles at the same position still pair.
///
/// The reach is `⌈cutoff / cell_size⌉` cells per axis, trimmed to the cells whose
/// closest points lie within the cutoff. Any cell size therefore gives the same
/// result as [`CutoffEvaluator`](super::CutoffEvaluator); the cell size only
/// changes how much work is done.
pub struct CellListEvaluator<'a> {
    grid: &'a SpatialGrid,
    potential: LennardJones,
    cutoff: f64,
    stencil: Stencil,
}

impl<'a> CellListEvaluator<'a> {
    pub fn new(
        grid: &'a SpatialGrid,
        potential: LennardJones,
        cutoff: f64,
    ) -> Result<Self, ParameterError> {
        let cutoff = ensure_positive("cutoff", cutoff)?;
        let cell_size = grid.cell_size();
        let reach = ((cutoff / cell_size) * (1.0 + STENCIL_SLACK)).ceil();
        let cube_volume = (2.0 * reach + 1.0).powi(3);

        let stencil = if cube_volume > grid.occupied_cells() as f64 {
            Stencil::ScanOccupied
        } else {
            let reach = reach as i64;
            let offsets = iproduct!(-reach..=reach, -reach..=reach, -reach..=reach)
                .map(|(dx, dy, dz)| [dx, dy, dz])
                .filter(|&delta| could_interact(delta, cell_size, cutoff))
                .collect();
            Stencil::Offsets(offsets)
        };

        Ok(Self {
            grid,
            potential,
            cutoff,
            stencil,
        })
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Number of neighbor cells visited per home cell, or `None` when every
    /// occupied cell is scanned instead.
    pub fn stencil_len(&self) -> Option<usize> {
        match &self.stencil {
            Stencil::Offsets(offsets) => Some(offsets.len()),
            Stencil::ScanOccupied => None,
        }
    }

    fn collect_neighbors<'g>(
        &'g self,
        home: &CellCoord,
        occupied: &[CellCoord],
        out: &mut Vec<&'g [GridEntry]>,
    ) {
        out.clear();
        match &self.stencil {
            Stencil::Offsets(offsets) => out.extend(
                offsets
                    .iter()
                    .map(|delta| self.grid.retrieve(&home.offset(*delta)))
                    .filter(|bucket| !bucket.is_empty()),
            ),
            Stencil::ScanOccupied => {
                let cell_size = self.grid.cell_size();
                out.extend(
                    occupied
                        .iter()
                        .filter(|cell| {
                            could_interact(cell.delta_from(home), cell_size, self.cutoff)
                        })
                        .map(|cell| self.grid.retrieve(cell)),
                )
            }
        }
    }
}

/// Whether two cells `delta` apart may hold a pair closer than `cutoff`.
///
/// Along each axis the closest points of the two cells are `(|d| − 1)` edges
/// apart, or touching for `d = 0`.
fn could_interact(delta: [i64; 3], cell_size: f64, cutoff: f64) -> bool {
    let gap_squared: f64 = delta
        .iter()
        .map(|d| {
            let gap = d.unsigned_abs().saturating_sub(1) as f64 * cell_size;
            gap * gap
        })
        .sum();
    gap_squared < cutoff * cutoff * (1.0 + STENCIL_SLACK)
}

impl EnergyEvaluator for CellListEvaluator<'_> {
    fn kind(&self) -> EvaluatorKind {
        EvaluatorKind::CellList
    }

    #[instrument(skip_all, name = "cell_list_evaluation", fields(particles = self.grid.len(), cutoff = self.cutoff))]
    fn evaluate_with(&self, reporter: &ProgressReporter) -> Evaluation {
        let occupied = self.grid.sorted_cells();
        debug!(
            cell_size = self.grid.cell_size(),
            occupied_cells = occupied.len(),
            max_occupancy = self.grid.max_occupancy(),
            stencil = ?self.stencil_len(),
            "Scanning spatial grid."
        );

        let mut ticker = TaskTicker::start(reporter, self.grid.len() as u64);
        let mut neighbors: Vec<&[GridEntry]> = Vec::new();
        let mut total = 0.0;
        let mut ordered_pairs = 0u64;

        for home in &occupied {
            self.collect_neighbors(home, &occupied, &mut neighbors);
            for p in self.grid.retrieve(home) {
                for bucket in &neighbors {
                    for q in bucket.iter() {
                        if q.index == p.index {
                            continue;
                        }
                        let separation = p.position.distance_to(&q.position);
                        if separation < self.cutoff {
                            total += self.potential.energy(separation);
                            ordered_pairs += 1;
                        }
                    }
                }
                ticker.step();
            }
        }
        ticker.finish();

        let evaluation = Evaluation {
            energy: total / 2.0,
            pair_count: ordered_pairs / 2,
        };
        debug!(
            pair_count = evaluation.pair_count,
            energy = evaluation.energy,
            "Cell-list summation complete."
        );
        evaluation
    }
}
