//! Hand-built inputs shared by unit tests.

use nalgebra::Vector3;

use crate::mesh::AdjacencyLists;
use crate::run::QuadInput;
use crate::types::{CellId, CriticalPoint, CriticalType, PointId, SeparatrixSamples};

/// Critical points sit on vertices `0..n` with one position each.
pub(crate) struct Fixture {
    pub points: Vec<CriticalPoint>,
    pub positions: Vec<Vector3<f32>>,
    pub segmentation: Vec<i64>,
    pub separatrices: SeparatrixSamples,
    pub mesh: AdjacencyLists,
}

pub(crate) fn cell_of(p: PointId) -> CellId {
    10 * p as CellId + 5
}

impl Fixture {
    pub fn new(kinds: &[CriticalType], positions: &[[f32; 3]]) -> Self {
        let points = kinds
            .iter()
            .enumerate()
            .map(|(n, &k)| CriticalPoint::new(n, cell_of(n), k))
            .collect();
        Self {
            points,
            positions: positions.iter().map(|&p| Vector3::from(p)).collect(),
            segmentation: vec![0; kinds.len()],
            separatrices: SeparatrixSamples::default(),
            mesh: AdjacencyLists::from_lists(vec![Vec::new(); kinds.len()]),
        }
    }

    /// Straight separatrix `src → dst` with one interior sample at the midpoint.
    pub fn separatrix(&mut self, src: PointId, dst: PointId) -> &mut Self {
        let (a, b) = (self.positions[src], self.positions[dst]);
        self.separatrices
            .push_polyline(&[cell_of(src), -1, cell_of(dst)], &[a, (a + b) * 0.5, b]);
        self
    }

    pub fn input(&self) -> QuadInput<'_, AdjacencyLists> {
        QuadInput {
            points: &self.points,
            segmentation: &self.segmentation,
            separatrices: &self.separatrices,
            mesh: &self.mesh,
        }
    }
}

/// min/saddle/max/saddle around the unit square; saddles 1 and 3 share a
/// manifold iff `linked`.
pub(crate) fn square(linked: bool) -> Fixture {
    use CriticalType::*;
    let mut f = Fixture::new(
        &[Minimum, Saddle, Maximum, Saddle],
        &[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ],
    );
    f.separatrix(1, 0).separatrix(1, 2).separatrix(3, 0).separatrix(3, 2);
    if linked {
        f.mesh = AdjacencyLists::from_lists(vec![vec![1, 3], vec![0, 2], vec![1, 3], vec![0, 2]]);
    } else {
        f.segmentation = vec![0, 1, 2, 3];
    }
    f
}
