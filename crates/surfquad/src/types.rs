//! Data types shared by the quadrangulators and the post-processor.
//!
//! - `CriticalPoint`: immutable input row, indexed by `PointId` everywhere.
//! - `SeparatrixSamples`: the flattened, masked separatrix sample arrays.
//! - `Quad`: one output quadrangle; `SepRange`: cache key for subdivision points.
//! - `QuadCfg`: the single mode switch.

use nalgebra::Vector3;

use crate::cfg::{MASK_DISCARD, QUAD_VERTEX_COUNT};

/// Identifier of a cell in the flattened surface-cell index space.
pub type CellId = i64;
/// Index of a critical point in the input table.
pub type PointId = usize;

/// Nature of a critical point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CriticalType {
    Minimum,
    Saddle,
    Maximum,
}

impl CriticalType {
    /// Decode the usual index tag (0 = minimum, 1 = saddle, 2 = maximum).
    pub fn from_index(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Minimum),
            1 => Some(Self::Saddle),
            2 => Some(Self::Maximum),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Self::Minimum => 0,
            Self::Saddle => 1,
            Self::Maximum => 2,
        }
    }

    #[inline]
    pub fn is_extremum(self) -> bool {
        !matches!(self, Self::Saddle)
    }
}

/// One critical point of the Morse-Smale complex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CriticalPoint {
    /// Triangulation vertex carrying the point.
    pub vertex: usize,
    /// Surface cell shared with separatrix endpoints.
    pub cell: CellId,
    pub kind: CriticalType,
}

impl CriticalPoint {
    pub fn new(vertex: usize, cell: CellId, kind: CriticalType) -> Self {
        Self { vertex, cell, kind }
    }
}

/// Flattened separatrix polylines.
///
/// Invariants:
/// - `cell_ids`, `mask` and `points` are parallel arrays.
/// - Unmasked entries are polyline endpoints; consecutive unmasked pairs are
///   (source, destination) of one separatrix, with the masked interior samples
///   of that separatrix in between.
#[derive(Clone, Debug, Default)]
pub struct SeparatrixSamples {
    pub cell_ids: Vec<CellId>,
    /// `1` discards the entry from endpoint pairing.
    pub mask: Vec<u8>,
    pub points: Vec<Vector3<f32>>,
}

impl SeparatrixSamples {
    #[inline]
    pub fn len(&self) -> usize {
        self.cell_ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cell_ids.is_empty()
    }

    /// Append one polyline: first and last samples become endpoints.
    pub fn push_polyline(&mut self, cells: &[CellId], points: &[Vector3<f32>]) {
        debug_assert_eq!(cells.len(), points.len());
        let last = cells.len().saturating_sub(1);
        for (n, (&cell, &p)) in cells.iter().zip(points).enumerate() {
            self.cell_ids.push(cell);
            self.mask.push(if n == 0 || n == last { 0 } else { MASK_DISCARD });
            self.points.push(p);
        }
    }

    /// Unmasked entries as `(sample index, cell id)`, in array order.
    pub fn endpoints(&self) -> impl Iterator<Item = (usize, CellId)> + '_ {
        self.cell_ids
            .iter()
            .zip(&self.mask)
            .enumerate()
            .filter(|(_, (_, m))| **m != MASK_DISCARD)
            .map(|(n, (&c, _))| (n, c))
    }
}

/// Inclusive sample-index range `[start, end]` covering one separatrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SepRange {
    pub start: usize,
    pub end: usize,
}

impl SepRange {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Quadrangle `(i, j, k, l)` of critical points; `i`/`k` and `j`/`l` are opposite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Quad {
    pub i: PointId,
    pub j: PointId,
    pub k: PointId,
    pub l: PointId,
}

impl Quad {
    pub fn new(i: PointId, j: PointId, k: PointId, l: PointId) -> Self {
        Self { i, j, k, l }
    }

    /// Two opposite corners coincide.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.j == self.l
    }

    #[inline]
    pub fn corners(&self) -> [PointId; 4] {
        [self.i, self.j, self.k, self.l]
    }

    /// Boundary sides as (source, destination) separatrix candidates.
    pub fn sides(&self) -> [(PointId, PointId); 4] {
        [
            (self.j, self.i),
            (self.j, self.k),
            (self.l, self.i),
            (self.l, self.k),
        ]
    }

    /// Flat cell-array record `[4, i, j, k, l]`.
    #[inline]
    pub fn record(&self) -> [usize; 5] {
        [QUAD_VERTEX_COUNT, self.i, self.j, self.k, self.l]
    }

    /// Inverse of `record`; `None` if the slice is not a quad record.
    pub fn from_record(rec: &[usize]) -> Option<Self> {
        match rec {
            [QUAD_VERTEX_COUNT, i, j, k, l] => Some(Self::new(*i, *j, *k, *l)),
            _ => None,
        }
    }
}

/// Which quadrangulation to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuadMode {
    /// Corners are extrema only; one quad per 4-valent saddle.
    Dual,
    /// Corners alternate extremum / saddle.
    #[default]
    Direct,
}

/// Run configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuadCfg {
    pub mode: QuadMode,
}

impl QuadCfg {
    pub fn dual() -> Self {
        Self {
            mode: QuadMode::Dual,
        }
    }

    pub fn direct() -> Self {
        Self {
            mode: QuadMode::Direct,
        }
    }
}
