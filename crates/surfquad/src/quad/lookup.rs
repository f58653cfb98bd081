//! Reverse lookup from surface cell to critical point.

use std::collections::HashMap;

use super::SeparatrixEdge;
use crate::types::{CellId, CriticalPoint, PointId};

/// Surface cell id → critical point id; the first point claiming a cell wins.
#[derive(Clone, Debug, Default)]
pub struct CellLookup {
    by_cell: HashMap<CellId, PointId>,
}

impl CellLookup {
    pub fn new(points: &[CriticalPoint]) -> Self {
        let mut by_cell = HashMap::with_capacity(points.len());
        for (id, cp) in points.iter().enumerate() {
            by_cell.entry(cp.cell).or_insert(id);
        }
        Self { by_cell }
    }

    #[inline]
    pub fn resolve(&self, cell: CellId) -> Option<PointId> {
        self.by_cell.get(&cell).copied()
    }

    /// `(source, destination)` point ids, `None` if either end is unknown.
    #[inline]
    pub fn resolve_edge(&self, edge: &SeparatrixEdge) -> Option<(PointId, PointId)> {
        Some((self.resolve(edge.source)?, self.resolve(edge.destination)?))
    }
}
