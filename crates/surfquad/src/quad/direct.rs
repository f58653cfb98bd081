//! Direct quadrangulation: corners alternate extremum / saddle.
//!
//! For every pair of destinations `(i, k)` of differing type, the common
//! sources decide the quads:
//! - two or more: every source pair `(j, l)` passing the common-manifold probe
//!   yields `[i, j, k, l]` (all plausible completions are kept);
//! - exactly one, with `i` or `k` reached by a single source: degenerate
//!   `[i, j, k, j]`;
//! - otherwise nothing.

use super::{emit, SeparatrixIndex};
use crate::manifold::ManifoldProbe;
use crate::mesh::VertexNeighbors;
use crate::observer::QuadObserver;
use crate::types::{CriticalPoint, PointId, Quad};

/// Counts produced by one direct pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectStats {
    pub quads: usize,
    pub degenerate: usize,
}

pub fn direct_quadrangulate<M: VertexNeighbors + ?Sized>(
    index: &SeparatrixIndex,
    points: &[CriticalPoint],
    probe: &ManifoldProbe<'_, M>,
    cells: &mut Vec<usize>,
    obs: &mut dyn QuadObserver,
) -> DirectStats {
    let mut stats = DirectStats::default();
    let sources = &index.sources;
    for i in 0..sources.len() {
        if sources[i].is_empty() {
            continue;
        }
        for k in (i + 1)..sources.len() {
            if sources[k].is_empty() || points[i].kind == points[k].kind {
                continue;
            }
            let common: Vec<PointId> = sources[i].intersection(&sources[k]).copied().collect();
            match common.as_slice() {
                [] => {}
                [j] => {
                    if sources[i].len() == 1 || sources[k].len() == 1 {
                        emit(cells, Quad::new(i, *j, k, *j));
                        stats.quads += 1;
                        stats.degenerate += 1;
                    }
                }
                _ => {
                    for (m, &j) in common.iter().enumerate() {
                        for &l in &common[m + 1..] {
                            if probe.has_common_manifold(&[j, l], obs) {
                                emit(cells, Quad::new(i, j, k, l));
                                stats.quads += 1;
                            }
                        }
                    }
                }
            }
        }
    }
    stats
}
