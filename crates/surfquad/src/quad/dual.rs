//! Dual quadrangulation: corners are extrema only.

use std::collections::BTreeMap;

use super::{emit, CellLookup, SeparatrixEdge};
use crate::types::{CriticalPoint, PointId, Quad};

/// Emit one quad per source (saddle) reaching exactly four distinct destinations.
///
/// Opposite corners share a type: `i` is the first destination, `k` the first
/// later destination of the same type, `j`/`l` the remaining two in order.
/// Sources with another valence, or whose destinations cannot be split into
/// two same-type pairs, are skipped. Returns the number of emitted quads.
pub fn dual_quadrangulate(
    edges: &[SeparatrixEdge],
    points: &[CriticalPoint],
    lookup: &CellLookup,
    cells: &mut Vec<usize>,
) -> usize {
    let mut dests: BTreeMap<PointId, Vec<PointId>> = BTreeMap::new();
    for (src, dst) in edges.iter().filter_map(|e| lookup.resolve_edge(e)) {
        dests.entry(src).or_default().push(dst);
    }

    let mut emitted = 0;
    for extrema in dests.values() {
        let &[e0, e1, e2, e3] = extrema.as_slice() else {
            continue;
        };
        let Some(quad) = split_opposites(points, [e0, e1, e2, e3]) else {
            continue;
        };
        emit(cells, quad);
        emitted += 1;
    }
    emitted
}

fn split_opposites(points: &[CriticalPoint], e: [PointId; 4]) -> Option<Quad> {
    if (0..4).any(|a| (a + 1..4).any(|b| e[a] == e[b])) {
        return None;
    }
    let kind = |p: PointId| points[p].kind;
    let partner = (1..4).find(|&n| kind(e[n]) == kind(e[0]))?;
    let mut rest = (1..4).filter(|&n| n != partner).map(|n| e[n]);
    let (j, l) = (rest.next()?, rest.next()?);
    if kind(j) != kind(l) {
        return None;
    }
    Some(Quad::new(e[0], j, e[partner], l))
}
