//! Valence consistency pass.
//!
//! A critical point is bad when fewer quads use it than separatrices touch it;
//! a quad is bad when at least two of its corner slots are bad points. Bad
//! quads are kept as they are. Their four sides are handed to the
//! `MiddleFinder`, which emits candidate subdivision points.

mod middle;

pub use middle::{MiddleFinder, SubdivisionCache};

use crate::cfg::QUAD_RECORD_LEN;
use crate::types::{PointId, Quad};

/// Outcome of the consistency check.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Consistency {
    pub bad_points: Vec<PointId>,
    /// Indices of bad quads in the cell buffer (record order).
    pub bad_quads: Vec<usize>,
}

/// Iterate the quads of a flat `[4, i, j, k, l]` buffer.
pub fn quads(cells: &[usize]) -> impl Iterator<Item = Quad> + '_ {
    cells
        .chunks_exact(QUAD_RECORD_LEN)
        .filter_map(Quad::from_record)
}

/// Number of corner slots referencing each point.
pub fn produced_valence(cells: &[usize], point_count: usize) -> Vec<usize> {
    let mut valence = vec![0usize; point_count];
    for q in quads(cells) {
        for c in q.corners() {
            if let Some(v) = valence.get_mut(c) {
                *v += 1;
            }
        }
    }
    valence
}

/// Compare produced against `expected` valence and collect bad points and quads.
pub fn check(cells: &[usize], expected: &[usize]) -> Consistency {
    let produced = produced_valence(cells, expected.len());
    let bad: Vec<bool> = produced
        .iter()
        .zip(expected)
        .map(|(p, e)| p < e)
        .collect();
    let bad_points = (0..bad.len()).filter(|&p| bad[p]).collect();
    let bad_quads = quads(cells)
        .enumerate()
        .filter(|(_, q)| {
            q.corners()
                .iter()
                .filter(|&&c| bad.get(c).copied().unwrap_or(false))
                .count()
                >= 2
        })
        .map(|(n, _)| n)
        .collect();
    Consistency {
        bad_points,
        bad_quads,
    }
}

/// Emit middle points for the sides of every bad quad. Returns points added.
pub fn subdivide_bad_quads(
    cells: &[usize],
    report: &Consistency,
    finder: &MiddleFinder<'_>,
    cache: &mut SubdivisionCache,
    out: &mut Vec<f32>,
) -> usize {
    let records: Vec<Quad> = quads(cells).collect();
    let mut added = 0;
    for &n in &report.bad_quads {
        let Some(q) = records.get(n) else {
            continue;
        };
        for (src, dst) in q.sides() {
            added += finder.emit_middles(src, dst, cache, out);
        }
    }
    added
}

#[cfg(test)]
mod tests;
