//! Separatrix pairing and the two quadrangulators.
//!
//! - `pair_endpoints`: drop masked samples, pair survivors into edges.
//! - `SeparatrixIndex`: per-point source sets and separatrix degree.
//! - `dual`: one quad of extrema per 4-valent saddle.
//! - `direct`: extremum/saddle alternating quads, disambiguated by the
//!   common-manifold probe.

mod direct;
mod dual;
mod lookup;

pub use direct::{direct_quadrangulate, DirectStats};
pub use dual::dual_quadrangulate;
pub use lookup::CellLookup;

use std::collections::BTreeSet;

use crate::error::QuadError;
use crate::types::{CellId, PointId, Quad, SepRange, SeparatrixSamples};

/// One separatrix: endpoint cells and the sample range between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeparatrixEdge {
    pub source: CellId,
    pub destination: CellId,
    pub range: SepRange,
}

/// Pair the unmasked endpoints of `samples` into separatrix edges.
///
/// Fails when the number of unmasked entries is odd.
pub fn pair_endpoints(samples: &SeparatrixSamples) -> Result<Vec<SeparatrixEdge>, QuadError> {
    let ends: Vec<(usize, CellId)> = samples.endpoints().collect();
    if ends.len() % 2 != 0 {
        return Err(QuadError::OddSeparatrixEndpoints { count: ends.len() });
    }
    Ok(ends
        .chunks_exact(2)
        .map(|pair| SeparatrixEdge {
            source: pair[0].1,
            destination: pair[1].1,
            range: SepRange::new(pair[0].0, pair[1].0),
        })
        .collect())
}

/// Separatrix incidence resolved to critical-point ids.
#[derive(Clone, Debug, Default)]
pub struct SeparatrixIndex {
    /// Sources reaching each destination point.
    pub sources: Vec<BTreeSet<PointId>>,
    /// Separatrices touching each point (counted at both ends).
    pub degree: Vec<usize>,
}

impl SeparatrixIndex {
    /// Edges whose endpoints do not resolve are skipped.
    pub fn build(edges: &[SeparatrixEdge], lookup: &CellLookup, point_count: usize) -> Self {
        let mut sources = vec![BTreeSet::new(); point_count];
        let mut degree = vec![0usize; point_count];
        for (src, dst) in edges.iter().filter_map(|e| lookup.resolve_edge(e)) {
            sources[dst].insert(src);
            degree[dst] += 1;
            degree[src] += 1;
        }
        Self { sources, degree }
    }
}

#[inline]
pub(crate) fn emit(cells: &mut Vec<usize>, quad: Quad) {
    cells.extend_from_slice(&quad.record());
}
