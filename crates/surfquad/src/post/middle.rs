//! Separatrix middle finder with a per-range cache.

use std::collections::BTreeMap;

use nalgebra::Vector3;

use crate::geometry::arclength_middle;
use crate::quad::SeparatrixEdge;
use crate::types::{CriticalPoint, PointId, SepRange};

/// Sample range → index of the emitted middle sample.
///
/// A range present here has already contributed its point to the output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubdivisionCache {
    middles: BTreeMap<SepRange, usize>,
}

impl SubdivisionCache {
    #[inline]
    pub fn get(&self, range: &SepRange) -> Option<usize> {
        self.middles.get(range).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.middles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.middles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SepRange, &usize)> {
        self.middles.iter()
    }

    pub fn clear(&mut self) {
        self.middles.clear();
    }
}

/// Locates arclength midpoints of the separatrices joining two critical points.
pub struct MiddleFinder<'a> {
    edges: &'a [SeparatrixEdge],
    points: &'a [CriticalPoint],
    samples: &'a [Vector3<f32>],
}

impl<'a> MiddleFinder<'a> {
    pub fn new(
        edges: &'a [SeparatrixEdge],
        points: &'a [CriticalPoint],
        samples: &'a [Vector3<f32>],
    ) -> Self {
        Self {
            edges,
            points,
            samples,
        }
    }

    /// Sample ranges of every separatrix running from `src` to `dst`.
    pub fn ranges(&self, src: PointId, dst: PointId) -> Vec<SepRange> {
        let (Some(s), Some(d)) = (self.points.get(src), self.points.get(dst)) else {
            return Vec::new();
        };
        self.edges
            .iter()
            .filter(|e| e.source == s.cell && e.destination == d.cell)
            .map(|e| e.range)
            .collect()
    }

    /// Append the middle sample of every uncached `src → dst` separatrix to
    /// `out` (flat xyz) and record it in `cache`. Returns the number of new points.
    pub fn emit_middles(
        &self,
        src: PointId,
        dst: PointId,
        cache: &mut SubdivisionCache,
        out: &mut Vec<f32>,
    ) -> usize {
        let mut added = 0;
        for range in self.ranges(src, dst) {
            if cache.middles.contains_key(&range) {
                continue;
            }
            let Some(polyline) = self.samples.get(range.start..=range.end) else {
                continue;
            };
            let Some(offset) = arclength_middle(polyline) else {
                continue;
            };
            let id = range.start + offset;
            let p = self.samples[id];
            out.extend_from_slice(&[p.x, p.y, p.z]);
            cache.middles.insert(range, id);
            added += 1;
        }
        added
    }
}
