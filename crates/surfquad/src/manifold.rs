//! Common-manifold probe.
//!
//! Decides whether a few critical points lie near a shared Morse-Smale cell by
//! collecting segmentation ids over a bounded breadth-first neighborhood of each
//! point and intersecting the resulting sets. The neighborhood is capped at
//! `NEIGHBORHOOD_CAP` visited vertices, so this is an approximation of manifold
//! membership with constant cost per point.

use std::collections::{BTreeSet, HashSet, VecDeque};

use crate::cfg::NEIGHBORHOOD_CAP;
use crate::mesh::VertexNeighbors;
use crate::observer::QuadObserver;
use crate::types::{CriticalPoint, PointId};

/// Read-only view over the inputs a probe needs.
pub struct ManifoldProbe<'a, M: VertexNeighbors + ?Sized> {
    mesh: &'a M,
    segmentation: &'a [i64],
    points: &'a [CriticalPoint],
}

impl<'a, M: VertexNeighbors + ?Sized> ManifoldProbe<'a, M> {
    pub fn new(mesh: &'a M, segmentation: &'a [i64], points: &'a [CriticalPoint]) -> Self {
        Self {
            mesh,
            segmentation,
            points,
        }
    }

    /// Segmentation ids met by a breadth-first walk from `vertex`, stopping
    /// after `NEIGHBORHOOD_CAP` vertices. Neighbors outside the segmentation
    /// are walked through but contribute no id.
    pub fn neighborhood(&self, vertex: usize) -> BTreeSet<i64> {
        let mut ids = BTreeSet::new();
        let mut seen: HashSet<usize> = HashSet::new();
        let mut frontier: VecDeque<usize> = VecDeque::new();
        seen.insert(vertex);
        frontier.push_back(vertex);
        let mut visited = 0usize;
        while let Some(cur) = frontier.pop_front() {
            if let Some(&seg) = self.segmentation.get(cur) {
                ids.insert(seg);
            }
            visited += 1;
            if visited >= NEIGHBORHOOD_CAP {
                break;
            }
            for k in 0..self.mesh.neighbor_count(cur) {
                let Some(next) = self.mesh.neighbor(cur, k) else {
                    continue;
                };
                if seen.insert(next) {
                    frontier.push_back(next);
                }
            }
        }
        ids
    }

    /// Intersection (left to right) of the neighborhoods of `points`.
    pub fn common_manifolds(&self, points: &[PointId]) -> BTreeSet<i64> {
        let mut sets = points
            .iter()
            .filter_map(|&p| self.points.get(p))
            .map(|cp| self.neighborhood(cp.vertex));
        let Some(mut common) = sets.next() else {
            return BTreeSet::new();
        };
        for next in sets {
            common = common.intersection(&next).copied().collect();
            if common.is_empty() {
                break;
            }
        }
        common
    }

    /// True iff the neighborhoods of all `points` share a segmentation id.
    pub fn has_common_manifold(&self, points: &[PointId], obs: &mut dyn QuadObserver) -> bool {
        let common = self.common_manifolds(points);
        let vertices: Vec<usize> = points
            .iter()
            .filter_map(|&p| self.points.get(p))
            .map(|cp| cp.vertex)
            .collect();
        obs.common_manifold(points, &vertices, &common);
        !common.is_empty()
    }
}
