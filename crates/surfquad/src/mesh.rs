//! Triangulation adjacency seam.
//!
//! The quadrangulation only ever asks "how many neighbors does vertex `v`
//! have" and "what is its `k`-th neighbor", so that is the whole trait.

use std::collections::BTreeSet;

/// Vertex one-ring queries on a triangulation.
pub trait VertexNeighbors {
    fn neighbor_count(&self, v: usize) -> usize;
    /// `k`-th neighbor of `v`, `None` when `k >= neighbor_count(v)`.
    fn neighbor(&self, v: usize, k: usize) -> Option<usize>;
}

/// One-ring lists per vertex.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyLists {
    rings: Vec<Vec<usize>>,
}

impl AdjacencyLists {
    pub fn from_lists(rings: Vec<Vec<usize>>) -> Self {
        Self { rings }
    }

    /// Build sorted, deduplicated one-rings from a triangle soup.
    ///
    /// Triangles referencing vertices `>= vertex_count` are ignored.
    pub fn from_triangles(vertex_count: usize, triangles: &[[usize; 3]]) -> Self {
        let mut rings: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); vertex_count];
        for tri in triangles {
            if tri.iter().any(|&v| v >= vertex_count) {
                continue;
            }
            for a in 0..3 {
                let (v, w) = (tri[a], tri[(a + 1) % 3]);
                if v == w {
                    continue;
                }
                rings[v].insert(w);
                rings[w].insert(v);
            }
        }
        Self {
            rings: rings.into_iter().map(|r| r.into_iter().collect()).collect(),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.rings.len()
    }

    pub fn ring(&self, v: usize) -> &[usize] {
        self.rings.get(v).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl VertexNeighbors for AdjacencyLists {
    #[inline]
    fn neighbor_count(&self, v: usize) -> usize {
        self.ring(v).len()
    }

    #[inline]
    fn neighbor(&self, v: usize, k: usize) -> Option<usize> {
        self.ring(v).get(k).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_triangles_share_an_edge() {
        let adj = AdjacencyLists::from_triangles(4, &[[0, 1, 2], [0, 2, 3]]);
        assert_eq!(adj.ring(0), &[1, 2, 3]);
        assert_eq!(adj.ring(1), &[0, 2]);
        assert_eq!(adj.neighbor_count(2), 3);
        assert_eq!(adj.neighbor(3, 1), Some(2));
        assert_eq!(adj.neighbor(3, 2), None);
    }

    #[test]
    fn out_of_range_triangles_are_skipped() {
        let adj = AdjacencyLists::from_triangles(3, &[[0, 1, 5], [0, 1, 2]]);
        assert_eq!(adj.ring(2), &[0, 1]);
        assert_eq!(adj.neighbor_count(9), 0);
    }
}
