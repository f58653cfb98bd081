//! Synthetic checkerboard Morse-Smale inputs.
//!
//! Layout
//! - Extrema sit on a `(cells_x + 1) × (cells_y + 1)` lattice, minima where
//!   `a + b` is even and maxima elsewhere; one saddle sits at every cell center
//!   and sends a straight separatrix to each of its four cell corners.
//! - The triangulation is a regular grid refined `2 * resolution` times per
//!   lattice unit, each square split along its main diagonal.
//! - Heights follow `-cos(πx)·cos(πy)`; the segmentation labels every vertex
//!   with its nearest extremum.
//! - `jitter > 0` perturbs interior separatrix heights with a seeded `StdRng`,
//!   so replays with the same seed are identical.

use std::f32::consts::PI;
use std::fmt;

use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::mesh::AdjacencyLists;
use crate::run::QuadInput;
use crate::types::{CellId, CriticalPoint, CriticalType, SeparatrixSamples};

/// Grid parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCfg {
    pub cells_x: usize,
    pub cells_y: usize,
    /// Fine vertices per half lattice unit.
    pub resolution: usize,
    pub jitter: f32,
    pub seed: u64,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            cells_x: 2,
            cells_y: 2,
            resolution: 2,
            jitter: 0.0,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SynthError {
    InvalidParams { reason: String },
}

impl fmt::Display for SynthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid grid params: {reason}"),
        }
    }
}

impl std::error::Error for SynthError {}

/// Everything a run needs, owned.
#[derive(Clone, Debug)]
pub struct SynthBundle {
    pub points: Vec<CriticalPoint>,
    pub segmentation: Vec<i64>,
    pub separatrices: SeparatrixSamples,
    pub vertex_count: usize,
    pub triangles: Vec<[usize; 3]>,
    pub mesh: AdjacencyLists,
}

impl SynthBundle {
    pub fn input(&self) -> QuadInput<'_, AdjacencyLists> {
        QuadInput {
            points: &self.points,
            segmentation: &self.segmentation,
            separatrices: &self.separatrices,
            mesh: &self.mesh,
        }
    }
}

/// Surface cell of a vertex carrying a point of the given type.
fn cell_id(vertex: usize, kind: CriticalType) -> CellId {
    3 * vertex as CellId + kind.index() as CellId
}

pub fn checkerboard(cfg: &GridCfg) -> Result<SynthBundle, SynthError> {
    if cfg.cells_x == 0 || cfg.cells_y == 0 {
        return Err(SynthError::InvalidParams {
            reason: "need at least one cell in each direction".into(),
        });
    }
    if cfg.resolution == 0 {
        return Err(SynthError::InvalidParams {
            reason: "resolution must be >= 1".into(),
        });
    }
    if !cfg.jitter.is_finite() || cfg.jitter < 0.0 {
        return Err(SynthError::InvalidParams {
            reason: "jitter must be finite and non-negative".into(),
        });
    }

    let r = cfg.resolution;
    let (w, h) = (2 * r * cfg.cells_x, 2 * r * cfg.cells_y);
    let vid = |u: usize, v: usize| v * (w + 1) + u;
    let vertex_count = (w + 1) * (h + 1);
    let unit = (2 * r) as f32;
    let position = |u: usize, v: usize| {
        let (x, y) = (u as f32 / unit, v as f32 / unit);
        Vector3::new(x, y, -(PI * x).cos() * (PI * y).cos())
    };

    let mut triangles = Vec::with_capacity(2 * w * h);
    for v in 0..h {
        for u in 0..w {
            triangles.push([vid(u, v), vid(u + 1, v), vid(u + 1, v + 1)]);
            triangles.push([vid(u, v), vid(u + 1, v + 1), vid(u, v + 1)]);
        }
    }
    let mesh = AdjacencyLists::from_triangles(vertex_count, &triangles);

    let lattice_x = cfg.cells_x + 1;
    let extremum = |a: usize, b: usize| b * lattice_x + a;
    let mut segmentation = vec![0i64; vertex_count];
    for v in 0..=h {
        for u in 0..=w {
            let (a, b) = ((u + r) / (2 * r), (v + r) / (2 * r));
            segmentation[vid(u, v)] = extremum(a, b) as i64;
        }
    }

    let mut points = Vec::with_capacity(lattice_x * (cfg.cells_y + 1) + cfg.cells_x * cfg.cells_y);
    for b in 0..=cfg.cells_y {
        for a in 0..=cfg.cells_x {
            let kind = if (a + b) % 2 == 0 {
                CriticalType::Minimum
            } else {
                CriticalType::Maximum
            };
            let vertex = vid(2 * r * a, 2 * r * b);
            points.push(CriticalPoint::new(vertex, cell_id(vertex, kind), kind));
        }
    }

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut separatrices = SeparatrixSamples::default();
    let mut cells = Vec::with_capacity(r + 1);
    let mut samples = Vec::with_capacity(r + 1);
    for b in 0..cfg.cells_y {
        for a in 0..cfg.cells_x {
            let (su, sv) = ((2 * a + 1) * r, (2 * b + 1) * r);
            let saddle = vid(su, sv);
            points.push(CriticalPoint::new(
                saddle,
                cell_id(saddle, CriticalType::Saddle),
                CriticalType::Saddle,
            ));
            for (da, db) in [(0, 0), (1, 0), (1, 1), (0, 1)] {
                let corner = &points[extremum(a + da, b + db)];
                cells.clear();
                samples.clear();
                for step in 0..=r {
                    let u = if da == 1 { su + step } else { su - step };
                    let v = if db == 1 { sv + step } else { sv - step };
                    let mut p = position(u, v);
                    if step == 0 {
                        cells.push(cell_id(saddle, CriticalType::Saddle));
                    } else if step == r {
                        cells.push(corner.cell);
                    } else {
                        cells.push(cell_id(vid(u, v), CriticalType::Saddle));
                        if cfg.jitter > 0.0 {
                            p.z += rng.gen_range(-cfg.jitter..=cfg.jitter);
                        }
                    }
                    samples.push(p);
                }
                separatrices.push_polyline(&cells, &samples);
            }
        }
    }

    Ok(SynthBundle {
        points,
        segmentation,
        separatrices,
        vertex_count,
        triangles,
        mesh,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoopObserver;
    use crate::run::Quadrangulation;
    use crate::types::QuadCfg;

    fn grid(cells_x: usize, cells_y: usize, resolution: usize) -> SynthBundle {
        checkerboard(&GridCfg {
            cells_x,
            cells_y,
            resolution,
            ..GridCfg::default()
        })
        .unwrap()
    }

    #[test]
    fn counts_match_layout() {
        let g = grid(3, 2, 2);
        assert_eq!(g.points.len(), 4 * 3 + 3 * 2);
        assert_eq!(g.vertex_count, 13 * 9);
        assert_eq!(g.segmentation.len(), g.vertex_count);
        // Four separatrices of resolution + 1 samples per saddle.
        assert_eq!(g.separatrices.len(), 6 * 4 * 3);
        assert_eq!(g.separatrices.endpoints().count(), 6 * 4 * 2);
        let saddles = g
            .points
            .iter()
            .filter(|p| p.kind == CriticalType::Saddle)
            .count();
        assert_eq!(saddles, 6);
    }

    #[test]
    fn dual_gives_one_quad_per_saddle() {
        let g = grid(3, 3, 2);
        let mut q = Quadrangulation::new(QuadCfg::dual());
        let s = q.execute_with(&g.input(), &mut NoopObserver).unwrap();
        assert_eq!(s.quads, 9);
        // Every dual quad pairs two minima against two maxima.
        for quad in q.quads() {
            assert_eq!(g.points[quad.i].kind, g.points[quad.k].kind);
            assert_eq!(g.points[quad.j].kind, g.points[quad.l].kind);
            assert_ne!(g.points[quad.i].kind, g.points[quad.j].kind);
        }
    }

    #[test]
    fn direct_covers_interior_edges_and_degenerate_corners() {
        for r in [1, 3] {
            let g = grid(3, 3, r);
            let mut q = Quadrangulation::new(QuadCfg::direct());
            let s = q.execute_with(&g.input(), &mut NoopObserver).unwrap();
            // 12 interior lattice edges, 8 boundary edges at lattice corners.
            assert_eq!(s.degenerate, 8);
            assert_eq!(s.quads, 12 + 8);
            assert_eq!(s.manifolds, 16);
            for quad in q.quads().filter(|q| !q.is_degenerate()) {
                assert_eq!(g.points[quad.j].kind, CriticalType::Saddle);
                assert_eq!(g.points[quad.l].kind, CriticalType::Saddle);
                assert!(g.points[quad.i].kind.is_extremum());
            }
        }
    }

    #[test]
    fn single_cell_is_all_degenerate() {
        let g = grid(1, 1, 2);
        let s = Quadrangulation::default()
            .execute_with(&g.input(), &mut NoopObserver)
            .unwrap();
        assert_eq!((s.quads, s.degenerate), (4, 4));
    }

    #[test]
    fn jitter_is_seeded() {
        let cfg = GridCfg {
            jitter: 0.05,
            seed: 7,
            ..GridCfg::default()
        };
        let a = checkerboard(&cfg).unwrap();
        let b = checkerboard(&cfg).unwrap();
        assert_eq!(a.separatrices.points, b.separatrices.points);
        let flat = checkerboard(&GridCfg::default()).unwrap();
        assert_ne!(a.separatrices.points, flat.separatrices.points);
        // Endpoints never move.
        for (n, _) in a.separatrices.endpoints() {
            assert_eq!(a.separatrices.points[n], flat.separatrices.points[n]);
        }
    }

    #[test]
    fn rejects_empty_grids() {
        let err = checkerboard(&GridCfg {
            cells_x: 0,
            ..GridCfg::default()
        })
        .unwrap_err();
        assert!(err.to_string().contains("at least one cell"));
        assert!(checkerboard(&GridCfg {
            resolution: 0,
            ..GridCfg::default()
        })
        .is_err());
    }
}
