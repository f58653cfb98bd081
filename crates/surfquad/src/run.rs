//! Orchestrator: one run is filter → quadrangulate → count manifolds →
//! post-process → summarize, strictly in that order.
//!
//! `Quadrangulation` owns the output buffers. They are cleared at the start of
//! every run and rebuilt from scratch, so repeated runs on the same input give
//! identical buffers.

use crate::cfg::QUAD_RECORD_LEN;
use crate::error::QuadError;
use crate::manifold::ManifoldProbe;
use crate::mesh::VertexNeighbors;
use crate::observer::{QuadObserver, TracingObserver};
use crate::post::{self, MiddleFinder, SubdivisionCache};
use crate::quad::{
    direct_quadrangulate, dual_quadrangulate, pair_endpoints, CellLookup, SeparatrixIndex,
};
use crate::types::{CriticalPoint, Quad, QuadCfg, QuadMode, SeparatrixSamples};

/// Borrowed inputs of a run.
pub struct QuadInput<'a, M: VertexNeighbors + ?Sized> {
    pub points: &'a [CriticalPoint],
    /// Manifold id per triangulation vertex.
    pub segmentation: &'a [i64],
    pub separatrices: &'a SeparatrixSamples,
    pub mesh: &'a M,
}

/// Advisory counts of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub quads: usize,
    pub degenerate: usize,
    pub manifolds: usize,
    pub separatrices: usize,
    pub bad_points: usize,
    pub bad_quads: usize,
    pub subdivision_points: usize,
}

/// Quadrangulation driver and owner of the output buffers.
#[derive(Clone, Debug, Default)]
pub struct Quadrangulation {
    cfg: QuadCfg,
    cells: Vec<usize>,
    points: Vec<f32>,
    cache: SubdivisionCache,
}

impl Quadrangulation {
    pub fn new(cfg: QuadCfg) -> Self {
        Self {
            cfg,
            ..Self::default()
        }
    }

    #[inline]
    pub fn cfg(&self) -> QuadCfg {
        self.cfg
    }

    /// Flat `[4, i, j, k, l]` records.
    #[inline]
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    pub fn quads(&self) -> impl Iterator<Item = Quad> + '_ {
        post::quads(&self.cells)
    }

    /// Flat xyz coordinates of the subdivision points.
    #[inline]
    pub fn points(&self) -> &[f32] {
        &self.points
    }

    #[inline]
    pub fn subdivision_cache(&self) -> &SubdivisionCache {
        &self.cache
    }

    /// Run with the default `tracing` diagnostics.
    pub fn execute<M: VertexNeighbors + ?Sized>(
        &mut self,
        input: &QuadInput<'_, M>,
    ) -> Result<Summary, QuadError> {
        self.execute_with(input, &mut TracingObserver)
    }

    pub fn execute_with<M: VertexNeighbors + ?Sized>(
        &mut self,
        input: &QuadInput<'_, M>,
        obs: &mut dyn QuadObserver,
    ) -> Result<Summary, QuadError> {
        self.cells.clear();
        self.points.clear();
        self.cache.clear();
        validate(input)?;

        // Filtering
        let edges = match pair_endpoints(input.separatrices) {
            Ok(edges) => edges,
            Err(err) => {
                if let QuadError::OddSeparatrixEndpoints { count } = err {
                    obs.filter_failed(count);
                }
                return Err(err);
            }
        };
        obs.filtered(2 * edges.len(), edges.len());

        // Quadrangulating
        let lookup = CellLookup::new(input.points);
        let index = SeparatrixIndex::build(&edges, &lookup, input.points.len());
        let degenerate = match self.cfg.mode {
            QuadMode::Dual => {
                dual_quadrangulate(&edges, input.points, &lookup, &mut self.cells);
                0
            }
            QuadMode::Direct => {
                let probe = ManifoldProbe::new(input.mesh, input.segmentation, input.points);
                direct_quadrangulate(&index, input.points, &probe, &mut self.cells, obs)
                    .degenerate
            }
        };
        let quads = self.cells.len() / QUAD_RECORD_LEN;
        obs.quadrangulated(self.cfg.mode, quads, degenerate);

        // Counting manifolds
        let manifolds = manifold_count(input.segmentation);

        // Post-processing
        let report = post::check(&self.cells, &index.degree);
        let finder = MiddleFinder::new(&edges, input.points, &input.separatrices.points);
        let added = post::subdivide_bad_quads(
            &self.cells,
            &report,
            &finder,
            &mut self.cache,
            &mut self.points,
        );
        obs.post_processed(report.bad_points.len(), report.bad_quads.len(), added);

        let summary = Summary {
            quads,
            degenerate,
            manifolds,
            separatrices: edges.len(),
            bad_points: report.bad_points.len(),
            bad_quads: report.bad_quads.len(),
            subdivision_points: added,
        };
        obs.finished(&summary);
        Ok(summary)
    }
}

/// Largest segmentation id plus one (ids below zero count as zero).
pub fn manifold_count(segmentation: &[i64]) -> usize {
    let max = segmentation.iter().copied().fold(0i64, i64::max);
    max as usize + 1
}

fn validate<M: VertexNeighbors + ?Sized>(input: &QuadInput<'_, M>) -> Result<(), QuadError> {
    let seps = input.separatrices;
    for (what, found) in [
        ("separatrix mask", seps.mask.len()),
        ("separatrix points", seps.points.len()),
    ] {
        if found != seps.len() {
            return Err(QuadError::LengthMismatch {
                what,
                expected: seps.len(),
                found,
            });
        }
    }
    for (point, cp) in input.points.iter().enumerate() {
        if cp.vertex >= input.segmentation.len() {
            return Err(QuadError::VertexOutOfRange {
                point,
                vertex: cp.vertex,
            });
        }
    }
    Ok(())
}
