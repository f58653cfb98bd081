//! Diagnostic checkpoints.
//!
//! The algorithms never print; they call a `QuadObserver` at fixed points of a
//! run. `TracingObserver` is the default sink, `NoopObserver` silences a run.

use std::collections::BTreeSet;

use crate::run::Summary;
use crate::types::{PointId, QuadMode};

/// Callbacks invoked during `Quadrangulation::execute_with`. All default to no-ops.
pub trait QuadObserver {
    /// Endpoint filtering succeeded: `endpoints` unmasked entries, `separatrices` pairs.
    fn filtered(&mut self, _endpoints: usize, _separatrices: usize) {}
    /// Endpoint filtering failed on an odd count; the run aborts.
    fn filter_failed(&mut self, _endpoints: usize) {}
    /// One common-manifold probe finished.
    fn common_manifold(
        &mut self,
        _points: &[PointId],
        _vertices: &[usize],
        _common: &BTreeSet<i64>,
    ) {
    }
    fn quadrangulated(&mut self, _mode: QuadMode, _quads: usize, _degenerate: usize) {}
    fn post_processed(&mut self, _bad_points: usize, _bad_quads: usize, _new_points: usize) {}
    fn finished(&mut self, _summary: &Summary) {}
}

/// Discards every checkpoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl QuadObserver for NoopObserver {}

/// Forwards checkpoints to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl QuadObserver for TracingObserver {
    fn filtered(&mut self, endpoints: usize, separatrices: usize) {
        tracing::debug!(endpoints, separatrices, "separatrix endpoints paired");
    }

    fn filter_failed(&mut self, endpoints: usize) {
        tracing::warn!(endpoints, "odd number of separatrix endpoints");
    }

    fn common_manifold(&mut self, points: &[PointId], vertices: &[usize], common: &BTreeSet<i64>) {
        tracing::trace!(?points, ?vertices, ?common, "common manifolds");
    }

    fn quadrangulated(&mut self, mode: QuadMode, quads: usize, degenerate: usize) {
        tracing::debug!(?mode, quads, degenerate, "quadrangulated");
    }

    fn post_processed(&mut self, bad_points: usize, bad_quads: usize, new_points: usize) {
        tracing::debug!(bad_points, bad_quads, new_points, "consistency pass");
    }

    fn finished(&mut self, summary: &Summary) {
        tracing::info!(
            quads = summary.quads,
            degenerate = summary.degenerate,
            manifolds = summary.manifolds,
            "produced {} quadrangles",
            summary.quads
        );
    }
}

/// Keeps every checkpoint in memory (tests).
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub events: Vec<String>,
    pub probes: Vec<(Vec<PointId>, bool)>,
}

#[cfg(test)]
impl QuadObserver for Recorder {
    fn filtered(&mut self, endpoints: usize, separatrices: usize) {
        self.events.push(format!("filtered {endpoints} {separatrices}"));
    }
    fn filter_failed(&mut self, endpoints: usize) {
        self.events.push(format!("filter_failed {endpoints}"));
    }
    fn common_manifold(&mut self, points: &[PointId], _vertices: &[usize], common: &BTreeSet<i64>) {
        self.probes.push((points.to_vec(), !common.is_empty()));
    }
    fn quadrangulated(&mut self, mode: QuadMode, quads: usize, degenerate: usize) {
        self.events.push(format!("quadrangulated {mode:?} {quads} {degenerate}"));
    }
    fn post_processed(&mut self, bad_points: usize, bad_quads: usize, new_points: usize) {
        self.events
            .push(format!("post_processed {bad_points} {bad_quads} {new_points}"));
    }
    fn finished(&mut self, summary: &Summary) {
        self.events.push(format!("finished {}", summary.quads));
    }
}
