//! Quadrangulation of Morse-Smale separatrix networks.
//!
//! Purpose
//! - Turn the separatrices of a Morse-Smale complex on a triangulated surface
//!   into quadrangles whose corners are the complex's critical points.
//! - Flag quadrangles whose corners disagree with the separatrix valence and
//!   locate arclength midpoints on their boundary separatrices.
//!
//! Layout
//! - `types`, `cfg`, `error`: data model, fixed constants and the error enum.
//! - `mesh`, `geometry`: the narrow collaborator seams (vertex adjacency, distance).
//! - `manifold`: bounded common-manifold probe used to disambiguate quads.
//! - `quad`: separatrix pairing, dual and direct quadrangulators.
//! - `post`: valence consistency check and separatrix middle finder.
//! - `run`: the orchestrator owning output buffers.
//! - `observer`: diagnostic checkpoints (tracing-backed by default).
//! - `synth`: synthetic checkerboard inputs for tests, benches and the CLI.

mod cfg;
pub mod error;
pub mod geometry;
pub mod manifold;
pub mod mesh;
pub mod observer;
pub mod post;
pub mod quad;
pub mod run;
pub mod synth;
pub mod types;

#[cfg(test)]
mod testutil;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::QuadError;
pub use run::{QuadInput, Quadrangulation, Summary};
pub use types::{
    CellId, CriticalPoint, CriticalType, PointId, Quad, QuadCfg, QuadMode, SepRange,
    SeparatrixSamples,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::mesh::{AdjacencyLists, VertexNeighbors};
    pub use crate::observer::{NoopObserver, QuadObserver, TracingObserver};
    pub use crate::run::{QuadInput, Quadrangulation, Summary};
    pub use crate::synth::{checkerboard, GridCfg, SynthBundle};
    pub use crate::types::{
        CellId, CriticalPoint, CriticalType, PointId, Quad, QuadCfg, QuadMode, SepRange,
        SeparatrixSamples,
    };
    pub use crate::QuadError;
    pub use nalgebra::Vector3;
}
