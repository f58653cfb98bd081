//! Errors surfaced by a quadrangulation run.

use std::fmt;

/// Input errors that abort a run before any output is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuadError {
    /// After masking, the separatrix endpoints cannot be paired.
    OddSeparatrixEndpoints { count: usize },
    /// Two parallel input arrays disagree in length.
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// A critical point sits on a vertex outside the segmentation.
    VertexOutOfRange { point: usize, vertex: usize },
}

impl fmt::Display for QuadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadError::OddSeparatrixEndpoints { count } => write!(
                f,
                "odd number of separatrix endpoints after masking ({count}); cannot pair them into edges"
            ),
            QuadError::LengthMismatch {
                what,
                expected,
                found,
            } => write!(f, "{what}: expected {expected} entries, found {found}"),
            QuadError::VertexOutOfRange { point, vertex } => write!(
                f,
                "critical point {point} references vertex {vertex} outside the segmentation"
            ),
        }
    }
}

impl std::error::Error for QuadError {}
