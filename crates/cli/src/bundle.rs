//! JSON exchange format for the CLI.
//!
//! A bundle carries every input array of a run; the output document carries
//! the flat cell and point buffers plus the run summary.

use serde::{Deserialize, Serialize};
use surfquad::mesh::AdjacencyLists;
use surfquad::prelude::Vector3;
use surfquad::synth::SynthBundle;
use surfquad::{CellId, CriticalPoint, CriticalType, Quadrangulation, SeparatrixSamples, Summary};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Minimum,
    Saddle,
    Maximum,
}

impl From<Kind> for CriticalType {
    fn from(k: Kind) -> Self {
        match k {
            Kind::Minimum => CriticalType::Minimum,
            Kind::Saddle => CriticalType::Saddle,
            Kind::Maximum => CriticalType::Maximum,
        }
    }
}

impl From<CriticalType> for Kind {
    fn from(k: CriticalType) -> Self {
        match k {
            CriticalType::Minimum => Kind::Minimum,
            CriticalType::Saddle => Kind::Saddle,
            CriticalType::Maximum => Kind::Maximum,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointRow {
    pub vertex: usize,
    pub cell: CellId,
    pub kind: Kind,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Separatrices {
    pub cell_ids: Vec<CellId>,
    pub mask: Vec<u8>,
    pub points: Vec<[f32; 3]>,
}

/// Input document of `cli run`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    pub critical_points: Vec<PointRow>,
    pub segmentation: Vec<i64>,
    pub vertex_count: usize,
    pub triangles: Vec<[usize; 3]>,
    pub separatrices: Separatrices,
}

/// Owned library-side arrays decoded from a bundle.
pub struct Decoded {
    pub points: Vec<CriticalPoint>,
    pub segmentation: Vec<i64>,
    pub separatrices: SeparatrixSamples,
    pub mesh: AdjacencyLists,
}

impl Bundle {
    pub fn decode(&self) -> Decoded {
        Decoded {
            points: self
                .critical_points
                .iter()
                .map(|r| CriticalPoint::new(r.vertex, r.cell, r.kind.into()))
                .collect(),
            segmentation: self.segmentation.clone(),
            separatrices: SeparatrixSamples {
                cell_ids: self.separatrices.cell_ids.clone(),
                mask: self.separatrices.mask.clone(),
                points: self.separatrices.points.iter().map(|&p| Vector3::from(p)).collect(),
            },
            mesh: AdjacencyLists::from_triangles(self.vertex_count, &self.triangles),
        }
    }
}

impl From<&SynthBundle> for Bundle {
    fn from(s: &SynthBundle) -> Self {
        Self {
            critical_points: s
                .points
                .iter()
                .map(|p| PointRow {
                    vertex: p.vertex,
                    cell: p.cell,
                    kind: p.kind.into(),
                })
                .collect(),
            segmentation: s.segmentation.clone(),
            vertex_count: s.vertex_count,
            triangles: s.triangles.clone(),
            separatrices: Separatrices {
                cell_ids: s.separatrices.cell_ids.clone(),
                mask: s.separatrices.mask.clone(),
                points: s.separatrices.points.iter().map(|p| [p.x, p.y, p.z]).collect(),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryDoc {
    pub quads: usize,
    pub degenerate: usize,
    pub manifolds: usize,
    pub separatrices: usize,
    pub bad_points: usize,
    pub bad_quads: usize,
    pub subdivision_points: usize,
}

impl From<Summary> for SummaryDoc {
    fn from(s: Summary) -> Self {
        Self {
            quads: s.quads,
            degenerate: s.degenerate,
            manifolds: s.manifolds,
            separatrices: s.separatrices,
            bad_points: s.bad_points,
            bad_quads: s.bad_quads,
            subdivision_points: s.subdivision_points,
        }
    }
}

/// Output document of `cli run`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuadDoc {
    pub cells: Vec<usize>,
    pub points: Vec<f32>,
    pub summary: SummaryDoc,
}

impl QuadDoc {
    pub fn new(q: &Quadrangulation, summary: Summary) -> Self {
        Self {
            cells: q.cells().to_vec(),
            points: q.points().to_vec(),
            summary: summary.into(),
        }
    }
}
