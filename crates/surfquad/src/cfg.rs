//! Fixed constants (internal).
//!
//! Policy
//! - The neighborhood cap is part of the algorithm's observable behavior, so it
//!   stays a constant rather than a knob on `QuadCfg`.

/// Maximum number of triangulation vertices visited per common-manifold probe.
pub(crate) const NEIGHBORHOOD_CAP: usize = 20;
/// Length of one flat quadrangle record `[4, i, j, k, l]`.
pub(crate) const QUAD_RECORD_LEN: usize = 5;
/// Leading vertex count of every record (mesh cell-array convention).
pub(crate) const QUAD_VERTEX_COUNT: usize = 4;
/// Mask value marking a separatrix sample as interior (not an endpoint).
pub(crate) const MASK_DISCARD: u8 = 1;
