//! Distance helpers over separatrix samples.

use nalgebra::Vector3;

/// Euclidean distance between two samples.
#[inline]
pub fn distance(a: &Vector3<f32>, b: &Vector3<f32>) -> f32 {
    (a - b).norm()
}

/// Cumulative arclength from `points[0]` to every sample (first entry is 0).
pub fn cumulative_arclength(points: &[Vector3<f32>]) -> Vec<f32> {
    let mut acc = Vec::with_capacity(points.len());
    let mut total = 0.0f32;
    for (n, p) in points.iter().enumerate() {
        if n > 0 {
            total += distance(p, &points[n - 1]);
        }
        acc.push(total);
    }
    acc
}

/// Index of the sample closest (in arclength) to half the total length.
/// Ties go to the first sample; `None` for an empty polyline.
pub fn arclength_middle(points: &[Vector3<f32>]) -> Option<usize> {
    let acc = cumulative_arclength(points);
    let half = *acc.last()? / 2.0;
    let mut best = 0;
    let mut best_gap = f32::INFINITY;
    for (n, d) in acc.iter().enumerate() {
        let gap = (d - half).abs();
        if gap < best_gap {
            best = n;
            best_gap = gap;
        }
    }
    Some(best)
}
