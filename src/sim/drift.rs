//! Drift compensation for incrementally rotated points
//!
//! Thousands of small trigonometric rotations slowly change a vertex's
//! distance from the pivot. After each rotation the vertex is pulled back
//! onto its pre-rotation radius once the error leaves the tolerance band.

use crate::Point;
use crate::consts::{DRIFT_TOLERANCE_HIGH, DRIFT_TOLERANCE_LOW};

/// Restore `vertex`'s squared distance to `reference` to `baseline_dist_sq`.
///
/// No-op while the ratio of current to baseline squared distance stays in
/// `[DRIFT_TOLERANCE_LOW, DRIFT_TOLERANCE_HIGH]`. Outside the band the offset
/// from `reference` is divided by the square root of that ratio.
///
/// Returns `true` if the vertex was corrected.
pub fn compensate(vertex: &mut Point, reference: Point, baseline_dist_sq: f64) -> bool {
    // Vertex on top of its reference: nothing to scale back
    if baseline_dist_sq <= 0.0 {
        return false;
    }

    let ratio = vertex.distance_squared(reference) / baseline_dist_sq;
    if ratio <= 0.0 || (DRIFT_TOLERANCE_LOW..=DRIFT_TOLERANCE_HIGH).contains(&ratio) {
        return false;
    }

    let scale = ratio.sqrt();
    *vertex = reference + (*vertex - reference) / scale;
    true
}
