//! Rotation of triangle vertices about the pivot
//!
//! Every rotation is followed by drift compensation against the vertex's
//! pre-rotation distance from the pivot.

use serde::{Deserialize, Serialize};

use super::drift::compensate;
use super::triangle::{Triangle, VertexId};
use crate::Point;

/// How the rotated y coordinate is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RotationMode {
    /// New y is computed from the already-updated x offset.
    ///
    /// This reproduces the established trajectories exactly. It is not a pure
    /// rotation (the step also shears slightly), so it leans on the drift
    /// compensator every frame and small radius errors can still accumulate
    /// below the tolerance band.
    #[default]
    Coupled,
    /// Textbook rotation: both outputs use the original offsets.
    Simultaneous,
}

/// Rotate `point` about `pivot` by `phi` radians, then compensate drift.
pub fn rotate_point(point: &mut Point, pivot: Point, phi: f64, mode: RotationMode) {
    let baseline = point.distance_squared(pivot);
    let (sin, cos) = phi.sin_cos();

    let dx = point.x - pivot.x;
    let dy = point.y - pivot.y;

    point.x = pivot.x + dx * cos - dy * sin;
    let x_offset = match mode {
        RotationMode::Coupled => point.x - pivot.x,
        RotationMode::Simultaneous => dx,
    };
    point.y = pivot.y + x_offset * sin + dy * cos;

    compensate(point, pivot, baseline);
}

impl Triangle {
    /// Rotate all three vertices about the pivot. The pivot itself is fixed.
    pub fn rotate(&mut self, phi: f64, mode: RotationMode) {
        let pivot = self.pivot;
        for id in VertexId::ALL {
            rotate_point(self.vertex_mut(id), pivot, phi, mode);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_simultaneous_quarter_turn() {
        let mut p = DVec2::new(11.0, 2.0);
        rotate_point(&mut p, DVec2::new(1.0, 2.0), FRAC_PI_2, RotationMode::Simultaneous);
        assert!(p.abs_diff_eq(DVec2::new(1.0, 12.0), 1e-9));
    }

    #[test]
    fn test_coupled_uses_updated_x() {
        let phi = 0.1_f64;
        let mut p = DVec2::new(10.0, 0.0);
        rotate_point(&mut p, DVec2::ZERO, phi, RotationMode::Coupled);

        // Raw step gives (10cos, 10cos*sin); the compensator then restores radius 10
        let s = phi.sin();
        let expected = DVec2::new(1.0, s) * 10.0 / (1.0 + s * s).sqrt();
        assert!(p.abs_diff_eq(expected, 1e-9));
        assert!((p.length() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_modes_disagree() {
        let pivot = DVec2::new(3.0, -4.0);
        let mut coupled = DVec2::new(20.0, 7.0);
        let mut simultaneous = coupled;
        rotate_point(&mut coupled, pivot, 0.3, RotationMode::Coupled);
        rotate_point(&mut simultaneous, pivot, 0.3, RotationMode::Simultaneous);
        assert!(coupled.distance(simultaneous) > 1e-3);
    }

    #[test]
    fn test_rotate_keeps_pivot() {
        let mut tri = Triangle::equilateral(DVec2::new(100.0, 50.0), 100.0);
        tri.rotate(0.7, RotationMode::Coupled);
        assert_eq!(tri.pivot, DVec2::new(100.0, 50.0));
    }

    #[test]
    fn test_half_turn_flips_triangle() {
        let mut tri = Triangle::equilateral(DVec2::ZERO, 100.0);
        let before = tri;
        tri.rotate(PI, RotationMode::Simultaneous);
        assert!(tri.a.abs_diff_eq(-before.a, 1e-9));
        assert!(tri.b.abs_diff_eq(-before.b, 1e-9));
        assert!(tri.c.abs_diff_eq(-before.c, 1e-9));
    }

    #[test]
    fn test_coupled_frames_stay_close_to_radius() {
        let mut tri = Triangle::equilateral(DVec2::ZERO, 100.0);
        let radius = 100.0 / 3.0_f64.sqrt();
        // One second at 120 Hz, half a turn per second
        for _ in 0..120 {
            tri.rotate(PI / 120.0, RotationMode::Coupled);
        }
        for r in tri.circumradii() {
            assert!((r / radius - 1.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let mut tri = Triangle::equilateral(DVec2::new(-7.0, 3.0), 42.0);
        let before = tri;
        tri.rotate(0.0, RotationMode::Coupled);
        tri.rotate(0.0, RotationMode::Simultaneous);
        for (after, before) in tri.vertices().iter().zip(before.vertices()) {
            assert!(after.abs_diff_eq(before, 1e-12));
        }
    }
}
