//! Shape-preserving transforms: resize about the pivot and translation
//!
//! Also hosts the single-axis rescale used by the wall rescue, which is the
//! one transform here that does not preserve shape.

use super::collision::Axis;
use super::triangle::{Triangle, VertexId};
use crate::Point;

impl Triangle {
    /// Scale every vertex toward (or away from) the pivot by `coeff`.
    /// The pivot does not move, so position and orientation are unchanged.
    pub fn resize(&mut self, coeff: f64) {
        debug_assert!(coeff.is_finite() && coeff > 0.0, "bad resize coefficient {coeff}");
        let pivot = self.pivot;
        for id in VertexId::ALL {
            let v = self.vertex_mut(id);
            *v = pivot + (*v - pivot) * coeff;
        }
    }

    /// Shift all four points (vertices and pivot) by `displacement`.
    pub fn translate(&mut self, displacement: Point) {
        self.a += displacement;
        self.b += displacement;
        self.c += displacement;
        self.pivot += displacement;
    }

    /// Multiply one coordinate of all four points by `factor`.
    ///
    /// This pulls the whole body toward the origin along `axis` when
    /// `factor < 1`; the wall rescue relies on the arena being centered there.
    pub fn reflect(&mut self, axis: Axis, factor: f64) {
        for p in [&mut self.a, &mut self.b, &mut self.c, &mut self.pivot] {
            *axis.component_mut(p) *= factor;
        }
    }
}
