//! Triangle geometry
//!
//! A triangle is three vertices plus a pivot. The pivot is the centroid at
//! construction time and is the fixed reference for rotation and resizing.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::Point;

/// Identifies one of the three non-pivot vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VertexId {
    A,
    B,
    C,
}

impl VertexId {
    /// All vertices in wall-check priority order
    pub const ALL: [VertexId; 3] = [VertexId::A, VertexId::B, VertexId::C];
}

/// A triangle with a designated pivot point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
    /// Rotation and scale reference (the centroid for an equilateral triangle)
    pub pivot: Point,
}

impl Triangle {
    /// Build an equilateral triangle around `center` with the given side length.
    ///
    /// A and B form the lower edge, C is the apex above the center.
    ///
    /// # Panics
    /// If `side` is not a finite positive number. A degenerate triangle would
    /// make the drift compensator divide by zero later on.
    pub fn equilateral(center: Point, side: f64) -> Self {
        assert!(
            side.is_finite() && side > 0.0,
            "triangle side length must be finite and positive, got {side}"
        );
        let sqrt3 = 3.0_f64.sqrt();
        Self {
            a: DVec2::new(center.x - side / 2.0, center.y - side * sqrt3 / 6.0),
            b: DVec2::new(center.x + side / 2.0, center.y - side * sqrt3 / 6.0),
            c: DVec2::new(center.x, center.y + side * sqrt3 / 3.0),
            pivot: center,
        }
    }

    #[inline]
    pub fn vertex(&self, id: VertexId) -> Point {
        match id {
            VertexId::A => self.a,
            VertexId::B => self.b,
            VertexId::C => self.c,
        }
    }

    #[inline]
    pub fn vertex_mut(&mut self, id: VertexId) -> &mut Point {
        match id {
            VertexId::A => &mut self.a,
            VertexId::B => &mut self.b,
            VertexId::C => &mut self.c,
        }
    }

    /// The three vertices in A, B, C order
    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// Length of edge AB, used as the size measure for resize limits
    pub fn side_length(&self) -> f64 {
        self.a.distance(self.b)
    }

    /// Distances from each vertex to the pivot, in A, B, C order
    pub fn circumradii(&self) -> [f64; 3] {
        self.vertices().map(|v| v.distance(self.pivot))
    }
}
