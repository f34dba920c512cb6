//! Wall collision detection and rescue
//!
//! The arena is an axis-aligned rectangle centered on the origin. Each call
//! checks vertices against the walls in a fixed priority order, handles the
//! first violation only, and rescues the body by repeatedly pulling it toward
//! the origin along the violated axis.

use serde::{Deserialize, Serialize};

use super::triangle::{Triangle, VertexId};
use crate::consts::{ARENA_HALF_HEIGHT, ARENA_HALF_WIDTH, RESCUE_FACTOR};
use crate::{Point, Velocity};

/// A coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Wall-check priority: top/bottom walls before left/right walls
    pub const CHECK_ORDER: [Axis; 2] = [Axis::Y, Axis::X];

    #[inline]
    pub fn component(self, p: Point) -> f64 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }

    #[inline]
    pub fn component_mut(self, p: &mut Point) -> &mut f64 {
        match self {
            Axis::X => &mut p.x,
            Axis::Y => &mut p.y,
        }
    }
}

/// Origin-centered rectangular arena
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    /// Walls at x = ±half_width
    pub half_width: f64,
    /// Walls at y = ±half_height
    pub half_height: f64,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(ARENA_HALF_WIDTH, ARENA_HALF_HEIGHT)
    }
}

impl Arena {
    /// # Panics
    /// If either half extent is not a finite positive number.
    pub fn new(half_width: f64, half_height: f64) -> Self {
        assert!(
            half_width.is_finite()
                && half_width > 0.0
                && half_height.is_finite()
                && half_height > 0.0,
            "arena half extents must be finite and positive, got {half_width} x {half_height}"
        );
        Self {
            half_width,
            half_height,
        }
    }

    #[inline]
    pub fn limit(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.half_width,
            Axis::Y => self.half_height,
        }
    }

    /// True if `p` touches or crosses a wall perpendicular to `axis`
    #[inline]
    pub fn violates(&self, axis: Axis, p: Point) -> bool {
        let v = axis.component(p);
        let limit = self.limit(axis);
        v <= -limit || v >= limit
    }

    /// True if `p` is strictly inside on both axes
    pub fn contains(&self, p: Point) -> bool {
        Axis::CHECK_ORDER.iter().all(|&axis| !self.violates(axis, p))
    }
}

/// Result of a wall collision check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether a collision was found and resolved
    pub hit: bool,
    /// The vertex that triggered the response (if hit)
    pub vertex: Option<VertexId>,
    /// The violated axis (if hit)
    pub axis: Option<Axis>,
    /// Number of rescue rescales applied
    pub rescue_steps: u32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            vertex: None,
            axis: None,
            rescue_steps: 0,
        }
    }
}

/// Check the triangle against the arena walls and resolve the first violation.
///
/// Order: A, B, C against the y walls, then A, B, C against the x walls. On a
/// hit the matching velocity component and the angular velocity are negated,
/// then the whole triangle is rescaled toward the origin along that axis by
/// `RESCUE_FACTOR` until the violating vertex is strictly inside. Other
/// vertices that are also out of bounds are left for later calls.
///
/// The caller should skip this frame's translation when `hit` is true; the
/// rescue has already moved the body.
///
/// # Panics
/// If the violating coordinate is infinite.
pub fn resolve_wall_collision(
    triangle: &mut Triangle,
    velocity: &mut Velocity,
    arena: &Arena,
    angular_vel: &mut f64,
) -> CollisionResult {
    let Some((axis, vertex)) = first_violation(triangle, arena) else {
        return CollisionResult::miss();
    };

    // Rescaling an infinite coordinate never brings it inside
    assert!(
        axis.component(triangle.vertex(vertex)).is_finite(),
        "non-finite vertex {vertex:?} can never be rescued"
    );

    let bounced = -axis.component(*velocity);
    *axis.component_mut(velocity) = bounced;

    let mut rescue_steps = 0;
    while arena.violates(axis, triangle.vertex(vertex)) {
        triangle.reflect(axis, RESCUE_FACTOR);
        rescue_steps += 1;
    }

    *angular_vel = -*angular_vel;

    CollisionResult {
        hit: true,
        vertex: Some(vertex),
        axis: Some(axis),
        rescue_steps,
    }
}

/// First (axis, vertex) pair out of bounds, in priority order
fn first_violation(triangle: &Triangle, arena: &Arena) -> Option<(Axis, VertexId)> {
    Axis::CHECK_ORDER.into_iter().find_map(|axis| {
        VertexId::ALL
            .into_iter()
            .find(|&id| arena.violates(axis, triangle.vertex(id)))
            .map(|id| (axis, id))
    })
}
