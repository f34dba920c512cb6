//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::Point;
use crate::sim::{Arena, Triangle};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Map an arena point to normalized device coordinates
    pub fn from_arena(p: Point, arena: &Arena, color: [f32; 4]) -> Self {
        Self::new(
            (p.x / arena.half_width) as f32,
            (p.y / arena.half_height) as f32,
            color,
        )
    }
}

/// The triangle's three vertices (A, B, C) in normalized device coordinates
pub fn triangle_vertices(triangle: &Triangle, arena: &Arena) -> [Vertex; 3] {
    triangle
        .vertices()
        .map(|p| Vertex::from_arena(p, arena, colors::TRIANGLE))
}

/// Colors for scene elements
pub mod colors {
    pub const TRIANGLE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 0.0];
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn test_arena_corners_map_to_unit_square() {
        let arena = Arena::new(1280.0, 720.0);
        let v = Vertex::from_arena(DVec2::new(1280.0, -720.0), &arena, colors::TRIANGLE);
        assert_eq!(v.position, [1.0, -1.0]);
        let v = Vertex::from_arena(DVec2::new(640.0, 360.0), &arena, colors::TRIANGLE);
        assert_eq!(v.position, [0.5, 0.5]);
    }

    #[test]
    fn test_triangle_vertices_order() {
        let arena = Arena::new(100.0, 100.0);
        let tri = Triangle::equilateral(DVec2::ZERO, 100.0);
        let verts = triangle_vertices(&tri, &arena);
        assert_eq!(verts[0].position[0], -0.5);
        assert_eq!(verts[1].position[0], 0.5);
        assert_eq!(verts[2].position[0], 0.0);
        assert!(verts[2].position[1] > 0.0);
    }

    #[test]
    fn test_vertex_buffer_bytes() {
        let arena = Arena::default();
        let tri = Triangle::equilateral(DVec2::ZERO, 100.0);
        let verts = triangle_vertices(&tri, &arena);
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 3 * std::mem::size_of::<Vertex>());
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
    }
}
