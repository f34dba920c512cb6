//! Render hand-off
//!
//! Converts the simulated triangle into GPU-ready vertices in normalized
//! device coordinates. Drawing itself belongs to the host application.

pub mod vertex;

pub use vertex::{Vertex, triangle_vertices};
