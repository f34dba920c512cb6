//! Deterministic simulation module
//!
//! All kinematics live here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only
//! - Fixed vertex/axis check order
//! - No rendering or platform dependencies

pub mod collision;
pub mod drift;
pub mod rotate;
pub mod state;
pub mod tick;
pub mod transform;
pub mod triangle;

pub use collision::{Arena, Axis, CollisionResult, resolve_wall_collision};
pub use drift::compensate;
pub use rotate::{RotationMode, rotate_point};
pub use state::SimState;
pub use tick::{TickInput, tick};
pub use triangle::{Triangle, VertexId};
