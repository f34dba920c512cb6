//! Tribounce - a spinning triangle bouncing around a rectangular arena
//!
//! Core modules:
//! - `sim`: Deterministic kinematics (rotation, drift correction, walls)
//! - `settings`: Tunable constants loaded from JSON
//! - `renderer`: Hand-off of the triangle to a GPU vertex buffer

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::DVec2;

/// A position in arena units (origin at the arena center)
pub type Point = DVec2;

/// Signed linear speed in arena units per second
pub type Velocity = DVec2;

/// Simulation configuration constants
pub mod consts {
    use std::f64::consts::PI;

    /// Fixed timestep used by the headless driver (120 Hz)
    pub const SIM_DT: f64 = 1.0 / 120.0;

    /// Arena half extents (the arena spans ±width by ±height)
    pub const ARENA_HALF_WIDTH: f64 = 1280.0;
    pub const ARENA_HALF_HEIGHT: f64 = 720.0;

    /// Triangle side length at startup
    pub const INITIAL_SIDE: f64 = 100.0;
    /// Side length may only change while inside [MIN, MAX] × initial
    pub const MIN_SIDE_FACTOR: f64 = 0.5;
    pub const MAX_SIDE_FACTOR: f64 = 5.0;
    /// Resize coefficients for one grow/shrink action
    pub const GROW_FACTOR: f64 = 1.1;
    pub const SHRINK_FACTOR: f64 = 0.9;

    /// Angular velocity at startup (rad/s)
    pub const INITIAL_SPIN: f64 = PI;
    /// Angular velocity change per spin-up/spin-down action
    pub const SPIN_STEP: f64 = PI / 3.0;
    /// |ω| bounds checked before a spin action
    pub const MIN_SPIN: f64 = 0.2 * PI;
    pub const MAX_SPIN: f64 = 4.0 * PI;

    /// One size/spin action per this many ticks while a key is held
    pub const ACTION_CADENCE: u64 = 100;

    /// Each velocity component starts at BASE_SPEED × U[1, 2)
    pub const BASE_SPEED: f64 = 150.0;

    /// Per-step rescale toward the origin after a wall hit
    pub const RESCUE_FACTOR: f64 = 0.99;

    /// Squared-distance ratio band the drift compensator tolerates
    pub const DRIFT_TOLERANCE_LOW: f64 = 0.99999;
    pub const DRIFT_TOLERANCE_HIGH: f64 = 1.00001;
}
