//! Simulation state
//!
//! Everything the frame loop mutates lives in one value owned by the driver.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::triangle::Triangle;
use crate::Velocity;
use crate::settings::Settings;

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Seed the initial velocity was drawn from
    pub seed: u64,
    /// The bouncing body
    pub triangle: Triangle,
    /// Linear velocity (units/s), flipped per axis on wall hits
    pub velocity: Velocity,
    /// Angular velocity (rad/s), flipped on every wall hit
    pub angular_vel: f64,
    /// Side length at startup; resize limits are relative to this
    pub initial_side: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl SimState {
    /// Create a new state with a triangle at the arena center.
    ///
    /// Each velocity component is `base_speed × U[1, 2)`, drawn from a PCG
    /// stream seeded with `seed`.
    pub fn new(seed: u64, settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let velocity = DVec2::new(
            settings.base_speed * rng.random_range(1.0..2.0),
            settings.base_speed * rng.random_range(1.0..2.0),
        );

        Self {
            seed,
            triangle: Triangle::equilateral(DVec2::ZERO, settings.initial_side),
            velocity,
            angular_vel: settings.initial_spin,
            initial_side: settings.initial_side,
            time_ticks: 0,
        }
    }
}
