//! Per-frame simulation step
//!
//! Frame order: measure size, spin, resolve walls (or translate), then apply
//! held controls at the action cadence.

use super::collision::{CollisionResult, resolve_wall_collision};
use super::state::SimState;
use crate::settings::Settings;

/// Held-key state for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Grow the triangle
    pub grow: bool,
    /// Shrink the triangle
    pub shrink: bool,
    /// Spin faster
    pub spin_up: bool,
    /// Spin slower
    pub spin_down: bool,
}

/// Advance the simulation by `dt` seconds.
///
/// Returns the wall collision outcome for this frame. When it hit, the
/// frame's translation was skipped.
pub fn tick(
    state: &mut SimState,
    input: &TickInput,
    dt: f64,
    settings: &Settings,
) -> CollisionResult {
    assert!(dt.is_finite() && dt >= 0.0, "bad timestep {dt}");

    // Size limits use the pre-frame side length
    let side = state.triangle.side_length();

    state
        .triangle
        .rotate(state.angular_vel * dt, settings.rotation_mode);

    let arena = settings.arena();
    let collision = resolve_wall_collision(
        &mut state.triangle,
        &mut state.velocity,
        &arena,
        &mut state.angular_vel,
    );

    if collision.hit {
        log::debug!(
            "tick {}: vertex {:?} hit {:?} wall, {} rescue steps",
            state.time_ticks,
            collision.vertex,
            collision.axis,
            collision.rescue_steps
        );
    } else {
        state.triangle.translate(state.velocity * dt);
    }

    if state.time_ticks % settings.action_cadence == 0 {
        apply_controls(state, input, side, settings);
    }

    state.time_ticks += 1;
    collision
}

/// Apply one discrete resize/spin action per held key
fn apply_controls(state: &mut SimState, input: &TickInput, side: f64, settings: &Settings) {
    if input.grow && side < settings.max_side_factor * state.initial_side {
        state.triangle.resize(settings.grow_factor);
        log::debug!("grow: side {:.2} -> {:.2}", side, state.triangle.side_length());
    }
    if input.shrink && side > settings.min_side_factor * state.initial_side {
        state.triangle.resize(settings.shrink_factor);
        log::debug!("shrink: side {:.2} -> {:.2}", side, state.triangle.side_length());
    }

    // Zero counts as positive spin
    let omega = &mut state.angular_vel;
    if input.spin_up && omega.abs() < settings.max_spin {
        *omega = if *omega >= 0.0 {
            *omega + settings.spin_step
        } else {
            *omega - settings.spin_step
        };
        log::debug!("spin up: omega {:.3}", *omega);
    }
    if input.spin_down && omega.abs() > settings.min_spin {
        *omega = if *omega >= 0.0 {
            *omega - settings.spin_step
        } else {
            *omega + settings.spin_step
        };
        log::debug!("spin down: omega {:.3}", *omega);
    }
}
