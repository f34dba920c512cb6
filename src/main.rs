//! Tribounce entry point
//!
//! Headless native driver: runs a scripted session at a fixed timestep and
//! prints the final state. Window, input and drawing are left to a host.
//!
//! Usage: `tribounce [settings.json] [seed]`

use std::time::{SystemTime, UNIX_EPOCH};

use tribounce::Settings;
use tribounce::consts::SIM_DT;
use tribounce::renderer::triangle_vertices;
use tribounce::sim::{SimState, TickInput, tick};

/// Length of each scripted phase in seconds
const PHASE_SECS: f64 = 5.0;

/// Held keys for each scripted phase
fn scripted_input(elapsed: f64) -> TickInput {
    match (elapsed / PHASE_SECS) as u32 {
        0 => TickInput {
            grow: true,
            ..Default::default()
        },
        1 => TickInput {
            spin_up: true,
            ..Default::default()
        },
        2 => TickInput {
            shrink: true,
            ..Default::default()
        },
        3 => TickInput {
            spin_down: true,
            ..Default::default()
        },
        _ => TickInput::default(),
    }
}

fn main() {
    env_logger::init();
    log::info!("Tribounce (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });

    let mut state = SimState::new(seed, &settings);
    log::info!(
        "seed {seed}: velocity ({:.1}, {:.1}), spin {:.3} rad/s, {:?} rotation",
        state.velocity.x,
        state.velocity.y,
        state.angular_vel,
        settings.rotation_mode
    );

    let total_ticks = (PHASE_SECS * 5.0 / SIM_DT) as u64;
    let mut hits = 0u32;
    for i in 0..total_ticks {
        let input = scripted_input(i as f64 * SIM_DT);
        let collision = tick(&mut state, &input, SIM_DT, &settings);
        if collision.hit {
            hits += 1;
            log::debug!(
                "t={:.2}s bounce off {:?} wall (vertex {:?})",
                i as f64 * SIM_DT,
                collision.axis,
                collision.vertex
            );
        }
    }

    let radii = state.triangle.circumradii();
    log::info!(
        "{} ticks, {} bounces, side {:.2}, radii [{:.3}, {:.3}, {:.3}]",
        total_ticks,
        hits,
        state.triangle.side_length(),
        radii[0],
        radii[1],
        radii[2]
    );
    log::debug!("vertices (NDC): {:?}", triangle_vertices(&state.triangle, &settings.arena()));

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize state: {e}"),
    }
}
