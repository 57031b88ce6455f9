//! Retro Roids entry point
//!
//! Headless native driver: runs the fixed-timestep simulation with a
//! scripted pilot and records each frame's draw commands. Useful for
//! smoke-testing the loop end to end; a graphical host would swap the
//! [`CommandList`] for a real surface and feed `Controls` from key events.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use retro_roids::render::{CommandList, render};
use retro_roids::sim::{Control, Controls, GameState, step};
use retro_roids::Config;

fn main() -> ExitCode {
    env_logger::init();

    let cfg = Config::default();
    if let Err(err) = cfg.validate() {
        log::error!("invalid configuration: {err}");
        return ExitCode::FAILURE;
    }

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    log::info!("Retro Roids starting with seed {seed}");

    let mut state = GameState::new(seed, &cfg);
    let mut controls = Controls::default();
    let mut surface = CommandList::new();

    // Scripted pilot: spin up, thrust in bursts, fire every half second.
    let total_ticks = (cfg.fps * 30.0) as u64;
    let fire_period = (cfg.fps / 2.0) as u64;

    for tick in 0..total_ticks {
        controls.set(Control::Thrust, (tick / 15) % 4 == 0);
        controls.set(Control::TurnLeft, (tick / 45) % 3 == 1);
        controls.set(Control::TurnRight, (tick / 45) % 3 == 2);
        controls.set(Control::Fire, tick % fire_period == 0);

        step(&mut state, &controls, &cfg);

        surface.clear_commands();
        render(&state, &cfg, &mut surface);

        if tick % (cfg.fps as u64 * 5) == 0 {
            log::info!(
                "tick {tick}: {} asteroids, {} lasers, ship at ({:.0}, {:.0}), {} draw commands",
                state.asteroids.len(),
                state.ship.lasers.len(),
                state.ship.pos.x,
                state.ship.pos.y,
                surface.commands.len(),
            );
        }
    }

    log::info!(
        "done after {} ticks: {} asteroids remain",
        state.time_ticks,
        state.asteroids.len()
    );
    ExitCode::SUCCESS
}
