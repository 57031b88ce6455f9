//! Collision resolution
//!
//! Runs once per tick after integration. Everything is circle-vs-circle or
//! point-vs-circle on the entities' bounding radii; reverse index scans keep
//! removal during iteration safe.

use crate::config::Config;
use crate::distance;
use crate::sim::belt::destroy_asteroid;
use crate::sim::state::GameState;

/// Detect and resolve all collisions for this tick
pub fn resolve_collisions(state: &mut GameState, cfg: &Config) {
    // Lasers vs asteroids. Scanning asteroids in reverse means fragments
    // pushed at the end of the list are never tested this tick, and a
    // destroyed asteroid is never revisited. At most one laser consumes a
    // given asteroid per tick.
    let mut i = state.asteroids.len();
    while i > 0 {
        i -= 1;
        let roid_pos = state.asteroids[i].pos;
        let roid_radius = state.asteroids[i].radius;

        let hit = state
            .ship
            .lasers
            .iter()
            .rposition(|laser| distance(roid_pos, laser.pos) < roid_radius);

        if let Some(j) = hit {
            state.ship.lasers.remove(j);
            destroy_asteroid(state, i, cfg);
        }
    }

    // Ship vs asteroids: skipped entirely while exploding or inside the
    // post-respawn grace period. One explosion trigger per tick is enough;
    // the asteroid survives the crash.
    if !state.ship.exploding() && !state.ship.invulnerable() {
        for roid in &state.asteroids {
            if distance(state.ship.pos, roid.pos) < state.ship.radius + roid.radius {
                state.ship.explode_ticks = cfg.explode_ticks();
                log::debug!("ship hit asteroid at tick {}", state.time_ticks);
                break;
            }
        }
    }
}
