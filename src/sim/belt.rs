//! Asteroid lifecycle: belt spawning, splitting, repopulation

use glam::Vec2;
use rand::Rng;

use crate::config::Config;
use crate::distance;
use crate::sim::state::{Asteroid, GameState, SizeTier};

/// Spawn a full belt of largest-tier asteroids.
///
/// Positions are rejection-sampled so nothing lands inside the ship's
/// exclusion radius (two largest radii plus the ship radius).
pub fn spawn_belt(state: &mut GameState, cfg: &Config) {
    state.asteroids.clear();
    let exclusion = cfg.largest_asteroid_radius() * 2.0 + state.ship.radius;

    for _ in 0..cfg.asteroid_num {
        let pos = loop {
            let candidate = Vec2::new(
                (state.rng.random::<f32>() * cfg.width).floor(),
                (state.rng.random::<f32>() * cfg.height).floor(),
            );
            if distance(state.ship.pos, candidate) >= exclusion {
                break candidate;
            }
        };
        state
            .asteroids
            .push(Asteroid::random(pos, SizeTier::Large, cfg, &mut state.rng));
    }
    log::debug!("belt spawned: {} asteroids", state.asteroids.len());
}

/// Remove the asteroid at `idx`, splitting it into two fragments one tier
/// smaller (none if already smallest). Repopulates the belt when the last
/// asteroid is gone.
pub fn destroy_asteroid(state: &mut GameState, idx: usize, cfg: &Config) {
    let roid = state.asteroids.remove(idx);

    if let Some(tier) = roid.tier.smaller() {
        for _ in 0..2 {
            let fragment = Asteroid::random(roid.pos, tier, cfg, &mut state.rng);
            state.asteroids.push(fragment);
        }
    }

    if state.asteroids.is_empty() {
        log::info!("belt cleared, respawning");
        spawn_belt(state, cfg);
    }
}
