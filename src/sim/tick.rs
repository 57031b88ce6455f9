//! Fixed timestep simulation tick
//!
//! One call to [`step`] advances the whole world by one tick: ship control
//! and integration, timers, asteroid and projectile motion, fire gating,
//! then collision resolution. The host drives it at the configured rate.

use crate::config::Config;
use crate::sim::collision::resolve_collisions;
use crate::sim::input::Controls;
use crate::sim::state::{GameState, Projectile, Ship};
use crate::wrap_position;

/// Advance the game state by one fixed tick
pub fn step(state: &mut GameState, controls: &Controls, cfg: &Config) {
    state.time_ticks += 1;

    // Ship control: turn flags map to angular velocity, thrust flag to
    // acceleration along the heading, otherwise exponential friction decay.
    let turn = cfg.turn_rate();
    state.ship.rot = if controls.turn_left {
        turn
    } else if controls.turn_right {
        -turn
    } else {
        0.0
    };
    state.ship.thrusting = controls.thrust;

    if controls.thrust {
        let accel = state.ship.forward() * (cfg.ship_thrust / cfg.fps);
        state.ship.thrust += accel;
    } else {
        let decay = state.ship.thrust * (cfg.friction / cfg.fps);
        state.ship.thrust -= decay;
    }

    if !state.ship.exploding() {
        state.ship.heading += state.ship.rot;
        state.ship.pos += state.ship.thrust;

        // Invulnerability flicker: count down the phase, then spend one
        // unit of the blink budget.
        if state.ship.blink_budget > 0 {
            state.ship.blink_ticks -= 1;
            if state.ship.blink_ticks == 0 {
                state.ship.blink_ticks = cfg.blink_ticks();
                state.ship.blink_budget -= 1;
            }
        }
    } else {
        state.ship.explode_ticks -= 1;
        // Respawn replaces the ship wholesale; nothing of the old ship
        // (lasers included) survives the explosion.
        if state.ship.explode_ticks == 0 {
            state.ship = Ship::spawn(cfg);
            log::debug!("ship respawned at tick {}", state.time_ticks);
        }
    }
    state.ship.pos = wrap_position(state.ship.pos, cfg.width, cfg.height, state.ship.radius);

    // Asteroids drift and wrap at radius-inclusive bounds
    for roid in &mut state.asteroids {
        roid.pos += roid.vel;
        roid.pos = wrap_position(roid.pos, cfg.width, cfg.height, roid.radius);
    }

    // Projectiles: reverse scan so removal never skips an element. A laser
    // is dropped on the tick its accumulated distance crosses the range.
    let max_range = cfg.laser_range();
    for i in (0..state.ship.lasers.len()).rev() {
        let vel = state.ship.lasers[i].vel;
        let laser = &mut state.ship.lasers[i];
        laser.pos += vel;
        laser.traveled += vel.length();
        if laser.traveled > max_range {
            state.ship.lasers.remove(i);
        } else {
            laser.pos = wrap_position(laser.pos, cfg.width, cfg.height, 0.0);
        }
    }

    // Fire gating: one shot per press. The press consumes the latch whether
    // or not a laser spawned; releasing the control re-arms it.
    if controls.fire {
        if state.ship.can_fire
            && !state.ship.exploding()
            && state.ship.lasers.len() < cfg.laser_max
        {
            let vel = state.ship.forward() * (cfg.laser_speed / cfg.fps);
            state.ship.lasers.push(Projectile {
                pos: state.ship.nose(),
                vel,
                traveled: 0.0,
            });
        }
        state.ship.can_fire = false;
    } else {
        state.ship.can_fire = true;
    }

    resolve_collisions(state, cfg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance;
    use crate::sim::state::{Asteroid, SizeTier};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// A state with no asteroids, so ship behavior can be tested in isolation
    fn quiet_state(seed: u64, cfg: &Config) -> GameState {
        let mut state = GameState::new(seed, cfg);
        state.asteroids.clear();
        state
    }

    fn fixed_asteroid(pos: Vec2, tier: SizeTier, cfg: &Config) -> Asteroid {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut roid = Asteroid::random(pos, tier, cfg, &mut rng);
        roid.vel = Vec2::ZERO;
        roid
    }

    #[test]
    fn test_fire_spawns_one_laser_at_nose() {
        let cfg = Config::default();
        let mut state = quiet_state(1, &cfg);
        let nose = state.ship.nose();

        let controls = Controls {
            fire: true,
            ..Controls::default()
        };
        step(&mut state, &controls, &cfg);

        assert_eq!(state.ship.lasers.len(), 1);
        let laser = &state.ship.lasers[0];
        // Integration runs before fire gating, so the laser sits at the
        // nose on its spawn tick
        let expected_vel = state.ship.forward() * (cfg.laser_speed / cfg.fps);
        assert!((laser.pos - nose).length() < 1e-4);
        assert!((laser.vel - expected_vel).length() < 1e-4);
        assert!((laser.vel.length() - cfg.laser_speed / cfg.fps).abs() < 1e-3);
    }

    #[test]
    fn test_held_fire_is_not_auto_repeat() {
        let cfg = Config::default();
        let mut state = quiet_state(2, &cfg);
        let controls = Controls {
            fire: true,
            ..Controls::default()
        };
        for _ in 0..10 {
            step(&mut state, &controls, &cfg);
        }
        assert_eq!(state.ship.lasers.len(), 1);

        // Release, press again: exactly one more
        let released = Controls::default();
        step(&mut state, &released, &cfg);
        step(&mut state, &controls, &cfg);
        assert_eq!(state.ship.lasers.len(), 2);
    }

    #[test]
    fn test_fire_gated_at_max_lasers() {
        let cfg = Config::default();
        let mut state = quiet_state(3, &cfg);
        let pressed = Controls {
            fire: true,
            ..Controls::default()
        };
        let released = Controls::default();

        for _ in 0..cfg.laser_max {
            step(&mut state, &pressed, &cfg);
            step(&mut state, &released, &cfg);
        }
        assert_eq!(state.ship.lasers.len(), cfg.laser_max);

        step(&mut state, &pressed, &cfg);
        assert_eq!(state.ship.lasers.len(), cfg.laser_max);
    }

    #[test]
    fn test_laser_expires_on_crossing_tick() {
        let cfg = Config::default();
        let mut state = quiet_state(4, &cfg);
        let per_tick = cfg.laser_speed / cfg.fps;
        state.ship.lasers.push(Projectile {
            pos: state.ship.pos,
            vel: Vec2::new(per_tick, 0.0),
            traveled: cfg.laser_range() - per_tick / 2.0,
        });

        step(&mut state, &Controls::default(), &cfg);
        assert!(state.ship.lasers.is_empty());
    }

    #[test]
    fn test_thrust_accelerates_along_heading() {
        let cfg = Config::default();
        let mut state = quiet_state(5, &cfg);
        let controls = Controls {
            thrust: true,
            ..Controls::default()
        };
        step(&mut state, &controls, &cfg);

        let expected = state.ship.forward() * (cfg.ship_thrust / cfg.fps);
        assert!((state.ship.thrust - expected).length() < 1e-4);
        assert!(state.ship.thrusting);
    }

    #[test]
    fn test_friction_decays_thrust_toward_zero() {
        let cfg = Config::default();
        let mut state = quiet_state(6, &cfg);
        state.ship.thrust = Vec2::new(10.0, -4.0);
        let start = state.ship.thrust.length();

        let idle = Controls::default();
        let mut prev = start;
        for _ in 0..60 {
            step(&mut state, &idle, &cfg);
            let now = state.ship.thrust.length();
            assert!(now < prev);
            prev = now;
        }
        assert!(prev < start * 0.3);
    }

    #[test]
    fn test_turn_flags_rotate_heading() {
        let cfg = Config::default();
        let mut state = quiet_state(7, &cfg);
        let start = state.ship.heading;

        let left = Controls {
            turn_left: true,
            ..Controls::default()
        };
        step(&mut state, &left, &cfg);
        assert!((state.ship.heading - (start + cfg.turn_rate())).abs() < 1e-5);

        let right = Controls {
            turn_right: true,
            ..Controls::default()
        };
        step(&mut state, &right, &cfg);
        step(&mut state, &right, &cfg);
        assert!((state.ship.heading - (start - cfg.turn_rate())).abs() < 1e-5);
    }

    #[test]
    fn test_zero_input_keeps_everything_in_bounds() {
        let cfg = Config::default();
        let mut state = GameState::new(8, &cfg);
        let idle = Controls::default();
        for _ in 0..2000 {
            step(&mut state, &idle, &cfg);
            let s = &state.ship;
            assert!(s.pos.x >= -s.radius && s.pos.x <= cfg.width + s.radius);
            assert!(s.pos.y >= -s.radius && s.pos.y <= cfg.height + s.radius);
            for roid in &state.asteroids {
                assert!(roid.pos.x >= -roid.radius && roid.pos.x <= cfg.width + roid.radius);
                assert!(roid.pos.y >= -roid.radius && roid.pos.y <= cfg.height + roid.radius);
            }
        }
    }

    #[test]
    fn test_explosion_countdown_respawns_fresh_ship() {
        let cfg = Config::default();
        let mut state = quiet_state(9, &cfg);
        state.ship.pos = Vec2::new(10.0, 10.0);
        state.ship.thrust = Vec2::new(3.0, 3.0);
        state.ship.blink_budget = 0;
        state.ship.explode_ticks = 2;
        state.ship.lasers.push(Projectile {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            traveled: 0.0,
        });

        let idle = Controls::default();
        step(&mut state, &idle, &cfg);
        assert!(state.ship.exploding());

        step(&mut state, &idle, &cfg);
        assert!(!state.ship.exploding());
        assert_eq!(state.ship.pos, Vec2::new(cfg.width / 2.0, cfg.height / 2.0));
        assert_eq!(state.ship.thrust, Vec2::ZERO);
        assert_eq!(state.ship.blink_budget, cfg.blink_budget());
        assert!(state.ship.lasers.is_empty());
    }

    #[test]
    fn test_blink_budget_counts_down_to_vulnerable() {
        let cfg = Config::default();
        let mut state = quiet_state(10, &cfg);
        let total = cfg.blink_budget() * cfg.blink_ticks();

        let idle = Controls::default();
        for _ in 0..total {
            assert!(state.ship.invulnerable());
            step(&mut state, &idle, &cfg);
        }
        assert!(!state.ship.invulnerable());
    }

    #[test]
    fn test_subtick_blink_duration_counts_down_safely() {
        // A blink far shorter than one tick clamps to one tick per
        // phase, so the countdown never wraps below zero.
        let cfg = Config {
            blink_dur: 1e-8,
            inv_dur: 1e-7,
            ..Config::default()
        };
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.blink_ticks(), 1);
        let mut state = quiet_state(13, &cfg);
        assert!(state.ship.invulnerable());

        let idle = Controls::default();
        for _ in 0..cfg.blink_budget() {
            assert!(state.ship.invulnerable());
            step(&mut state, &idle, &cfg);
        }
        assert!(!state.ship.invulnerable());
    }

    #[test]
    fn test_end_to_end_shot_splits_adjacent_asteroid() {
        let cfg = Config::default();
        let mut state = quiet_state(12, &cfg);
        let ship_pos = state.ship.pos;

        // Two bystanders far away, one target straight up from the ship,
        // just outside collision range but well inside laser range.
        state
            .asteroids
            .push(fixed_asteroid(Vec2::new(60.0, 60.0), SizeTier::Large, &cfg));
        state.asteroids.push(fixed_asteroid(
            Vec2::new(cfg.width - 60.0, cfg.height - 60.0),
            SizeTier::Large,
            &cfg,
        ));
        let target_pos = ship_pos + Vec2::new(0.0, -120.0);
        state
            .asteroids
            .push(fixed_asteroid(target_pos, SizeTier::Large, &cfg));
        assert_eq!(state.asteroids.len(), 3);

        // Single press, then hold nothing
        let pressed = Controls {
            fire: true,
            ..Controls::default()
        };
        step(&mut state, &pressed, &cfg);
        assert_eq!(state.ship.lasers.len(), 1);

        let idle = Controls::default();
        let mut hit_tick = None;
        for t in 0..20 {
            step(&mut state, &idle, &cfg);
            if state.asteroids.len() != 3 {
                hit_tick = Some(t);
                break;
            }
        }

        assert!(hit_tick.is_some(), "laser never reached the asteroid");
        // One large removed, two medium added: net +1
        assert_eq!(state.asteroids.len(), 4);
        assert_eq!(
            state
                .asteroids
                .iter()
                .filter(|a| a.tier == SizeTier::Medium)
                .count(),
            2
        );
        // The laser was consumed by the hit
        assert!(state.ship.lasers.is_empty());
        // Fragments spawned at the parent's position
        for frag in state.asteroids.iter().filter(|a| a.tier == SizeTier::Medium) {
            assert!(distance(frag.pos, target_pos) < 1.0);
        }
    }
}
