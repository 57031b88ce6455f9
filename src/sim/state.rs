//! Game state and entity types
//!
//! Entities are plain structs with named fields; the whole simulation is
//! owned by one [`GameState`] that the driver passes into `step`/`render`.
//! Velocities are stored in pixels per tick: per-second config values are
//! divided by the tick rate once, at creation.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::Config;
use crate::sim::belt;

/// Asteroid size class; splitting produces two asteroids one tier smaller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    Large,
    Medium,
    Small,
}

impl SizeTier {
    /// Collision/silhouette radius for this tier
    pub fn radius(self, cfg: &Config) -> f32 {
        match self {
            SizeTier::Large => cfg.asteroid_size / 2.0,
            SizeTier::Medium => cfg.asteroid_size / 4.0,
            SizeTier::Small => cfg.asteroid_size / 8.0,
        }
    }

    /// Next tier down, or None if already smallest
    pub fn smaller(self) -> Option<SizeTier> {
        match self {
            SizeTier::Large => Some(SizeTier::Medium),
            SizeTier::Medium => Some(SizeTier::Small),
            SizeTier::Small => None,
        }
    }

    /// Speed cap multiplier; fragments drift faster than their parents
    pub fn speed_scale(self) -> f32 {
        match self {
            SizeTier::Large => 1.0,
            SizeTier::Medium => 1.5,
            SizeTier::Small => 2.0,
        }
    }
}

/// A laser shot, owned by the ship
#[derive(Debug, Clone)]
pub struct Projectile {
    pub pos: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    /// Cumulative distance traveled; expires past the configured range
    pub traveled: f32,
}

/// A drifting asteroid
///
/// The silhouette is fixed at creation: vertex `i` sits at
/// `radius * offsets[i]` from center, at angle `heading + i * TAU / n`.
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub pos: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    pub tier: SizeTier,
    pub radius: f32,
    /// Orientation of vertex 0 in radians
    pub heading: f32,
    /// Per-vertex radius jitter in [1 - jag, 1 + jag]; length = vertex count
    pub offsets: Vec<f32>,
}

impl Asteroid {
    /// Create an asteroid at `pos` with randomized velocity and silhouette
    pub fn random(pos: Vec2, tier: SizeTier, cfg: &Config, rng: &mut impl Rng) -> Self {
        let max_speed = cfg.asteroid_speed * tier.speed_scale() / cfg.fps;
        let vx = rng.random::<f32>() * max_speed * if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let vy = rng.random::<f32>() * max_speed * if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let vel = Vec2::new(vx, vy);

        let vert = rng.random_range(0..=cfg.asteroid_vert) + cfg.asteroid_vert / 2;
        let jag = cfg.asteroid_jag;
        let offsets = (0..vert)
            .map(|_| rng.random::<f32>() * jag * 2.0 + 1.0 - jag)
            .collect();

        Self {
            pos,
            vel,
            tier,
            radius: tier.radius(cfg),
            heading: rng.random::<f32>() * TAU,
            offsets,
        }
    }

    /// Number of silhouette vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.offsets.len()
    }
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Ship {
    pub pos: Vec2,
    pub radius: f32,
    /// Heading in radians; forward is `(cos a, -sin a)` in screen coords
    pub heading: f32,
    /// Angular velocity in radians per tick, set from the turn flags
    pub rot: f32,
    /// Accumulated thrust velocity in pixels per tick
    pub thrust: Vec2,
    pub thrusting: bool,
    /// Fire latch; re-arms only once the fire control is released
    pub can_fire: bool,
    pub lasers: Vec<Projectile>,
    /// Ticks of explosion remaining; 0 = alive
    pub explode_ticks: u32,
    /// Remaining invulnerability blink phases; 0 = vulnerable
    pub blink_budget: u32,
    /// Ticks left in the current blink phase
    pub blink_ticks: u32,
}

impl Ship {
    /// A fresh ship at playfield center, pointing up, fully invulnerable
    pub fn spawn(cfg: &Config) -> Self {
        Self {
            pos: Vec2::new(cfg.width / 2.0, cfg.height / 2.0),
            radius: cfg.ship_radius(),
            heading: FRAC_PI_2,
            rot: 0.0,
            thrust: Vec2::ZERO,
            thrusting: false,
            can_fire: true,
            lasers: Vec::new(),
            explode_ticks: 0,
            blink_budget: cfg.blink_budget(),
            blink_ticks: cfg.blink_ticks(),
        }
    }

    /// Forward unit vector in screen coordinates (y grows downward)
    #[inline]
    pub fn forward(&self) -> Vec2 {
        Vec2::new(self.heading.cos(), -self.heading.sin())
    }

    /// Position of the nose, where lasers spawn
    #[inline]
    pub fn nose(&self) -> Vec2 {
        self.pos + self.forward() * self.radius * (4.0 / 3.0)
    }

    #[inline]
    pub fn exploding(&self) -> bool {
        self.explode_ticks > 0
    }

    /// Collision-exempt while the invulnerability grace period runs
    #[inline]
    pub fn invulnerable(&self) -> bool {
        self.blink_budget > 0
    }

    /// Visible phase of the invulnerability flicker
    #[inline]
    pub fn blink_on(&self) -> bool {
        self.blink_budget % 2 == 0
    }
}

/// Complete simulation state, advanced once per fixed tick
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game: fresh ship plus the initial asteroid belt
    pub fn new(seed: u64, cfg: &Config) -> Self {
        let mut state = Self {
            seed,
            time_ticks: 0,
            ship: Ship::spawn(cfg),
            asteroids: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        belt::spawn_belt(&mut state, cfg);
        state
    }
}
