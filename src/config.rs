//! Game configuration
//!
//! Every tunable constant lives here so hosts can override them at init.
//! Defaults are the classic arcade values. Invalid combinations are
//! rejected by [`Config::validate`] before a game starts; nothing in the
//! simulation itself can fail at runtime.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration rejected at initialization
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tick rate must be positive, got {0}")]
    TickRate(f32),
    #[error("playfield dimensions must be positive, got {0}x{1}")]
    Playfield(f32, f32),
    #[error("friction must be in [0, 1], got {0}")]
    Friction(f32),
    #[error("asteroid jaggedness must be in [0, 1), got {0}")]
    Jaggedness(f32),
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("average asteroid vertex count must be at least 4, got {0}")]
    VertexCount(u32),
    #[error("playfield cannot fit the belt exclusion zone ({exclusion} px around the ship)")]
    PlayfieldTooSmall { exclusion: f32 },
    #[error("starting asteroid count must be at least 1")]
    AsteroidCount,
}

/// All game constants, overridable at init
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Playfield width in pixels (host-supplied)
    pub width: f32,
    /// Playfield height in pixels (host-supplied)
    pub height: f32,
    /// Simulation ticks per second
    pub fps: f32,
    /// Friction coefficient of space (0 = none, 1 = lots)
    pub friction: f32,
    /// Max distance a laser travels, as a fraction of playfield width
    pub laser_dist: f32,
    /// Maximum number of lasers on screen at once
    pub laser_max: usize,
    /// Laser speed in pixels per second
    pub laser_speed: f32,
    /// Starting number of asteroids
    pub asteroid_num: usize,
    /// Jaggedness of the asteroids (0 = none, 1 = lots)
    pub asteroid_jag: f32,
    /// Starting size (diameter) of the largest asteroids in pixels
    pub asteroid_size: f32,
    /// Max starting speed of asteroids in pixels per second
    pub asteroid_speed: f32,
    /// Average number of vertices on each asteroid
    pub asteroid_vert: u32,
    /// Ship height in pixels
    pub ship_size: f32,
    /// Ship acceleration in pixels per second per second
    pub ship_thrust: f32,
    /// Turn speed in degrees per second
    pub turn_speed: f32,
    /// Duration of one invulnerability blink in seconds
    pub blink_dur: f32,
    /// Duration of post-respawn invulnerability in seconds
    pub inv_dur: f32,
    /// Duration of the ship explosion in seconds
    pub explode_dur: f32,
    /// Show collision bounding circles (debug)
    pub show_bounding: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 700.0,
            height: 500.0,
            fps: 30.0,
            friction: 0.7,
            laser_dist: 0.6,
            laser_max: 10,
            laser_speed: 500.0,
            asteroid_num: 3,
            asteroid_jag: 0.4,
            asteroid_size: 100.0,
            asteroid_speed: 50.0,
            asteroid_vert: 10,
            ship_size: 30.0,
            ship_thrust: 5.0,
            turn_speed: 360.0,
            blink_dur: 0.1,
            inv_dur: 3.0,
            explode_dur: 0.3,
            show_bounding: false,
        }
    }
}

impl Config {
    /// Parse a config from JSON, then validate it
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reject invalid configurations before the game starts
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps <= 0.0 {
            return Err(ConfigError::TickRate(self.fps));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ConfigError::Playfield(self.width, self.height));
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return Err(ConfigError::Friction(self.friction));
        }
        if !(0.0..1.0).contains(&self.asteroid_jag) {
            return Err(ConfigError::Jaggedness(self.asteroid_jag));
        }
        for (name, value) in [
            ("laser range fraction", self.laser_dist),
            ("laser speed", self.laser_speed),
            ("asteroid size", self.asteroid_size),
            ("ship size", self.ship_size),
            ("blink duration", self.blink_dur),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        for (name, value) in [
            ("asteroid speed", self.asteroid_speed),
            ("ship thrust", self.ship_thrust),
            ("turn speed", self.turn_speed),
            ("invulnerability duration", self.inv_dur),
            ("explosion duration", self.explode_dur),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }
        if self.asteroid_vert < 4 {
            return Err(ConfigError::VertexCount(self.asteroid_vert));
        }
        if self.asteroid_num == 0 {
            return Err(ConfigError::AsteroidCount);
        }
        // Belt spawning rejection-samples positions outside the exclusion
        // zone around the ship; the farthest corner must lie outside it or
        // no position can ever be accepted.
        let exclusion = self.largest_asteroid_radius() * 2.0 + self.ship_radius();
        let corner = ((self.width / 2.0).powi(2) + (self.height / 2.0).powi(2)).sqrt();
        if exclusion >= corner {
            return Err(ConfigError::PlayfieldTooSmall { exclusion });
        }
        Ok(())
    }

    /// Ship turn rate in radians per tick
    #[inline]
    pub fn turn_rate(&self) -> f32 {
        self.turn_speed.to_radians() / self.fps
    }

    /// Length of one blink phase in ticks (at least 1, so the blink
    /// timer always has a phase to count down even for sub-tick
    /// durations)
    #[inline]
    pub fn blink_ticks(&self) -> u32 {
        ceil_ticks(self.blink_dur * self.fps).max(1)
    }

    /// Number of blink phases granted on respawn
    #[inline]
    pub fn blink_budget(&self) -> u32 {
        ceil_ticks(self.inv_dur / self.blink_dur)
    }

    /// Explosion duration in ticks
    #[inline]
    pub fn explode_ticks(&self) -> u32 {
        ceil_ticks(self.explode_dur * self.fps)
    }

    /// Maximum distance a laser can travel in pixels
    #[inline]
    pub fn laser_range(&self) -> f32 {
        self.laser_dist * self.width
    }

    /// Ship collision radius in pixels
    #[inline]
    pub fn ship_radius(&self) -> f32 {
        self.ship_size / 2.0
    }

    /// Radius of the largest asteroid tier in pixels
    #[inline]
    pub fn largest_asteroid_radius(&self) -> f32 {
        self.asteroid_size / 2.0
    }
}

/// Round a tick count up, tolerating f32 noise from decimal seconds
/// (0.1 s at 30 Hz must be 3 ticks, not 4).
#[inline]
fn ceil_ticks(value: f32) -> u32 {
    ((value as f64) - 1e-6).ceil().max(0.0) as u32
}
