//! Retro Roids - a classic wrap-around asteroids arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, fixed tick, collisions)
//! - `render`: Pure state -> draw commands against an abstract 2D surface
//! - `config`: Every tunable constant, validated at init
//!
//! The host owns the loop: it forwards key events into [`sim::Controls`],
//! calls [`sim::step`] at the configured tick rate, then [`render::render`]
//! with whatever [`render::Surface2D`] it draws on.

pub mod config;
pub mod render;
pub mod sim;

pub use config::{Config, ConfigError};

use glam::Vec2;

/// Euclidean distance between two points
#[inline]
pub fn distance(p1: Vec2, p2: Vec2) -> f32 {
    p1.distance(p2)
}

/// Wrap a coordinate onto the toroidal playfield.
///
/// An entity leaving one edge re-enters the opposite edge. `margin` lets
/// ships and asteroids slide fully off screen (margin = radius) before
/// reappearing, while projectiles wrap exactly at the bound (margin = 0).
#[inline]
pub fn wrap(coord: f32, size: f32, margin: f32) -> f32 {
    if coord < -margin {
        size + margin
    } else if coord > size + margin {
        -margin
    } else {
        coord
    }
}

/// Per-axis wrap of a position onto the playfield
#[inline]
pub fn wrap_position(pos: Vec2, width: f32, height: f32, margin: f32) -> Vec2 {
    Vec2::new(wrap(pos.x, width, margin), wrap(pos.y, height, margin))
}
