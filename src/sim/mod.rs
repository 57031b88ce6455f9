//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Removal-safe iteration (reverse index scans)
//! - No rendering or platform dependencies

pub mod belt;
pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use belt::{destroy_asteroid, spawn_belt};
pub use collision::resolve_collisions;
pub use input::{Control, Controls};
pub use state::{Asteroid, GameState, Projectile, Ship, SizeTier};
pub use tick::step;
