//! Frame rendering
//!
//! A pure read of the current state translated into draw commands; no
//! simulation state is mutated here. Classic vector-outline look: white
//! triangle ship, slate-grey jagged asteroid polygons, salmon laser dots.

pub mod surface;

pub use surface::{Color, CommandList, DrawCommand, Surface2D};

use std::f32::consts::TAU;

use glam::Vec2;

use crate::config::Config;
use crate::sim::state::{Asteroid, GameState, Ship};

/// Draw one frame of the current state onto the surface
pub fn render(state: &GameState, cfg: &Config, surface: &mut dyn Surface2D) {
    surface.clear(cfg.width, cfg.height, Color::BLACK);

    draw_ship(&state.ship, cfg, surface);

    for roid in &state.asteroids {
        draw_asteroid(roid, cfg, surface);
        if cfg.show_bounding {
            surface.stroke_circle(roid.pos, roid.radius, 1.0, Color::LIME);
        }
    }

    let laser_radius = cfg.ship_size / 15.0;
    for laser in &state.ship.lasers {
        surface.fill_circle(laser.pos, laser_radius, Color::SALMON);
    }
}

fn draw_ship(ship: &Ship, cfg: &Config, surface: &mut dyn Surface2D) {
    let (x, y) = (ship.pos.x, ship.pos.y);
    let r = ship.radius;
    let (cos_a, sin_a) = (ship.heading.cos(), ship.heading.sin());

    if ship.exploding() {
        // Concentric fireball, largest circle first. Keyed only by the
        // fact that the countdown is running, so it holds still for its
        // whole duration.
        for (scale, color) in [
            (1.7, Color::DARK_RED),
            (1.4, Color::RED),
            (1.0, Color::ORANGE),
            (0.7, Color::YELLOW),
            (0.4, Color::WHITE),
        ] {
            surface.fill_circle(ship.pos, r * scale, color);
        }
    } else if ship.blink_on() {
        if ship.thrusting {
            // Flame out the back: rear corners pinched in, tail stretched
            let flame = [
                Vec2::new(
                    x - r * (2.0 / 3.0 * cos_a + 0.5 * sin_a),
                    y + r * (2.0 / 3.0 * sin_a - 0.5 * cos_a),
                ),
                Vec2::new(x - r * 7.0 / 3.0 * cos_a, y + r * 7.0 / 3.0 * sin_a),
                Vec2::new(
                    x - r * (2.0 / 3.0 * cos_a - 0.5 * sin_a),
                    y + r * (2.0 / 3.0 * sin_a + 0.5 * cos_a),
                ),
            ];
            surface.fill_polygon(&flame, Color::RED, Color::YELLOW, cfg.ship_size / 10.0);
        }

        // Triangle hull: nose plus the two rear corners
        let hull = [
            Vec2::new(x + 4.0 / 3.0 * r * cos_a, y - 4.0 / 3.0 * r * sin_a),
            Vec2::new(
                x - r * (2.0 / 3.0 * cos_a + sin_a),
                y + r * (2.0 / 3.0 * sin_a - cos_a),
            ),
            Vec2::new(
                x - r * (2.0 / 3.0 * cos_a - sin_a),
                y + r * (2.0 / 3.0 * sin_a + cos_a),
            ),
        ];
        surface.stroke_polygon(&hull, cfg.ship_size / 20.0, Color::WHITE);
    }

    if cfg.show_bounding {
        surface.stroke_circle(ship.pos, ship.radius, 1.0, Color::LIME);
    }
}

fn draw_asteroid(roid: &Asteroid, cfg: &Config, surface: &mut dyn Surface2D) {
    let n = roid.vertex_count();
    let points: Vec<Vec2> = (0..n)
        .map(|i| {
            let angle = roid.heading + i as f32 * TAU / n as f32;
            roid.pos + roid.radius * roid.offsets[i] * Vec2::new(angle.cos(), angle.sin())
        })
        .collect();
    surface.stroke_polygon(&points, cfg.ship_size / 20.0, Color::SLATE_GREY);
}
