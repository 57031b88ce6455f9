//! Abstract 2D drawing surface
//!
//! The renderer speaks a small vocabulary of primitives against whatever
//! the host draws on: a canvas, a framebuffer, or the [`CommandList`]
//! recorder used by tests and the headless driver. Coordinates are pixels,
//! origin top-left, y increasing downward.

use glam::Vec2;

/// An RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const DARK_RED: Color = Color::rgb(139, 0, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const SALMON: Color = Color::rgb(250, 128, 114);
    pub const SLATE_GREY: Color = Color::rgb(112, 128, 144);
    pub const LIME: Color = Color::rgb(0, 255, 0);
}

/// Drawing primitives the renderer emits each frame
pub trait Surface2D {
    /// Fill the whole playfield rectangle
    fn clear(&mut self, width: f32, height: f32, color: Color);
    /// Filled circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Circle outline
    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Color);
    /// Closed polygon outline through the given points
    fn stroke_polygon(&mut self, points: &[Vec2], line_width: f32, color: Color);
    /// Filled closed polygon with an outline
    fn fill_polygon(&mut self, points: &[Vec2], fill: Color, stroke: Color, line_width: f32);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
        color: Color,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        line_width: f32,
        color: Color,
    },
    StrokePolygon {
        points: Vec<Vec2>,
        line_width: f32,
        color: Color,
    },
    FillPolygon {
        points: Vec<Vec2>,
        fill: Color,
        stroke: Color,
        line_width: f32,
    },
}

/// A surface that records draw commands instead of rasterizing them
#[derive(Debug, Default)]
pub struct CommandList {
    pub commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

impl Surface2D for CommandList {
    fn clear(&mut self, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::Clear {
            width,
            height,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            line_width,
            color,
        });
    }

    fn stroke_polygon(&mut self, points: &[Vec2], line_width: f32, color: Color) {
        self.commands.push(DrawCommand::StrokePolygon {
            points: points.to_vec(),
            line_width,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], fill: Color, stroke: Color, line_width: f32) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            fill,
            stroke,
            line_width,
        });
    }
}
