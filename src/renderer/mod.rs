//! Rendering composition
//!
//! The simulation never draws. This module turns a `GameState` into calls on a
//! `Canvas`, which the platform layer implements on top of its 2D backend.

pub mod recording;
pub mod scene;

pub use recording::{DrawCommand, RecordingCanvas};
pub use scene::{draw_game, ship_triangle};

use glam::Vec2;

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [10.0 / 255.0, 12.0 / 255.0, 20.0 / 255.0, 1.0];
    pub const ASTEROID: Color = [200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0, 1.0];
    pub const BULLET: Color = [253.0 / 255.0, 249.0 / 255.0, 0.0, 1.0];
    pub const SHIP_FILL: Color = [1.0, 1.0, 1.0, 1.0];
    pub const SHIP_OUTLINE: Color = [102.0 / 255.0, 191.0 / 255.0, 1.0, 1.0];
    pub const HUD_TEXT: Color = [245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0, 1.0];
    pub const GAME_OVER: Color = [230.0 / 255.0, 41.0 / 255.0, 55.0 / 255.0, 1.0];

    /// Same color at a fraction of its opacity
    pub const fn fade(color: Color, alpha: f32) -> Color {
        [color[0], color[1], color[2], color[3] * alpha]
    }
}

/// 2D drawing surface provided by the platform layer
pub trait Canvas {
    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color);
    fn triangle_outline(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color);
    fn circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, color: Color);
    /// Draw text with its top-left corner at `pos`
    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
    /// Width `text` would occupy at `size`
    fn measure_text(&self, text: &str, size: f32) -> f32;
}
