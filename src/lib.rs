//! ZayDroids - A wraparound Asteroids-style arcade shooter
//!
//! Core modules:
//! - `sim`: Simulation (entities, collisions, per-frame update)
//! - `game`: Frame-facing orchestrator (owns state, RNG and settings)
//! - `renderer`: Backend-agnostic draw composition
//! - `settings`: Player preferences loaded from JSON

pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical units)
    pub const SCREEN_WIDTH: f32 = 900.0;
    pub const SCREEN_HEIGHT: f32 = 650.0;
    /// Frame rate the external driver targets
    pub const TARGET_FPS: u32 = 60;
    /// Longest frame the simulation will integrate in one step
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Ship handling
    pub const SHIP_RADIUS: f32 = 12.0;
    pub const SHIP_TURN_SPEED: f32 = 3.5; // radians/sec
    pub const SHIP_ACCEL: f32 = 260.0;
    pub const SHIP_FRICTION: f32 = 0.98; // per 1/60 s
    pub const SHIP_MAX_SPEED: f32 = 360.0;
    /// Grace period after a respawn or a cleared wave
    pub const RESPAWN_INVULNERABILITY: f32 = 2.0;
    /// Invulnerability blink toggles per second
    pub const BLINK_RATE: f32 = 10.0;

    /// Bullets
    pub const BULLET_SPEED: f32 = 520.0;
    pub const BULLET_LIFETIME: f32 = 1.2;
    pub const BULLET_COOLDOWN: f32 = 0.18;
    pub const BULLET_RADIUS: f32 = 2.0;
    /// Distance past the hull where bullets appear
    pub const MUZZLE_OFFSET: f32 = 6.0;

    /// Asteroid speed = base + jitter + (3 - tier) * tier bonus
    pub const ASTEROID_BASE_SPEED: f32 = 40.0;
    pub const ASTEROID_SPEED_JITTER: f32 = 40.0;
    pub const ASTEROID_TIER_SPEED_BONUS: f32 = 20.0;
    /// Outline vertex count range (inclusive)
    pub const ASTEROID_OUTLINE_MIN_POINTS: i32 = 10;
    pub const ASTEROID_OUTLINE_MAX_POINTS: i32 = 14;
    /// Outline radius perturbation range
    pub const ASTEROID_OUTLINE_JITTER_MIN: f32 = 0.7;
    pub const ASTEROID_OUTLINE_JITTER_MAX: f32 = 1.1;
    /// Points per tier of a destroyed asteroid
    pub const POINTS_PER_TIER: u32 = 10;

    /// Wave spawning
    pub const WAVE_BASE_ASTEROIDS: u32 = 3;
    /// Clearance circle around a spawn candidate
    pub const SPAWN_CLEAR_RADIUS: f32 = 80.0;
    /// Protected circle around the player at spawn time
    pub const SPAWN_SAFE_RADIUS: f32 = 120.0;

    pub const LIVES_START: u8 = 3;
}

/// Wrap a position onto the toroidal playfield.
///
/// Single step per axis: a coordinate below zero gains one dimension, one past
/// the dimension loses one. Values exactly on a boundary are left alone.
#[inline]
pub fn wrap_position(mut pos: Vec2, width: f32, height: f32) -> Vec2 {
    if pos.x < 0.0 {
        pos.x += width;
    } else if pos.x > width {
        pos.x -= width;
    }

    if pos.y < 0.0 {
        pos.y += height;
    } else if pos.y > height {
        pos.y -= height;
    }

    pos
}

/// Wrap a position onto the default playfield
#[inline]
pub fn wrap_to_playfield(pos: Vec2) -> Vec2 {
    wrap_position(pos, consts::SCREEN_WIDTH, consts::SCREEN_HEIGHT)
}

/// Unit vector pointing along `angle` (radians)
#[inline]
pub fn from_angle(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    while angle >= PI {
        angle -= TAU;
    }
    while angle < -PI {
        angle += TAU;
    }
    angle
}

/// Rescale `v` to `max_len` if it is longer; zero vectors pass through
#[inline]
pub fn clamp_length(v: Vec2, max_len: f32) -> Vec2 {
    let len = v.length();
    if len > max_len && len > 0.0 {
        v * (max_len / len)
    } else {
        v
    }
}
