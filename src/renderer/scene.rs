//! Draw order for a frame
//!
//! Asteroids, bullets, ship, HUD, then the banners on top.

use glam::Vec2;

use super::{Canvas, colors};
use crate::consts::*;
use crate::from_angle;
use crate::settings::Settings;
use crate::sim::{Asteroid, GameState, Player};

/// Angle between the nose and each wing tip
const WING_SWEEP: f32 = 2.5;
/// Nose sticks out past the hull radius by this much
const NOSE_EXTENSION: f32 = 8.0;
/// Faded ship opacity while blinking
const BLINK_ALPHA: f32 = 0.3;

const HUD_FONT_SIZE: f32 = 20.0;
const HUD_LEFT: f32 = 20.0;
const HUD_LINES: [f32; 3] = [20.0, 45.0, 70.0];
const BANNER_FONT_SIZE: f32 = 48.0;

/// Compose a full frame onto `canvas`
pub fn draw_game(state: &GameState, settings: &Settings, canvas: &mut impl Canvas) {
    for asteroid in &state.asteroids {
        draw_asteroid(asteroid, canvas);
    }

    for bullet in &state.bullets {
        canvas.circle(bullet.pos, BULLET_RADIUS, colors::BULLET);
    }

    if !state.is_game_over() || state.player.is_invulnerable() {
        draw_ship(&state.player, !settings.reduced_motion, canvas);
    }

    if settings.show_hud {
        let lines = [
            format!("Score: {}", state.score),
            format!("Lives: {}", state.lives),
            format!("Wave: {}", state.wave),
        ];
        for (text, y) in lines.iter().zip(HUD_LINES) {
            canvas.text(text, Vec2::new(HUD_LEFT, y), HUD_FONT_SIZE, colors::HUD_TEXT);
        }
    }

    if state.is_game_over() {
        draw_centered(canvas, "GAME OVER", SCREEN_HEIGHT / 2.0 - 40.0, BANNER_FONT_SIZE, colors::GAME_OVER);
        draw_centered(
            canvas,
            "Press ENTER to restart",
            SCREEN_HEIGHT / 2.0 + 20.0,
            HUD_FONT_SIZE,
            colors::HUD_TEXT,
        );
    } else if state.is_paused() {
        draw_centered(canvas, "PAUSED", SCREEN_HEIGHT / 2.0 - 40.0, BANNER_FONT_SIZE, colors::HUD_TEXT);
    }
}

/// Closed polyline through the outline
fn draw_asteroid(asteroid: &Asteroid, canvas: &mut impl Canvas) {
    let n = asteroid.outline.len();
    for i in 0..n {
        let a = asteroid.pos + asteroid.outline[i];
        let b = asteroid.pos + asteroid.outline[(i + 1) % n];
        canvas.line(a, b, colors::ASTEROID);
    }
}

/// Nose, right wing, left wing
pub fn ship_triangle(player: &Player) -> [Vec2; 3] {
    let nose = player.pos + from_angle(player.angle) * (SHIP_RADIUS + NOSE_EXTENSION);
    let right = player.pos + from_angle(player.angle + WING_SWEEP) * SHIP_RADIUS;
    let left = player.pos + from_angle(player.angle - WING_SWEEP) * SHIP_RADIUS;
    [nose, right, left]
}

fn draw_ship(player: &Player, blink: bool, canvas: &mut impl Canvas) {
    let [p1, p2, p3] = ship_triangle(player);
    let fill = if blink && player.blink_faded() {
        colors::fade(colors::SHIP_FILL, BLINK_ALPHA)
    } else {
        colors::SHIP_FILL
    };
    canvas.fill_triangle(p1, p2, p3, fill);
    canvas.triangle_outline(p1, p2, p3, colors::SHIP_OUTLINE);
}

fn draw_centered(canvas: &mut impl Canvas, text: &str, y: f32, size: f32, color: super::Color) {
    let width = canvas.measure_text(text, size);
    canvas.text(text, Vec2::new(SCREEN_WIDTH / 2.0 - width / 2.0, y), size, color);
}
