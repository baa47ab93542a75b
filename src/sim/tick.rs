//! Per-frame simulation step
//!
//! Order within a frame: player, fire, bullets, asteroids, collisions, wave
//! advance. Frame time is variable; every rate is scaled by `dt`.

use glam::Vec2;

use super::collision::circles_overlap;
use super::rng::RandomSource;
use super::state::{Asteroid, AsteroidSize, GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::normalize_angle;

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    /// Fire key held
    pub fire_key: bool,
    /// Primary pointer button held
    pub fire_pointer: bool,
    /// Tap gesture detected this frame
    pub fire_tap: bool,
    /// Confirm pressed this frame (restarts after game over)
    pub restart: bool,
    /// Pause pressed this frame
    pub pause: bool,
    /// Fullscreen toggle pressed this frame
    pub toggle_fullscreen: bool,
    /// Idle/demo mode - autopilot flies the ship
    pub idle_mode: bool,
}

impl TickInput {
    /// Fire is level-triggered; any source will do
    pub fn fire_requested(&self) -> bool {
        self.fire_key || self.fire_pointer || self.fire_tap
    }
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, rng: &mut impl RandomSource) {
    state.events.clear();

    // Game over: only listen for restart
    if state.is_game_over() {
        if input.restart {
            state.reset(rng);
            state.events.push(GameEvent::Restarted);
            log::info!("Restarted at wave {}", state.wave);
        }
        return;
    }

    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                state.events.push(GameEvent::Paused);
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                state.events.push(GameEvent::Resumed);
            }
            GamePhase::GameOver => {}
        }
    }

    if state.is_paused() {
        return;
    }

    let input = if input.idle_mode {
        autopilot_input(state, input)
    } else {
        input.clone()
    };
    let input = &input;

    state.time += dt;
    state.player.update(input, dt);

    if input.fire_requested() {
        if let Some(bullet) = state.player.fire() {
            state.bullets.push(bullet);
            state.events.push(GameEvent::BulletFired);
        }
    }

    for bullet in &mut state.bullets {
        bullet.advance(dt);
    }
    state.bullets.retain(|b| !b.is_expired());

    for asteroid in &mut state.asteroids {
        asteroid.advance(dt);
    }

    handle_collisions(state, rng);

    if state.asteroids.is_empty() {
        state.wave += 1;
        state.player.invuln = RESPAWN_INVULNERABILITY;
        state.events.push(GameEvent::WaveCleared {
            next_wave: state.wave,
        });
        log::info!("Wave cleared, starting wave {} (score {})", state.wave, state.score);
        spawn_wave(state, rng);
    }

    if input.toggle_fullscreen {
        state.events.push(GameEvent::ToggleFullscreen);
    }
}

/// Resolve bullet hits, then ship contact
pub fn handle_collisions(state: &mut GameState, rng: &mut impl RandomSource) {
    resolve_bullet_hits(state, rng);
    resolve_ship_contact(state);
}

/// Each asteroid is destroyed by the first bullet (in firing order) touching it.
/// Survivors keep their order and fragments go after them.
fn resolve_bullet_hits(state: &mut GameState, rng: &mut impl RandomSource) {
    let asteroids = std::mem::take(&mut state.asteroids);
    let mut survivors = Vec::with_capacity(asteroids.len());
    let mut fragments = Vec::new();

    for asteroid in asteroids {
        let hit = state
            .bullets
            .iter_mut()
            .find(|b| circles_overlap(b.pos, BULLET_RADIUS, asteroid.pos, asteroid.radius));

        let Some(bullet) = hit else {
            survivors.push(asteroid);
            continue;
        };
        bullet.life = 0.0;

        let points = asteroid.size.points();
        state.score += points;
        fragments.extend(asteroid.fragments(rng));
        state.events.push(GameEvent::AsteroidDestroyed {
            size: asteroid.size,
            pos: asteroid.pos,
            points,
        });
        log::debug!(
            "{:?} asteroid destroyed at ({:.0}, {:.0}), +{}",
            asteroid.size,
            asteroid.pos.x,
            asteroid.pos.y,
            points
        );
    }

    survivors.extend(fragments);
    state.asteroids = survivors;
    state.bullets.retain(|b| !b.is_expired());
}

/// At most one life lost per frame, and none during the grace period
fn resolve_ship_contact(state: &mut GameState) {
    if state.player.is_invulnerable() {
        return;
    }

    let ship = state.player.pos;
    let touched = state
        .asteroids
        .iter()
        .any(|a| circles_overlap(ship, SHIP_RADIUS, a.pos, a.radius));
    if !touched {
        return;
    }

    state.lives = state.lives.saturating_sub(1);
    state.player.reset();
    state.events.push(GameEvent::ShipDestroyed {
        lives_left: state.lives,
    });
    log::info!("Ship destroyed, {} lives left", state.lives);

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        state.player.alive = false;
        state.events.push(GameEvent::GameOver {
            score: state.score,
            wave: state.wave,
        });
        log::info!("Game over: score {} on wave {}", state.score, state.wave);
    }
}

/// Replace the asteroid field with `3 + wave` large asteroids away from the ship
pub fn spawn_wave(state: &mut GameState, rng: &mut impl RandomSource) {
    state.asteroids.clear();
    let count = WAVE_BASE_ASTEROIDS + state.wave;
    let guard = state.player.pos;

    for _ in 0..count {
        // Rejection sample until clear of the ship's safe circle
        let pos = loop {
            let candidate = Vec2::new(rng.uniform(0.0, SCREEN_WIDTH), rng.uniform(0.0, SCREEN_HEIGHT));
            if !circles_overlap(candidate, SPAWN_CLEAR_RADIUS, guard, SPAWN_SAFE_RADIUS) {
                break candidate;
            }
        };
        state.asteroids.push(Asteroid::new(pos, AsteroidSize::Large, rng));
    }

    log::debug!("Spawned wave {} with {} asteroids", state.wave, count);
}

/// Autopilot: aim at the nearest asteroid and shoot when lined up
pub fn autopilot_input(state: &GameState, input: &TickInput) -> TickInput {
    let mut out = TickInput {
        restart: input.restart,
        pause: input.pause,
        toggle_fullscreen: input.toggle_fullscreen,
        ..Default::default()
    };

    let ship = &state.player;
    let nearest = state.asteroids.iter().min_by(|a, b| {
        a.pos
            .distance_squared(ship.pos)
            .partial_cmp(&b.pos.distance_squared(ship.pos))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let Some(target) = nearest else {
        return out;
    };

    let to_target = target.pos - ship.pos;
    let desired = to_target.y.atan2(to_target.x);
    let delta = normalize_angle(desired - ship.angle);

    const AIM_DEADZONE: f32 = 0.05;
    const FIRE_CONE: f32 = 0.2;
    const CRUISE_DISTANCE: f32 = 300.0;

    out.turn_left = delta < -AIM_DEADZONE;
    out.turn_right = delta > AIM_DEADZONE;
    out.fire_key = delta.abs() < FIRE_CONE;
    // Close the distance only when pointed at a far target
    out.thrust = delta.abs() < FIRE_CONE && to_target.length() > CRUISE_DISTANCE;
    out
}
