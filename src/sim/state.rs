//! Game state and core simulation types
//!
//! Entities are plain values owned by `GameState`; nothing holds references to
//! anything else, so removal is just filtering a `Vec`.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use super::tick::{TickInput, spawn_wave};
use crate::consts::*;
use crate::{clamp_length, from_angle, wrap_to_playfield};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Out of lives, waiting for restart
    GameOver,
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    BulletFired,
    AsteroidDestroyed {
        size: AsteroidSize,
        pos: Vec2,
        points: u32,
    },
    /// Ship hit an asteroid (lives already decremented)
    ShipDestroyed { lives_left: u8 },
    /// Asteroid field emptied; `next_wave` is now spawning
    WaveCleared { next_wave: u32 },
    GameOver { score: u32, wave: u32 },
    Restarted,
    Paused,
    Resumed,
    /// Platform request, handled by the frame driver
    ToggleFullscreen,
}

/// A projectile fired by the ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds left before the bullet fizzles
    pub life: f32,
}

impl Bullet {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            life: BULLET_LIFETIME,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.pos = wrap_to_playfield(self.pos + self.vel * dt);
        self.life -= dt;
    }

    pub fn is_expired(&self) -> bool {
        self.life <= 0.0
    }
}

/// Asteroid size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsteroidSize {
    Small = 1,
    Medium = 2,
    Large = 3,
}

impl AsteroidSize {
    /// Numeric tier (Large = 3)
    pub fn tier(self) -> u32 {
        self as u32
    }

    pub fn radius(self) -> f32 {
        match self {
            AsteroidSize::Large => 42.0,
            AsteroidSize::Medium => 26.0,
            AsteroidSize::Small => 14.0,
        }
    }

    /// Size of the fragments this asteroid breaks into, if any
    pub fn split(self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }

    /// Score for destroying an asteroid of this size
    pub fn points(self) -> u32 {
        POINTS_PER_TIER * self.tier()
    }
}

/// A drifting rock with a jagged outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: AsteroidSize,
    pub radius: f32,
    /// Outline vertices relative to `pos`, generated once
    pub outline: Vec<Vec2>,
}

impl Asteroid {
    pub fn new(pos: Vec2, size: AsteroidSize, rng: &mut impl RandomSource) -> Self {
        let radius = size.radius();
        let vel = random_velocity(size, rng);
        let outline = generate_outline(radius, rng);
        Self {
            pos,
            vel,
            size,
            radius,
            outline,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.pos = wrap_to_playfield(self.pos + self.vel * dt);
    }

    /// The two fragments left behind when this asteroid is shot
    pub fn fragments(&self, rng: &mut impl RandomSource) -> Vec<Asteroid> {
        match self.size.split() {
            Some(child) => (0..2).map(|_| Asteroid::new(self.pos, child, rng)).collect(),
            None => Vec::new(),
        }
    }
}

/// Random heading; smaller asteroids get a speed bonus
pub fn random_velocity(size: AsteroidSize, rng: &mut impl RandomSource) -> Vec2 {
    let angle = rng.uniform(0.0, TAU);
    let speed = ASTEROID_BASE_SPEED
        + rng.uniform(0.0, ASTEROID_SPEED_JITTER)
        + (3 - size.tier()) as f32 * ASTEROID_TIER_SPEED_BONUS;
    from_angle(angle) * speed
}

fn generate_outline(radius: f32, rng: &mut impl RandomSource) -> Vec<Vec2> {
    let count = rng.int_inclusive(ASTEROID_OUTLINE_MIN_POINTS, ASTEROID_OUTLINE_MAX_POINTS) as usize;
    (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * TAU;
            let r = radius * rng.uniform(ASTEROID_OUTLINE_JITTER_MIN, ASTEROID_OUTLINE_JITTER_MAX);
            from_angle(angle) * r
        })
        .collect()
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in radians (-π/2 faces up)
    pub angle: f32,
    /// Seconds until the next shot; may dip slightly below zero
    pub cooldown: f32,
    /// Seconds of invulnerability left; may dip slightly below zero
    pub invuln: f32,
    pub alive: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Fresh ship at the center. Invulnerability only comes from `reset`.
    pub fn new() -> Self {
        Self {
            pos: Self::spawn_point(),
            vel: Vec2::ZERO,
            angle: -FRAC_PI_2,
            cooldown: 0.0,
            invuln: 0.0,
            alive: true,
        }
    }

    pub fn spawn_point() -> Vec2 {
        Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0)
    }

    /// Respawn at the center with a grace period
    pub fn reset(&mut self) {
        *self = Self {
            invuln: RESPAWN_INVULNERABILITY,
            ..Self::new()
        };
    }

    /// Steer, thrust, drag, move and tick timers
    pub fn update(&mut self, input: &TickInput, dt: f32) {
        if input.turn_left {
            self.angle -= SHIP_TURN_SPEED * dt;
        }
        if input.turn_right {
            self.angle += SHIP_TURN_SPEED * dt;
        }

        if input.thrust {
            self.vel += self.heading() * SHIP_ACCEL * dt;
        }

        // Exponential drag calibrated to 60 Hz
        self.vel *= SHIP_FRICTION.powf(dt * 60.0);
        self.vel = clamp_length(self.vel, SHIP_MAX_SPEED);

        self.pos = wrap_to_playfield(self.pos + self.vel * dt);

        if self.cooldown > 0.0 {
            self.cooldown -= dt;
        }
        if self.invuln > 0.0 {
            self.invuln -= dt;
        }
    }

    pub fn heading(&self) -> Vec2 {
        from_angle(self.angle)
    }

    pub fn can_fire(&self) -> bool {
        self.cooldown <= 0.0
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invuln > 0.0
    }

    /// Shoot from the nose, inheriting ship momentum. `None` while cooling down.
    pub fn fire(&mut self) -> Option<Bullet> {
        if !self.can_fire() {
            return None;
        }
        self.cooldown = BULLET_COOLDOWN;
        let dir = self.heading();
        let pos = self.pos + dir * (SHIP_RADIUS + MUZZLE_OFFSET);
        let vel = self.vel + dir * BULLET_SPEED;
        Some(Bullet::new(pos, vel))
    }

    /// Whether the blinking ship is in its faded half-cycle
    pub fn blink_faded(&self) -> bool {
        self.invuln > 0.0 && ((self.invuln * BLINK_RATE) as i32) % 2 == 0
    }
}

/// Complete game state (serializable snapshot)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    /// Live bullets in firing order
    pub bullets: Vec<Bullet>,
    /// Live asteroids; split fragments are appended after survivors
    pub asteroids: Vec<Asteroid>,
    pub score: u32,
    pub lives: u8,
    /// Current wave (1-based)
    pub wave: u32,
    pub phase: GamePhase,
    /// Elapsed simulated seconds since the last (re)start
    pub time: f32,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// New game with wave 1 already spawned
    pub fn new(rng: &mut impl RandomSource) -> Self {
        let mut state = Self {
            player: Player::new(),
            bullets: Vec::new(),
            asteroids: Vec::new(),
            score: 0,
            lives: LIVES_START,
            wave: 1,
            phase: GamePhase::Playing,
            time: 0.0,
            events: Vec::new(),
        };
        spawn_wave(&mut state, rng);
        state
    }

    /// Start over from wave 1 with a respawned ship
    pub fn reset(&mut self, rng: &mut impl RandomSource) {
        self.score = 0;
        self.lives = LIVES_START;
        self.wave = 1;
        self.phase = GamePhase::Playing;
        self.time = 0.0;
        self.player.reset();
        self.bullets.clear();
        spawn_wave(self, rng);
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::seeded;

    #[test]
    fn test_radius_follows_tier() {
        let mut rng = seeded(3);
        for size in [AsteroidSize::Large, AsteroidSize::Medium, AsteroidSize::Small] {
            let a = Asteroid::new(Vec2::ZERO, size, &mut rng);
            assert_eq!(a.radius, size.radius());
        }
        assert_eq!(AsteroidSize::Large.radius(), 42.0);
        assert_eq!(AsteroidSize::Medium.radius(), 26.0);
        assert_eq!(AsteroidSize::Small.radius(), 14.0);
    }

    #[test]
    fn test_outline_shape() {
        let mut rng = seeded(11);
        for _ in 0..50 {
            let a = Asteroid::new(Vec2::ZERO, AsteroidSize::Large, &mut rng);
            assert!((10..=14).contains(&a.outline.len()));
            for p in &a.outline {
                let r = p.length();
                assert!(r >= 42.0 * 0.7 - 1e-3 && r <= 42.0 * 1.1 + 1e-3, "r={r}");
            }
        }
    }

    #[test]
    fn test_asteroid_speed_bias() {
        let mut rng = seeded(5);
        for _ in 0..100 {
            let large = Asteroid::new(Vec2::ZERO, AsteroidSize::Large, &mut rng).vel.length();
            let small = Asteroid::new(Vec2::ZERO, AsteroidSize::Small, &mut rng).vel.length();
            assert!((40.0 - 1e-3..80.0 + 1e-3).contains(&large), "large={large}");
            assert!((80.0 - 1e-3..120.0 + 1e-3).contains(&small), "small={small}");
        }
    }

    #[test]
    fn test_asteroid_translates_without_reshaping() {
        let mut rng = seeded(9);
        let mut a = Asteroid::new(Vec2::new(100.0, 100.0), AsteroidSize::Medium, &mut rng);
        let outline = a.outline.clone();
        a.vel = Vec2::new(10.0, -20.0);
        a.advance(0.5);
        assert_eq!(a.pos, Vec2::new(105.0, 90.0));
        assert_eq!(a.outline, outline);
    }

    #[test]
    fn test_fragments() {
        let mut rng = seeded(2);
        let large = Asteroid::new(Vec2::new(300.0, 200.0), AsteroidSize::Large, &mut rng);
        let frags = large.fragments(&mut rng);
        assert_eq!(frags.len(), 2);
        assert!(frags.iter().all(|f| f.size == AsteroidSize::Medium && f.pos == large.pos));

        let small = Asteroid::new(Vec2::ZERO, AsteroidSize::Small, &mut rng);
        assert!(small.fragments(&mut rng).is_empty());
    }

    #[test]
    fn test_bullet_advance_and_expiry() {
        let mut b = Bullet::new(Vec2::new(890.0, 10.0), Vec2::new(100.0, 0.0));
        b.advance(0.2);
        assert!((b.pos.x - 10.0).abs() < 1e-3);
        assert!(!b.is_expired());
        b.advance(1.5);
        assert!(b.is_expired());
    }

    #[test]
    fn test_player_turning_cancels() {
        let mut p = Player::new();
        let input = TickInput {
            turn_left: true,
            turn_right: true,
            ..Default::default()
        };
        p.update(&input, 0.5);
        assert!((p.angle + FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_player_drag_and_clamp() {
        let mut p = Player::new();
        p.vel = Vec2::new(1000.0, 0.0);
        p.update(&TickInput::default(), 1.0 / 60.0);
        assert!((p.vel.length() - SHIP_MAX_SPEED).abs() < 1e-3);

        let mut p = Player::new();
        p.vel = Vec2::new(100.0, 0.0);
        p.update(&TickInput::default(), 1.0 / 60.0);
        assert!((p.vel.x - 98.0).abs() < 1e-3);
    }

    #[test]
    fn test_player_thrust_accelerates_forward() {
        let mut p = Player::new();
        let input = TickInput {
            thrust: true,
            ..Default::default()
        };
        p.update(&input, 0.1);
        // Facing up: velocity goes negative y
        assert!(p.vel.y < 0.0);
        assert!(p.vel.x.abs() < 1e-3);
    }

    #[test]
    fn test_fire_respects_cooldown() {
        let mut p = Player::new();
        p.vel = Vec2::new(10.0, 0.0);
        let b = p.fire().expect("ready to fire");
        assert!((b.pos - (p.pos + Vec2::new(0.0, -18.0))).length() < 1e-3);
        assert!((b.vel - Vec2::new(10.0, -520.0)).length() < 1e-2);
        assert_eq!(b.life, BULLET_LIFETIME);
        assert!(!p.can_fire());
        assert!(p.fire().is_none());

        p.update(&TickInput::default(), BULLET_COOLDOWN);
        assert!(p.can_fire());
    }

    #[test]
    fn test_reset_grants_grace_period() {
        let mut p = Player::new();
        assert!(!p.is_invulnerable());
        p.pos = Vec2::new(5.0, 5.0);
        p.vel = Vec2::new(50.0, 50.0);
        p.angle = 1.0;
        p.cooldown = 0.1;
        p.reset();
        assert_eq!(p.pos, Player::spawn_point());
        assert_eq!(p.vel, Vec2::ZERO);
        assert_eq!(p.angle, -FRAC_PI_2);
        assert_eq!(p.cooldown, 0.0);
        assert_eq!(p.invuln, RESPAWN_INVULNERABILITY);
        assert!(p.alive);
    }

    #[test]
    fn test_blink_alternates() {
        let mut p = Player::new();
        assert!(!p.blink_faded());
        p.invuln = 1.95; // 19 -> odd
        assert!(!p.blink_faded());
        p.invuln = 1.85; // 18 -> even
        assert!(p.blink_faded());
    }

    #[test]
    fn test_new_game_spawns_first_wave() {
        let mut rng = seeded(1);
        let state = GameState::new(&mut rng);
        assert_eq!(state.wave, 1);
        assert_eq!(state.lives, LIVES_START);
        assert_eq!(state.asteroids.len(), 4);
        assert!(state.asteroids.iter().all(|a| a.size == AsteroidSize::Large));
        assert!(!state.is_game_over());
    }
}
