//! Frame-facing game object
//!
//! Owns the simulation state, the RNG and the settings. The platform loop calls
//! `update` then `draw` once per rendered frame.

use rand_pcg::Pcg32;

use crate::consts::MAX_FRAME_DT;
use crate::renderer::{Canvas, draw_game};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, RandomSource, TickInput, seeded, tick};

/// Game instance holding all state
pub struct Game<R: RandomSource = Pcg32> {
    state: GameState,
    rng: R,
    settings: Settings,
    seed: Option<u64>,
    fullscreen: bool,
    /// Frames simulated since creation
    frames: u64,
    /// Best score across restarts in this session
    best_score: u32,
    games_played: u32,
}

impl Game<Pcg32> {
    /// New game seeded from the settings, or randomly when no seed is set
    pub fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Starting game with seed: {}", seed);
        let mut game = Self::with_rng(seeded(seed), settings);
        game.seed = Some(seed);
        game
    }
}

impl<R: RandomSource> Game<R> {
    /// New game drawing from an explicit random source
    pub fn with_rng(mut rng: R, settings: Settings) -> Self {
        let state = GameState::new(&mut rng);
        Self {
            state,
            rng,
            fullscreen: settings.fullscreen,
            settings,
            seed: None,
            frames: 0,
            best_score: 0,
            games_played: 1,
        }
    }

    /// Advance one frame; returns what happened during it
    pub fn update(&mut self, dt: f32, input: &TickInput) -> &[GameEvent] {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        tick(&mut self.state, input, dt, &mut self.rng);
        self.frames += 1;

        for event in &self.state.events {
            match *event {
                GameEvent::ToggleFullscreen => {
                    self.fullscreen = !self.fullscreen;
                    log::info!("Fullscreen {}", if self.fullscreen { "on" } else { "off" });
                }
                GameEvent::GameOver { score, .. } => {
                    self.best_score = self.best_score.max(score);
                }
                GameEvent::Restarted => {
                    self.games_played += 1;
                }
                _ => {}
            }
        }

        &self.state.events
    }

    /// Draw the current frame
    pub fn draw(&self, canvas: &mut impl Canvas) {
        draw_game(&self.state, &self.settings, canvas);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Seed of the run, when the game owns a seeded generator
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Whether the platform layer should currently be fullscreen
    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Highest score of any finished or current game this session
    pub fn best_score(&self) -> u32 {
        self.best_score.max(self.state.score)
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingCanvas;
    use crate::sim::GamePhase;

    fn seeded_game(seed: u64) -> Game {
        Game::new(Settings {
            seed: Some(seed),
            ..Settings::default()
        })
    }

    #[test]
    fn test_seed_is_reported() {
        let game = seeded_game(31337);
        assert_eq!(game.seed(), Some(31337));
        assert_eq!(game.state().asteroids.len(), 4);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = seeded_game(5);
        let mut b = seeded_game(5);
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        for _ in 0..300 {
            a.update(1.0 / 60.0, &input);
            b.update(1.0 / 60.0, &input);
        }
        assert_eq!(a.state().asteroids, b.state().asteroids);
        assert_eq!(a.state().score, b.state().score);
    }

    #[test]
    fn test_long_frames_are_clamped() {
        let mut game = seeded_game(9);
        game.update(5.0, &TickInput::default());
        assert!((game.state().time - MAX_FRAME_DT).abs() < 1e-6);

        game.update(-1.0, &TickInput::default());
        assert!((game.state().time - MAX_FRAME_DT).abs() < 1e-6);
        assert_eq!(game.frames(), 2);
    }

    #[test]
    fn test_fullscreen_toggles() {
        let mut game = seeded_game(1);
        assert!(!game.fullscreen());
        let toggle = TickInput {
            toggle_fullscreen: true,
            ..Default::default()
        };
        let events = game.update(1.0 / 60.0, &toggle).to_vec();
        assert!(events.contains(&GameEvent::ToggleFullscreen));
        assert!(game.fullscreen());
        game.update(1.0 / 60.0, &toggle);
        assert!(!game.fullscreen());
    }

    #[test]
    fn test_session_tracks_best_score_across_restarts() {
        let mut game = seeded_game(3);
        game.state.score = 120;
        game.state.lives = 1;
        let ship = game.state.player.pos;
        game.state.asteroids[0].pos = ship;
        game.state.asteroids[0].vel = glam::Vec2::ZERO;

        game.update(1.0 / 60.0, &TickInput::default());
        assert_eq!(game.state().phase, GamePhase::GameOver);

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        game.update(1.0 / 60.0, &restart);
        assert_eq!(game.state().score, 0);
        assert_eq!(game.best_score(), 120);
        assert_eq!(game.games_played(), 2);
    }

    #[test]
    fn test_draw_uses_settings() {
        let game = Game::new(Settings {
            seed: Some(2),
            show_hud: false,
            ..Settings::default()
        });
        let mut canvas = RecordingCanvas::default();
        game.draw(&mut canvas);
        assert!(!canvas.is_empty());
        assert!(
            !canvas
                .commands
                .iter()
                .any(|c| matches!(c, crate::renderer::DrawCommand::Text { .. }))
        );
    }
}
