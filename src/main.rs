//! ZayDroids entry point
//!
//! Headless frame driver: flies the autopilot for a fixed number of frames,
//! composes every frame into a recording canvas and prints a run summary.
//! A windowed build swaps the recording canvas for a real 2D backend.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use serde::Serialize;

    use zaydroids::consts::TARGET_FPS;
    use zaydroids::renderer::RecordingCanvas;
    use zaydroids::sim::{GameEvent, TickInput};
    use zaydroids::{Game, Settings};

    /// Default settings file looked up in the working directory
    const SETTINGS_FILE: &str = "zaydroids.json";

    /// Printed once the run finishes
    #[derive(Debug, Serialize)]
    struct RunSummary {
        seed: Option<u64>,
        frames: u64,
        score: u32,
        wave: u32,
        lives: u8,
        games_played: u32,
        best_score: u32,
        draw_calls_last_frame: usize,
    }

    pub fn run() {
        let path = std::env::args()
            .nth(1)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE));
        let settings = Settings::load_or_default(&path);

        let frames = settings.demo_seconds as u64 * TARGET_FPS as u64;
        let dt = 1.0 / TARGET_FPS as f32;
        let mut game = Game::new(settings);
        let mut canvas = RecordingCanvas::default();
        let mut input = TickInput {
            idle_mode: true,
            ..Default::default()
        };

        for _ in 0..frames {
            let game_over = game
                .update(dt, &input)
                .iter()
                .any(|e| matches!(e, GameEvent::GameOver { .. }));
            // Confirm is edge-triggered: press it for one frame only
            input.restart = game_over;

            canvas.clear();
            game.draw(&mut canvas);
        }

        let state = game.state();
        let summary = RunSummary {
            seed: game.seed(),
            frames: game.frames(),
            score: state.score,
            wave: state.wave,
            lives: state.lives,
            games_played: game.games_played(),
            best_score: game.best_score(),
            draw_calls_last_frame: canvas.len(),
        };
        log::info!(
            "Run finished: {} games, best score {}",
            summary.games_played,
            summary.best_score
        );

        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to encode run summary: {}", e),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("ZayDroids (headless) starting...");
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web build is driven by the host page's frame loop
}
