//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform code:
//! - Variable timestep, every rate scaled by `dt`
//! - Injected RNG only
//! - Stable iteration order (firing order for bullets, spawn order for asteroids)

pub mod collision;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::circles_overlap;
pub use rng::{RandomSource, seeded};
pub use state::{
    Asteroid, AsteroidSize, Bullet, GameEvent, GamePhase, GameState, Player, random_velocity,
};
pub use tick::{TickInput, autopilot_input, handle_collisions, spawn_wave, tick};
