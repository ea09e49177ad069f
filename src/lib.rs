//! Stripe Chase - a striped-arena pursuit game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (steering, collisions, session lifecycle)
//! - `render`: Canvas-2d rendering (wasm only)
//! - `highscores`: Persisted best score
//! - `tuning`: Data-driven game balance

pub mod highscores;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod sim;
pub mod tuning;

pub use highscores::HighScore;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Width of one background stripe
    pub const STRIPE_WIDTH: f32 = 30.0;

    /// Arena dimensions - the teleport grid spans the full width
    pub const ARENA_WIDTH: f32 = 1120.0;
    pub const ARENA_HEIGHT: f32 = 640.0;

    /// Progress meter capacity (contact drains it one point per tick)
    pub const MAX_PROGRESS: i32 = 100;
    /// Score awarded per surviving frame
    pub const FRAME_REWARD: u64 = 60;

    /// Obstacle vertical patrol speed (units per tick)
    pub const OBSTACLE_SPEED: f32 = 10.0;
    /// Ticks between obstacle teleports
    pub const TELEPORT_PERIOD: u32 = 100;
    /// Teleport grid spacing and cell count per axis
    pub const GRID_STEP: f32 = 20.0;
    pub const GRID_CELLS: u32 = 56;

    /// Player defaults
    pub const PLAYER_SPAWN_X: f32 = 250.0;
    pub const PLAYER_SPAWN_Y: f32 = 150.0;
    pub const PLAYER_RADIUS: f32 = 15.0;
    /// Fraction of the pointer gap the player closes per tick
    pub const PLAYER_RATE: f32 = 0.04;
}
