//! Data-driven game balance
//!
//! Every balance value the simulation reads, gathered into one serializable
//! struct. `Default` reproduces the classic scene: six enemies of three
//! speeds, nine patrolling obstacles, a 56-cell teleport grid.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::state::Tint;

/// Spawn record for a circular body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChaserSpawn {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub tint: Tint,
    /// Fraction of the gap closed per tick, in (0, 1)
    pub rate: f32,
}

impl ChaserSpawn {
    pub const fn new(x: f32, y: f32, radius: f32, tint: Tint, rate: f32) -> Self {
        Self {
            x,
            y,
            radius,
            tint,
            rate,
        }
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Balance values for a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    pub arena_width: f32,
    pub arena_height: f32,
    /// Width of one background stripe
    pub stripe_width: f32,
    /// Progress meter capacity
    pub max_progress: i32,
    /// Score awarded per surviving frame
    pub frame_reward: u64,
    /// Obstacle vertical patrol speed (units per tick)
    pub obstacle_speed: f32,
    /// Ticks between obstacle teleports (must be nonzero)
    pub teleport_period: u32,
    /// Teleport grid spacing per axis
    pub grid_step: f32,
    /// Teleport grid cell count per axis
    pub grid_cells: u32,
    /// Player spawn
    pub player: ChaserSpawn,
    /// Enemy spawn table
    pub enemies: Vec<ChaserSpawn>,
    /// Obstacle width/height table
    pub obstacle_sizes: Vec<Vec2>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            stripe_width: STRIPE_WIDTH,
            max_progress: MAX_PROGRESS,
            frame_reward: FRAME_REWARD,
            obstacle_speed: OBSTACLE_SPEED,
            teleport_period: TELEPORT_PERIOD,
            grid_step: GRID_STEP,
            grid_cells: GRID_CELLS,
            player: ChaserSpawn::new(
                PLAYER_SPAWN_X,
                PLAYER_SPAWN_Y,
                PLAYER_RADIUS,
                Tint::Red,
                PLAYER_RATE,
            ),
            enemies: vec![
                ChaserSpawn::new(80.0, 220.0, 20.0, Tint::Yellow, 0.01),
                ChaserSpawn::new(350.0, 500.0, 10.0, Tint::Yellow, 0.054),
                ChaserSpawn::new(300.0, 300.0, 20.0, Tint::Pink, 0.007),
                ChaserSpawn::new(150.0, 600.0, 10.0, Tint::Pink, 0.077),
                ChaserSpawn::new(280.0, 620.0, 20.0, Tint::Cyan, 0.021),
                ChaserSpawn::new(200.0, 100.0, 10.0, Tint::Cyan, 0.0023),
            ],
            obstacle_sizes: vec![
                Vec2::new(10.0, 60.0),
                Vec2::new(40.0, 70.0),
                Vec2::new(70.0, 80.0),
                Vec2::new(60.0, 20.0),
                Vec2::new(10.0, 70.0),
                Vec2::new(50.0, 10.0),
                Vec2::new(60.0, 20.0),
                Vec2::new(30.0, 10.0),
                Vec2::new(10.0, 20.0),
            ],
        }
    }
}
