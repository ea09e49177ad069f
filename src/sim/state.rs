//! Session state and entity types
//!
//! Everything the simulation mutates lives here and is owned by the tick
//! loop; collaborators only read positions and tints, and feed the pointer
//! target back in through `TickInput`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::{ChaserSpawn, Tuning};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Progress depleted; frozen until an external restart signal
    GameOver,
}

/// Palette discriminant shared by entities and the render collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    Red,
    Cyan,
    Pink,
    Yellow,
    Black,
}

/// Cycling palette for enemies and obstacles
pub const PALETTE: [Tint; 3] = [Tint::Cyan, Tint::Pink, Tint::Yellow];

impl Tint {
    /// CSS color used by the canvas renderer
    pub fn as_css(&self) -> &'static str {
        match self {
            Tint::Red => "#FF2D00",
            Tint::Cyan => "cyan",
            Tint::Pink => "pink",
            Tint::Yellow => "yellow",
            Tint::Black => "black",
        }
    }

    /// Palette color for the entity at `index`
    pub fn cycled(index: usize) -> Self {
        PALETTE[index % PALETTE.len()]
    }
}

/// A circular pursuing body (player or enemy)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chaser {
    pub pos: Vec2,
    pub radius: f32,
    pub tint: Tint,
    /// Fraction of the gap to the target closed per tick, in (0, 1)
    pub rate: f32,
}

impl Chaser {
    pub fn from_spawn(spawn: &ChaserSpawn) -> Self {
        Self {
            pos: spawn.pos(),
            radius: spawn.radius,
            tint: spawn.tint,
            rate: spawn.rate,
        }
    }
}

/// A rectangular patrolling obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub tint: Tint,
    /// Signed vertical velocity; flips at the arena's top and bottom edges
    pub dy: f32,
    /// Tick counter driving the periodic teleport
    pub timer: u32,
}

/// What the player collided with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactKind {
    Enemy,
    Obstacle,
}

/// Events raised by a tick, for drivers to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The player touched an enemy or obstacle this tick
    PlayerHit { contact: ContactKind },
    /// Progress depleted; `score` is the final session score
    GameOver { score: u64 },
    /// A restart signal was honored and the session re-initialized
    Restarted,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG; drives obstacle spawn positions and teleports
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Latest reported pointer position, the player's pursuit target
    pub pointer: Vec2,
    pub player: Chaser,
    pub enemies: Vec<Chaser>,
    pub obstacles: Vec<Obstacle>,
    /// Depleting contact meter; the session ends when it reaches zero
    pub progress: i32,
    pub score: u64,
    pub phase: GamePhase,
    /// Highlight recolor active (enemies and obstacles tinted black)
    pub highlight: bool,
    /// Balance values this session was built from
    pub tuning: Tuning,
}

impl GameState {
    /// New session with the classic scene
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let player = Chaser::from_spawn(&tuning.player);
        let enemies = tuning.enemies.iter().map(Chaser::from_spawn).collect();
        let obstacles = spawn_obstacles(&tuning, &mut rng);
        Self {
            seed,
            rng,
            time_ticks: 0,
            pointer: Vec2::ZERO,
            player,
            enemies,
            obstacles,
            progress: tuning.max_progress,
            score: 0,
            phase: GamePhase::Playing,
            highlight: false,
            tuning,
        }
    }

    /// Re-initialize the session in place: fresh entities, full progress,
    /// zero score, back to `Playing`. The RNG stream continues so a seed
    /// still determines a multi-session run.
    pub fn restart(&mut self) {
        self.player = Chaser::from_spawn(&self.tuning.player);
        self.enemies = self.tuning.enemies.iter().map(Chaser::from_spawn).collect();
        self.obstacles = spawn_obstacles(&self.tuning, &mut self.rng);
        self.progress = self.tuning.max_progress;
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
        self.highlight = false;
    }
}

/// Random grid-aligned coordinate: `step * floor(rand * cells)`
pub(crate) fn grid_coord(tuning: &Tuning, rng: &mut Pcg32) -> f32 {
    tuning.grid_step * rng.random_range(0..tuning.grid_cells) as f32
}

fn spawn_obstacles(tuning: &Tuning, rng: &mut Pcg32) -> Vec<Obstacle> {
    tuning
        .obstacle_sizes
        .iter()
        .map(|&size| {
            let tint = PALETTE[rng.random_range(0..PALETTE.len())];
            let x = grid_coord(tuning, rng);
            let y = grid_coord(tuning, rng);
            Obstacle {
                pos: Vec2::new(x, y),
                size,
                tint,
                dy: tuning.obstacle_speed,
                timer: 0,
            }
        })
        .collect()
}
