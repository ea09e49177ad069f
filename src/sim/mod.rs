//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per externally scheduled frame
//! - Seeded RNG only
//! - Stable iteration order (spawn-table order)
//! - No rendering or platform dependencies

pub mod geometry;
pub mod state;
pub mod tick;

pub use geometry::{Rect, bounding_square, circles_overlap, distance, rects_overlap};
pub use state::{Chaser, ContactKind, GameEvent, GamePhase, GameState, Obstacle, Tint, PALETTE};
pub use tick::{TickInput, pursue, tick};
