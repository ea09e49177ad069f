//! Per-frame simulation tick
//!
//! Advances one frame in fixed order: pursuit steering, enemy contact,
//! obstacle patrol and contact, then the score/lifecycle transition. The
//! driver calls this exactly once per animation callback.

use glam::Vec2;
use rand_pcg::Pcg32;

use super::geometry::{Rect, bounding_square, circles_overlap, rects_overlap};
use super::state::{ContactKind, GameEvent, GamePhase, GameState, Obstacle, Tint, grid_coord};
use crate::tuning::Tuning;

/// Input commands for a single tick
///
/// `pointer` carries the latest reported position; the one-shot flags must be
/// cleared by the driver after the tick that consumed them.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer position, clamped to arena bounds by the input layer
    pub pointer: Option<Vec2>,
    /// Flip the highlight recolor (edge-triggered)
    pub toggle_highlight: bool,
    /// Restart signal (click/tap); only honored while GameOver
    pub restart: bool,
}

/// Move a follower a fraction of the gap toward a target.
///
/// Exponential convergence: a rate in (0, 1) closes the same fraction of the
/// remaining gap every tick, so the follower approaches but never overshoots.
#[inline]
pub fn pursue(follower: Vec2, target: Vec2, rate: f32) -> Vec2 {
    follower + (target - follower) * rate
}

/// Advance the session by one frame, returning the events it raised
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // A dead session is frozen; the restart signal is all it responds to.
    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.restart();
            log::info!("session restarted");
            events.push(GameEvent::Restarted);
        }
        return events;
    }

    if let Some(pointer) = input.pointer {
        state.pointer = pointer;
    }
    if input.toggle_highlight {
        state.highlight = !state.highlight;
        apply_tints(state);
    }

    state.time_ticks += 1;

    // Steering: the player chases the pointer, every enemy chases the player.
    state.player.pos = pursue(state.player.pos, state.pointer, state.player.rate);
    let player_pos = state.player.pos;
    let player_radius = state.player.radius;
    for enemy in &mut state.enemies {
        enemy.pos = pursue(enemy.pos, player_pos, enemy.rate);
        if circles_overlap(player_pos, player_radius, enemy.pos, enemy.radius) {
            state.progress -= 1;
            events.push(GameEvent::PlayerHit {
                contact: ContactKind::Enemy,
            });
        }
    }

    // Obstacles patrol, then are tested against the player's square proxy.
    let player_square = bounding_square(player_pos, player_radius);
    let GameState {
        obstacles,
        rng,
        tuning,
        progress,
        ..
    } = state;
    for obstacle in obstacles.iter_mut() {
        update_obstacle(obstacle, tuning, rng);
        let rect = Rect {
            pos: obstacle.pos,
            size: obstacle.size,
        };
        if rects_overlap(&player_square, &rect) {
            *progress -= 1;
            events.push(GameEvent::PlayerHit {
                contact: ContactKind::Obstacle,
            });
        }
    }

    if state.progress > 0 {
        state.score += state.tuning.frame_reward;
    } else {
        state.phase = GamePhase::GameOver;
        log::info!(
            "progress depleted at tick {}, final score {}",
            state.time_ticks,
            state.score
        );
        events.push(GameEvent::GameOver { score: state.score });
    }

    events
}

/// Patrol motion. Order matters within a tick: position update, then the
/// boundary bounce, then the periodic teleport.
fn update_obstacle(obstacle: &mut Obstacle, tuning: &Tuning, rng: &mut Pcg32) {
    obstacle.pos.y += obstacle.dy;
    if obstacle.pos.y <= 0.0 {
        obstacle.dy = tuning.obstacle_speed;
    } else if obstacle.pos.y >= tuning.arena_height {
        obstacle.dy = -tuning.obstacle_speed;
    }
    obstacle.timer += 1;
    if obstacle.timer % tuning.teleport_period == 0 {
        obstacle.pos.x = grid_coord(tuning, rng);
        obstacle.pos.y = grid_coord(tuning, rng);
    }
}

/// Recolor enemies and obstacles for the current highlight flag: black while
/// highlighted, the palette cycle by entity index otherwise.
fn apply_tints(state: &mut GameState) {
    let highlight = state.highlight;
    for (i, enemy) in state.enemies.iter_mut().enumerate() {
        enemy.tint = if highlight { Tint::Black } else { Tint::cycled(i) };
    }
    for (i, obstacle) in state.obstacles.iter_mut().enumerate() {
        obstacle.tint = if highlight { Tint::Black } else { Tint::cycled(i) };
    }
}
