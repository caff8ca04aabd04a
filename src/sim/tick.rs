//! Per-frame simulation step
//!
//! One call advances the plane, the obstacles and the score by exactly one
//! step. The order of the phases below is part of the game's feel; moving
//! damping before integration, for example, changes every trajectory.

use super::collision::{first_overlap, out_of_bounds};
use super::state::{EndCause, GameState, Obstacle};
use crate::heading_vector;

/// Controls held during a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Thrust along heading
    pub forward: bool,
    /// Weaker thrust against heading
    pub reverse: bool,
    /// Rotate counter-clockwise on screen
    pub turn_left: bool,
    /// Rotate clockwise on screen
    pub turn_right: bool,
}

/// Advance the game state by one step
///
/// Does nothing once the run is over.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.is_over() {
        return;
    }

    let t = &state.tuning;
    let plane = &mut state.plane;

    // Thrust
    if input.forward {
        plane.vel += heading_vector(t.thrust_forward, plane.angle);
    }
    if input.reverse {
        plane.vel -= heading_vector(t.thrust_reverse, plane.angle);
    }

    // Turning (both may apply in the same step)
    if input.turn_left {
        plane.angle -= t.turn_rate;
    }
    if input.turn_right {
        plane.angle += t.turn_rate;
    }

    // Gravity, integration, then drag
    plane.vel.y += t.gravity;
    plane.pos += plane.vel;
    plane.vel *= t.damping;

    // Advance every obstacle first, then cull, so removal never skips one
    let speed = t.obstacle_speed;
    for obstacle in &mut state.obstacles {
        obstacle.pos.x -= speed;
    }
    let before = state.obstacles.len();
    state.obstacles.retain(|o| !o.is_off_screen());
    let culled = before - state.obstacles.len();
    if culled > 0 {
        log::debug!("Culled {} obstacle(s)", culled);
    }

    // Collision
    let hitbox = state.plane.hitbox(state.tuning.plane_hitbox);
    if let Some(index) = first_overlap(&hitbox, state.obstacles.iter().map(Obstacle::bounds)) {
        state.end(EndCause::Collision { obstacle: index });
    }

    // Vertical bounds
    if out_of_bounds(state.plane.pos.y, state.tuning.plane_hitbox, state.tuning.height) {
        state.end(EndCause::OutOfBounds);
    }

    // The step that ends the run still scores
    state.score += 1;

    if state.is_over() {
        log::info!(
            "Game over after {} steps ({:?})",
            state.score,
            state.end_cause
        );
    }
}
