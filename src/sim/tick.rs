//! Fixed-step simulation tick
//!
//! Core game loop that advances simulation deterministically. One call is one
//! frame; velocities are in court units per tick, so there is no dt.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameState, Side};
use crate::consts::*;

/// Held keys for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    /// Host should stop before the next frame. Ignored by the simulation.
    #[serde(default)]
    pub quit: bool,
}

impl TickInput {
    /// (up, down) for one player
    pub fn keys(&self, side: Side) -> (bool, bool) {
        match side {
            Side::Left => (self.left_up, self.left_down),
            Side::Right => (self.right_up, self.right_down),
        }
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    // Paddles move at the ball's speed
    let step = state.ball_speed;
    for side in [Side::Left, Side::Right] {
        let (up, down) = input.keys(side);
        state.paddle_mut(side).drive(up, down, step);
    }

    state.ball.pos += state.ball.vel;

    // No position correction: the ball may sit past the edge for a frame
    if state.ball.pos.y > COURT_EDGE || state.ball.pos.y < -COURT_EDGE {
        state.ball.vel.y = -state.ball.vel.y;
        state.events.push(GameEvent::WallBounce);
    }

    // Only the paddle on the ball's half can be hit
    let side = Side::of_x(state.ball.pos.x);
    let overlap = state
        .paddle(side)
        .hitbox(side)
        .overlap(&state.ball.aabb());
    if overlap.hit {
        // The bounce picks the horizontal direction; vertical velocity carries over
        let mut vel = overlap.separation.normalize_or_zero() * state.ball_speed;
        vel.y = state.ball.vel.y;
        state.ball.vel = vel;
        state.events.push(GameEvent::PaddleHit { side });
        log::debug!(
            "Paddle hit ({:?}) at y={:.3}, vel=({:.4}, {:.4})",
            side,
            state.ball.pos.y,
            vel.x,
            vel.y
        );
    }

    if state.ball.pos.x > COURT_EDGE {
        state.award_point(Side::Right);
    } else if state.ball.pos.x < -COURT_EDGE {
        state.award_point(Side::Left);
    }

    state.time_ticks += 1;
}
