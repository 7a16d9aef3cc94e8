//! Read-only view of the state for presenters

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Positions and score after a tick, in court space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub left_paddle: Vec2,
    pub right_paddle: Vec2,
    pub ball: Vec2,
    pub paddle_half: Vec2,
    pub ball_half: Vec2,
    /// (player 1, player 2)
    pub score: (u32, u32),
    pub ball_speed: f32,
}

impl From<&GameState> for RenderSnapshot {
    fn from(state: &GameState) -> Self {
        Self {
            left_paddle: state.left.pos,
            right_paddle: state.right.pos,
            ball: state.ball.pos,
            paddle_half: state.left.half,
            ball_half: state.ball.half,
            score: (state.score.left, state.score.right),
            ball_speed: state.ball_speed,
        }
    }
}
