//! Game state and core simulation types
//!
//! Everything a session mutates lives in [`GameState`]. Entities are plain
//! values: there are always exactly two paddles and one ball.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;

/// Which half of the court / which player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Player 1
    Left,
    /// Player 2
    Right,
}

impl Side {
    /// Half of the court the given x coordinate falls in. The centre line
    /// belongs to the right side.
    pub fn of_x(x: f32) -> Self {
        if x < 0.0 { Side::Left } else { Side::Right }
    }

    /// -1 for the left side, +1 for the right
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// A player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Centre; x is fixed at creation
    pub pos: Vec2,
    pub half: Vec2,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self {
            pos: Vec2::new(side.sign() * PADDLE_X, 0.0),
            half: PADDLE_HALF_EXTENTS,
        }
    }

    /// Apply one frame of held keys. Up and down are applied one after the
    /// other (not summed) and the result is clamped once.
    pub fn drive(&mut self, up: bool, down: bool, step: f32) {
        if up {
            self.pos.y += step;
        }
        if down {
            self.pos.y -= step;
        }
        self.pos.y = self.pos.y.clamp(-PADDLE_Y_LIMIT, PADDLE_Y_LIMIT);
    }

    /// Enlarged collision box for the paddle on `side`
    pub fn hitbox(&self, side: Side) -> Aabb {
        Aabb::new(
            Vec2::new(side.sign() * PADDLE_HITBOX_X, self.pos.y),
            PADDLE_HITBOX_HALF_EXTENTS,
        )
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Court units per tick
    pub vel: Vec2,
    pub half: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            half: BALL_HALF_EXTENTS,
        }
    }
}

impl Ball {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.half)
    }
}

/// Points per player. Never reset during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Player 1
    pub left: u32,
    /// Player 2
    pub right: u32,
}

impl Score {
    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// Things that happened during the last tick (for hosts: sound, logging, HUD)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball crossed the top or bottom edge and had its vertical velocity flipped
    WallBounce,
    /// Ball was redirected by a paddle
    PaddleHit { side: Side },
    /// `side` gained a point; totals after the increment
    Scored { side: Side, left: u32, right: u32 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Player 1 paddle
    pub left: Paddle,
    /// Player 2 paddle
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Shared speed of the ball and both paddles (court units per tick)
    pub ball_speed: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a new session: paddles centred, 0-0, first round already served
    pub fn new() -> Self {
        let mut state = Self {
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            ball: Ball::default(),
            score: Score::default(),
            ball_speed: BALL_START_SPEED,
            time_ticks: 0,
            events: Vec::new(),
        };

        state.reset_round();

        state
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Re-serve the ball from the centre.
    ///
    /// The ball heads right only while player 1 is strictly ahead; ties go
    /// left. The serve uses the start speed and the speed step is applied
    /// afterwards, so paddle hits and movement in the new round already run
    /// at the stepped speed.
    pub fn reset_round(&mut self) {
        self.ball_speed = BALL_START_SPEED;
        self.ball.pos = Vec2::ZERO;
        self.ball.vel.y = 0.0;
        self.ball.vel.x = if self.score.left > self.score.right {
            self.ball_speed
        } else {
            -self.ball_speed
        };
        self.ball_speed += BALL_SPEED_STEP;
    }

    /// Award a point to `side` and start the next round
    pub fn award_point(&mut self, side: Side) {
        self.score.increment(side);
        self.events.push(GameEvent::Scored {
            side,
            left: self.score.left,
            right: self.score.right,
        });
        self.reset_round();
    }
}
