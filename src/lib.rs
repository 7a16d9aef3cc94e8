//! Pong Duel - two paddles, one ball, a fixed court
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, scoring)
//! - `renderer`: Presentation seam (meshes, draw list, presenters)
//! - `platform`: Key bindings and input snapshots
//! - `replay`: Recorded and seeded input scripts
//! - `settings`: Host preferences

pub mod platform;
pub mod renderer;
pub mod replay;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
///
/// The court is the normalized square [-1, 1] x [-1, 1] and is not
/// configurable.
pub mod consts {
    use glam::Vec2;

    /// Court edge; the ball scores past |x| > COURT_EDGE and bounces past |y| > COURT_EDGE
    pub const COURT_EDGE: f32 = 1.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 0.05;
    pub const PADDLE_HEIGHT: f32 = 0.4;
    pub const PADDLE_HALF_EXTENTS: Vec2 = Vec2::new(PADDLE_WIDTH / 2.0, PADDLE_HEIGHT / 2.0);
    /// Horizontal offset of each paddle from the centre line
    pub const PADDLE_X: f32 = 0.975;
    /// Paddle centre never leaves [-PADDLE_Y_LIMIT, PADDLE_Y_LIMIT]
    pub const PADDLE_Y_LIMIT: f32 = 0.8;

    /// Collision box used for paddles. Wider than the drawn paddle and pushed
    /// behind the goal line so the ball gets caught early.
    pub const PADDLE_HITBOX_HALF_EXTENTS: Vec2 = Vec2::new(0.15, 0.2);
    pub const PADDLE_HITBOX_X: f32 = 1.1;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 0.05;
    pub const BALL_HALF_EXTENTS: Vec2 = Vec2::new(BALL_SIZE / 2.0, BALL_SIZE / 2.0);
    /// Speed (court units per tick) at the start of every round, before the step
    pub const BALL_START_SPEED: f32 = 0.01;
    /// Speed added after each round reset (uncapped)
    pub const BALL_SPEED_STEP: f32 = 0.005;

    /// Default host frame cadence
    pub const FRAME_RATE: u32 = 60;
}
