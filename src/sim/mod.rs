//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame, no measured delta time
//! - No RNG
//! - No rendering or platform dependencies

pub mod collision;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Overlap, aabb_overlap};
pub use snapshot::RenderSnapshot;
pub use state::{Ball, GameEvent, GameState, Paddle, Score, Side};
pub use tick::{TickInput, tick};
