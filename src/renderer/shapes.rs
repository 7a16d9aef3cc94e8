//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::consts::{BALL_SIZE, PADDLE_HEIGHT, PADDLE_WIDTH};
use crate::sim::RenderSnapshot;

/// Centred rectangle as two triangles
pub fn rect(width: f32, height: f32) -> [Vertex; 6] {
    let (hw, hh) = (width / 2.0, height / 2.0);
    [
        Vertex::new(-hw, -hh),
        Vertex::new(-hw, hh),
        Vertex::new(hw, -hh),
        Vertex::new(-hw, hh),
        Vertex::new(hw, -hh),
        Vertex::new(hw, hh),
    ]
}

pub fn paddle_mesh() -> [Vertex; 6] {
    rect(PADDLE_WIDTH, PADDLE_HEIGHT)
}

pub fn ball_mesh() -> [Vertex; 6] {
    rect(BALL_SIZE, BALL_SIZE)
}

/// Which uploaded mesh a draw refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mesh {
    Paddle,
    Ball,
}

/// One draw: a mesh and the offset to draw it at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub mesh: Mesh,
    pub offset: Vec2,
}

/// Draws for one frame: both paddles, then the ball
pub fn draw_list(frame: &RenderSnapshot) -> [DrawCommand; 3] {
    [
        DrawCommand {
            mesh: Mesh::Paddle,
            offset: frame.left_paddle,
        },
        DrawCommand {
            mesh: Mesh::Paddle,
            offset: frame.right_paddle,
        },
        DrawCommand {
            mesh: Mesh::Ball,
            offset: frame.ball,
        },
    ]
}
