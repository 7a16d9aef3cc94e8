//! Axis-aligned box collision
//!
//! Every entity in the court is a rectangle described by its centre and
//! half-extents. Collision response only needs two things from a check:
//! whether the boxes overlap, and the vector between their centres.

use glam::Vec2;

/// Result of an overlap check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    /// Vector from box A's centre to box B's centre (always filled in)
    pub separation: Vec2,
    /// Whether the boxes overlap
    pub hit: bool,
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub const fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    /// Check this box (A) against `other` (B)
    #[inline]
    pub fn overlap(&self, other: &Aabb) -> Overlap {
        aabb_overlap(self.center, self.half, other.center, other.half)
    }
}

/// Separating-axis test between two boxes.
///
/// Edges that only touch do not count as overlapping.
pub fn aabb_overlap(center_a: Vec2, half_a: Vec2, center_b: Vec2, half_b: Vec2) -> Overlap {
    let hit_x = center_a.x - half_a.x < center_b.x + half_b.x
        && center_a.x + half_a.x > center_b.x - half_b.x;
    let hit_y = center_a.y - half_a.y < center_b.y + half_b.y
        && center_a.y + half_a.y > center_b.y - half_b.y;

    Overlap {
        separation: center_b - center_a,
        hit: hit_x && hit_y,
    }
}
