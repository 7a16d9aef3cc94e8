//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex in mesh space. Meshes are drawn with a per-draw offset, so the
/// same rectangle is reused for both paddles.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

impl Vertex {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }

    /// Byte stride of one vertex in an upload buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_casts_to_bytes() {
        let verts = [Vertex::new(0.5, -0.25), Vertex::new(1.0, 2.0)];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 2 * Vertex::STRIDE);
        assert_eq!(Vertex::STRIDE, 8);

        let floats: &[f32] = bytemuck::cast_slice(&verts);
        assert_eq!(floats, &[0.5, -0.25, 1.0, 2.0]);
    }
}
