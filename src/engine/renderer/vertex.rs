// Vertex structure for the canvas presentation quad

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Vertex of a screen-space textured quad
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    /// Position in clip space
    pub position: [f32; 2],
    /// Texture coordinates (UV)
    pub tex_coords: [f32; 2],
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: Vec2, tex_coords: Vec2) -> Self {
        Self {
            position: position.to_array(),
            tex_coords: tex_coords.to_array(),
        }
    }

    /// Full-viewport quad; the viewport itself provides the letterboxing
    pub fn quad() -> [Vertex; 4] {
        [
            Vertex::new(Vec2::new(-1.0, -1.0), Vec2::new(0.0, 1.0)),
            Vertex::new(Vec2::new(1.0, -1.0), Vec2::new(1.0, 1.0)),
            Vertex::new(Vec2::new(1.0, 1.0), Vec2::new(1.0, 0.0)),
            Vertex::new(Vec2::new(-1.0, 1.0), Vec2::new(0.0, 0.0)),
        ]
    }

    /// Index order for `quad`
    pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

    /// Get the vertex buffer layout descriptor
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // Tex Coords
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}
