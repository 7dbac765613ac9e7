//! Vertex types for textured sprites

use bytemuck::{Pod, Zeroable};

/// Sprite vertex with position and texture coordinate
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub tex_coord: [f32; 2],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self {
            position: [x, y, 0.0],
            tex_coord: [u, v],
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Unit quad spanning [-1, 1] as two triangles. Every entity draws this quad
/// through its own transform.
pub const QUAD: [Vertex; 6] = [
    Vertex::new(-1.0, 1.0, 0.0, 1.0),
    Vertex::new(-1.0, -1.0, 0.0, 0.0),
    Vertex::new(1.0, -1.0, 1.0, 0.0),
    Vertex::new(-1.0, 1.0, 0.0, 1.0),
    Vertex::new(1.0, -1.0, 1.0, 0.0),
    Vertex::new(1.0, 1.0, 1.0, 1.0),
];
