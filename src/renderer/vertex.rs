//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
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
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements (the retro daytime palette)
pub mod colors {
    pub const SKY: [f32; 4] = [0.467, 0.847, 1.0, 1.0];
    pub const CLOUD: [f32; 4] = [0.918, 0.969, 1.0, 1.0];
    pub const GROUND: [f32; 4] = [0.831, 0.690, 0.416, 1.0];
    pub const GROUND_STRIPE: [f32; 4] = [0.788, 0.596, 0.294, 1.0];
    pub const PIPE_BODY: [f32; 4] = [0.184, 0.804, 0.447, 1.0];
    pub const PIPE_SHADE: [f32; 4] = [0.122, 0.561, 0.310, 1.0];
    pub const PIPE_HIGHLIGHT: [f32; 4] = [0.306, 0.961, 0.561, 1.0];
    pub const PIPE_LIP: [f32; 4] = [0.157, 0.667, 0.376, 1.0];
    pub const BIRD_BODY: [f32; 4] = [1.0, 0.851, 0.306, 1.0];
    pub const BIRD_WING: [f32; 4] = [1.0, 0.694, 0.239, 1.0];
    pub const BIRD_EYE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BIRD_PUPIL: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const BIRD_BEAK: [f32; 4] = [1.0, 0.490, 0.227, 1.0];
    pub const BORDER: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
