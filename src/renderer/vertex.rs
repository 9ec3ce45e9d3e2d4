//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex in playfield pixels with RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
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

    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.04, 0.04, 0.08, 1.0];
    pub const WALL: [f32; 4] = [0.3, 0.32, 0.45, 1.0];
    pub const HAZARD: [f32; 4] = [0.95, 0.2, 0.25, 1.0];
    pub const HAZARD_GLOW: [f32; 4] = [1.0, 0.3, 0.3, 0.35];
    pub const PLAYER: [f32; 4] = [0.2, 0.85, 1.0, 1.0];
    pub const GOAL: [f32; 4] = [0.3, 1.0, 0.45, 1.0];
    pub const GOAL_GLOW: [f32; 4] = [0.3, 1.0, 0.45, 0.5];
}

/// Alpha-scaled copy of a color
pub fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], color[3] * alpha.clamp(0.0, 1.0)]
}

/// HSL (hue in degrees, s/l in 0-1) to RGBA
pub fn hsl_to_rgba(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> [f32; 4] {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    [r + m, g + m, b + m, alpha]
}
