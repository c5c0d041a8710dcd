//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color, ready for GPU upload
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
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const TRAIL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BOUNDARY: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    /// Fallback tint when a backend draws the sprite as a plain quad
    pub const SPRITE: [f32; 4] = [0.3, 0.7, 1.0, 1.0];
}
