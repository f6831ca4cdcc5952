//! GPU buffer layouts shared with the WGSL shader.
//!
//! All types are [`Pod`] with explicit padding so they can be uploaded with
//! `bytemuck` without layout surprises.

use bytemuck::{Pod, Zeroable};
use physics::{Ball, Bounds};

/// Uniform buffer holding the camera matrices for the ray-casting shader.
///
/// Contains the view projection matrix, its inverse for unprojecting pixel
/// rays into world space, and the eye position.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub view_proj_inv: [[f32; 4]; 4],
    pub eye: [f32; 4],
}

/// Per-frame scene parameters.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct SceneUniform {
    /// Unit vector pointing from the scene toward the light.
    pub light_dir: [f32; 3],
    pub ball_count: u32,
    pub box_min: [f32; 3],
    pub _pad0: f32,
    pub box_max: [f32; 3],
    pub _pad1: f32,
}

impl SceneUniform {
    #[must_use]
    pub fn new(light_dir: [f32; 3], ball_count: u32, bounds: Bounds) -> Self {
        Self {
            light_dir,
            ball_count,
            box_min: [0.0; 3],
            _pad0: 0.0,
            box_max: [bounds.width, bounds.height, bounds.depth],
            _pad1: 0.0,
        }
    }
}

/// GPU representation of one ball.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct BallGpu {
    pub pos: [f32; 3],
    pub radius: f32,
    pub color: [f32; 3],
    pub _pad: f32,
}

impl From<&Ball> for BallGpu {
    fn from(ball: &Ball) -> Self {
        Self {
            pos: ball.pos.to_array(),
            radius: ball.radius,
            color: unpack_color(ball.color),
            _pad: 0.0,
        }
    }
}

/// Expand a 0xRRGGBB color into RGB components in [0, 1].
#[must_use]
pub fn unpack_color(color: u32) -> [f32; 3] {
    [
        ((color >> 16) & 0xFF) as f32 / 255.0,
        ((color >> 8) & 0xFF) as f32 / 255.0,
        (color & 0xFF) as f32 / 255.0,
    ]
}
