//! Orbit camera circling the simulation box.
//!
//! The camera always looks at the box center. It idles in a slow
//! auto-rotation; dragging with the left mouse button orbits it manually and
//! the scroll wheel zooms, with the distance clamped to the clip range.

use glam::{Mat4, Vec3};

/// Vertical field of view in degrees.
pub const FOV_DEG: f32 = 45.0;
/// Near clipping plane distance.
pub const NEAR: f32 = 0.1;
/// Far clipping plane distance.
pub const FAR: f32 = 1.0e4;

/// Idle rotation rate around the box, radians per second.
const AUTO_ROTATE_RATE: f32 = 0.15;
/// Radians of orbit per pixel of mouse drag.
const DRAG_SENSITIVITY: f32 = 0.005;
/// Pitch limit just shy of the poles, where the view matrix degenerates.
const PITCH_LIMIT: f32 = 1.54;

/// Orbit camera state.
pub struct OrbitCamera {
    /// Point the camera circles and looks at.
    pub target: Vec3,
    /// Distance from the target.
    pub distance: f32,
    /// Horizontal orbit angle.
    pub yaw: f32,
    /// Vertical orbit angle.
    pub pitch: f32,
    /// Render target aspect ratio.
    pub aspect: f32,
    /// Keep slowly circling the box while idle.
    pub auto_rotate: bool,
}

impl OrbitCamera {
    /// Camera orbiting `target`, starting at `eye`.
    #[must_use]
    pub fn from_eye(target: Vec3, eye: Vec3, aspect: f32) -> Self {
        let offset = eye - target;
        let distance = offset.length().clamp(NEAR, FAR / 2.0);
        Self {
            target,
            distance,
            yaw: offset.z.atan2(offset.x),
            pitch: (offset.y / distance).clamp(-1.0, 1.0).asin(),
            aspect,
            auto_rotate: true,
        }
    }

    /// Advance the idle auto-rotation.
    pub fn update(&mut self, dt: f32) {
        if self.auto_rotate {
            self.yaw += AUTO_ROTATE_RATE * dt;
        }
    }

    /// Apply a mouse drag measured in screen pixels.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * DRAG_SENSITIVITY;
        self.pitch = (self.pitch + dy * DRAG_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Zoom by scroll steps; positive steps move the camera closer.
    pub fn zoom(&mut self, steps: f32) {
        self.distance = (self.distance * (1.0 - steps * 0.1)).clamp(NEAR, FAR / 2.0);
    }

    /// Track a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Camera position derived from the orbit parameters.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        let dir = Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        );
        self.target + dir * self.distance
    }

    /// Computes a view projection matrix from the camera parameters.
    #[must_use]
    pub fn build_view_projection_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), self.target, Vec3::Y);
        let proj = Mat4::perspective_rh(FOV_DEG.to_radians(), self.aspect, NEAR, FAR);
        proj * view
    }
}
