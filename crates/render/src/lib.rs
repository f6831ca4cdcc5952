//! Windowed renderer for the ball simulation.
//!
//! Thin glue over `wgpu` and `winit`: the physics crate hands over the ball
//! collection each frame and this crate draws it with a ray-casting
//! fullscreen shader, an orbit camera circling the box and a slowly
//! rotating directional light.

pub mod camera;
pub mod gpu_types;
pub mod renderer;

pub use renderer::Renderer;
