//! # Rebound
//!
//! A 3D box of bouncing, colliding spheres.
//!
//! ## Overview
//!
//! Rebound simulates a fixed population of spheres inside an axis-aligned
//! box. Every frame each ball is advanced along its velocity, every ordered
//! pair of balls is checked for overlap and resolved with a perfectly
//! elastic impulse plus positional de-penetration, and the six box walls
//! reflect anything that crossed them. A `wgpu` renderer draws the result
//! with an orbit camera slowly circling the box.
//!
//! ## Project Architecture
//!
//! The workspace is split into crates with one responsibility each:
//!
//! -   **`rebound`:** The crate you are currently viewing. It is the entry
//!     point for the executable and the documentation: command line parsing,
//!     logging setup and the frame loop live here.
//! -   **[`physics`]:** The simulation core. It owns the ball collection and
//!     the per-frame step of integration, collision resolution and wall
//!     reflection. Deterministic for a fixed seed and timestep, and fully
//!     testable without a GPU.
//! -   **[`render`]:** Thin glue over `wgpu` and `winit`. It consumes the
//!     ball state read-only and knows nothing about the physics.
//!
//! ## Getting Started
//!
//! `cargo run` opens a window; drag to orbit, scroll to zoom. Useful flags:
//! `--balls` to change the population, `--seed` for a reproducible scene,
//! `--headless --steps N` to run the physics without a window.

pub use physics;
#[cfg(feature = "render")]
pub use render;
