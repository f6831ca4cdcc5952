#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Rebound Physics Core
//!
//! Newtonian physics for a box of bouncing, colliding spheres.
//!
//! This crate is the computational heart of Rebound. It owns the ball
//! collection, advances it frame by frame, and knows nothing about windows,
//! cameras or GPUs. The renderer consumes the ball state read-only.
//!
//! ## Key Components
//!
//! -   **Balls:** [`Ball`] carries position, velocity, radius, mass and a
//!     display color. Balls are spawned once at startup through
//!     [`Simulation::add_ball`] or [`Simulation::populate`] and live for the
//!     whole session.
//! -   **Simulation:** The [`Simulation`] struct in the [`simulation`] module
//!     is the explicit context object holding the balls, the box and the RNG
//!     used for randomized spawns. [`Simulation::step`] runs one frame:
//!     integration, pairwise collision resolution, wall reflection.
//! -   **Determinism:** All randomness flows through a seedable RNG and all
//!     time flows through the `dt` argument of [`Simulation::step`], so a
//!     fixed seed and a fixed timestep replay the exact same trajectory.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use physics::{Bounds, Simulation};
//!
//! let mut sim = Simulation::new(Bounds::default(), Some(42))?;
//! sim.populate(100)?;
//! sim.step(1.0 / 60.0);
//! ```
//!
//! Collision resolution is a brute-force sweep over every ordered ball pair,
//! O(n²) per frame. That is fine at the default population of 100 balls and
//! is the known scalability limit of this crate.

pub mod builder;
pub mod collision;
pub mod integrator;
pub mod simulation;
pub mod types;
pub mod walls;

pub use builder::{ball_mass, DEFAULT_DENSITY, RADIUS_RANGE};
pub use collision::{detect_ball_ball, resolve_ball_ball, resolve_collisions, Contact};
pub use integrator::integrate_balls;
pub use simulation::{PhysicsError, Simulation, DEFAULT_BALL_COUNT};
pub use types::{Ball, BallParams, Bounds};
pub use walls::resolve_walls;
