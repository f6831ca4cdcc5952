//! # Simulation Context
//!
//! The explicit context object holding the ball collection, the box and the
//! RNG feeding randomized spawns, plus the per-frame step that chains the
//! physics stages.

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::collision::resolve_collisions;
use crate::integrator::integrate_balls;
use crate::types::{Ball, Bounds};
use crate::walls::resolve_walls;

/// Number of balls spawned when no count is given.
pub const DEFAULT_BALL_COUNT: usize = 100;

/// Simulation error types
#[derive(Debug)]
pub enum PhysicsError {
    /// The box cannot fully contain a ball of the requested radius.
    BoundsTooSmall { radius: f32 },
    /// A parameter was zero, negative or non-finite.
    InvalidParam(&'static str),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsTooSmall { radius } => {
                write!(f, "box cannot contain a ball of radius {radius}")
            }
            Self::InvalidParam(name) => {
                write!(f, "parameter `{name}` must be positive and finite")
            }
        }
    }
}

impl std::error::Error for PhysicsError {}

/// Main simulation container
pub struct Simulation {
    /// The ball collection. Fixed population after startup; read by the
    /// renderer, mutated only by [`Simulation::step`] and the spawners.
    pub balls: Vec<Ball>,
    /// The box every ball stays inside.
    pub bounds: Bounds,
    /// Source of all randomized spawn parameters.
    pub(crate) rng: StdRng,
}

impl Simulation {
    /// Create an empty simulation for the given box.
    ///
    /// A fixed `seed` makes spawning, and therefore whole runs under a fixed
    /// timestep, reproducible.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::InvalidParam`] if any box extent is zero, negative or
    /// non-finite.
    pub fn new(bounds: Bounds, seed: Option<u64>) -> Result<Self, PhysicsError> {
        if !bounds.is_valid() {
            return Err(PhysicsError::InvalidParam("bounds"));
        }
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            balls: Vec::new(),
            bounds,
            rng,
        })
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// One frame runs the stages in a fixed order: position integration,
    /// then the pairwise collision sweep, then wall reflection. The same
    /// externally measured `dt` drives the whole frame.
    pub fn step(&mut self, dt: f32) {
        integrate_balls(&mut self.balls, dt);
        resolve_collisions(&mut self.balls);
        resolve_walls(&mut self.balls, self.bounds);

        debug_assert!(
            self.balls
                .iter()
                .all(|b| b.pos.is_finite() && b.vel.is_finite()),
            "ball state must stay finite after a step"
        );
    }

    /// Run `steps` fixed-dt steps. Headless and test driver.
    pub fn run(&mut self, dt: f32, steps: usize) {
        for _ in 0..steps {
            self.step(dt);
        }
    }
}
