//! # Ball Creation
//!
//! This module provides the spawning methods of the simulation: adding a
//! single ball with optional parameter overrides, and populating the box
//! with a batch of fully randomized balls at startup.

use glam::Vec3;
use rand::Rng;

use crate::simulation::{PhysicsError, Simulation};
use crate::types::{Ball, BallParams};

/// Radius range for balls created without an explicit radius.
pub const RADIUS_RANGE: (f32, f32) = (10.0, 100.0);

/// Density applied when `BallParams::density` is unset.
pub const DEFAULT_DENSITY: f32 = 10.0;

/// Spawning methods on the simulation context
impl Simulation {
    /// Add a ball, randomizing every parameter left unset.
    ///
    /// Randomized defaults: radius uniform in [`RADIUS_RANGE`]; position
    /// uniform such that the whole sphere fits inside the box; velocity
    /// components uniform in `[-v, v]` where `v` is a quarter of the box's
    /// smallest extent; color uniform over the 24-bit RGB range.
    ///
    /// Returns the new ball's index.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::InvalidParam`] if an explicit radius or density is not
    /// positive and finite, or an explicit position or velocity is not
    /// finite; [`PhysicsError::BoundsTooSmall`] if the box cannot fully
    /// contain a sphere of the resulting radius.
    pub fn add_ball(&mut self, params: BallParams) -> Result<usize, PhysicsError> {
        let radius = match params.radius {
            Some(r) if r > 0.0 && r.is_finite() => r,
            Some(_) => return Err(PhysicsError::InvalidParam("radius")),
            None => self.rng.gen_range(RADIUS_RANGE.0..=RADIUS_RANGE.1),
        };
        if 2.0 * radius > self.bounds.min_dimension() {
            return Err(PhysicsError::BoundsTooSmall { radius });
        }

        let density = match params.density {
            Some(d) if d > 0.0 && d.is_finite() => d,
            Some(_) => return Err(PhysicsError::InvalidParam("density")),
            None => DEFAULT_DENSITY,
        };

        let pos = match params.pos {
            Some(p) if p.is_finite() => p,
            Some(_) => return Err(PhysicsError::InvalidParam("pos")),
            None => Vec3::new(
                self.rng.gen_range(radius..=self.bounds.width - radius),
                self.rng.gen_range(radius..=self.bounds.height - radius),
                self.rng.gen_range(radius..=self.bounds.depth - radius),
            ),
        };

        // Speed cap comes from the box itself: a quarter of its smallest extent.
        let v_max = self.bounds.min_dimension() / 4.0;
        let vel = match params.vel {
            Some(v) if v.is_finite() => v,
            Some(_) => return Err(PhysicsError::InvalidParam("vel")),
            None => Vec3::new(
                self.rng.gen_range(-v_max..=v_max),
                self.rng.gen_range(-v_max..=v_max),
                self.rng.gen_range(-v_max..=v_max),
            ),
        };

        let color = match params.color {
            Some(c) => c & 0x00FF_FFFF,
            None => self.rng.gen_range(0x0000_0000..=0x00FF_FFFF),
        };

        let ball = Ball {
            pos,
            vel,
            radius,
            mass: ball_mass(radius, density),
            color,
        };
        self.balls.push(ball);
        Ok(self.balls.len() - 1)
    }

    /// Spawn `n` fully randomized balls.
    ///
    /// # Errors
    ///
    /// Propagates the first [`PhysicsError`] from [`Simulation::add_ball`];
    /// balls spawned before the failure remain in the collection.
    pub fn populate(&mut self, n: usize) -> Result<(), PhysicsError> {
        for _ in 0..n {
            self.add_ball(BallParams::default())?;
        }
        Ok(())
    }
}

/// Mass grows with the cross-sectional area of the ball, not its volume.
#[must_use]
pub fn ball_mass(radius: f32, density: f32) -> f32 {
    density * std::f32::consts::PI * radius * radius
}
