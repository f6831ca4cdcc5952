use glam::Vec3;

/// A single simulated sphere.
#[derive(Copy, Clone, Debug)]
pub struct Ball {
    /// Center position, mutated every frame.
    pub pos: Vec3,
    /// Velocity, mutated on collision and wall events.
    pub vel: Vec3,
    /// Radius, positive for the ball's whole lifetime.
    pub radius: f32,
    /// Mass derived from radius and density at creation time.
    pub mass: f32,
    /// 0xRRGGBB display color. Carried for the renderer, never read by the
    /// physics stages.
    pub color: u32,
}

/// Optional overrides for ball creation.
///
/// Any field left `None` is filled from the simulation's RNG within the
/// documented ranges; see [`crate::Simulation::add_ball`].
#[derive(Copy, Clone, Debug, Default)]
pub struct BallParams {
    pub color: Option<u32>,
    pub radius: Option<f32>,
    pub pos: Option<Vec3>,
    pub vel: Option<Vec3>,
    pub density: Option<f32>,
}

/// Axis-aligned simulation box with its origin at one corner.
///
/// Immutable for the session; every wall check and every randomized spawn is
/// expressed against these three extents.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Bounds {
    #[must_use]
    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Smallest of the three extents.
    #[must_use]
    pub fn min_dimension(self) -> f32 {
        self.width.min(self.height).min(self.depth)
    }

    /// Geometric center of the box.
    #[must_use]
    pub fn center(self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth) * 0.5
    }

    /// All three extents are positive and finite.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0.0
            && self.height > 0.0
            && self.depth > 0.0
            && self.width.is_finite()
            && self.height.is_finite()
            && self.depth.is_finite()
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(2200.0, 1800.0, 1600.0)
    }
}
