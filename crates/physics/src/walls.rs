//! # Wall Reflection
//!
//! Reflects and clamps balls against the six faces of the box.

use crate::types::{Ball, Bounds};

/// Reflect and clamp every ball against the box walls.
///
/// Each axis is checked against both of its faces independently, so a corner
/// hit flips two or three velocity components in the same frame. Crossing a
/// face negates the velocity component along that axis and clamps the center
/// back to surface contact. The comparisons are strict, so a ball sitting
/// exactly on the clamp boundary is left untouched and the operation is
/// idempotent.
pub fn resolve_walls(balls: &mut [Ball], bounds: Bounds) {
    for ball in balls.iter_mut() {
        let r = ball.radius;

        if ball.pos.x > bounds.width - r {
            ball.vel.x = -ball.vel.x;
            ball.pos.x = bounds.width - r;
        }
        if ball.pos.x < r {
            ball.vel.x = -ball.vel.x;
            ball.pos.x = r;
        }

        if ball.pos.y > bounds.height - r {
            ball.vel.y = -ball.vel.y;
            ball.pos.y = bounds.height - r;
        }
        if ball.pos.y < r {
            ball.vel.y = -ball.vel.y;
            ball.pos.y = r;
        }

        if ball.pos.z > bounds.depth - r {
            ball.vel.z = -ball.vel.z;
            ball.pos.z = bounds.depth - r;
        }
        if ball.pos.z < r {
            ball.vel.z = -ball.vel.z;
            ball.pos.z = r;
        }
    }
}
