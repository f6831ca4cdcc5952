//! # Position Integration
//!
//! Advances every ball along its velocity. Each ball updates independently,
//! so iteration order does not matter and no shared state is touched.

use crate::types::Ball;

/// Advance every ball by `vel * dt`.
///
/// No boundary handling happens here; the wall resolver runs afterwards in
/// the same frame.
pub fn integrate_balls(balls: &mut [Ball], dt: f32) {
    for ball in balls.iter_mut() {
        ball.pos += ball.vel * dt;
    }
}
