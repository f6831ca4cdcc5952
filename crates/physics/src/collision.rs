//! # Collision Detection and Response
//!
//! Brute-force pairwise sphere collisions with perfectly elastic impulses
//! and positional de-penetration.
//!
//! Every ordered pair (i, j) with i != j is visited, so each unordered pair
//! is processed twice, once per direction, each visit deriving its own
//! normal. The arithmetic is symmetric and the net effect is a single
//! consistent separation; collapsing the sweep to one visit per pair changes
//! the resulting trajectories and is not an equivalent rewrite.

use glam::Vec3;

use crate::types::Ball;

/// Center distance below which a pair is treated as degenerate and skipped.
const MIN_SEPARATION: f32 = 1e-4;

/// Extra clearance pushed past exact contact during de-penetration, so the
/// pair does not re-trigger next frame on floating-point residue.
const SEPARATION_SLACK: f32 = 1.0;

/// Contact between two overlapping balls.
#[derive(Copy, Clone, Debug)]
pub struct Contact {
    /// Unit normal pointing from the second ball toward the first.
    pub normal: Vec3,
    /// Overlap depth, always positive.
    pub depth: f32,
}

/// Detect overlap between two balls.
///
/// Returns `None` for separated pairs, and for the degenerate case of
/// (near-)coincident centers where the contact normal is undefined; such
/// pairs are left untouched rather than fed NaN.
#[must_use]
pub fn detect_ball_ball(a: &Ball, b: &Ball) -> Option<Contact> {
    let delta = a.pos - b.pos;
    let distance = delta.length();
    let proximity = distance - (a.radius + b.radius);
    if proximity >= 0.0 || distance <= MIN_SEPARATION {
        return None;
    }
    Some(Contact {
        normal: delta / distance,
        depth: -proximity,
    })
}

/// Apply the elastic impulse and positional de-penetration for one contact.
///
/// The velocity impulse only fires when the balls approach along the normal
/// (`dv < 0`); separating or sliding pairs keep their velocities. The
/// positional correction runs for every detected overlap regardless, split
/// inversely to mass. Momentum is conserved by the impulse:
/// `m_a * dv_a + m_b * dv_b = 0`.
pub fn resolve_ball_ball(a: &mut Ball, b: &mut Ball, contact: &Contact) {
    let n = contact.normal;
    let m = a.mass + b.mass;

    let dv = a.vel.dot(n) - b.vel.dot(n);
    if dv < 0.0 {
        let c = 2.0 * dv / m;
        a.vel += n * (-b.mass * c);
        b.vel += n * (a.mass * c);
    }

    let depth = contact.depth + SEPARATION_SLACK;
    a.pos += n * (b.mass / m * depth);
    b.pos -= n * (a.mass / m * depth);
}

/// Run the full ordered-pair sweep over the collection. O(n²) per frame.
pub fn resolve_collisions(balls: &mut [Ball]) {
    let len = balls.len();
    for i in 0..len {
        for j in 0..len {
            if i == j {
                continue;
            }
            let (ball, other) = pair_mut(balls, i, j);
            if let Some(contact) = detect_ball_ball(ball, other) {
                resolve_ball_ball(ball, other, &contact);
            }
        }
    }
}

/// Disjoint mutable borrows of two distinct slice elements.
fn pair_mut(balls: &mut [Ball], i: usize, j: usize) -> (&mut Ball, &mut Ball) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = balls.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = balls.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f32, radius: f32) -> Ball {
        Ball {
            pos: Vec3::new(x, 0.0, 0.0),
            vel: Vec3::ZERO,
            radius,
            mass: 1.0,
            color: 0,
        }
    }

    #[test]
    fn detects_overlap_depth_and_normal() {
        let a = ball_at(0.0, 10.0);
        let b = ball_at(15.0, 10.0);
        let contact = detect_ball_ball(&a, &b).unwrap();
        assert!((contact.depth - 5.0).abs() < 1e-4);
        assert!((contact.normal - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn separated_and_coincident_pairs_yield_no_contact() {
        let a = ball_at(0.0, 10.0);
        let b = ball_at(25.0, 10.0);
        assert!(detect_ball_ball(&a, &b).is_none());
        let c = ball_at(0.0, 10.0);
        assert!(detect_ball_ball(&a, &c).is_none());
    }
}
