//! Elastic collision response between two circles
//!
//! Velocities are split into a component along the contact normal and a
//! tangential remainder. Only the normal components exchange momentum, using
//! the 1-D elastic collision formulas; the tangential parts pass through
//! unchanged (frictionless contact).

use crate::body::MovingCircle;
use crate::vector::{self, Vec2};

/// Resolve a contact between `c1` and `c2` in place
///
/// Updates both velocities, then pushes the centers apart along the normal so
/// the circles end up exactly touching. Returns the contact normal used,
/// pointing from `c1` to `c2`.
pub fn resolve(c1: &mut MovingCircle, c2: &mut MovingCircle) -> Vec2 {
    let normal = vector::direction(c1.position, c2.position);
    apply_impulse(c1, c2, normal);
    separate(c1, c2, normal);
    normal
}

/// Exchange the normal velocity components of an elastic collision
pub fn apply_impulse(c1: &mut MovingCircle, c2: &mut MovingCircle, normal: Vec2) {
    let (m1, m2) = (c1.mass, c2.mass);
    let v1n = vector::dot(c1.velocity, normal);
    let v2n = vector::dot(c2.velocity, normal);

    let (v1n_new, v2n_new) = elastic_1d(v1n, m1, v2n, m2);

    c1.velocity += normal * (v1n_new - v1n);
    c2.velocity += normal * (v2n_new - v2n);
}

/// Post-collision velocities of a 1-D elastic collision
///
/// Equal masses swap velocities exactly.
pub fn elastic_1d(v1: f64, m1: f64, v2: f64, m2: f64) -> (f64, f64) {
    if m1 == m2 {
        return (v2, v1);
    }
    let total = m1 + m2;
    let v1_new = (v1 * (m1 - m2) + 2.0 * m2 * v2) / total;
    let v2_new = (v2 * (m2 - m1) + 2.0 * m1 * v1) / total;
    (v1_new, v2_new)
}

/// Move both centers half the overlap apart along `normal`
///
/// A negative overlap (a gap) pulls the circles together, so they always end
/// up exactly tangent.
pub fn separate(c1: &mut MovingCircle, c2: &mut MovingCircle, normal: Vec2) {
    let overlap = (c1.radius + c2.radius) - vector::distance(c1.position, c2.position);
    let correction = normal * (overlap * 0.5);
    c1.position -= correction;
    c2.position += correction;
}
