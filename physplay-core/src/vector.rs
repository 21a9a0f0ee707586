//! 2D vector primitives shared by the gravity and collision code
//!
//! Everything here is pure and works on `glam::DVec2`.

use glam::DVec2;

/// The vector type used throughout the crate
pub type Vec2 = DVec2;

/// Component-wise `a - b`
#[inline]
pub fn subtract(a: Vec2, b: Vec2) -> Vec2 {
    a - b
}

#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f64 {
    a.dot(b)
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f64 {
    a.distance(b)
}

/// Normalize `v`, falling back to the +x axis when `v` has no direction
///
/// Coincident centers have no geometric direction between them; the fixed
/// axis keeps forces and contact normals finite. Callers compute the pair
/// quantity once and negate it for the other body.
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    v.try_normalize().unwrap_or(Vec2::X)
}

/// Unit vector pointing from `from` towards `to`
#[inline]
pub fn direction(from: Vec2, to: Vec2) -> Vec2 {
    normalize(subtract(to, from))
}
