//! Newtonian gravity between two point masses
//!
//! Separation is floored at [`SOFTENING_FLOOR`] before it enters the
//! inverse-square law, so coincident or nearly coincident bodies produce a
//! large but finite force.

use crate::body::PointMass;
use crate::vector::{self, Vec2};

/// Minimum distance used by the force law and potential energy
pub const SOFTENING_FLOOR: f64 = 1.0;

/// Gravitational constant used by the playground scenarios
pub const DEFAULT_G: f64 = 1.0;

/// Inverse-square gravity with a shared constant `g`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityModel {
    pub g: f64,
}

impl Default for GravityModel {
    fn default() -> Self {
        Self { g: DEFAULT_G }
    }
}

impl GravityModel {
    pub fn new(g: f64) -> Self {
        Self { g }
    }

    /// Force exerted on `a` by `b`
    ///
    /// The force on `b` is the exact negation of this value.
    pub fn force(&self, a: &PointMass, b: &PointMass) -> Vec2 {
        self.force_between(a.position, a.mass, b.position, b.mass)
    }

    /// Force on a body of mass `mass_a` at `pos_a` from one at `pos_b`
    pub fn force_between(&self, pos_a: Vec2, mass_a: f64, pos_b: Vec2, mass_b: f64) -> Vec2 {
        let direction = vector::direction(pos_a, pos_b);
        let distance = softened_distance(pos_a, pos_b);
        let magnitude = self.g * mass_a * mass_b / (distance * distance);
        direction * magnitude
    }

    pub fn potential_energy(&self, a: &PointMass, b: &PointMass) -> f64 {
        -self.g * a.mass * b.mass / softened_distance(a.position, b.position)
    }

    pub fn kinetic_energy(body: &PointMass) -> f64 {
        0.5 * body.mass * body.velocity.length_squared()
    }
}

fn softened_distance(a: Vec2, b: Vec2) -> f64 {
    vector::distance(a, b).max(SOFTENING_FLOOR)
}
