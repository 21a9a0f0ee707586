use crate::error::{check_finite_vec, check_mass, check_radius, ConfigError};
use crate::vector::Vec2;

/// A gravitating body in the orbit scenario
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass {
    pub position: Vec2,
    pub velocity: Vec2,
    pub mass: f64,
}

impl PointMass {
    /// Create a body, rejecting non-positive mass and non-finite state
    pub fn new(position: Vec2, velocity: Vec2, mass: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            position: check_finite_vec("position", position)?,
            velocity: check_finite_vec("velocity", velocity)?,
            mass: check_mass("point mass", mass)?,
        })
    }

    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }
}

/// A kinematic circle in the collision scenario
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingCircle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f64,
    pub mass: f64,
}

impl MovingCircle {
    /// Create a circle, rejecting non-positive radius or mass
    pub fn new(position: Vec2, velocity: Vec2, radius: f64, mass: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            position: check_finite_vec("position", position)?,
            velocity: check_finite_vec("velocity", velocity)?,
            radius: check_radius("circle", radius)?,
            mass: check_mass("circle", mass)?,
        })
    }

    /// Move the center along the current velocity for `dt`
    pub fn advance(&mut self, dt: f64) {
        self.position += self.velocity * dt;
    }

    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}
