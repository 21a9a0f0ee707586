//! Scenario configuration
//!
//! Defaults reproduce the playground's built-in setups:
//!
//! - gravity: two bodies of mass 10, 200 apart around (400, 300), `G = 1`,
//!   stepped with `dt = 5`
//! - collision: a circle at (200, 300) moving right at 300 towards a resting
//!   circle at (700, 281), both of radius 20 and mass 1

use crate::body::MovingCircle;
use crate::error::{check_finite_vec, check_mass, check_radius, check_timestep, ConfigError};
use crate::gravity::DEFAULT_G;
use crate::integrator::IntegrationMethod;
use crate::system::TwoBodyGravitySystem;
use crate::vector::Vec2;

/// Timestep the gravity scenario is stepped with each frame
pub const DEFAULT_GRAVITY_DT: f64 = 5.0;

/// Frame time of the collision scenario at 60 frames per second
pub const DEFAULT_FRAME_DT: f64 = 1.0 / 60.0;

/// Setup of the two-body orbit scenario
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityConfig {
    pub center: Vec2,
    pub separation: f64,
    pub mass1: f64,
    pub mass2: f64,
    pub g: f64,
    pub dt: f64,
    pub method: IntegrationMethod,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            center: Vec2::new(400.0, 300.0),
            separation: 200.0,
            mass1: 10.0,
            mass2: 10.0,
            g: DEFAULT_G,
            dt: DEFAULT_GRAVITY_DT,
            method: IntegrationMethod::Rk4,
        }
    }
}

impl GravityConfig {
    /// Check the timestep and build the initial circular-orbit system
    pub fn build(&self) -> Result<TwoBodyGravitySystem, ConfigError> {
        check_timestep(self.dt)?;
        TwoBodyGravitySystem::circular_orbit(
            self.center,
            self.separation,
            self.mass1,
            self.mass2,
            self.g,
        )
    }
}

/// Setup of the two-circle collision scenario
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionConfig {
    pub position1: Vec2,
    pub velocity1: Vec2,
    pub position2: Vec2,
    pub velocity2: Vec2,
    pub radius1: f64,
    pub radius2: f64,
    pub mass1: f64,
    pub mass2: f64,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            position1: Vec2::new(200.0, 300.0),
            velocity1: Vec2::new(300.0, 0.0),
            position2: Vec2::new(700.0, 281.0),
            velocity2: Vec2::ZERO,
            radius1: 20.0,
            radius2: 20.0,
            mass1: 1.0,
            mass2: 1.0,
        }
    }
}

impl CollisionConfig {
    /// Build both circles, checking each field with its body's label
    pub fn build(&self) -> Result<(MovingCircle, MovingCircle), ConfigError> {
        check_finite_vec("circle 1 position", self.position1)?;
        check_finite_vec("circle 1 velocity", self.velocity1)?;
        check_finite_vec("circle 2 position", self.position2)?;
        check_finite_vec("circle 2 velocity", self.velocity2)?;
        check_radius("circle 1", self.radius1)?;
        check_radius("circle 2", self.radius2)?;
        check_mass("circle 1", self.mass1)?;
        check_mass("circle 2", self.mass2)?;

        Ok((
            MovingCircle::new(self.position1, self.velocity1, self.radius1, self.mass1)?,
            MovingCircle::new(self.position2, self.velocity2, self.radius2, self.mass2)?,
        ))
    }
}
