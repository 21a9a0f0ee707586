use crate::body::PointMass;
use crate::error::{check_finite, check_finite_vec, check_mass, ConfigError};
use crate::gravity::GravityModel;
use crate::vector::Vec2;

/// Two gravitating bodies sharing one gravitational constant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoBodyGravitySystem {
    pub bodies: [PointMass; 2],
    pub gravity: GravityModel,
}

impl TwoBodyGravitySystem {
    pub fn new(body1: PointMass, body2: PointMass, g: f64) -> Result<Self, ConfigError> {
        check_mass("body 1", body1.mass)?;
        check_mass("body 2", body2.mass)?;
        check_finite("G", g)?;
        Ok(Self {
            bodies: [body1, body2],
            gravity: GravityModel::new(g),
        })
    }

    /// Place two bodies on a circular orbit about `center`
    ///
    /// Bodies sit on a horizontal line `separation` apart. The orbital speed
    /// `sqrt(G (m1 + m2) / separation)` is split between them in proportion
    /// to the other body's mass, so the net momentum is zero.
    pub fn circular_orbit(
        center: Vec2,
        separation: f64,
        mass1: f64,
        mass2: f64,
        g: f64,
    ) -> Result<Self, ConfigError> {
        check_finite_vec("center", center)?;
        check_finite("separation", separation)?;
        if separation <= 0.0 {
            return Err(ConfigError::NonPositiveSeparation { separation });
        }
        let mass1 = check_mass("body 1", mass1)?;
        let mass2 = check_mass("body 2", mass2)?;
        let g = check_finite("G", g)?;

        let half = Vec2::new(separation / 2.0, 0.0);
        let total_mass = mass1 + mass2;
        let orbital_speed = (g * total_mass / separation).sqrt();

        let body1 = PointMass::new(
            center - half,
            Vec2::new(0.0, -orbital_speed * (mass2 / total_mass)),
            mass1,
        )?;
        let body2 = PointMass::new(
            center + half,
            Vec2::new(0.0, orbital_speed * (mass1 / total_mass)),
            mass2,
        )?;

        Self::new(body1, body2, g)
    }

    pub fn total_momentum(&self) -> Vec2 {
        self.bodies[0].momentum() + self.bodies[1].momentum()
    }

    /// Snapshot of both bodies, in construction order
    pub fn pair(&self) -> (PointMass, PointMass) {
        (self.bodies[0], self.bodies[1])
    }
}
