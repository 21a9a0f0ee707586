//! Configuration errors
//!
//! Every failure the crate can report is a setup problem. Stepping a valid
//! scenario never fails; degenerate geometry during a step is absorbed
//! locally (see [`crate::ccd`]).

use thiserror::Error;

/// Invalid scenario or body configuration, rejected at construction time
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{body}: mass must be positive, got {mass}")]
    NonPositiveMass { body: &'static str, mass: f64 },

    #[error("{body}: radius must be positive, got {radius}")]
    NonPositiveRadius { body: &'static str, radius: f64 },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("initial separation must be positive, got {separation}")]
    NonPositiveSeparation { separation: f64 },

    #[error("timestep must be positive, got {dt}")]
    NonPositiveTimestep { dt: f64 },
}

pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

pub(crate) fn check_finite_vec(
    field: &'static str,
    value: crate::vector::Vec2,
) -> Result<crate::vector::Vec2, ConfigError> {
    check_finite(field, value.x)?;
    check_finite(field, value.y)?;
    Ok(value)
}

pub(crate) fn check_mass(body: &'static str, mass: f64) -> Result<f64, ConfigError> {
    // NaN fails the comparison and lands here too
    if mass > 0.0 && mass.is_finite() {
        Ok(mass)
    } else {
        Err(ConfigError::NonPositiveMass { body, mass })
    }
}

pub(crate) fn check_radius(body: &'static str, radius: f64) -> Result<f64, ConfigError> {
    if radius > 0.0 && radius.is_finite() {
        Ok(radius)
    } else {
        Err(ConfigError::NonPositiveRadius { body, radius })
    }
}

pub(crate) fn check_timestep(dt: f64) -> Result<f64, ConfigError> {
    if dt > 0.0 && dt.is_finite() {
        Ok(dt)
    } else {
        Err(ConfigError::NonPositiveTimestep { dt })
    }
}
