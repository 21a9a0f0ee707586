//! Scenario state owned by the frame loop
//!
//! Each scenario holds its bodies and the configuration they were built
//! from, and exposes one call per frame. The frame loop (rendering, input)
//! lives outside this crate and only reads the returned snapshots.

use crate::body::{MovingCircle, PointMass};
use crate::ccd::CollisionEvent;
use crate::config::{CollisionConfig, GravityConfig};
use crate::energy::EnergyReport;
use crate::error::ConfigError;
use crate::integrator::{self, IntegrationMethod};
use crate::stepper;
use crate::system::TwoBodyGravitySystem;

/// Two-body orbit with a selectable integrator
#[derive(Debug, Clone)]
pub struct GravityScenario {
    config: GravityConfig,
    initial: TwoBodyGravitySystem,
    system: TwoBodyGravitySystem,
    method: IntegrationMethod,
    elapsed: f64,
    steps: u64,
}

impl GravityScenario {
    pub fn new(config: GravityConfig) -> Result<Self, ConfigError> {
        let system = config.build()?;
        log::info!(
            "gravity scenario: m1={} m2={} separation={} G={} method={}",
            config.mass1,
            config.mass2,
            config.separation,
            config.g,
            config.method
        );
        Ok(Self {
            config,
            initial: system,
            system,
            method: config.method,
            elapsed: 0.0,
            steps: 0,
        })
    }

    /// Advance by `dt` with an explicitly chosen method
    pub fn step(&mut self, dt: f64, method: IntegrationMethod) -> (PointMass, PointMass) {
        integrator::step(&mut self.system, dt, method);
        self.elapsed += dt;
        self.steps += 1;
        self.system.pair()
    }

    /// Advance by `dt` with the currently selected method
    pub fn step_selected(&mut self, dt: f64) -> (PointMass, PointMass) {
        self.step(dt, self.method)
    }

    /// Advance by the configured timestep with the selected method
    pub fn step_frame(&mut self) -> (PointMass, PointMass) {
        self.step_selected(self.config.dt)
    }

    pub fn select_method(&mut self, method: IntegrationMethod) {
        self.method = method;
    }

    pub fn method(&self) -> IntegrationMethod {
        self.method
    }

    pub fn energy(&self) -> EnergyReport {
        EnergyReport::of(&self.system)
    }

    pub fn system(&self) -> &TwoBodyGravitySystem {
        &self.system
    }

    pub fn config(&self) -> &GravityConfig {
        &self.config
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Restore the initial orbit; the selected method is kept
    pub fn reset(&mut self) {
        self.system = self.initial;
        self.elapsed = 0.0;
        self.steps = 0;
        log::info!("gravity scenario reset");
    }
}

/// Two circles on a collision course
#[derive(Debug, Clone)]
pub struct CollisionScenario {
    config: CollisionConfig,
    initial: (MovingCircle, MovingCircle),
    circles: (MovingCircle, MovingCircle),
    collisions: u64,
}

impl CollisionScenario {
    pub fn new(config: CollisionConfig) -> Result<Self, ConfigError> {
        let circles = config.build()?;
        log::info!(
            "collision scenario: p1={:?} v1={:?} p2={:?} v2={:?}",
            config.position1,
            config.velocity1,
            config.position2,
            config.velocity2
        );
        Ok(Self {
            config,
            initial: circles,
            circles,
            collisions: 0,
        })
    }

    /// Advance one frame and return both circles
    pub fn advance(&mut self, dt: f64) -> (MovingCircle, MovingCircle) {
        self.advance_with_event(dt);
        self.circles
    }

    /// Advance one frame and report the collision resolved in it, if any
    pub fn advance_with_event(&mut self, dt: f64) -> Option<CollisionEvent> {
        let (c1, c2) = &mut self.circles;
        let event = stepper::advance(c1, c2, dt);
        if event.is_some() {
            self.collisions += 1;
        }
        event
    }

    pub fn circles(&self) -> (MovingCircle, MovingCircle) {
        self.circles
    }

    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }

    pub fn collision_count(&self) -> u64 {
        self.collisions
    }

    /// Put both circles back at their configured initial state
    pub fn reset(&mut self) {
        self.circles = self.initial;
        self.collisions = 0;
        log::info!("collision scenario reset");
    }
}
