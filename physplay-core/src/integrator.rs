//! Time integration for the two-body gravity system
//!
//! The integration method is chosen per call. Nothing here keeps state
//! between steps; the caller owns the system and decides which scheme to use.

use crate::system::TwoBodyGravitySystem;
use crate::vector::Vec2;
use std::fmt;

/// Available integration schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IntegrationMethod {
    /// Semi-implicit (symplectic) Euler, first order
    Euler,
    /// Classical fourth-order Runge-Kutta
    #[default]
    Rk4,
}

impl IntegrationMethod {
    pub const ALL: [IntegrationMethod; 2] = [IntegrationMethod::Euler, IntegrationMethod::Rk4];

    pub fn name(self) -> &'static str {
        match self {
            IntegrationMethod::Euler => "Euler",
            IntegrationMethod::Rk4 => "RK4",
        }
    }
}

impl fmt::Display for IntegrationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Step the system forward by `dt` using `method`
///
/// Positions and velocities of both bodies are updated in place. Masses are
/// never touched.
pub fn step(system: &mut TwoBodyGravitySystem, dt: f64, method: IntegrationMethod) {
    match method {
        IntegrationMethod::Euler => step_euler(system, dt),
        IntegrationMethod::Rk4 => step_rk4(system, dt),
    }
    log::trace!(
        "{} step dt={}: p1={:?} p2={:?}",
        method,
        dt,
        system.bodies[0].position,
        system.bodies[1].position
    );
}

/// Semi-implicit Euler: v += a*dt from the pre-step positions, then x += v*dt
pub fn step_euler(system: &mut TwoBodyGravitySystem, dt: f64) {
    // Both accelerations come from the same pre-step positions
    let positions = [system.bodies[0].position, system.bodies[1].position];
    let accel = accelerations(system, positions);

    for (body, a) in system.bodies.iter_mut().zip(accel) {
        body.velocity += a * dt;
    }
    for body in system.bodies.iter_mut() {
        body.position += body.velocity * dt;
    }
}

/// Classical RK4 over the coupled state of both bodies
///
/// Every stage evaluates accelerations from the provisional positions of both
/// bodies at that stage, so the pair advances in lock-step through all four
/// stages.
pub fn step_rk4(system: &mut TwoBodyGravitySystem, dt: f64) {
    let start = PairState {
        position: [system.bodies[0].position, system.bodies[1].position],
        velocity: [system.bodies[0].velocity, system.bodies[1].velocity],
    };

    let k1 = derivative(system, &start);
    let k2 = derivative(system, &start.offset(&k1, 0.5 * dt));
    let k3 = derivative(system, &start.offset(&k2, 0.5 * dt));
    let k4 = derivative(system, &start.offset(&k3, dt));

    let sixth = dt / 6.0;
    for (i, body) in system.bodies.iter_mut().enumerate() {
        body.velocity += sixth
            * (k1.velocity[i] + 2.0 * k2.velocity[i] + 2.0 * k3.velocity[i] + k4.velocity[i]);
        body.position += sixth
            * (k1.position[i] + 2.0 * k2.position[i] + 2.0 * k3.position[i] + k4.position[i]);
    }
}

/// Positions and velocities of both bodies; also used for their time derivatives
#[derive(Debug, Clone, Copy)]
struct PairState {
    position: [Vec2; 2],
    velocity: [Vec2; 2],
}

impl PairState {
    /// `self + rate * h`
    fn offset(&self, rate: &PairState, h: f64) -> PairState {
        PairState {
            position: [
                self.position[0] + rate.position[0] * h,
                self.position[1] + rate.position[1] * h,
            ],
            velocity: [
                self.velocity[0] + rate.velocity[0] * h,
                self.velocity[1] + rate.velocity[1] * h,
            ],
        }
    }
}

fn derivative(system: &TwoBodyGravitySystem, state: &PairState) -> PairState {
    PairState {
        position: state.velocity,
        velocity: accelerations(system, state.position),
    }
}

/// Accelerations of both bodies at the given positions
fn accelerations(system: &TwoBodyGravitySystem, position: [Vec2; 2]) -> [Vec2; 2] {
    let [a, b] = &system.bodies;
    let force_on_a = system
        .gravity
        .force_between(position[0], a.mass, position[1], b.mass);
    [force_on_a / a.mass, -force_on_a / b.mass]
}
