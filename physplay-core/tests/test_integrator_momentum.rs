//! Momentum conservation under both integration methods

use physplay_core::tests::test_helpers::{approx_eq_vec, default_orbit, point_mass};
use physplay_core::{integrator, IntegrationMethod, TwoBodyGravitySystem};

fn assert_momentum_conserved(system: TwoBodyGravitySystem, dt: f64, steps: usize) {
    for method in IntegrationMethod::ALL {
        let mut stepped = system;
        let before = stepped.total_momentum();
        for _ in 0..steps {
            integrator::step(&mut stepped, dt, method);
        }
        let after = stepped.total_momentum();
        assert!(
            approx_eq_vec(before, after, 1e-9),
            "{} changed momentum from {:?} to {:?}",
            method,
            before,
            after
        );
    }
}

#[test]
fn test_momentum_default_orbit() {
    assert_momentum_conserved(default_orbit(), 5.0, 1000);
}

#[test]
fn test_momentum_unequal_masses_with_drift() {
    let system = TwoBodyGravitySystem::new(
        point_mass((10.0, 20.0), (0.3, -0.1), 3.0),
        point_mass((120.0, -40.0), (-0.05, 0.2), 50.0),
        1.0,
    )
    .unwrap();
    assert_momentum_conserved(system, 2.0, 500);
}

#[test]
fn test_momentum_through_close_approach() {
    // Head-on fall: the bodies pass through the softened core
    let system = TwoBodyGravitySystem::new(
        point_mass((-20.0, 0.0), (0.0, 0.0), 5.0),
        point_mass((20.0, 0.0), (0.0, 0.0), 7.0),
        2.0,
    )
    .unwrap();
    assert_momentum_conserved(system, 0.1, 2000);
}

#[test]
fn test_momentum_with_coincident_bodies() {
    let system = TwoBodyGravitySystem::new(
        point_mass((0.0, 0.0), (1.0, 0.0), 1.0),
        point_mass((0.0, 0.0), (-1.0, 0.5), 2.0),
        1.0,
    )
    .unwrap();
    assert_momentum_conserved(system, 0.5, 100);
}
