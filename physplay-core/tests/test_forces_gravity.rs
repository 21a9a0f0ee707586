//! Unit tests for the softened gravity model

use physplay_core::gravity::{GravityModel, SOFTENING_FLOOR};
use physplay_core::tests::test_helpers::{approx_eq, approx_eq_vec, point_mass};
use physplay_core::Vec2;

#[test]
fn test_gravity_force_magnitude() {
    let gravity = GravityModel::new(1.0);
    let a = point_mass((0.0, 0.0), (0.0, 0.0), 1.0);
    let b = point_mass((3.0, 4.0), (0.0, 0.0), 2.0); // distance = 5.0

    let force = gravity.force(&a, &b);

    // F = G * m_a * m_b / r² = 2 / 25, directed from a to b
    let expected = Vec2::new(0.6, 0.8) * (2.0 / 25.0);
    assert!(approx_eq_vec(force, expected, 1e-12), "got {:?}", force);
}

#[test]
fn test_gravity_force_is_antisymmetric() {
    let gravity = GravityModel::new(1.0);
    let a = point_mass((-10.0, 3.0), (0.0, 0.0), 4.0);
    let b = point_mass((25.0, -7.0), (0.0, 0.0), 9.0);

    let on_a = gravity.force(&a, &b);
    let on_b = gravity.force(&b, &a);

    assert!(approx_eq_vec(on_a, -on_b, 1e-12));
    assert!(on_a.x > 0.0, "a is pulled towards b");
}

#[test]
fn test_gravity_scales_with_g() {
    let a = point_mass((0.0, 0.0), (0.0, 0.0), 1.0);
    let b = point_mass((3.0, 4.0), (0.0, 0.0), 2.0);

    let weak = GravityModel::new(1.0).force(&a, &b);
    let strong = GravityModel::new(2.0).force(&a, &b);

    assert!(approx_eq_vec(strong, weak * 2.0, 1e-12));
}

#[test]
fn test_softening_at_zero_distance_matches_floor() {
    let gravity = GravityModel::new(1.0);
    let a = point_mass((5.0, 5.0), (0.0, 0.0), 10.0);
    let coincident = point_mass((5.0, 5.0), (0.0, 0.0), 10.0);
    let at_floor = point_mass((5.0 + SOFTENING_FLOOR, 5.0), (0.0, 0.0), 10.0);

    let at_zero = gravity.force(&a, &coincident);
    let at_one = gravity.force(&a, &at_floor);

    assert!(at_zero.is_finite());
    assert!(approx_eq(at_zero.length(), at_one.length(), 1e-12));
    assert!(approx_eq(at_one.length(), 100.0, 1e-12));
}

#[test]
fn test_softening_active_below_floor() {
    let gravity = GravityModel::new(1.0);
    let a = point_mass((0.0, 0.0), (0.0, 0.0), 3.0);
    let near = point_mass((0.0, 0.25), (0.0, 0.0), 2.0);

    let force = gravity.force(&a, &near);

    // Distance is clamped to 1, direction is still exact
    assert!(approx_eq_vec(force, Vec2::new(0.0, 6.0), 1e-12), "got {:?}", force);
}

#[test]
fn test_softening_inactive_above_floor() {
    let gravity = GravityModel::new(1.0);
    let a = point_mass((0.0, 0.0), (0.0, 0.0), 1.0);
    let b = point_mass((2.0, 0.0), (0.0, 0.0), 1.0);

    assert!(approx_eq(gravity.force(&a, &b).length(), 0.25, 1e-12));
}

#[test]
fn test_potential_energy() {
    let gravity = GravityModel::new(1.0);
    let a = point_mass((0.0, 0.0), (0.0, 0.0), 10.0);
    let b = point_mass((200.0, 0.0), (0.0, 0.0), 10.0);
    assert!(approx_eq(gravity.potential_energy(&a, &b), -0.5, 1e-12));

    // Floored below 1
    let close = point_mass((0.1, 0.0), (0.0, 0.0), 10.0);
    assert!(approx_eq(gravity.potential_energy(&a, &close), -100.0, 1e-12));
}

#[test]
fn test_kinetic_energy() {
    let body = point_mass((0.0, 0.0), (3.0, 4.0), 2.0);
    assert!(approx_eq(GravityModel::kinetic_energy(&body), 25.0, 1e-12));
}
