//! Swept-circle time of impact

use physplay_core::ccd::{self, detect, find_collision_time, impact_roots, is_colliding};
use physplay_core::tests::test_helpers::{approx_eq, approx_eq_vec, circle};
use physplay_core::Vec2;

const RADIUS: f64 = 20.0;

/// Head-on approach: gap 300 between centers, closing speed 300
fn head_on() -> (physplay_core::MovingCircle, physplay_core::MovingCircle) {
    (
        circle((0.0, 0.0), (300.0, 0.0), RADIUS, 1.0),
        circle((300.0, 0.0), (0.0, 0.0), RADIUS, 1.0),
    )
}

fn expected_head_on_toi() -> f64 {
    (300.0 - 2.0 * RADIUS) / 300.0
}

#[test]
fn test_head_on_time_of_impact() {
    let (a, b) = head_on();
    let t_c = expected_head_on_toi();

    let toi = find_collision_time(&a, &b, 1.0).expect("circles should meet");
    assert!(approx_eq(toi, t_c, 1e-12), "toi {} != {}", toi, t_c);
}

#[test]
fn test_head_on_colliding_only_once_frame_reaches_impact() {
    let (a, b) = head_on();
    let t_c = expected_head_on_toi();

    assert!(is_colliding(&a, &b, t_c * (1.0 + 1e-9)));
    assert!(is_colliding(&a, &b, 1.0));
    assert!(is_colliding(&a, &b, 10.0));

    assert!(!is_colliding(&a, &b, t_c * (1.0 - 1e-6)));
    assert!(!is_colliding(&a, &b, 0.5));
    assert!(!is_colliding(&a, &b, 0.0));
}

#[test]
fn test_roots_are_entry_and_exit() {
    let (a, b) = head_on();
    let (t1, t2) = impact_roots(&a, &b).expect("real roots");

    assert!(t1 <= t2);
    assert!(approx_eq(t1, 260.0 / 300.0, 1e-12));
    assert!(approx_eq(t2, 340.0 / 300.0, 1e-12));
}

#[test]
fn test_separating_circles_never_collide() {
    let a = circle((0.0, 0.0), (-100.0, 0.0), RADIUS, 1.0);
    let b = circle((300.0, 0.0), (100.0, 0.0), RADIUS, 1.0);

    for dt in [0.0, 0.1, 1.0, 100.0, 1.0e6] {
        assert!(!is_colliding(&a, &b, dt), "dt = {}", dt);
        assert!(detect(&a, &b, dt).is_none());
    }
}

#[test]
fn test_overlapping_separating_circles_do_not_collide() {
    // Centers 30 apart with a contact distance of 40, moving apart at 20
    let a = circle((0.0, 0.0), (-10.0, 0.0), RADIUS, 1.0);
    let b = circle((30.0, 0.0), (10.0, 0.0), RADIUS, 1.0);

    assert!(impact_roots(&a, &b).is_none());
    for dt in [0.1, 1.0, 100.0] {
        assert!(!is_colliding(&a, &b, dt), "dt = {}", dt);
        assert!(find_collision_time(&a, &b, dt).is_none());
    }
}

#[test]
fn test_negative_discriminant_misses() {
    // Passes 100 below the target, further than the contact distance of 40
    let a = circle((0.0, 0.0), (300.0, 0.0), RADIUS, 1.0);
    let b = circle((300.0, 100.0), (0.0, 0.0), RADIUS, 1.0);

    assert!(impact_roots(&a, &b).is_none());
    for dt in [0.5, 1.0, 10.0, 1.0e6] {
        assert!(!is_colliding(&a, &b, dt));
    }
    assert!(find_collision_time(&a, &b, 10.0).is_none());
}

#[test]
fn test_zero_relative_velocity_is_no_collision() {
    let a = circle((0.0, 0.0), (50.0, 20.0), RADIUS, 1.0);
    let b = circle((100.0, 0.0), (50.0, 20.0), RADIUS, 1.0);
    assert!(impact_roots(&a, &b).is_none());
    assert!(!is_colliding(&a, &b, 1.0e6));

    // Already overlapping and moving together: still no event
    let c = circle((10.0, 0.0), (50.0, 20.0), RADIUS, 1.0);
    assert!(!is_colliding(&a, &c, 1.0));
    assert!(detect(&a, &c, 1.0).is_none());
}

#[test]
fn test_both_moving_uses_relative_motion() {
    // Closing at 400 with a gap of 240 beyond contact
    let a = circle((0.0, 50.0), (150.0, 0.0), RADIUS, 2.0);
    let b = circle((280.0, 50.0), (-250.0, 0.0), RADIUS, 3.0);

    let toi = find_collision_time(&a, &b, 1.0).unwrap();
    assert!(approx_eq(toi, 240.0 / 400.0, 1e-12));
}

#[test]
fn test_unequal_radii_use_sum_of_radii() {
    let a = circle((0.0, 0.0), (100.0, 0.0), 5.0, 1.0);
    let b = circle((100.0, 0.0), (0.0, 0.0), 15.0, 1.0);

    let toi = find_collision_time(&a, &b, 1.0).unwrap();
    assert!(approx_eq(toi, 0.8, 1e-12));
}

#[test]
fn test_detect_reports_normal_at_impact() {
    let a = circle((0.0, 0.0), (300.0, 0.0), RADIUS, 1.0);
    let b = circle((300.0, 24.0), (0.0, 0.0), RADIUS, 1.0);

    let event = ccd::detect(&a, &b, 2.0).expect("oblique hit");

    // At contact the centers are 40 apart with a vertical offset of 24
    assert!(approx_eq(event.time_of_impact, (300.0 - 32.0) / 300.0, 1e-12));
    assert!(approx_eq_vec(event.contact_normal, Vec2::new(0.8, 0.6), 1e-12));
}
