//! Continuous collision detection for two moving circles
//!
//! Instead of testing for overlap at the end of a frame, the circles' centers
//! are swept linearly across the frame and the time at which they are
//! exactly `r1 + r2` apart is solved for in closed form:
//!
//! ```text
//! |rel_pos + rel_vel * t|^2 = (r1 + r2)^2
//! a t^2 + b t + c = 0
//!   a = rel_vel . rel_vel
//!   b = 2 rel_pos . rel_vel
//!   c = rel_pos . rel_pos - (r1 + r2)^2
//! ```
//!
//! A fast circle therefore cannot tunnel through the other one between two
//! frames.

use crate::body::MovingCircle;
use crate::vector::{self, Vec2};

/// First contact between two circles inside a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    /// Time after the start of the frame, in `[0, dt]`
    pub time_of_impact: f64,
    /// Unit vector from the first circle's center to the second's at impact
    pub contact_normal: Vec2,
}

/// Both roots of the swept-circle quadratic, `t1 <= t2`
///
/// Returns `None` when there is no contact to resolve: no relative motion,
/// centers that are not closing in (`b >= 0`), or a negative discriminant.
/// Overlapping circles that are already separating report nothing, so the
/// resolver never turns them back into each other.
pub fn impact_roots(c1: &MovingCircle, c2: &MovingCircle) -> Option<(f64, f64)> {
    let rel_pos = vector::subtract(c2.position, c1.position);
    let rel_vel = vector::subtract(c2.velocity, c1.velocity);
    let contact = c1.radius + c2.radius;

    let a = vector::dot(rel_vel, rel_vel);
    // No relative motion: the gap never changes, so there is no contact event
    if a == 0.0 {
        return None;
    }
    let b = 2.0 * vector::dot(rel_pos, rel_vel);
    // Separating or sliding past each other: the gap is not shrinking
    if b >= 0.0 {
        return None;
    }
    let c = vector::dot(rel_pos, rel_pos) - contact * contact;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let t1 = (-b - sqrt_disc) / (2.0 * a);
    let t2 = (-b + sqrt_disc) / (2.0 * a);
    Some((t1, t2))
}

/// True if either root falls inside `[0, dt]`
pub fn is_colliding(c1: &MovingCircle, c2: &MovingCircle, dt: f64) -> bool {
    match impact_roots(c1, c2) {
        Some((t1, t2)) => within_frame(t1, dt) || within_frame(t2, dt),
        None => false,
    }
}

/// Time of impact within the frame: `t1` if it is in `[0, dt]`, else `t2`
///
/// Only meaningful after [`is_colliding`] returned true; `None` when the
/// circles never touch.
pub fn find_collision_time(c1: &MovingCircle, c2: &MovingCircle, dt: f64) -> Option<f64> {
    impact_roots(c1, c2).map(|(t1, t2)| if within_frame(t1, dt) { t1 } else { t2 })
}

/// Detect the collision in `[0, dt]`, if any
pub fn detect(c1: &MovingCircle, c2: &MovingCircle, dt: f64) -> Option<CollisionEvent> {
    let (t1, t2) = impact_roots(c1, c2)?;
    let time_of_impact = if within_frame(t1, dt) {
        t1
    } else if within_frame(t2, dt) {
        t2
    } else {
        return None;
    };

    let p1 = c1.position + c1.velocity * time_of_impact;
    let p2 = c2.position + c2.velocity * time_of_impact;
    Some(CollisionEvent {
        time_of_impact,
        contact_normal: vector::direction(p1, p2),
    })
}

fn within_frame(t: f64, dt: f64) -> bool {
    (0.0..=dt).contains(&t)
}
