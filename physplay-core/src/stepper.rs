//! Per-frame advance of the two-circle collision scenario

use crate::body::MovingCircle;
use crate::ccd::{self, CollisionEvent};
use crate::resolver;

/// Advance both circles by `dt`, resolving at most one collision
///
/// With a contact inside the frame, the circles drift to the time of impact
/// on their incoming velocities, the contact is resolved, and the rest of
/// the frame is covered with the outgoing velocities. A second contact in the
/// remainder of the frame is not looked for.
pub fn advance(c1: &mut MovingCircle, c2: &mut MovingCircle, dt: f64) -> Option<CollisionEvent> {
    if !ccd::is_colliding(c1, c2, dt) {
        c1.advance(dt);
        c2.advance(dt);
        return None;
    }

    let time_of_impact = ccd::find_collision_time(c1, c2, dt)?;
    c1.advance(time_of_impact);
    c2.advance(time_of_impact);

    let contact_normal = resolver::resolve(c1, c2);

    let remaining = dt - time_of_impact;
    c1.advance(remaining);
    c2.advance(remaining);

    log::debug!(
        "collision at t={:.6} normal=({:.4}, {:.4}); v1={:?} v2={:?}",
        time_of_impact,
        contact_normal.x,
        contact_normal.y,
        c1.velocity,
        c2.velocity
    );

    Some(CollisionEvent {
        time_of_impact,
        contact_normal,
    })
}

/// Value-in, value-out form of [`advance`]
pub fn advanced(
    mut c1: MovingCircle,
    mut c2: MovingCircle,
    dt: f64,
) -> (MovingCircle, MovingCircle, Option<CollisionEvent>) {
    let event = advance(&mut c1, &mut c2, dt);
    (c1, c2, event)
}
