//! Text lines printed by the driver, one per frame or event

use physplay_core::{CollisionEvent, DriftTracker, EnergyReport, IntegrationMethod, MovingCircle};

pub fn energy_line(step: usize, energy: &EnergyReport) -> String {
    format!(
        "step {:>6}  kinetic {:.3}  potential {:.3}  total {:.3}",
        step, energy.kinetic, energy.potential, energy.total
    )
}

pub fn drift_line(method: IntegrationMethod, tracker: &DriftTracker) -> String {
    format!(
        "{:<5} initial total {:.6}  max drift {:.3e}  final drift {:.3e}",
        method.name(),
        tracker.initial_total(),
        tracker.max_drift(),
        tracker.last_drift()
    )
}

pub fn velocity_line(frame: usize, c1: &MovingCircle, c2: &MovingCircle) -> String {
    format!(
        "frame {:>4}  circle 1 vel ({:.3}, {:.3})  circle 2 vel ({:.3}, {:.3})",
        frame, c1.velocity.x, c1.velocity.y, c2.velocity.x, c2.velocity.y
    )
}

pub fn collision_line(frame: usize, event: &CollisionEvent) -> String {
    format!(
        "frame {:>4}  collision at +{:.6}s  normal ({:.4}, {:.4})",
        frame, event.time_of_impact, event.contact_normal.x, event.contact_normal.y
    )
}
