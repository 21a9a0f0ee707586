//! Energy diagnostics for the two-body system
//!
//! These are observables only. A growing energy drift is how integrator
//! instability shows up; nothing in the core treats it as an error.

use crate::gravity::GravityModel;
use crate::system::TwoBodyGravitySystem;

/// Kinetic, potential and total energy of a two-body state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyReport {
    pub kinetic: f64,
    pub potential: f64,
    pub total: f64,
}

impl EnergyReport {
    pub fn of(system: &TwoBodyGravitySystem) -> Self {
        let [a, b] = &system.bodies;
        let kinetic = GravityModel::kinetic_energy(a) + GravityModel::kinetic_energy(b);
        let potential = system.gravity.potential_energy(a, b);
        Self {
            kinetic,
            potential,
            total: kinetic + potential,
        }
    }
}

/// `|current - initial| / |initial|`, or the absolute change when `initial` is zero
pub fn relative_drift(initial: f64, current: f64) -> f64 {
    let delta = (current - initial).abs();
    if initial == 0.0 {
        delta
    } else {
        delta / initial.abs()
    }
}

/// Tracks the worst relative energy drift seen over a run
#[derive(Debug, Clone, Copy)]
pub struct DriftTracker {
    initial_total: f64,
    last_drift: f64,
    max_drift: f64,
}

impl DriftTracker {
    pub fn new(initial: &EnergyReport) -> Self {
        Self {
            initial_total: initial.total,
            last_drift: 0.0,
            max_drift: 0.0,
        }
    }

    /// Record a new sample and return its relative drift
    pub fn record(&mut self, report: &EnergyReport) -> f64 {
        let drift = relative_drift(self.initial_total, report.total);
        self.last_drift = drift;
        // NaN sticks once seen
        if drift.is_nan() || drift > self.max_drift {
            self.max_drift = drift;
        }
        drift
    }

    pub fn initial_total(&self) -> f64 {
        self.initial_total
    }

    pub fn last_drift(&self) -> f64 {
        self.last_drift
    }

    pub fn max_drift(&self) -> f64 {
        self.max_drift
    }

    /// True once any recorded sample drifted past `threshold`
    pub fn is_diverging(&self, threshold: f64) -> bool {
        self.max_drift > threshold || self.max_drift.is_nan()
    }
}
