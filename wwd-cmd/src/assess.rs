//! Offline commands: safety assessment and bearing classification.

use wwd_core::direction::CompassDirection;
use wwd_core::safety::{analyze, SafetyThresholds};

/// Safety narrative for the given readings, one sentence per line.
pub fn run_assess(height: Option<f64>, direction: Option<f64>, period: Option<f64>) -> String {
    analyze(height, direction, period, &SafetyThresholds::default()).to_string()
}

pub fn run_classify(degrees: f64) -> String {
    CompassDirection::from_degrees(degrees).to_string()
}
