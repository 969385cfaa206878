//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals behind the page's text regions into
//! a single struct provided via `use_context_provider`. Child components
//! retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use wwd_core::coordinate::Coordinate;
use wwd_core::reading::CurrentReadout;
use wwd_core::safety::SafetyAssessment;

/// Shared state for the wind-wave map page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Coordinate of the request in flight, if any
    pub pending: Signal<Option<Coordinate>>,
    /// Coordinate of the last successful response
    pub coordinate: Signal<Option<Coordinate>>,
    /// Readings table of the last successful response
    pub current: Signal<Option<CurrentReadout>>,
    /// Safety narrative of the last successful response
    pub assessment: Signal<Option<SafetyAssessment>>,
    /// Last request failure
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with empty signals.
    pub fn new() -> Self {
        Self {
            pending: Signal::new(None),
            coordinate: Signal::new(None),
            current: Signal::new(None),
            assessment: Signal::new(None),
            error_msg: Signal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
