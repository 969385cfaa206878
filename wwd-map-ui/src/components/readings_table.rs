//! Table of the current wind-wave readings.

use crate::state::AppState;
use dioxus::prelude::*;
use wwd_core::reading::NOT_AVAILABLE;

/// Current height, direction and period ("N/A" for absent readings).
#[component]
pub fn ReadingsTable() -> Element {
    let state = use_context::<AppState>();
    let readout = state.current.read().clone();
    let (time, height, direction, period, peak_period) = match readout {
        Some(c) => (c.time, c.height, c.direction, c.period, c.peak_period),
        None => (
            None,
            NOT_AVAILABLE.to_string(),
            NOT_AVAILABLE.to_string(),
            NOT_AVAILABLE.to_string(),
            NOT_AVAILABLE.to_string(),
        ),
    };

    rsx! {
        table {
            style: "border-collapse: collapse; margin: 8px 0; font-size: 14px;",
            thead {
                tr {
                    th { style: "text-align: left; padding: 4px 12px 4px 0;", "Reading" }
                    th { style: "text-align: left; padding: 4px 0;", "Value" }
                }
            }
            tbody {
                if let Some(time) = time {
                    tr {
                        td { style: "padding: 4px 12px 4px 0;", "Time" }
                        td { id: "windTime", "{time}" }
                    }
                }
                tr {
                    td { style: "padding: 4px 12px 4px 0;", "Wind Wave Height (m)" }
                    td { id: "windHeight", "{height}" }
                }
                tr {
                    td { style: "padding: 4px 12px 4px 0;", "Wind Wave Direction (°)" }
                    td { id: "windDirection", "{direction}" }
                }
                tr {
                    td { style: "padding: 4px 12px 4px 0;", "Wind Wave Period (s)" }
                    td { id: "windPeriod", "{period}" }
                }
                tr {
                    td { style: "padding: 4px 12px 4px 0;", "Peak Period (s)" }
                    td { id: "windPeakPeriod", "{peak_period}" }
                }
            }
        }
    }
}
