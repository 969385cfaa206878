//! Latitude/longitude of the last successful lookup.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn CoordinateReadout() -> Element {
    let state = use_context::<AppState>();
    let (latitude, longitude) = match *state.coordinate.read() {
        Some(c) => (c.latitude_str(), c.longitude_str()),
        None => ("-".to_string(), "-".to_string()),
    };

    rsx! {
        div {
            style: "margin: 8px 0; font-size: 14px;",
            span { style: "font-weight: bold;", "Latitude: " }
            span { id: "latitude", "{latitude}" }
            span { style: "font-weight: bold; margin-left: 16px;", "Longitude: " }
            span { id: "longitude", "{longitude}" }
        }
    }
}
