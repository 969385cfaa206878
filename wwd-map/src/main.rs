//! Wind-Wave Map
//!
//! Click a point on a Leaflet map to load the stored wind-wave forecast for
//! that coordinate. The result is shown as a marker, a readings table, three
//! Chart.js time series (height, direction, period) and a sailing safety
//! assessment.
//!
//! Data flow:
//! 1. On mount: load Leaflet/Chart.js glue, create the map and the empty charts.
//! 2. Map clicks arrive from JS on a channel; each one opens a request ticket.
//! 3. Each request runs as its own task (`POST /get-stored-data`).
//! 4. When it settles, the view applies it only if no newer click happened.

use dioxus::prelude::*;
use futures::channel::mpsc;
use futures::StreamExt;
use wwd_core::client::ForecastClient;
use wwd_core::series::SeriesKind;
use wwd_map_ui::components::{
    ChartContainer, ChartHeader, CoordinateReadout, ErrorDisplay, LoadingSpinner, MapCanvas,
    ReadingsTable, SafetyReport,
};
use wwd_map_ui::config::{chart_canvas_id, MapConfig, MAP_CONTAINER_ID};
use wwd_map_ui::js_bridge;
use wwd_map_ui::state::AppState;
use wwd_map_ui::surfaces::{browser_view, BrowserView};

/// Server used when the page origin cannot be read.
const FALLBACK_ORIGIN: &str = "http://127.0.0.1:5000";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("wind-wave-root"))
        .launch(App);
}

/// Forward map clicks into `view`, running one fetch task per click.
async fn handle_clicks(
    mut clicks: mpsc::UnboundedReceiver<(f64, f64)>,
    mut view: Signal<Option<BrowserView>>,
    client: ForecastClient,
) {
    while let Some((lat, lng)) = clicks.next().await {
        let ticket = {
            let mut guard = view.write();
            let Some(v) = guard.as_mut() else {
                log::warn!("Map click before the view was ready");
                continue;
            };
            match v.click(lat, lng) {
                Ok(ticket) => ticket,
                Err(e) => {
                    log::warn!("Ignoring click: {}", e);
                    continue;
                }
            }
        };

        let client = client.clone();
        spawn(async move {
            let result = client.fetch(ticket.coordinate()).await;
            if let Some(v) = view.write().as_mut() {
                v.settle(ticket, result);
            }
        });
    }
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let mut view: Signal<Option<BrowserView>> = use_signal(|| None);

    // ─── On mount: widgets, click channel, request loop ───
    // Reads no signals, so it runs once, after the map container is in the DOM.
    use_effect(move || {
        js_bridge::init_scripts();
        view.set(Some(browser_view(
            MAP_CONTAINER_ID,
            &MapConfig::default(),
            state,
        )));

        let origin = js_bridge::page_origin().unwrap_or_else(|| FALLBACK_ORIGIN.to_string());
        log::info!("Using wind-wave server at {}", origin);
        let client = ForecastClient::new(&origin);

        let (tx, rx) = mpsc::unbounded::<(f64, f64)>();
        js_bridge::register_map_click(move |lat, lng| {
            let _ = tx.unbounded_send((lat, lng));
        });
        spawn(handle_clicks(rx, view, client));
    });

    let pending = state.pending.read().as_ref().map(|c| c.to_string());

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h2 { style: "margin: 8px 0;", "Wind Wave Conditions" }

            MapCanvas { id: MAP_CONTAINER_ID.to_string() }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if let Some(subject) = pending {
                LoadingSpinner { subject: subject.clone() }
            }

            CoordinateReadout {}
            ReadingsTable {}

            h3 { style: "margin: 16px 0 4px 0; font-size: 16px;", "Sailing Safety" }
            SafetyReport {}

            for kind in SeriesKind::ALL {
                div {
                    key: "{chart_canvas_id(kind)}",
                    style: "margin-top: 16px;",
                    ChartHeader { kind: kind }
                    ChartContainer { id: chart_canvas_id(kind).to_string() }
                }
            }
        }
    }
}
