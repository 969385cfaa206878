//! Browser implementations of the `wwd-core` surface traits.

use dioxus::prelude::*;
use wwd_core::controller::MapSurface;
use wwd_core::coordinate::Coordinate;
use wwd_core::error::ForecastError;
use wwd_core::orchestrator::{ForecastView, ReadoutSurface};
use wwd_core::presenter::{ChartSurface, ForecastCharts};
use wwd_core::reading::CurrentReadout;
use wwd_core::safety::SafetyAssessment;
use wwd_core::series::SeriesKind;

use crate::config::{ChartConfig, MapConfig};
use crate::js_bridge;
use crate::state::AppState;

/// The page's view: Leaflet map, Chart.js charts, signal-backed readouts.
pub type BrowserView = ForecastView<LeafletMap, JsLineChart, SignalReadout>;

/// Build the view and create the JS widgets it drives.
pub fn browser_view(map_container_id: &'static str, map_config: &MapConfig, state: AppState) -> BrowserView {
    let charts = ForecastCharts::new(
        JsLineChart::create(ChartConfig::for_series(SeriesKind::Height)),
        JsLineChart::create(ChartConfig::for_series(SeriesKind::Direction)),
        JsLineChart::create(ChartConfig::for_series(SeriesKind::Period)),
    );
    ForecastView::new(
        LeafletMap::create(map_container_id, map_config),
        charts,
        SignalReadout { state },
    )
}

/// Leaflet map in a DOM container. Markers are addressed by a numeric id.
pub struct LeafletMap {
    container_id: &'static str,
    next_marker: u32,
}

impl LeafletMap {
    pub fn create(container_id: &'static str, config: &MapConfig) -> Self {
        js_bridge::init_map(container_id, &config.to_json());
        LeafletMap {
            container_id,
            next_marker: 0,
        }
    }
}

impl MapSurface for LeafletMap {
    type Marker = u32;

    fn place_marker(&mut self, at: &Coordinate, popup: &str) -> u32 {
        self.next_marker += 1;
        js_bridge::place_marker(
            self.container_id,
            self.next_marker,
            at.latitude(),
            at.longitude(),
            popup,
        );
        self.next_marker
    }

    fn release_marker(&mut self, marker: u32) {
        js_bridge::remove_marker(self.container_id, marker);
    }
}

/// Chart.js line chart on a canvas. Data is staged by `replace_data` and
/// pushed to the widget by `redraw`.
pub struct JsLineChart {
    canvas_id: &'static str,
    labels_json: String,
    data_json: String,
}

impl JsLineChart {
    pub fn create(config: ChartConfig) -> Self {
        js_bridge::init_line_chart(config.canvas_id, &config.to_json());
        JsLineChart {
            canvas_id: config.canvas_id,
            labels_json: "[]".to_string(),
            data_json: "[]".to_string(),
        }
    }
}

/// JSON arrays for Chart.js: labels as strings, absent values as `null`.
pub fn chart_payload(labels: &[String], values: &[Option<f64>]) -> (String, String) {
    (
        serde_json::to_string(labels).unwrap_or_else(|_| "[]".to_string()),
        serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string()),
    )
}

impl ChartSurface for JsLineChart {
    fn replace_data(&mut self, labels: &[String], values: &[Option<f64>]) {
        let (labels_json, data_json) = chart_payload(labels, values);
        self.labels_json = labels_json;
        self.data_json = data_json;
    }

    fn redraw(&mut self) {
        js_bridge::update_line_chart(self.canvas_id, &self.labels_json, &self.data_json);
    }
}

/// Writes readouts into `AppState` signals for the components to render.
pub struct SignalReadout {
    state: AppState,
}

impl ReadoutSurface for SignalReadout {
    fn show_pending(&mut self, at: &Coordinate) {
        self.state.pending.set(Some(*at));
    }

    fn show_current(&mut self, at: &Coordinate, readout: &CurrentReadout) {
        self.state.pending.set(None);
        self.state.coordinate.set(Some(*at));
        self.state.current.set(Some(readout.clone()));
    }

    fn show_assessment(&mut self, assessment: &SafetyAssessment) {
        self.state.assessment.set(Some(assessment.clone()));
    }

    fn show_notice(&mut self, message: &str) {
        self.state.pending.set(None);
        js_bridge::alert(message);
    }

    fn show_failure(&mut self, error: &ForecastError) {
        self.state.pending.set(None);
        self.state
            .error_msg
            .set(Some(format!("Could not load wind-wave data: {}", error)));
    }

    fn clear_failure(&mut self) {
        self.state.error_msg.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_payload_uses_null_for_gaps() {
        let (labels, data) = chart_payload(
            &["2024-10-01 00:00".to_string(), "2024-10-01 01:00".to_string()],
            &[Some(0.5), None],
        );
        assert_eq!(labels, r#"["2024-10-01 00:00","2024-10-01 01:00"]"#);
        assert_eq!(data, "[0.5,null]");
    }

    #[test]
    fn test_chart_payload_empty() {
        assert_eq!(chart_payload(&[], &[]), ("[]".to_string(), "[]".to_string()));
    }
}
