//! Map and chart settings, serialized to JSON for the JS side.

use serde::Serialize;
use wwd_core::series::SeriesKind;

/// DOM id of the Leaflet map container.
pub const MAP_CONTAINER_ID: &str = "wind-wave-map";

/// Line color shared by the three charts.
pub const CHART_BORDER_COLOR: &str = "rgba(75, 192, 192, 1)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayerConfig {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerIconConfig {
    pub url: String,
    pub size: [i32; 2],
    pub anchor: [i32; 2],
    pub popup_anchor: [i32; 2],
}

/// Leaflet map setup. The first layer is shown initially; all layers are
/// offered in the layer switcher.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapConfig {
    pub center: [f64; 2],
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub layers: Vec<TileLayerConfig>,
    pub icon: MarkerIconConfig,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            center: [8.926317, 124.158692],
            zoom: 7,
            min_zoom: 7,
            max_zoom: 10,
            layers: vec![
                TileLayerConfig {
                    name: "Street Map".to_string(),
                    url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
                    attribution: None,
                },
                TileLayerConfig {
                    name: "Topographic Map".to_string(),
                    url: "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png".to_string(),
                    attribution: Some(
                        "Map data: &copy; OpenStreetMap contributors, SRTM | Map style: &copy; OpenTopoMap"
                            .to_string(),
                    ),
                },
            ],
            icon: MarkerIconConfig {
                url: "assets/marker.png".to_string(),
                size: [38, 45],
                anchor: [22, 45],
                popup_anchor: [-3, -45],
            },
        }
    }
}

impl MapConfig {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// One single-dataset line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(skip)]
    pub canvas_id: &'static str,
    pub label: &'static str,
    pub border_color: &'static str,
    pub fill: bool,
    pub show_legend: bool,
}

impl ChartConfig {
    pub fn for_series(kind: SeriesKind) -> Self {
        ChartConfig {
            canvas_id: chart_canvas_id(kind),
            label: kind.label(),
            border_color: CHART_BORDER_COLOR,
            fill: false,
            show_legend: true,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Canvas element id for a series chart.
pub fn chart_canvas_id(kind: SeriesKind) -> &'static str {
    match kind {
        SeriesKind::Height => "wave-height-chart",
        SeriesKind::Direction => "wave-direction-chart",
        SeriesKind::Period => "wave-period-chart",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_config_json() {
        let json: serde_json::Value = serde_json::from_str(&MapConfig::default().to_json()).unwrap();
        assert_eq!(json["center"], serde_json::json!([8.926317, 124.158692]));
        assert_eq!(json["min_zoom"], 7);
        assert_eq!(json["max_zoom"], 10);
        assert_eq!(json["layers"][0]["name"], "Street Map");
        assert!(json["layers"][0].get("attribution").is_none());
        assert_eq!(json["layers"][1]["name"], "Topographic Map");
        assert_eq!(json["icon"]["popup_anchor"], serde_json::json!([-3, -45]));
    }

    #[test]
    fn test_chart_config() {
        let config = ChartConfig::for_series(SeriesKind::Period);
        assert_eq!(config.canvas_id, "wave-period-chart");
        let json: serde_json::Value = serde_json::from_str(&config.to_json()).unwrap();
        assert_eq!(json["label"], "Hourly Wind Wave Period");
        assert_eq!(json["fill"], false);
        assert!(json.get("canvas_id").is_none());
    }

    #[test]
    fn test_canvas_ids_are_distinct() {
        let ids: Vec<&str> = SeriesKind::ALL.iter().map(|k| chart_canvas_id(*k)).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids[0] != ids[1] && ids[1] != ids[2] && ids[0] != ids[2]);
    }
}
