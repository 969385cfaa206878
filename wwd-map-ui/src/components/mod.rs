//! Reusable Dioxus RSX components for the wind-wave map.

mod chart_container;
mod chart_header;
mod coordinate_readout;
mod error_display;
mod loading_spinner;
mod map_canvas;
mod readings_table;
mod safety_report;

pub use chart_container::ChartContainer;
pub use chart_header::{unit_description, ChartHeader};
pub use coordinate_readout::CoordinateReadout;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use map_canvas::MapCanvas;
pub use readings_table::ReadingsTable;
pub use safety_report::SafetyReport;
