//! Chart header: series title and Y-axis unit.

use dioxus::prelude::*;
use wwd_core::series::SeriesKind;

/// Y-axis description for a series chart.
pub fn unit_description(kind: SeriesKind) -> &'static str {
    match kind {
        SeriesKind::Height => "Meters (m)",
        SeriesKind::Direction => "Degrees (°), direction waves come from",
        SeriesKind::Period => "Seconds (s)",
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Which hourly series the chart below shows
    pub kind: SeriesKind,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    let title = props.kind.label();
    let unit = unit_description(props.kind);
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{title}"
            }
            p {
                style: "margin: 0; font-size: 12px; color: #666;",
                "Y-axis: {unit}"
            }
        }
    }
}
