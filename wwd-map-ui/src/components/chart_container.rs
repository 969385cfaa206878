//! Chart container component holding a Chart.js canvas.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id of the canvas (Chart.js draws into this)
    pub id: String,
    /// Optional minimum height in pixels
    #[props(default = 260)]
    pub min_height: u32,
}

/// A container div with the canvas a line chart renders into.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            canvas {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
