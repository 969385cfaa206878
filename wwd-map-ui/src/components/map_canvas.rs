//! Container the Leaflet map renders into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MapCanvasProps {
    /// The DOM id Leaflet attaches to
    pub id: String,
    #[props(default = 480)]
    pub height: u32,
}

#[component]
pub fn MapCanvas(props: MapCanvasProps) -> Element {
    let style = format!("height: {}px; width: 100%; border-radius: 4px;", props.height);
    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
