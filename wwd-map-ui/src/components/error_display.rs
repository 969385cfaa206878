//! Request failure banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[props(default = "Request failed".to_string())]
    pub title: String,
}

/// Shows why the last lookup failed. The map, table and charts keep their
/// previous contents, which the banner says.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 10px 14px; margin: 8px 0; background: #FFF3E0; color: #BF360C; border-radius: 4px; border: 1px solid #FFCC80; font-size: 14px;",
            strong { "{props.title}: " }
            "{props.message}"
            div {
                style: "font-size: 12px; color: #8D6E63; margin-top: 4px;",
                "The map still shows the previous result."
            }
        }
    }
}
