//! Sailing safety narrative with dangerous conditions emphasized.

use crate::state::AppState;
use dioxus::prelude::*;
use wwd_core::safety::{Segment, Severity};

fn line_style(severity: Severity) -> &'static str {
    match severity {
        Severity::Danger => "color: #C62828;",
        Severity::Safe | Severity::Info => "",
    }
}

fn render_segment(segment: &Segment) -> Element {
    match segment {
        Segment::Strong(text) => rsx! { strong { "{text}" } },
        Segment::Text(text) => rsx! { span { "{text}" } },
    }
}

#[component]
pub fn SafetyReport() -> Element {
    let state = use_context::<AppState>();
    let Some(assessment) = state.assessment.read().clone() else {
        return rsx! {
            p {
                style: "color: #888; font-size: 13px;",
                "Click a point on the map to assess sailing conditions."
            }
        };
    };

    let border = if assessment.is_safe { "#2E7D32" } else { "#C62828" };

    rsx! {
        div {
            id: "nlpOutput",
            style: "padding: 8px 12px; margin: 8px 0; border-left: 4px solid {border}; font-size: 14px; line-height: 1.6;",
            for line in assessment.lines.iter() {
                div {
                    style: line_style(line.severity),
                    for segment in line.segments.iter() {
                        {render_segment(segment)}
                    }
                }
            }
        }
    }
}
