//! Loading indicator shown while a request is in flight.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    /// What is being loaded (e.g., the clicked coordinate)
    #[props(default = String::new())]
    pub subject: String,
}

/// Simple loading indicator.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 12px; color: #666;",
            if props.subject.is_empty() {
                "Loading data..."
            } else {
                "Loading data for {props.subject}..."
            }
        }
    }
}
