//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Optional second line, e.g. what to check
    #[props(default = String::new())]
    pub hint: String,
}

/// Displays a blocking error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 50px auto; max-width: 640px; text-align: center; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            p {
                style: "margin: 0;",
                strong { "Error loading data: " }
                "{props.message}"
            }
            if !props.hint.is_empty() {
                p {
                    style: "margin: 8px 0 0 0; color: #555;",
                    "{props.hint}"
                }
            }
        }
    }
}
