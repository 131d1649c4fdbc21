//! Sidebar action buttons: reset all filters and export the panels as PDF.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;

/// Clears every facet selection.
#[component]
pub fn ResetButton() -> Element {
    let state = use_context::<AppState>();

    rsx! {
        div {
            class: "filter actions",
            style: "margin: 12px 0 4px 0;",
            button {
                class: "reset",
                r#type: "button",
                style: "width: 100%; padding: 6px;",
                onclick: move |_| state.reset(),
                "Reset"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ExportButtonProps {
    /// DOM id of the element to capture
    pub target_id: String,
    #[props(default = "eda_dashboard.pdf".to_string())]
    pub filename: String,
}

/// Captures the current panel layout to a PDF download.
#[component]
pub fn ExportButton(props: ExportButtonProps) -> Element {
    rsx! {
        div {
            class: "filter actions",
            style: "margin: 4px 0;",
            button {
                class: "export-btn",
                r#type: "button",
                style: "width: 100%; padding: 6px; background: #22C55E; color: #fff; border: none; border-radius: 4px;",
                onclick: move |_| js_bridge::export_pdf(&props.target_id, &props.filename),
                "Export PDF"
            }
        }
    }
}
