//! Chart container component with loading state.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Whether a refresh is still in flight
    #[props(default = false)]
    pub loading: bool,
    /// Optional minimum height in pixels
    #[props(default = 300)]
    pub min_height: u32,
}

/// A container div for D3.js charts with a refresh overlay.
///
/// The previous chart stays visible underneath while new data loads.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 4px; right: 8px; font-size: 11px; color: #999;",
                    "Updating..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
