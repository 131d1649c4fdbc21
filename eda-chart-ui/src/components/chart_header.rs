//! Chart header component with panel title and drag affordance.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// Short axis/unit note under the title
    #[props(default = String::new())]
    pub unit_description: String,
}

/// Header for chart panels showing title and optional unit description.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px; display: flex; align-items: baseline; gap: 8px;",
            span {
                style: "color: #bbb; cursor: grab;",
                "aria-hidden": "true",
                "\u{2630}"
            }
            div {
                h3 {
                    style: "margin: 0 0 4px 0; font-size: 16px;",
                    "{props.title}"
                }
                if !props.unit_description.is_empty() {
                    p {
                        style: "margin: 0; font-size: 12px; color: #666;",
                        "{props.unit_description}"
                    }
                }
            }
        }
    }
}
