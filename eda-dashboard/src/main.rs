//! FMCG EDA Dashboard
//!
//! Sidebar of facet filters, a column of reorderable chart panels, and a PDF
//! export of the panel column.
//!
//! Data flow:
//! 1. On mount: fetch the filter vocabulary. Failure is terminal and shows
//!    the error screen; success makes the dashboard ready and fetches the
//!    unfiltered chart data.
//! 2. On selection change: derive the query and refetch in the background.
//!    Panels keep showing the previous bundle until the new one lands.
//! 3. Panels read the cached bundle and push their chart spec to D3.js; the
//!    panel order decides the sequence, whatever the data state.

use dioxus::prelude::*;
use eda_chart_ui::components::{
    ChartPanel, ErrorDisplay, ExportButton, FilterSelect, LoadingSpinner, ResetButton,
    SortablePanel, StaleNotice,
};
use eda_chart_ui::js_bridge;
use eda_chart_ui::state::AppState;
use eda_core::{DashboardConfig, DashboardPhase, Facet};

/// DOM id of the panel column captured by the PDF export.
const PANELS_CONTAINER_ID: &str = "eda-panels";

const EXPORT_FILENAME: &str = "eda_dashboard.pdf";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("Starting EDA dashboard");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("eda-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(|| AppState::new(DashboardConfig::default()));

    // ─── Effect: load vocabulary once on mount ───
    use_effect(move || {
        js_bridge::init_charts();
        state.load();
    });

    let phase = state.dashboard.read().phase().clone();

    rsx! {
        div {
            class: "app",
            style: "max-width: 1280px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                class: "page-title",
                style: "margin: 8px 0 16px 0;",
                "EDA Dashboard"
            }

            match phase {
                DashboardPhase::Loading => rsx! { LoadingSpinner {} },
                DashboardPhase::Error(err) => rsx! {
                    ErrorDisplay {
                        message: err.to_string(),
                        hint: format!(
                            "Make sure the backend server is running on {}",
                            state.dashboard.read().config().api_base
                        ),
                    }
                },
                DashboardPhase::Ready => rsx! { DashboardLayout {} },
            }
        }
    }
}

/// Sidebar plus panel column, shown once the vocabulary is loaded.
#[component]
fn DashboardLayout() -> Element {
    rsx! {
        div {
            class: "dashboard-layout",
            style: "display: flex; gap: 24px; align-items: flex-start;",

            aside {
                class: "sidebar",
                style: "flex: 0 0 260px; position: sticky; top: 8px;",
                h2 { style: "font-size: 18px; margin: 0 0 8px 0;", "Filters" }
                section {
                    class: "filters",
                    for facet in Facet::SIDEBAR {
                        FilterSelect { key: "{facet}", facet }
                    }
                    ResetButton {}
                    ExportButton {
                        target_id: PANELS_CONTAINER_ID.to_string(),
                        filename: EXPORT_FILENAME.to_string(),
                    }
                }
            }

            main {
                class: "main-content",
                style: "flex: 1 1 auto; min-width: 0;",
                StaleNotice {}
                PanelColumn {}
            }
        }
    }
}

/// Panels in the current layout order.
#[component]
fn PanelColumn() -> Element {
    let state = use_context::<AppState>();
    let order: Vec<_> = state.dashboard.read().panels().iter().collect();

    rsx! {
        div {
            id: PANELS_CONTAINER_ID,
            class: "charts",
            role: "list",
            "aria-label": "Dashboard panels. Focus a panel and press Space to move it with the arrow keys.",
            for id in order {
                SortablePanel {
                    key: "{id}",
                    id,
                    ChartPanel { id }
                }
            }
        }
    }
}
