//! One dashboard panel: header, chart container and the D3 render effect.

use crate::components::{ChartContainer, ChartHeader};
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use eda_core::views::{self, ChartSpec, NO_DATA};
use eda_core::PanelId;

#[derive(Props, Clone, PartialEq)]
pub struct ChartPanelProps {
    pub id: PanelId,
}

fn unit_description(chart: &ChartSpec) -> &'static str {
    match chart {
        ChartSpec::Bar(_) | ChartSpec::Line(_) => "Values in millions (M)",
        ChartSpec::Pie(_) => "Share of total volume (kg); centre shows the total",
    }
}

/// Renders the panel's view from the cached bundle. Reads only; never fetches.
#[component]
pub fn ChartPanel(props: ChartPanelProps) -> Element {
    let state = use_context::<AppState>();
    let id = props.id;
    let container_id = id.container_id();

    let (view, refreshing) = {
        let dashboard = state.dashboard.read();
        (
            views::build_panel(id, dashboard.cache(), dashboard.config().max_slices),
            dashboard.cache().in_flight(),
        )
    };

    // Re-runs whenever the dashboard signal changes (new bundle or new order).
    let effect_container = container_id.clone();
    use_effect(move || {
        let dashboard = state.dashboard.read();
        let view = views::build_panel(id, dashboard.cache(), dashboard.config().max_slices);
        if view.is_empty() {
            js_bridge::render_no_data(&effect_container, NO_DATA);
        } else {
            js_bridge::render_panel_chart(&effect_container, &view.chart_json());
        }
    });

    use_drop(move || js_bridge::destroy_chart(&id.container_id()));

    rsx! {
        ChartHeader {
            title: view.title.to_string(),
            unit_description: unit_description(&view.chart).to_string(),
        }
        ChartContainer {
            id: container_id,
            loading: refreshing,
        }
    }
}
