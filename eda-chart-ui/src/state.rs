//! Application state managed via Dioxus context.
//!
//! `AppState` wraps the core [`Dashboard`] in a signal and is provided once via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`; nothing lives in globals.

use dioxus::prelude::*;
use eda_core::gesture::ReorderGesture;
use eda_core::{
    Dashboard, DashboardApi, DashboardConfig, Facet, FilterOption, HttpApi, PanelId,
    RefreshTicket,
};

/// Shared application state for the dashboard app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Filters, chart data cache and panel order
    pub dashboard: Signal<Dashboard>,
    /// Backend client
    pub api: Signal<HttpApi>,
    /// Panel currently being dragged with the pointer
    pub dragging: Signal<Option<PanelId>>,
    /// Panel picked up with the keyboard (Space/Enter)
    pub grabbed: Signal<Option<PanelId>>,
}

impl AppState {
    /// Create a new AppState in the Loading phase.
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            api: Signal::new(HttpApi::new(config.clone())),
            dashboard: Signal::new(Dashboard::new(config)),
            dragging: Signal::new(None),
            grabbed: Signal::new(None),
        }
    }

    /// Fetch the vocabulary, then the initial chart data.
    pub fn load(self) {
        let mut dashboard = self.dashboard;
        let api = self.api.peek().clone();
        spawn(async move {
            log::info!("Loading filter vocabulary...");
            let result = api.fetch_filters().await;
            let ticket = dashboard.write().vocabulary_loaded(result);
            if let Some(ticket) = ticket {
                self.refresh(ticket);
            }
        });
    }

    /// Replace a facet's selection and refetch.
    pub fn select(self, facet: Facet, items: Vec<FilterOption>) {
        let mut dashboard = self.dashboard;
        let ticket = dashboard.write().set_selection(facet, items);
        if let Some(ticket) = ticket {
            self.refresh(ticket);
        }
    }

    /// Clear all facets and refetch.
    pub fn reset(self) {
        let mut dashboard = self.dashboard;
        let ticket = dashboard.write().reset_filters();
        if let Some(ticket) = ticket {
            self.refresh(ticket);
        }
    }

    /// Apply a drag or keyboard gesture to the panel order.
    pub fn reorder(self, gesture: ReorderGesture) -> bool {
        let mut dashboard = self.dashboard;
        let changed = dashboard.write().apply_gesture(gesture);
        changed
    }

    /// Run a refresh in the background. The UI keeps showing the previous
    /// bundle until the cache accepts the response.
    fn refresh(self, ticket: RefreshTicket) {
        let mut dashboard = self.dashboard;
        let api = self.api.peek().clone();
        spawn(async move {
            let result = api.fetch_chart_data(&ticket.query).await;
            dashboard.write().chart_data_received(ticket, result);
        });
    }
}
