//! Dashboard lifecycle: filters, cache and layout behind one state object.
//!
//! ```text
//! Loading --vocabulary ok-----> Ready --selection change--> Ready
//! Loading --vocabulary failed-> Error (terminal)
//! ```
//!
//! Chart data failures never leave `Ready`; the cache keeps the last good
//! bundle and raises its stale flag instead.
//!
//! Event handlers are synchronous and hand back a [`RefreshTicket`] when a
//! fetch is needed. The caller runs the fetch however its event loop does
//! (a Dioxus task, a Tokio future) and feeds the result to
//! [`Dashboard::chart_data_received`].

use crate::api::DashboardApi;
use crate::bundle::ChartDataBundle;
use crate::cache::{ChartDataCache, RefreshOutcome, RefreshTicket};
use crate::config::DashboardConfig;
use crate::error::{ApiError, DashboardError};
use crate::facet::{Facet, FilterOption};
use crate::filters::{FilterStore, FiltersResponse, Vocabulary};
use crate::gesture::ReorderGesture;
use crate::panels::{PanelId, PanelOrder};
use crate::views::{render_sequence, PanelView};

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardPhase {
    Loading,
    Ready,
    Error(DashboardError),
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    config: DashboardConfig,
    phase: DashboardPhase,
    filters: FilterStore,
    cache: ChartDataCache,
    panels: PanelOrder,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            phase: DashboardPhase::Loading,
            filters: FilterStore::new(),
            cache: ChartDataCache::new(),
            panels: PanelOrder::new(),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn phase(&self) -> &DashboardPhase {
        &self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == DashboardPhase::Ready
    }

    pub fn filters(&self) -> &FilterStore {
        &self.filters
    }

    pub fn cache(&self) -> &ChartDataCache {
        &self.cache
    }

    pub fn panels(&self) -> &PanelOrder {
        &self.panels
    }

    /// Handle the startup vocabulary fetch.
    ///
    /// On success the dashboard becomes ready and the initial (unfiltered)
    /// refresh is dispatched. On failure it enters the terminal error state.
    /// Results arriving after startup are ignored.
    pub fn vocabulary_loaded(
        &mut self,
        result: Result<FiltersResponse, ApiError>,
    ) -> Option<RefreshTicket> {
        if self.phase != DashboardPhase::Loading {
            log::warn!("dashboard: vocabulary result ignored in {:?}", self.phase);
            return None;
        }
        match result {
            Ok(raw) => {
                self.filters.set_vocabulary(Vocabulary::from(raw));
                self.phase = DashboardPhase::Ready;
                Some(self.cache.begin_refresh(self.filters.query()))
            }
            Err(e) => {
                log::error!("dashboard: error loading filters: {}", e);
                self.phase = DashboardPhase::Error(DashboardError::VocabularyLoad(e));
                None
            }
        }
    }

    /// Replace one facet's selection; returns the refresh to run.
    pub fn set_selection(
        &mut self,
        facet: Facet,
        items: Vec<FilterOption>,
    ) -> Option<RefreshTicket> {
        if !self.is_ready() {
            return None;
        }
        let query = self.filters.set_selection(facet, items);
        Some(self.cache.begin_refresh(query))
    }

    /// Clear every facet; returns the refresh to run.
    pub fn reset_filters(&mut self) -> Option<RefreshTicket> {
        if !self.is_ready() {
            return None;
        }
        let query = self.filters.reset_all();
        Some(self.cache.begin_refresh(query))
    }

    /// Feed back the result of a refresh. Never changes the phase.
    pub fn chart_data_received(
        &mut self,
        ticket: RefreshTicket,
        result: Result<ChartDataBundle, ApiError>,
    ) -> RefreshOutcome {
        self.cache.complete(ticket, result)
    }

    /// Move `active` to `over`'s slot. Ignored unless ready.
    pub fn reorder_panels(&mut self, active: PanelId, over: PanelId) -> bool {
        self.is_ready() && self.panels.reorder(active, over)
    }

    /// Apply a drag or keyboard gesture. Ignored unless ready.
    pub fn apply_gesture(&mut self, gesture: ReorderGesture) -> bool {
        self.is_ready() && gesture.apply(&mut self.panels)
    }

    /// Panel views in layout order; empty unless ready.
    pub fn render(&self) -> Vec<PanelView> {
        if !self.is_ready() {
            return Vec::new();
        }
        render_sequence(&self.panels, &self.cache, self.config.max_slices)
    }

    /// Load the vocabulary and, on success, the initial chart data.
    pub async fn start<A: DashboardApi>(&mut self, api: &A) -> Option<RefreshOutcome> {
        let vocabulary = api.fetch_filters().await;
        let ticket = self.vocabulary_loaded(vocabulary)?;
        Some(self.run_refresh(api, ticket).await)
    }

    /// Change a selection and wait for the resulting refresh.
    pub async fn select<A: DashboardApi>(
        &mut self,
        api: &A,
        facet: Facet,
        items: Vec<FilterOption>,
    ) -> Option<RefreshOutcome> {
        let ticket = self.set_selection(facet, items)?;
        Some(self.run_refresh(api, ticket).await)
    }

    async fn run_refresh<A: DashboardApi>(
        &mut self,
        api: &A,
        ticket: RefreshTicket,
    ) -> RefreshOutcome {
        let result = api.fetch_chart_data(&ticket.query).await;
        self.chart_data_received(ticket, result)
    }
}
