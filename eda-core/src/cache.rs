//! Chart data cache with generation-tagged refreshes.
//!
//! Every refresh is stamped with the generation current at dispatch time. A
//! response is applied only while its generation is still the newest one, so
//! a slow answer to an old query can never replace the data for a newer
//! query, whatever order the responses arrive in.

use crate::bundle::{ChartDataBundle, Row};
use crate::error::{ApiError, DashboardError};
use crate::query::CanonicalQuery;

/// Handle for one dispatched refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTicket {
    pub generation: u64,
    pub query: CanonicalQuery,
}

/// What happened to a completed refresh.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// The bundle was replaced.
    Applied,
    /// A newer refresh was dispatched meanwhile; the response was dropped.
    Superseded,
    /// The fetch failed; the previous bundle is kept.
    Failed(DashboardError),
}

#[derive(Debug, Clone, Default)]
pub struct ChartDataCache {
    bundle: ChartDataBundle,
    bundle_query: Option<CanonicalQuery>,
    generation: u64,
    pending: Option<u64>,
    stale: bool,
}

impl ChartDataCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh for `query`, superseding any refresh in flight.
    pub fn begin_refresh(&mut self, query: CanonicalQuery) -> RefreshTicket {
        self.generation += 1;
        self.pending = Some(self.generation);
        log::info!(
            "cache: refresh #{} dispatched for '{}'",
            self.generation,
            query.to_query_string()
        );
        RefreshTicket {
            generation: self.generation,
            query,
        }
    }

    /// Apply the result of a refresh started with [`begin_refresh`](Self::begin_refresh).
    pub fn complete(
        &mut self,
        ticket: RefreshTicket,
        result: Result<ChartDataBundle, ApiError>,
    ) -> RefreshOutcome {
        if ticket.generation != self.generation {
            log::debug!(
                "cache: dropping response #{} (current is #{})",
                ticket.generation,
                self.generation
            );
            return RefreshOutcome::Superseded;
        }
        self.pending = None;

        match result {
            Ok(bundle) => {
                log::info!(
                    "cache: refresh #{} applied ({} series)",
                    ticket.generation,
                    bundle.names().count()
                );
                self.bundle = bundle;
                self.bundle_query = Some(ticket.query);
                self.stale = false;
                RefreshOutcome::Applied
            }
            Err(e) => {
                log::warn!("cache: refresh #{} failed: {}", ticket.generation, e);
                self.stale = true;
                RefreshOutcome::Failed(DashboardError::ChartDataFetch(e))
            }
        }
    }

    /// Rows of a series from the current bundle; empty when absent.
    pub fn series(&self, name: &str) -> Vec<Row> {
        self.bundle.series(name)
    }

    pub fn bundle(&self) -> &ChartDataBundle {
        &self.bundle
    }

    /// Query the bundle on screen was fetched for, `None` before the first success.
    pub fn last_query(&self) -> Option<&CanonicalQuery> {
        self.bundle_query.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while the newest refresh has not completed.
    pub fn in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// True when the newest completed refresh failed.
    pub fn is_stale(&self) -> bool {
        self.stale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facet::{Facet, FilterOption};
    use crate::filters::Selection;
    use serde_json::json;

    fn bundle_with_year(year: i64) -> ChartDataBundle {
        let mut bundle = ChartDataBundle::new();
        bundle.insert("year_wise_sales", json!([{"Year": year, "Sales Value": 1.0}]));
        bundle
    }

    fn query_for_year(year: i64) -> CanonicalQuery {
        let mut selection = Selection::default();
        selection.set(Facet::Year, vec![FilterOption::plain(year)]);
        CanonicalQuery::derive(&selection)
    }

    fn network_down() -> ApiError {
        ApiError::Transport {
            url: "http://localhost:8000/api/chart-data/".to_string(),
            message: "connection refused".to_string(),
        }
    }

    #[test]
    fn test_success_replaces_bundle() {
        let mut cache = ChartDataCache::new();
        let ticket = cache.begin_refresh(query_for_year(2023));
        assert!(cache.in_flight());
        assert_eq!(cache.complete(ticket, Ok(bundle_with_year(2023))), RefreshOutcome::Applied);
        assert!(!cache.in_flight());
        assert_eq!(cache.series("year_wise_sales")[0]["Year"], json!(2023));
        assert_eq!(cache.last_query(), Some(&query_for_year(2023)));
    }

    #[test]
    fn test_failure_keeps_previous_bundle() {
        let mut cache = ChartDataCache::new();
        let first = cache.begin_refresh(CanonicalQuery::default());
        cache.complete(first, Ok(bundle_with_year(2022)));

        let second = cache.begin_refresh(query_for_year(2024));
        let outcome = cache.complete(second, Err(network_down()));

        assert!(matches!(
            outcome,
            RefreshOutcome::Failed(DashboardError::ChartDataFetch(_))
        ));
        assert!(cache.is_stale());
        assert_eq!(cache.series("year_wise_sales")[0]["Year"], json!(2022));
        assert_eq!(cache.last_query(), Some(&CanonicalQuery::default()));
    }

    #[test]
    fn test_next_success_clears_stale_flag() {
        let mut cache = ChartDataCache::new();
        let failed = cache.begin_refresh(CanonicalQuery::default());
        cache.complete(failed, Err(network_down()));
        assert!(cache.is_stale());

        let ok = cache.begin_refresh(CanonicalQuery::default());
        cache.complete(ok, Ok(bundle_with_year(2023)));
        assert!(!cache.is_stale());
    }

    #[test]
    fn test_out_of_order_response_is_discarded() {
        let mut cache = ChartDataCache::new();
        let old = cache.begin_refresh(query_for_year(2023));
        let new = cache.begin_refresh(query_for_year(2024));

        assert_eq!(cache.complete(new, Ok(bundle_with_year(2024))), RefreshOutcome::Applied);
        assert_eq!(
            cache.complete(old, Ok(bundle_with_year(2023))),
            RefreshOutcome::Superseded
        );
        assert_eq!(cache.series("year_wise_sales")[0]["Year"], json!(2024));
        assert_eq!(cache.last_query(), Some(&query_for_year(2024)));
    }

    #[test]
    fn test_superseded_failure_does_not_mark_stale() {
        let mut cache = ChartDataCache::new();
        let old = cache.begin_refresh(query_for_year(2023));
        let _new = cache.begin_refresh(query_for_year(2024));
        assert_eq!(cache.complete(old, Err(network_down())), RefreshOutcome::Superseded);
        assert!(!cache.is_stale());
        assert!(cache.in_flight());
    }

    #[test]
    fn test_missing_series_reads_empty() {
        let cache = ChartDataCache::new();
        assert!(cache.series("monthly_sales").is_empty());
    }
}
