//! Dashboard configuration.

use crate::query::CanonicalQuery;

/// Default backend base URL (the Django dev server).
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Default cap on slices in proportion panels; matches the palette size.
pub const DEFAULT_MAX_SLICES: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Base URL the `/filters/` and `/chart-data/` endpoints hang off.
    pub api_base: String,
    pub max_slices: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            max_slices: DEFAULT_MAX_SLICES,
        }
    }
}

impl DashboardConfig {
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }

    fn base(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }

    pub fn filters_url(&self) -> String {
        format!("{}/filters/", self.base())
    }

    /// `/chart-data/` URL carrying the serialized query.
    pub fn chart_data_url(&self, query: &CanonicalQuery) -> String {
        format!("{}/chart-data/?{}", self.base(), query.to_query_string())
    }
}
