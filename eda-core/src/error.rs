//! Error types for backend access and the dashboard lifecycle.
//!
//! Rows that cannot take part in an aggregate are not errors: the series
//! normalizer drops them.

use thiserror::Error;

/// A failed call to the dashboard backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

/// Failures the dashboard routes into its documented fallback states.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// Fatal: the dashboard shows a full-screen error instead of panels.
    #[error("failed to load filter vocabulary: {0}")]
    VocabularyLoad(#[source] ApiError),

    /// Recovered: the previous bundle stays on screen.
    #[error("failed to load chart data: {0}")]
    ChartDataFetch(#[source] ApiError),
}
