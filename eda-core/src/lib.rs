//! Filter-driven data pipeline and panel layout engine for the EDA dashboard.
//!
//! This crate provides:
//! - `facet` / `filters` / `query`: filter vocabulary, selection and the
//!   canonical backend query derived from it
//! - `bundle` / `cache`: chart data returned by the backend and the
//!   generation-tagged cache holding the latest one
//! - `normalize` / `format`: "Others" bucketing and label formatting
//! - `panels` / `gesture`: reorderable panel layout and input resolution
//! - `views`: chart-ready view per panel, read from the cache
//! - `dashboard`: the Loading / Ready / Error state machine tying it together
//! - `api`: backend trait, plus a reqwest client with the `api` feature

pub mod api;
pub mod bundle;
pub mod cache;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod facet;
pub mod filters;
pub mod format;
pub mod gesture;
pub mod normalize;
pub mod panels;
pub mod query;
pub mod views;

pub use api::DashboardApi;
#[cfg(feature = "api")]
pub use api::HttpApi;
pub use bundle::{ChartDataBundle, Row};
pub use cache::{ChartDataCache, RefreshOutcome, RefreshTicket};
pub use config::DashboardConfig;
pub use dashboard::{Dashboard, DashboardPhase};
pub use error::{ApiError, DashboardError};
pub use facet::{Facet, FacetValue, FilterOption};
pub use filters::{FilterStore, FiltersResponse, Selection, Vocabulary};
pub use panels::{PanelId, PanelOrder};
pub use query::CanonicalQuery;
