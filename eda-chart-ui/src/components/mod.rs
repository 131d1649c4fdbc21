//! Reusable Dioxus RSX components for the EDA dashboard.

mod chart_container;
mod chart_header;
mod chart_panel;
mod error_display;
mod filter_actions;
mod filter_select;
mod loading_spinner;
mod sortable_panel;
mod stale_notice;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use chart_panel::ChartPanel;
pub use error_display::ErrorDisplay;
pub use filter_actions::{ExportButton, ResetButton};
pub use filter_select::FilterSelect;
pub use loading_spinner::LoadingSpinner;
pub use sortable_panel::{panel_dom_id, SortablePanel};
pub use stale_notice::StaleNotice;
