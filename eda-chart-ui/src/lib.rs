//! Shared Dioxus components and D3.js bridge for the EDA dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart and PDF export functions via `js_sys::eval()`
//! - `state`: AppState wrapping the core dashboard in Dioxus Signals
//! - `components`: Reusable RSX components (filters, sortable panels, charts, banners)

pub mod js_bridge;
pub mod state;
pub mod components;
