//! Non-blocking notice shown when the latest chart refresh failed.

use crate::state::AppState;
use dioxus::prelude::*;

/// Renders nothing unless the cache is stale.
#[component]
pub fn StaleNotice() -> Element {
    let state = use_context::<AppState>();
    let stale = state.dashboard.read().cache().is_stale();

    rsx! {
        if stale {
            div {
                role: "status",
                style: "padding: 6px 12px; margin: 0 0 8px 0; background: #FFF8E1; color: #8D6E00; border-radius: 4px; font-size: 12px;",
                "Could not refresh chart data; showing the last loaded results, which may be stale."
            }
        }
    }
}
