//! Multi-select for one facet.
//!
//! Picked values show as removable chips in click order; the dropdown lists
//! the rest. Every change hands the complete new sequence to the store.

use crate::state::AppState;
use dioxus::prelude::*;
use eda_core::{Facet, FilterOption};

#[derive(Props, Clone, PartialEq)]
pub struct FilterSelectProps {
    pub facet: Facet,
}

/// Facet selector reading options from the vocabulary in AppState.
#[component]
pub fn FilterSelect(props: FilterSelectProps) -> Element {
    let state = use_context::<AppState>();
    let facet = props.facet;
    let (options, selected) = {
        let dashboard = state.dashboard.read();
        let filters = dashboard.filters();
        (
            filters.vocabulary().options(facet).to_vec(),
            filters.selection().get(facet).to_vec(),
        )
    };
    let select_id = format!("filter-{}", facet.query_param());

    let available: Vec<(usize, FilterOption)> = options
        .iter()
        .cloned()
        .enumerate()
        .filter(|(_, option)| !selected.contains(option))
        .collect();

    let add_selected = selected.clone();
    let on_add = move |evt: Event<FormData>| {
        let Ok(index) = evt.value().parse::<usize>() else {
            return;
        };
        if let Some(option) = options.get(index) {
            let mut next = add_selected.clone();
            next.push(option.clone());
            state.select(facet, next);
        }
    };

    rsx! {
        div {
            class: "filter",
            style: "margin: 8px 0;",
            label {
                r#for: "{select_id}",
                style: "display: block; font-weight: bold; margin-bottom: 4px;",
                "{facet.label()}"
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 4px; margin-bottom: 4px;",
                for (position, item) in selected.iter().cloned().enumerate() {
                    button {
                        key: "{item.value}",
                        r#type: "button",
                        title: "Remove {item.label}",
                        style: "border: 1px solid #ccc; border-radius: 12px; padding: 2px 8px; background: #F3F4F6; cursor: pointer; font-size: 12px;",
                        onclick: {
                            let selected = selected.clone();
                            move |_| {
                                let mut next = selected.clone();
                                next.remove(position);
                                state.select(facet, next);
                            }
                        },
                        "{item.label} \u{00d7}"
                    }
                }
            }
            select {
                id: "{select_id}",
                style: "width: 100%;",
                onchange: on_add,
                option {
                    value: "",
                    selected: true,
                    if selected.is_empty() { "All" } else { "Add..." }
                }
                for (index, option) in available {
                    option {
                        value: "{index}",
                        "{option.label}"
                    }
                }
            }
        }
    }
}
