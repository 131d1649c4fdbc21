//! Reorderable panel slot.
//!
//! Pointer: HTML5 drag and drop; dropping onto another panel moves the
//! dragged panel into its slot. Keyboard: Space or Enter picks the focused
//! panel up, arrow keys / Home / End move it, Space, Enter or Escape drop it.
//! Both paths end in the same `ReorderGesture` handed to the store.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use eda_core::gesture::{KeyboardMove, ReorderGesture};
use eda_core::PanelId;

#[derive(Props, Clone, PartialEq)]
pub struct SortablePanelProps {
    pub id: PanelId,
    pub children: Element,
}

/// DOM id of the focusable panel wrapper.
pub fn panel_dom_id(id: PanelId) -> String {
    format!("sortable-{}", id.as_str())
}

#[component]
pub fn SortablePanel(props: SortablePanelProps) -> Element {
    let mut state = use_context::<AppState>();
    let id = props.id;
    let dom_id = panel_dom_id(id);
    let is_dragging = (state.dragging)() == Some(id);
    let is_grabbed = (state.grabbed)() == Some(id);
    let aria_grabbed = if is_grabbed { "true" } else { "false" };

    let style = format!(
        "opacity: {}; outline: {}; background: #fff; border-radius: 8px; padding: 12px; margin-bottom: 16px; box-shadow: 0 1px 3px rgba(0,0,0,0.1);",
        if is_dragging { "0.5" } else { "1" },
        if is_grabbed { "2px solid #22C55E" } else { "none" },
    );

    let on_key = move |evt: KeyboardEvent| {
        let grabbed = (state.grabbed)() == Some(id);
        let movement = match evt.key() {
            Key::ArrowUp => Some(KeyboardMove::Up),
            Key::ArrowDown => Some(KeyboardMove::Down),
            Key::Home => Some(KeyboardMove::First),
            Key::End => Some(KeyboardMove::Last),
            Key::Enter => {
                evt.prevent_default();
                state.grabbed.set(if grabbed { None } else { Some(id) });
                None
            }
            Key::Character(c) if c == " " => {
                evt.prevent_default();
                state.grabbed.set(if grabbed { None } else { Some(id) });
                None
            }
            Key::Escape => {
                state.grabbed.set(None);
                None
            }
            _ => None,
        };

        if let Some(movement) = movement {
            if grabbed {
                evt.prevent_default();
                if state.reorder(ReorderGesture::Key { active: id, movement }) {
                    js_bridge::focus_element(&panel_dom_id(id));
                }
            }
        }
    };

    rsx! {
        div {
            id: "{dom_id}",
            class: "chart",
            style: "{style}",
            tabindex: "0",
            role: "listitem",
            "aria-roledescription": "sortable panel",
            "aria-grabbed": aria_grabbed,
            draggable: "true",
            ondragstart: move |_| {
                state.dragging.set(Some(id));
            },
            ondragover: move |evt: DragEvent| {
                evt.prevent_default();
            },
            ondrop: move |evt: DragEvent| {
                evt.prevent_default();
                if let Some(active) = (state.dragging)() {
                    state.reorder(ReorderGesture::Drop { active, over: Some(id) });
                }
                state.dragging.set(None);
            },
            ondragend: move |_| {
                state.dragging.set(None);
            },
            onkeydown: on_key,
            {props.children}
        }
    }
}
