//! Turning drag and keyboard input into reorder requests.
//!
//! Whatever the input device, a gesture ends up as an `(active, over)` pair
//! handed to [`PanelOrder::reorder`]. Recognition lives here so the order
//! model stays device-agnostic.

use crate::panels::{PanelId, PanelOrder};

/// Keyboard movement of a grabbed panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardMove {
    Up,
    Down,
    First,
    Last,
}

/// A completed reorder gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderGesture {
    /// Pointer drag released over another panel (or over itself).
    Drop { active: PanelId, over: Option<PanelId> },
    /// Keyboard move of the grabbed panel.
    Key { active: PanelId, movement: KeyboardMove },
}

impl ReorderGesture {
    /// The `(active, over)` pair this gesture resolves to against `order`.
    ///
    /// Drops outside any panel and keyboard moves past either end resolve to
    /// nothing.
    pub fn resolve(self, order: &PanelOrder) -> Option<(PanelId, PanelId)> {
        match self {
            ReorderGesture::Drop { active, over } => over.map(|over| (active, over)),
            ReorderGesture::Key { active, movement } => {
                let index = order.position(active)?;
                let target = match movement {
                    KeyboardMove::Up => index.checked_sub(1)?,
                    KeyboardMove::Down => index + 1,
                    KeyboardMove::First => 0,
                    KeyboardMove::Last => order.len().checked_sub(1)?,
                };
                let over = *order.as_slice().get(target)?;
                Some((active, over))
            }
        }
    }

    /// Resolve and apply to `order`. Returns whether the order changed.
    pub fn apply(self, order: &mut PanelOrder) -> bool {
        match self.resolve(order) {
            Some((active, over)) => order.reorder(active, over),
            None => false,
        }
    }
}
