//! Panel identity and ordering.
//!
//! The layout is a permutation of a fixed set of panels. Reordering only
//! moves identifiers around; none are ever added, dropped or duplicated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Stable identifier of one panel kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelId {
    SalesHorizontal,
    VolumeHorizontal,
    SalesVertical,
    MonthlyLine,
    BrandVolumePie,
}

impl PanelId {
    /// Every panel, in default layout order.
    pub const ALL: [PanelId; 5] = [
        PanelId::SalesHorizontal,
        PanelId::VolumeHorizontal,
        PanelId::SalesVertical,
        PanelId::MonthlyLine,
        PanelId::BrandVolumePie,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PanelId::SalesHorizontal => "sales_horizontal",
            PanelId::VolumeHorizontal => "volume_horizontal",
            PanelId::SalesVertical => "sales_vertical",
            PanelId::MonthlyLine => "monthly_line",
            PanelId::BrandVolumePie => "brand_volume_pie",
        }
    }

    /// DOM id of the chart container inside the panel.
    pub fn container_id(self) -> String {
        format!("panel-{}", self.as_str().replace('_', "-"))
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown panel '{0}'")]
pub struct UnknownPanel(pub String);

impl FromStr for PanelId {
    type Err = UnknownPanel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PanelId::ALL
            .into_iter()
            .find(|id| id.as_str() == s.trim())
            .ok_or_else(|| UnknownPanel(s.to_string()))
    }
}

/// Current render sequence of the panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelOrder {
    order: Vec<PanelId>,
}

impl Default for PanelOrder {
    fn default() -> Self {
        Self {
            order: PanelId::ALL.to_vec(),
        }
    }
}

impl PanelOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[PanelId] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = PanelId> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn position(&self, id: PanelId) -> Option<usize> {
        self.order.iter().position(|&p| p == id)
    }

    /// Move `active` to the slot `over` occupies now.
    ///
    /// Panels between the two positions shift by one toward the vacated slot.
    /// Returns whether the order changed.
    pub fn reorder(&mut self, active: PanelId, over: PanelId) -> bool {
        if active == over {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(active), self.position(over)) else {
            log::warn!("panels: ignoring reorder {} -> {}", active, over);
            return false;
        };
        let moved = self.order.remove(from);
        self.order.insert(to, moved);
        log::debug!("panels: moved {} from {} to {}", active, from, to);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PanelId::*;

    fn permutations(items: &[PanelId]) -> Vec<Vec<PanelId>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut out = Vec::new();
        for i in 0..items.len() {
            let mut rest = items.to_vec();
            let head = rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, head);
                out.push(tail);
            }
        }
        out
    }

    #[test]
    fn test_default_order() {
        let order = PanelOrder::new();
        assert_eq!(
            order.iter().map(PanelId::as_str).collect::<Vec<_>>(),
            vec![
                "sales_horizontal",
                "volume_horizontal",
                "sales_vertical",
                "monthly_line",
                "brand_volume_pie"
            ]
        );
    }

    #[test]
    fn test_reorder_same_id_is_noop() {
        let mut order = PanelOrder::new();
        assert!(!order.reorder(MonthlyLine, MonthlyLine));
        assert_eq!(order, PanelOrder::new());
    }

    #[test]
    fn test_reorder_forward_and_backward() {
        let mut order = PanelOrder::new();
        assert!(order.reorder(SalesHorizontal, MonthlyLine));
        assert_eq!(
            order.as_slice(),
            &[VolumeHorizontal, SalesVertical, MonthlyLine, SalesHorizontal, BrandVolumePie]
        );

        assert!(order.reorder(BrandVolumePie, VolumeHorizontal));
        assert_eq!(
            order.as_slice(),
            &[BrandVolumePie, VolumeHorizontal, SalesVertical, MonthlyLine, SalesHorizontal]
        );
    }

    #[test]
    fn test_reorder_keeps_permutation_for_every_start_and_pair() {
        for start in permutations(&PanelId::ALL) {
            for &a in &start {
                for &b in &start {
                    if a == b {
                        continue;
                    }
                    let mut order = PanelOrder { order: start.clone() };
                    let target = order.position(b).unwrap();
                    assert!(order.reorder(a, b));

                    assert_eq!(order.len(), start.len());
                    for id in &start {
                        assert_eq!(order.iter().filter(|p| p == id).count(), 1);
                    }
                    assert_eq!(order.position(a), Some(target));
                }
            }
        }
    }

    #[test]
    fn test_parse_panel_ids() {
        assert_eq!("monthly_line".parse::<PanelId>(), Ok(MonthlyLine));
        let err = "market_sales_pie".parse::<PanelId>().unwrap_err();
        assert_eq!(err.to_string(), "unknown panel 'market_sales_pie'");
        let source: &dyn std::error::Error = &err;
        assert!(source.source().is_none());
        assert_eq!(BrandVolumePie.container_id(), "panel-brand-volume-pie");
    }
}
