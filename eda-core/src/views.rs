//! Chart-ready views of the cached bundle, one builder per panel.
//!
//! Builders only read from the [`ChartDataCache`]; they never fetch. A
//! missing series gives an empty view, which the UI shows as "No data".
//! Views serialize to the JSON the D3 chart scripts consume.

use crate::bundle::{ChartDataBundle, Row};
use crate::cache::ChartDataCache;
use crate::format::{millions, percentage_of};
use crate::normalize::{normalize_categorical_by, total, CategoricalItem};
use crate::panels::{PanelId, PanelOrder};
use serde::Serialize;

/// Soft palette shared by stacked bars and pie slices.
pub const PALETTE: [&str; 8] = [
    "#F9A8D4", "#FDBA74", "#93C5FD", "#86EFAC", "#FDE68A", "#A5B4FC", "#FCA5A5", "#67E8F9",
];

/// How many brands a stacked bar shows.
pub const MAX_STACKED_BRANDS: usize = 8;

pub const NO_DATA: &str = "No data";

/// Color for the `index`-th series or slice.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarLayout {
    /// Bars grow left to right, categories on the y axis.
    Horizontal,
    Vertical,
}

/// One value column drawn as bars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub key: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub layout: BarLayout,
    pub category_key: String,
    pub series: Vec<BarSeries>,
    pub rows: Vec<Row>,
    pub bar_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub x_key: String,
    pub value_key: String,
    pub color: String,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    pub color: String,
    /// "Brand: 12.5%"
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
    pub total: f64,
    /// Total in millions, drawn in the middle.
    pub center_label: String,
    pub value_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Bar(BarChart),
    Line(LineChart),
    Pie(PieChart),
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool {
        match self {
            ChartSpec::Bar(bar) => bar.rows.is_empty(),
            ChartSpec::Line(line) => line.rows.is_empty(),
            ChartSpec::Pie(pie) => pie.slices.is_empty(),
        }
    }
}

/// Everything a panel needs to draw itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub id: PanelId,
    pub title: &'static str,
    pub chart: ChartSpec,
}

impl PanelView {
    pub fn is_empty(&self) -> bool {
        self.chart.is_empty()
    }

    /// Chart spec as JSON for the chart bridge.
    pub fn chart_json(&self) -> String {
        serde_json::to_string(&self.chart).unwrap_or_default()
    }
}

pub fn panel_title(id: PanelId) -> &'static str {
    match id {
        PanelId::SalesHorizontal => "Sales Value by Year (Horizontal Bar)",
        PanelId::VolumeHorizontal => "Volume (kg) by Year (Horizontal Bar)",
        PanelId::SalesVertical => "Year-wise Sales Value (Vertical Bar)",
        PanelId::MonthlyLine => "Monthly Sales Trend (Line)",
        PanelId::BrandVolumePie => "Brand Share by Volume (Pie)",
    }
}

/// Build the view for one panel from the cached bundle.
pub fn build_panel(id: PanelId, cache: &ChartDataCache, max_slices: usize) -> PanelView {
    let bundle = cache.bundle();
    let chart = match id {
        PanelId::SalesHorizontal => ChartSpec::Bar(yearly_bars(
            bundle,
            "sales_by_year_stacked",
            "sales_by_year",
            "Sales Value",
            "sales",
            PALETTE[0],
        )),
        PanelId::VolumeHorizontal => ChartSpec::Bar(yearly_bars(
            bundle,
            "volume_by_year_stacked",
            "volume_by_year",
            "Volume (kg)",
            "volume",
            PALETTE[2],
        )),
        PanelId::SalesVertical => ChartSpec::Bar(BarChart {
            layout: BarLayout::Vertical,
            category_key: "Year".to_string(),
            series: vec![BarSeries {
                key: "Sales Value".to_string(),
                color: PALETTE[1].to_string(),
                stack: None,
            }],
            rows: bundle.series("year_wise_sales"),
            bar_size: 20,
        }),
        PanelId::MonthlyLine => ChartSpec::Line(LineChart {
            x_key: "YearMonth".to_string(),
            value_key: "Sales Value".to_string(),
            color: "#22C55E".to_string(),
            rows: bundle.series("monthly_sales"),
        }),
        PanelId::BrandVolumePie => ChartSpec::Pie(brand_share(
            &bundle.series("brand_volume_totals"),
            max_slices,
        )),
    };
    PanelView {
        id,
        title: panel_title(id),
        chart,
    }
}

/// Views for every panel, in layout order.
pub fn render_sequence(
    order: &PanelOrder,
    cache: &ChartDataCache,
    max_slices: usize,
) -> Vec<PanelView> {
    order
        .iter()
        .map(|id| build_panel(id, cache, max_slices))
        .collect()
}

/// Year bars, stacked by brand when the backend sent a stacked pivot and the
/// brand order to go with it.
fn yearly_bars(
    bundle: &ChartDataBundle,
    stacked_series: &str,
    total_series: &str,
    value_key: &str,
    stack: &str,
    total_color: &str,
) -> BarChart {
    let brands = bundle.string_list("brands_order");
    let stacked = bundle.has_series(stacked_series);

    let rows = if stacked {
        bundle.series(stacked_series)
    } else {
        bundle.series(total_series)
    };

    let series = match brands {
        Some(brands) if stacked => brands
            .into_iter()
            .take(MAX_STACKED_BRANDS)
            .enumerate()
            .map(|(idx, brand)| BarSeries {
                key: brand,
                color: palette_color(idx).to_string(),
                stack: Some(stack.to_string()),
            })
            .collect(),
        _ => vec![BarSeries {
            key: value_key.to_string(),
            color: total_color.to_string(),
            stack: None,
        }],
    };

    BarChart {
        layout: BarLayout::Horizontal,
        category_key: "Year".to_string(),
        series,
        rows,
        bar_size: 14,
    }
}

fn brand_share(rows: &[Row], max_slices: usize) -> PieChart {
    let items: Vec<CategoricalItem> =
        normalize_categorical_by(rows, "Brand", "Volume (kg)", max_slices);
    let sum = total(&items);
    let slices = items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| PieSlice {
            label: format!("{}: {}", item.name, percentage_of(item.value, sum)),
            color: palette_color(idx).to_string(),
            name: item.name,
            value: item.value,
        })
        .collect();
    PieChart {
        slices,
        total: sum,
        center_label: millions(sum),
        value_label: "Volume (kg)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::CanonicalQuery;
    use serde_json::{json, Value};

    fn cache_with(bundle: Value) -> ChartDataCache {
        let mut cache = ChartDataCache::new();
        let ticket = cache.begin_refresh(CanonicalQuery::default());
        cache.complete(ticket, Ok(serde_json::from_value(bundle).unwrap()));
        cache
    }

    #[test]
    fn test_empty_cache_renders_empty_views() {
        let cache = ChartDataCache::new();
        let views = render_sequence(&PanelOrder::new(), &cache, 8);
        assert_eq!(views.len(), 5);
        assert!(views.iter().all(PanelView::is_empty));
    }

    #[test]
    fn test_sequence_follows_order() {
        let mut order = PanelOrder::new();
        order.reorder(PanelId::BrandVolumePie, PanelId::SalesHorizontal);
        let views = render_sequence(&order, &ChartDataCache::new(), 8);
        assert_eq!(views[0].id, PanelId::BrandVolumePie);
        assert_eq!(views[0].title, "Brand Share by Volume (Pie)");
    }

    #[test]
    fn test_stacked_bars_use_brand_order() {
        let brands: Vec<String> = (0..10).map(|i| format!("B{}", i)).collect();
        let cache = cache_with(json!({
            "brands_order": brands,
            "sales_by_year_stacked": [{"Year": 2023, "B0": 10.0, "B1": 5.0}],
            "sales_by_year": [{"Year": 2023, "Sales Value": 15.0}]
        }));
        let view = build_panel(PanelId::SalesHorizontal, &cache, 8);
        let ChartSpec::Bar(bar) = view.chart else {
            panic!("expected bar chart");
        };
        assert_eq!(bar.layout, BarLayout::Horizontal);
        assert_eq!(bar.series.len(), MAX_STACKED_BRANDS);
        assert_eq!(bar.series[0].key, "B0");
        assert_eq!(bar.series[0].stack.as_deref(), Some("sales"));
        assert_eq!(bar.series[1].color, PALETTE[1]);
        assert_eq!(bar.rows[0]["B0"], json!(10.0));
    }

    #[test]
    fn test_stacked_series_carry_legend_entries() {
        let cache = cache_with(json!({
            "brands_order": ["ColaCo", "FizzUp", "AquaPure"],
            "volume_by_year_stacked": [{"Year": 2023, "ColaCo": 3.0, "FizzUp": 2.0, "AquaPure": 1.0}]
        }));
        let view = build_panel(PanelId::VolumeHorizontal, &cache, 8);
        let chart: Value = serde_json::from_str(&view.chart_json()).unwrap();
        let legend: Vec<(String, String)> = chart["series"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| {
                (
                    s["key"].as_str().unwrap().to_string(),
                    s["color"].as_str().unwrap().to_string(),
                )
            })
            .collect();
        assert_eq!(
            legend,
            vec![
                ("ColaCo".to_string(), PALETTE[0].to_string()),
                ("FizzUp".to_string(), PALETTE[1].to_string()),
                ("AquaPure".to_string(), PALETTE[2].to_string()),
            ]
        );
    }

    #[test]
    fn test_totals_fallback_without_stacked_series() {
        let cache = cache_with(json!({
            "brands_order": ["ColaCo"],
            "volume_by_year": [{"Year": 2023, "Volume (kg)": 42.0}]
        }));
        let ChartSpec::Bar(bar) = build_panel(PanelId::VolumeHorizontal, &cache, 8).chart else {
            panic!("expected bar chart");
        };
        assert_eq!(bar.series.len(), 1);
        assert_eq!(bar.series[0].key, "Volume (kg)");
        assert_eq!(bar.series[0].stack, None);
        assert_eq!(bar.rows.len(), 1);
    }

    #[test]
    fn test_brand_share_pie() {
        let cache = cache_with(json!({
            "brand_volume_totals": [
                {"Brand": "ColaCo", "Volume (kg)": 1500000.0},
                {"Brand": "FizzUp", "Volume (kg)": 500000.0},
                {"Brand": null, "Volume (kg)": 10.0}
            ]
        }));
        let view = build_panel(PanelId::BrandVolumePie, &cache, 8);
        let ChartSpec::Pie(pie) = view.chart else {
            panic!("expected pie chart");
        };
        assert_eq!(pie.slices.len(), 2);
        assert_eq!(pie.slices[0].label, "ColaCo: 75.0%");
        assert_eq!(pie.slices[1].label, "FizzUp: 25.0%");
        assert_eq!(pie.center_label, "2.0M");
        assert_eq!(pie.total, 2_000_000.0);
    }

    #[test]
    fn test_monthly_line_and_json_shape() {
        let cache = cache_with(json!({
            "monthly_sales": [{"YearMonth": "2023-01", "Sales Value": 3.0}]
        }));
        let view = build_panel(PanelId::MonthlyLine, &cache, 8);
        assert!(!view.is_empty());
        let json: Value = serde_json::from_str(&view.chart_json()).unwrap();
        assert_eq!(json["kind"], "line");
        assert_eq!(json["x_key"], "YearMonth");
        assert_eq!(json["rows"][0]["Sales Value"], json!(3.0));
    }
}
