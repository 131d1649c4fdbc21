//! Filterable dimensions and the values users pick for them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Month names indexed by `month - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One filterable dimension of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Brand,
    PackType,
    Ppg,
    Channel,
    Year,
    Month,
}

impl Facet {
    /// All facets in query-parameter order.
    pub const ALL: [Facet; 6] = [
        Facet::Brand,
        Facet::PackType,
        Facet::Ppg,
        Facet::Channel,
        Facet::Year,
        Facet::Month,
    ];

    /// Order the filter sidebar lists the facets in.
    pub const SIDEBAR: [Facet; 6] = [
        Facet::Channel,
        Facet::Brand,
        Facet::PackType,
        Facet::Ppg,
        Facet::Year,
        Facet::Month,
    ];

    /// Key of the facet's vocabulary in the `/filters/` response.
    pub fn vocabulary_key(self) -> &'static str {
        match self {
            Facet::Brand => "brands",
            Facet::PackType => "pack_types",
            Facet::Ppg => "ppgs",
            Facet::Channel => "channels",
            Facet::Year => "years",
            Facet::Month => "months",
        }
    }

    /// Name of the repeated query parameter sent to `/chart-data/`.
    pub fn query_param(self) -> &'static str {
        match self {
            Facet::Brand => "brand",
            Facet::PackType => "pack_type",
            Facet::Ppg => "ppg",
            Facet::Channel => "channel",
            Facet::Year => "year",
            Facet::Month => "month",
        }
    }

    /// Human readable label for selectors.
    pub fn label(self) -> &'static str {
        match self {
            Facet::Brand => "Brand",
            Facet::PackType => "Pack Type",
            Facet::Ppg => "PPG",
            Facet::Channel => "Channel",
            Facet::Year => "Year",
            Facet::Month => "Month",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_param())
    }
}

/// A facet value as the backend emits it: text for categorical facets,
/// integers for year and month.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FacetValue {
    Number(i64),
    Text(String),
}

impl FacetValue {
    /// The value as it appears in a query string.
    pub fn as_param(&self) -> String {
        match self {
            FacetValue::Number(n) => n.to_string(),
            FacetValue::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacetValue::Number(n) => write!(f, "{}", n),
            FacetValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FacetValue {
    fn from(value: &str) -> Self {
        FacetValue::Text(value.to_string())
    }
}

impl From<i64> for FacetValue {
    fn from(value: i64) -> Self {
        FacetValue::Number(value)
    }
}

/// A `{value, label}` pair offered by (and picked from) a selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: FacetValue,
    pub label: String,
}

impl FilterOption {
    /// Option whose label is the value itself.
    pub fn plain(value: impl Into<FacetValue>) -> Self {
        let value = value.into();
        let label = value.to_string();
        Self { value, label }
    }

    /// Option for a calendar month (1-12) labelled with the month name.
    ///
    /// Out-of-range months are labelled with their number.
    pub fn month(month: i64) -> Self {
        let label = month_name(month)
            .map(str::to_string)
            .unwrap_or_else(|| month.to_string());
        Self {
            value: FacetValue::Number(month),
            label,
        }
    }
}

/// Full English month name for 1-12.
pub fn month_name(month: i64) -> Option<&'static str> {
    if (1..=12).contains(&month) {
        Some(MONTH_NAMES[(month - 1) as usize])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_follow_fixed_table() {
        let params: Vec<&str> = Facet::ALL.iter().map(|f| f.query_param()).collect();
        assert_eq!(
            params,
            vec!["brand", "pack_type", "ppg", "channel", "year", "month"]
        );
        assert_eq!(Facet::PackType.vocabulary_key(), "pack_types");
    }

    #[test]
    fn test_month_labels() {
        assert_eq!(FilterOption::month(1).label, "January");
        assert_eq!(FilterOption::month(12).label, "December");
        assert_eq!(FilterOption::month(13).label, "13");
    }

    #[test]
    fn test_facet_value_untagged_json() {
        let values: Vec<FacetValue> = serde_json::from_str(r#"[2023, "ColaCo"]"#).unwrap();
        assert_eq!(values[0], FacetValue::Number(2023));
        assert_eq!(values[1], FacetValue::Text("ColaCo".to_string()));
        assert_eq!(values[0].as_param(), "2023");
    }
}
