//! Chart data bundle returned by `GET /chart-data/`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One tabular row: column name to raw JSON value.
pub type Row = Map<String, Value>;

/// Every named series of one chart-data response.
///
/// Most entries are arrays of rows; a few (like `brands_order`) are plain
/// lists. Accessors never fail: a missing or oddly shaped entry reads as
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartDataBundle {
    series: BTreeMap<String, Value>,
}

impl ChartDataBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows of the named series. Non-object entries are skipped.
    pub fn series(&self, name: &str) -> Vec<Row> {
        match self.series.get(name) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_object().cloned())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// True when the named series exists and is an array.
    pub fn has_series(&self, name: &str) -> bool {
        matches!(self.series.get(name), Some(Value::Array(_)))
    }

    /// The named entry read as a list of strings (e.g. `brands_order`).
    pub fn string_list(&self, name: &str) -> Option<Vec<String>> {
        match self.series.get(name) {
            Some(Value::Array(items)) => Some(
                items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => None,
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.series.insert(name.into(), value);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
