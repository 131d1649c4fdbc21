//! Categorical series normalization with long-tail bucketing.
//!
//! Proportion panels can only show a handful of slices. Rows are cleaned,
//! and when more categories remain than the cap allows, the smallest ones
//! are folded into a single trailing "Others" item. Nothing is lost: the
//! output always sums to the total of the valid input values.

use crate::bundle::Row;
use serde::Serialize;
use serde_json::Value;

/// Name of the synthetic bucket holding the long tail.
pub const OTHERS_LABEL: &str = "Others";

/// One `{name, value}` slice of a proportion panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalItem {
    pub name: String,
    pub value: f64,
}

impl CategoricalItem {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Normalize rows with `name` / `value` columns.
pub fn normalize_categorical(rows: &[Row], max_slices: usize) -> Vec<CategoricalItem> {
    normalize_categorical_by(rows, "name", "value", max_slices)
}

/// Normalize rows reading the category from `name_column` and the amount from
/// `value_column`.
///
/// Rows with an empty name or a non-finite / non-positive value are dropped.
/// At or below `max_slices` items the cleaned rows come back in input order.
/// Above it, items are stable-sorted by value descending (ties keep input
/// order), the top `max_slices - 1` are kept and the rest are summed into
/// [`OTHERS_LABEL`]. A cap of zero behaves like one.
pub fn normalize_categorical_by(
    rows: &[Row],
    name_column: &str,
    value_column: &str,
    max_slices: usize,
) -> Vec<CategoricalItem> {
    let max_slices = max_slices.max(1);

    let mut cleaned: Vec<CategoricalItem> = rows
        .iter()
        .filter_map(|row| {
            let name = coerce_name(row.get(name_column));
            let value = coerce_number(row.get(value_column));
            if name.is_empty() || !value.is_finite() || value <= 0.0 {
                None
            } else {
                Some(CategoricalItem { name, value })
            }
        })
        .collect();

    if cleaned.len() <= max_slices {
        return cleaned;
    }

    // `sort_by` is stable, so equal values keep their input order.
    cleaned.sort_by(|a, b| b.value.total_cmp(&a.value));
    let tail = cleaned.split_off(max_slices - 1);
    let tail_sum: f64 = tail.iter().map(|item| item.value).sum();
    cleaned.push(CategoricalItem::new(OTHERS_LABEL, tail_sum));
    cleaned
}

/// Text form of a category cell; null and missing read as empty.
pub fn coerce_name(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => match n.as_f64() {
            // whole floats print without the fraction: 42.0 -> "42"
            Some(v) if n.is_f64() && v.fract() == 0.0 && v.abs() < 1e21 => {
                if v == 0.0 {
                    "0".to_string()
                } else {
                    format!("{:.0}", v)
                }
            }
            _ => n.to_string(),
        },
        Some(other) => other.to_string(),
    }
}

/// Numeric form of an amount cell.
///
/// Missing, null and blank strings read as 0, booleans as 1/0, numeric strings
/// are parsed, anything else is NaN.
pub fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        None | Some(Value::Null) => 0.0,
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse().unwrap_or(f64::NAN)
            }
        }
        Some(Value::Array(_)) | Some(Value::Object(_)) => f64::NAN,
    }
}

/// Sum of the values, e.g. the centre label of a pie.
pub fn total(items: &[CategoricalItem]) -> f64 {
    items.iter().map(|item| item.value).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(values: &[(&str, f64)]) -> Vec<Row> {
        values
            .iter()
            .map(|(name, value)| {
                json!({"name": name, "value": value})
                    .as_object()
                    .cloned()
                    .unwrap()
            })
            .collect()
    }

    fn row(value: Value) -> Row {
        value.as_object().cloned().unwrap()
    }

    fn valid_sum(input: &[Row]) -> f64 {
        input
            .iter()
            .map(|r| coerce_number(r.get("value")))
            .filter(|v| v.is_finite() && *v > 0.0)
            .sum()
    }

    #[test]
    fn test_invalid_rows_are_dropped() {
        let input = vec![
            row(json!({"name": "A", "value": 10})),
            row(json!({"name": "", "value": 5})),
            row(json!({"value": 5})),
            row(json!({"name": null, "value": 5})),
            row(json!({"name": "B", "value": 0})),
            row(json!({"name": "C", "value": -3})),
            row(json!({"name": "D", "value": "abc"})),
            row(json!({"name": "E"})),
            row(json!({"name": "F", "value": "7.5"})),
            row(json!({"name": 42, "value": 2})),
        ];
        let out = normalize_categorical(&input, 8);
        assert_eq!(
            out,
            vec![
                CategoricalItem::new("A", 10.0),
                CategoricalItem::new("F", 7.5),
                CategoricalItem::new("42", 2.0),
            ]
        );
    }

    #[test]
    fn test_under_cap_keeps_input_order() {
        let input = rows(&[("small", 1.0), ("big", 100.0), ("mid", 10.0)]);
        let names: Vec<String> = normalize_categorical(&input, 8)
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["small", "big", "mid"]);
    }

    #[test]
    fn test_exactly_max_slices_has_no_others() {
        let input = rows(&[
            ("a", 8.0),
            ("b", 7.0),
            ("c", 6.0),
            ("d", 5.0),
            ("e", 4.0),
            ("f", 3.0),
            ("g", 2.0),
            ("h", 1.0),
        ]);
        let out = normalize_categorical(&input, 8);
        assert_eq!(out.len(), 8);
        assert!(out.iter().all(|i| i.name != OTHERS_LABEL));
    }

    #[test]
    fn test_one_over_cap_buckets_smallest() {
        let input = rows(&[
            ("a", 8.0),
            ("b", 7.0),
            ("c", 6.0),
            ("tiny", 0.5),
            ("d", 5.0),
            ("e", 4.0),
            ("f", 3.0),
            ("g", 2.0),
            ("h", 1.0),
        ]);
        let out = normalize_categorical(&input, 8);
        assert_eq!(out.len(), 8);
        let others: Vec<&CategoricalItem> =
            out.iter().filter(|i| i.name == OTHERS_LABEL).collect();
        assert_eq!(others.len(), 1);
        assert_eq!(out.last().unwrap().name, OTHERS_LABEL);
        assert_eq!(others[0].value, 1.5);
        assert_eq!(out[0], CategoricalItem::new("a", 8.0));
    }

    #[test]
    fn test_ties_at_cut_keep_input_order() {
        let input = rows(&[("x", 5.0), ("y", 5.0), ("z", 5.0), ("w", 9.0)]);
        let out = normalize_categorical(&input, 3);
        assert_eq!(
            out,
            vec![
                CategoricalItem::new("w", 9.0),
                CategoricalItem::new("x", 5.0),
                CategoricalItem::new(OTHERS_LABEL, 10.0),
            ]
        );
    }

    #[test]
    fn test_conservation_and_bounds() {
        let input: Vec<Row> = (0..40)
            .map(|i| {
                let value = if i % 7 == 0 { -1.0 } else { (i * 37 % 11) as f64 + 0.25 };
                row(json!({"name": format!("cat{}", i), "value": value}))
            })
            .collect();
        for max_slices in 1..=12 {
            let out = normalize_categorical(&input, max_slices);
            assert!(out.len() <= max_slices);
            assert!(out.iter().all(|i| i.value > 0.0));
            assert!((total(&out) - valid_sum(&input)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_deterministic() {
        let input = rows(&[("a", 3.0), ("b", 3.0), ("c", 1.0), ("d", 2.0)]);
        assert_eq!(normalize_categorical(&input, 2), normalize_categorical(&input, 2));
    }

    #[test]
    fn test_zero_cap_behaves_like_one() {
        let input = rows(&[("a", 3.0), ("b", 2.0)]);
        assert_eq!(
            normalize_categorical(&input, 0),
            vec![CategoricalItem::new(OTHERS_LABEL, 5.0)]
        );
    }

    #[test]
    fn test_custom_columns() {
        let input = vec![
            row(json!({"Brand": "ColaCo", "Volume (kg)": 1200.0})),
            row(json!({"Brand": "FizzUp", "Volume (kg)": 300.0})),
        ];
        let out = normalize_categorical_by(&input, "Brand", "Volume (kg)", 8);
        assert_eq!(out[1], CategoricalItem::new("FizzUp", 300.0));
    }

    #[test]
    fn test_numeric_names_print_like_text() {
        assert_eq!(coerce_name(Some(&json!(42.0))), "42");
        assert_eq!(coerce_name(Some(&json!(42))), "42");
        assert_eq!(coerce_name(Some(&json!(-0.0))), "0");
        assert_eq!(coerce_name(Some(&json!(2.5))), "2.5");
        assert_eq!(coerce_name(Some(&json!(null))), "");

        let input = vec![
            row(json!({"name": 2023.0, "value": 10.0})),
            row(json!({"name": "B", "value": 5.0})),
        ];
        assert_eq!(normalize_categorical(&input, 8)[0].name, "2023");
    }
}
