//! Display formatting for chart labels and axes.

use serde_json::Value;

/// `value` as a share of `total`, one decimal place ("25.0%").
///
/// A zero (or NaN) total gives "0%".
pub fn percentage_of(value: f64, total: f64) -> String {
    if total == 0.0 || total.is_nan() {
        return "0%".to_string();
    }
    format!("{}%", fixed_1(value / total * 100.0))
}

/// Numbers in millions with one decimal place ("2.5M").
///
/// Anything that is not a JSON number is returned as-is (strings without
/// quotes). Thousands and billions get no special treatment.
pub fn abbreviate_to_millions(value: &Value) -> String {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(v) => millions(v),
            None => n.to_string(),
        },
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// [`abbreviate_to_millions`] for a plain number.
pub fn millions(value: f64) -> String {
    format!("{}M", fixed_1(value / 1_000_000.0))
}

/// One decimal place, exact halves rounded away from zero.
///
/// `{:.1}` rounds the exact binary value half-to-even. The only one-decimal
/// ties a double can hold are x.x5 with x * 4 odd (…25 and …75), so those
/// are rounded explicitly.
fn fixed_1(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.is_finite() && quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return format!("{:.1}", (value * 10.0).round() / 10.0);
    }
    format!("{:.1}", value)
}
