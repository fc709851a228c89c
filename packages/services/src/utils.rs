use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JavaScript-style truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Index of `target` in `sorted`, or `None` when it is not present.
pub fn binary_search<T: PartialOrd>(sorted: &[T], target: &T) -> Option<usize> {
    let mut left = 0;
    let mut right = sorted.len();

    while left < right {
        let mid = left + (right - left) / 2;
        match sorted[mid].partial_cmp(target) {
            Some(Ordering::Equal) => return Some(mid),
            Some(Ordering::Less) => left = mid + 1,
            Some(Ordering::Greater) => right = mid,
            None => return None,
        }
    }

    None
}

/// Items of `selected`, in order, whose lowercase form appears in `uploaded`.
pub fn get_common_array(uploaded: &[String], selected: &[String]) -> Vec<String> {
    let uploaded: HashSet<&str> = uploaded.iter().map(String::as_str).collect();

    selected
        .iter()
        .filter(|item| uploaded.contains(item.to_lowercase().as_str()))
        .cloned()
        .collect()
}

/// GST portion of a tax-inclusive amount, rounded to two decimals.
pub fn extract_gst(final_amount: f64, gst_rate: f64) -> f64 {
    let gst_amount = (final_amount / (1.0 + gst_rate / 100.0)) * (gst_rate / 100.0);
    round2(gst_amount)
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    pub value: f64,
}

/// Convert `value` between currencies given rates relative to a common base.
/// Unknown or zero rates count as 1.
pub fn convert_currency(
    from: &str,
    to: &str,
    value: f64,
    rates: Option<&HashMap<String, Rate>>,
) -> Option<f64> {
    let rates = rates?;
    if from.is_empty() {
        return None;
    }

    let rate_of = |code: &str| {
        rates
            .get(code)
            .map(|rate| rate.value)
            .filter(|v| *v != 0.0 && !v.is_nan())
            .unwrap_or(1.0)
    };

    let converted = (value / rate_of(from)) * rate_of(to);
    if !converted.is_finite() {
        tracing::error!(from, to, value, "currency conversion produced a non-finite value");
        return None;
    }
    Some(round2(converted))
}

/// `"true"` is the only true string; other values use their truthiness.
pub fn get_string_bool(value: &Value) -> bool {
    match value {
        Value::String(s) => s == "true",
        other => is_truthy(other),
    }
}

/// A placeholder list of `len` nulls, handy for rendering skeleton rows.
pub fn empty_array(len: usize) -> Vec<Value> {
    vec![Value::Null; len]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Mobile,
    Tablet,
    Pc,
}

pub fn get_device_type(user_agent: &str) -> DeviceType {
    let user_agent = user_agent.to_lowercase();
    let contains_any = |needles: &[&str]| needles.iter().any(|n| user_agent.contains(n));

    if contains_any(&["mobile", "iphone", "ipad", "android"]) {
        DeviceType::Mobile
    } else if contains_any(&["tablet", "ipad"]) {
        DeviceType::Tablet
    } else {
        DeviceType::Pc
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    round_half_away(value, 2)
}

/// Round to `digits` decimals with ties going away from zero. `format!`
/// rounds ties to even, so values are passed through this first.
pub(crate) fn round_half_away(value: f64, digits: usize) -> f64 {
    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;
    // past 2^53 every f64 is already an integer
    if !scaled.is_finite() || scaled.abs() >= 9_007_199_254_740_992.0 {
        return value;
    }
    scaled.round() / factor
}
