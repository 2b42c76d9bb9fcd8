//! Loose conversions from raw JSON values to canonical strings and integers

use serde_json::{Number, Value};

/// Render a raw value as text the way loosely-typed sources expect.
///
/// Strings pass through, numbers and booleans use their literal form, arrays join their
/// stringified elements with `,`, and null becomes empty. Objects have no meaningful
/// textual form and render as `[object Object]`, which never parses as a number.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Integers keep their digits. Floats with no fractional part below 1e21 render without a
/// decimal point (`2.0` → `"2"`, `1e3` → `"1000"`); everything else uses the shortest
/// float form.
fn number_to_string(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        _ => n.to_string(),
    }
}

/// Stringified and trimmed; absent values become `""`
pub fn to_trimmed(value: Option<&Value>) -> String {
    value.map(|v| stringify(v).trim().to_string()).unwrap_or_default()
}

/// Trimmed and lowercased; absent values become `""`
pub fn to_lower_trimmed(value: Option<&Value>) -> String {
    to_trimmed(value).to_lowercase()
}

/// Normalize a list of categories: trim, lowercase, drop empties and repeats.
///
/// Order of first occurrence is kept. Anything that is not an array yields an empty list.
pub fn to_lower_list(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let normalized = to_lower_trimmed(Some(item));
        if !normalized.is_empty() && !out.contains(&normalized) {
            out.push(normalized);
        }
    }
    out
}

/// Parse a loosely formatted integer such as `"AED 1,250,000"`.
///
/// Rules:
/// - absent, null or blank → `None` (never a default of zero)
/// - every character other than ASCII digits and `-` is dropped
/// - an optional leading `-` followed by the longest run of digits is parsed; anything after
///   that run is ignored (`"1,250,000-1,500,000"` → `1250000`)
/// - no digits, or a value outside the `i64` range → `None`
///
/// # Examples
///
/// ```
/// use project_search_index::normalizer::parse_loose_int;
/// use serde_json::json;
///
/// assert_eq!(parse_loose_int(Some(&json!("AED 1,250,000"))), Some(1_250_000));
/// assert_eq!(parse_loose_int(Some(&json!(" "))), None);
/// assert_eq!(parse_loose_int(Some(&json!("n/a"))), None);
/// ```
pub fn parse_loose_int(value: Option<&Value>) -> Option<i64> {
    let text = to_trimmed(value);
    if text.is_empty() {
        return None;
    }

    let cleaned: String = text.chars().filter(|c| c.is_ascii_digit() || *c == '-').collect();

    let (negative, rest) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let digits = &rest[..digits_len];

    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
