//! Scalar helpers
//!
//! Coercion and rendering rules for the loosely typed values the gateway
//! sends back. The same field may arrive as `"1"`, `1` or `true` depending
//! on the endpoint, so comparisons go through these helpers instead of
//! matching on one JSON type.

use crate::types::JsonValue;
use std::borrow::Cow;

/// Whether a value represents the number one
///
/// Accepted: integer `1`, float `1.0`, boolean `true`, and strings that
/// parse as the number one once trimmed (`"1"`, `" 1 "`, `"1.0"`).
/// Everything else, including `null`, is not one.
pub fn is_one(value: &JsonValue) -> bool {
    match value {
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => {
            n.as_u64() == Some(1) || n.as_f64().is_some_and(|f| (f - 1.0).abs() < f64::EPSILON)
        }
        JsonValue::String(s) => s
            .trim()
            .parse::<f64>()
            .is_ok_and(|f| (f - 1.0).abs() < f64::EPSILON),
        JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => false,
    }
}

/// Whether a value carries no content
///
/// `null`, `false`, numeric zero, the empty string, the string `"0"` and
/// empty arrays/objects are blank.
pub fn is_blank(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::Bool(b) => !*b,
        JsonValue::Number(n) => n.as_f64() == Some(0.0),
        JsonValue::String(s) => s.is_empty() || s == "0",
        JsonValue::Array(a) => a.is_empty(),
        JsonValue::Object(o) => o.is_empty(),
    }
}

/// Render a value as text
///
/// Strings are returned as-is, numbers in their JSON form, `true` as
/// `"1"` and `false`/`null` as the empty string. Nested values fall back
/// to compact JSON.
pub fn render_scalar(value: &JsonValue) -> Cow<'_, str> {
    match value {
        JsonValue::String(s) => Cow::Borrowed(s.as_str()),
        JsonValue::Number(n) => Cow::Owned(n.to_string()),
        JsonValue::Bool(true) => Cow::Borrowed("1"),
        JsonValue::Bool(false) | JsonValue::Null => Cow::Borrowed(""),
        JsonValue::Array(_) | JsonValue::Object(_) => Cow::Owned(value.to_string()),
    }
}
