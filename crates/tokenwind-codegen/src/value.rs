//! Rendering token values as CSS text.

use serde_json::{Number, Value};

use crate::TransformError;

/// Format a number the way CSS expects: integral values without a fraction.
pub fn format_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.is_finite() && f.abs() < 1e15 => {
            format!("{}", f as i64)
        }
        Some(f) => format!("{f}"),
        None => n.to_string(),
    }
}

/// Render a scalar (or list of scalars) as CSS text.
///
/// Lists are comma-joined (`["Inter", "sans-serif"]` → `Inter, sans-serif`).
/// Objects and null have no scalar form.
pub fn scalar_to_css(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(format_number(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => items
            .iter()
            .map(scalar_to_css)
            .collect::<Option<Vec<_>>>()
            .map(|parts| parts.join(", ")),
        Value::Null | Value::Object(_) => None,
    }
}

/// Like [`scalar_to_css`], but a bare number gets `unit` appended.
pub fn scalar_with_unit(value: &Value, unit: &str) -> Option<String> {
    match value {
        Value::Number(n) => Some(format!("{}{unit}", format_number(n))),
        other => scalar_to_css(other),
    }
}

/// Require a scalar value, failing with a malformed-value error otherwise.
pub fn require_scalar(value: &Value) -> Result<String, TransformError> {
    scalar_to_css(value).ok_or_else(|| TransformError::malformed("a scalar", value))
}

/// Unwrap a nested `{ "$value": ... }` wrapper, as left behind by resolvers
/// inside composite values.
pub fn unwrap_token_value(value: &Value) -> &Value {
    match value {
        Value::Object(map) => map.get("$value").unwrap_or(value),
        other => other,
    }
}

/// Short name of a JSON value's shape, for diagnostics.
pub fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Whether a value counts as absent in a composite field.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}
