use serde_json::Value;

/// Render a JSON value the way it appears in a report.
///
/// Strings are printed without quotes; every other value uses its compact JSON
/// form, so empty collections show up as `{}` and `[]`.
#[must_use]
pub fn display_value(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}

/// Name of the JSON type, used in error messages.
pub(crate) fn type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
