//! Rendering for an index's settings.

use serde_json::Value;
use titlecase::titlecase;

use crate::value::display_value;
use crate::Record;

/// Ordered settings for one index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsReport {
	pub index_name: String,
	pub fields: Record,
}

impl SettingsReport {
	pub fn new(index_name: impl Into<String>, fields: Record) -> Self {
		Self {
			index_name: index_name.into(),
			fields,
		}
	}

	#[must_use]
	pub fn render(&self) -> String {
		render_settings(&self.index_name, &self.fields)
	}
}

/// Render every setting as a titled block, in insertion order.
///
/// Empty values are kept and print as their empty literal.
#[must_use]
pub fn render_settings(index_name: &str, fields: &Record) -> String {
	let mut lines = Vec::with_capacity(fields.len() + 1);
	lines.push(format!("# Settings for {index_name} index\n"));

	for (name, value) in fields {
		lines.push(setting_block(name, value));
	}

	lines.join("\n")
}

fn setting_block(name: &str, value: &Value) -> String {
	format!("## {}\n{}\n", setting_label(name), display_value(value))
}

/// Turn an underscore separated setting name into a heading label.
///
/// `filterable_attributes` becomes `Filterable Attributes`. Small words such as
/// `for` stay lower-case and all-caps words are left alone.
#[must_use]
pub fn setting_label(name: &str) -> String {
	titlecase(&name.replace('_', " "))
}
