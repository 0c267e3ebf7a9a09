use meilisearch_tui_report::{Record, SettingsReport};
use serde::Deserialize;
use serde_json::Value;

/// The settings of one index, limited to the keys the settings view shows.
///
/// Unset and `null` values decode to `None` and render as the empty literal of
/// their type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexSettings {
	pub synonyms: Option<Record>,
	pub stop_words: Option<Vec<String>>,
	pub ranking_rules: Option<Vec<String>>,
	pub filterable_attributes: Option<Vec<Value>>,
	pub searchable_attributes: Option<Vec<String>>,
	pub displayed_attributes: Option<Vec<String>>,
	pub sortable_attributes: Option<Vec<String>>,
	pub distinct_attribute: Option<String>,
	pub typo_tolerance: Option<Record>,
	pub faceting: Option<Record>,
	pub pagination: Option<Record>,
}

impl IndexSettings {
	/// Every known setting, in display order, keyed by its snake_case name.
	pub fn into_fields(self) -> Record {
		let mut fields = Record::new();
		fields.insert("synonyms".into(), object(self.synonyms));
		fields.insert("stop_words".into(), list(self.stop_words));
		fields.insert("ranking_rules".into(), list(self.ranking_rules));
		fields.insert(
			"filterable_attributes".into(),
			Value::Array(self.filterable_attributes.unwrap_or_default()),
		);
		fields.insert("searchable_attributes".into(), list(self.searchable_attributes));
		fields.insert("displayed_attributes".into(), list(self.displayed_attributes));
		fields.insert("sortable_attributes".into(), list(self.sortable_attributes));
		fields.insert(
			"distinct_attribute".into(),
			Value::String(self.distinct_attribute.unwrap_or_default()),
		);
		fields.insert("typo_tolerance".into(), object(self.typo_tolerance));
		fields.insert("faceting".into(), object(self.faceting));
		fields.insert("pagination".into(), object(self.pagination));
		fields
	}

	pub fn into_report(self, index_name: impl Into<String>) -> SettingsReport {
		SettingsReport::new(index_name, self.into_fields())
	}
}

fn object(value: Option<Record>) -> Value {
	Value::Object(value.unwrap_or_default())
}

fn list(value: Option<Vec<String>>) -> Value {
	Value::from(value.unwrap_or_default())
}
