use meilisearch_tui_report::{IndexListReport, IndexSummary};
use serde::Deserialize;

/// One entry of an index listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
	pub uid: String,
	#[serde(default)]
	pub primary_key: Option<String>,
}

/// Either the paginated `{"results": [...]}` envelope or a bare array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IndexList {
	Page { results: Vec<IndexEntry> },
	Bare(Vec<IndexEntry>),
}

impl IndexList {
	pub fn into_entries(self) -> Vec<IndexEntry> {
		match self {
			Self::Page { results } => results,
			Self::Bare(entries) => entries,
		}
	}

	pub fn into_report(self) -> IndexListReport {
		let indexes = self
			.into_entries()
			.into_iter()
			.map(|entry| IndexSummary::new(entry.uid, entry.primary_key))
			.collect();
		IndexListReport { indexes }
	}
}
