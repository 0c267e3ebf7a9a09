use meilisearch_tui_report::{Record, SearchReport};
use serde::Deserialize;

/// Body of a search request's response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
	pub hits: Option<Vec<Record>>,
	pub estimated_total_hits: Option<u64>,
	pub processing_time_ms: u64,
	pub query: Option<String>,
	pub limit: Option<u64>,
	pub offset: Option<u64>,
}

impl SearchResponse {
	pub fn into_report(self) -> SearchReport {
		SearchReport::new(self.estimated_total_hits, self.processing_time_ms, self.hits)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_the_engine_response() {
		let raw = r#"{
			"hits": [{"title": "Carol", "id": 2}],
			"query": "carol",
			"processingTimeMs": 4,
			"limit": 20,
			"offset": 0,
			"estimatedTotalHits": 66
		}"#;
		let response: SearchResponse = serde_json::from_str(raw).unwrap();
		assert_eq!(response.query.as_deref(), Some("carol"));
		assert_eq!(response.limit, Some(20));

		let report = response.into_report();
		assert_eq!(report.estimated_total_hits, Some(66));
		assert_eq!(report.processing_time_ms, 4);

		let text = report.render().unwrap().text;
		assert!(text.contains("title: Carol\nid: 2\n"));
	}

	#[test]
	fn missing_hits_and_estimate_are_allowed() {
		let response: SearchResponse = serde_json::from_str(r#"{"processingTimeMs": 1}"#).unwrap();
		let report = response.into_report();
		assert_eq!(report.hits, None);
		assert_eq!(report.display_hit_count(), 0);
	}

	#[test]
	fn hits_must_be_objects() {
		let raw = r#"{"processingTimeMs": 1, "hits": [1, 2]}"#;
		assert!(serde_json::from_str::<SearchResponse>(raw).is_err());
	}
}
