use anyhow::{Context, Result};
use meilisearch_tui::input::decode_json;
use meilisearch_tui::responses::{IndexList, IndexSettings, SearchResponse};
use meilisearch_tui::{InputSource, RenderedReport, ReportKind};
use meilisearch_tui_report::Report;

use crate::cli::Command;

/// Reads one collaborator response and renders it into a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReportWorkflow {
	kind: ReportKind,
	source: InputSource,
	index: Option<String>,
}

impl ReportWorkflow {
	pub(crate) fn from_command(command: &Command) -> Self {
		match command {
			Command::Search { input } => Self {
				kind: ReportKind::Search,
				source: InputSource::from_arg(input.as_deref()),
				index: None,
			},
			Command::Settings { index, input } => Self {
				kind: ReportKind::Settings,
				source: InputSource::from_arg(input.as_deref()),
				index: Some(index.clone()),
			},
			Command::Indexes { input } => Self {
				kind: ReportKind::Indexes,
				source: InputSource::from_arg(input.as_deref()),
				index: None,
			},
		}
	}

	pub(crate) fn run(&self) -> Result<RenderedReport> {
		tracing::info!(kind = %self.kind, source = %self.source, "rendering report");
		let raw = self.source.read_to_string()?;
		self.render_raw(&raw)
	}

	/// Decode `raw` as the response for this workflow's report kind and render it.
	pub(crate) fn render_raw(&self, raw: &str) -> Result<RenderedReport> {
		let report = self.decode(raw)?;
		let rendered = RenderedReport::from_report(self.kind, &*report)
			.with_context(|| format!("failed to render {} report from {}", self.kind, self.source))?;

		tracing::debug!(
			bytes = rendered.text.len(),
			has_more = rendered.has_more,
			"report rendered"
		);
		Ok(rendered)
	}

	fn decode(&self, raw: &str) -> Result<Box<dyn Report>> {
		let report: Box<dyn Report> = match self.kind {
			ReportKind::Search => {
				let response: SearchResponse = decode_json(raw, &self.source)?;
				if let Some(query) = &response.query {
					tracing::debug!(query = query.as_str(), "search response decoded");
				}
				Box::new(response.into_report())
			}
			ReportKind::Settings => {
				let settings: IndexSettings = decode_json(raw, &self.source)?;
				let index = self.index.clone().unwrap_or_default();
				Box::new(settings.into_report(index))
			}
			ReportKind::Indexes => {
				let list: IndexList = decode_json(raw, &self.source)?;
				Box::new(list.into_report())
			}
		};
		Ok(report)
	}
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::*;

	fn workflow(command: Command) -> ReportWorkflow {
		ReportWorkflow::from_command(&command)
	}

	#[test]
	fn search_responses_render_with_highlighting() {
		let raw = r#"{
			"hits": [
				{"id": 1, "title": "Carol", "_formatted": {"id": "1", "title": "***Carol***"}},
				{"id": 2, "title": "Wonder Woman"}
			],
			"processingTimeMs": 1,
			"estimatedTotalHits": 10
		}"#;
		let rendered = workflow(Command::Search { input: None })
			.render_raw(raw)
			.unwrap();

		assert_eq!(rendered.kind, ReportKind::Search);
		assert_eq!(
			rendered.text,
			"## Hits: ~10 | Search time: 1 ms\n\nid: 1\ntitle: ***Carol***\n-------------------------------\nid: 2\ntitle: Wonder Woman\n-------------------------------"
		);
		assert!(rendered.has_more);
	}

	#[test]
	fn settings_use_the_index_name_from_the_command() {
		let rendered = workflow(Command::Settings {
			index: "movies".into(),
			input: Some(PathBuf::from("settings.json")),
		})
		.render_raw(r#"{"stopWords": ["a", "the"]}"#)
		.unwrap();

		assert_eq!(rendered.title, "Settings: movies");
		assert!(rendered.text.starts_with("# Settings for movies index\n\n## Synonyms\n{}\n"));
		assert!(rendered.text.contains("## Stop Words\n[\"a\",\"the\"]\n"));
	}

	#[test]
	fn index_listings_render() {
		let rendered = workflow(Command::Indexes { input: None })
			.render_raw(r#"{"results": [{"uid": "movies", "primaryKey": "id"}]}"#)
			.unwrap();

		assert_eq!(rendered.text, "Index UID: movies\nPrimary Key: id\n\n");
		assert!(!rendered.has_more);
	}

	#[test]
	fn malformed_highlighting_reports_the_source() {
		let workflow = workflow(Command::Search {
			input: Some(PathBuf::from("hits.json")),
		});
		let err = workflow
			.render_raw(r#"{"processingTimeMs": 1, "hits": [{"id": 1, "_formatted": [1]}]}"#)
			.unwrap_err();

		let message = format!("{err:#}");
		assert!(message.contains("hits.json"));
		assert!(message.contains("`_formatted`"));
	}

	#[test]
	fn wrong_document_shape_is_a_parse_error() {
		let err = workflow(Command::Indexes { input: None })
			.render_raw(r#"{"hits": []}"#)
			.unwrap_err();
		assert!(err.to_string().contains("failed to parse response from stdin"));
	}
}
