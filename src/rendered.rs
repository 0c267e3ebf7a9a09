//! A report after rendering, ready for printing or the viewer.

use std::fmt;

use meilisearch_tui_report::{RenderError, Report};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
	Search,
	Settings,
	Indexes,
}

impl ReportKind {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Search => "search",
			Self::Settings => "settings",
			Self::Indexes => "indexes",
		}
	}
}

impl fmt::Display for ReportKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Rendered report text with the metadata the front-ends display around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedReport {
	pub kind: ReportKind,
	pub title: String,
	#[serde(rename = "report")]
	pub text: String,
	pub has_more: bool,
}

impl RenderedReport {
	pub fn from_report(kind: ReportKind, report: &dyn Report) -> Result<Self, RenderError> {
		Ok(Self {
			kind,
			title: report.title(),
			text: report.render()?,
			has_more: report.has_more(),
		})
	}
}

#[cfg(test)]
mod tests {
	use meilisearch_tui_report::SearchReport;

	use super::*;

	#[test]
	fn search_reports_carry_the_load_more_flag() {
		let report = SearchReport::new(Some(20), 2, Some(Vec::new()));
		let rendered = RenderedReport::from_report(ReportKind::Search, &report).unwrap();

		assert_eq!(rendered.title, "Search results");
		assert_eq!(rendered.text, "No results found");
		assert!(rendered.has_more);
	}

	#[test]
	fn serializes_with_report_key() {
		let rendered = RenderedReport {
			kind: ReportKind::Indexes,
			title: "Indexes".into(),
			text: "No indexes available".into(),
			has_more: false,
		};
		let value = serde_json::to_value(&rendered).unwrap();
		assert_eq!(value["kind"], "indexes");
		assert_eq!(value["report"], "No indexes available");
		assert_eq!(value["has_more"], false);
	}
}
