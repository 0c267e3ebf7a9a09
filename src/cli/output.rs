use anyhow::Result;
use meilisearch_tui::RenderedReport;
use serde_json::json;

/// Print the report text exactly as rendered.
pub(crate) fn print_plain(report: &RenderedReport) {
	println!("{}", report.text);
}

/// Format the rendered report as a JSON string.
pub(crate) fn format_report_json(report: &RenderedReport) -> Result<String> {
	let payload = json!({
		"kind": report.kind,
		"title": report.title,
		"report": report.text,
		"has_more": report.has_more,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the rendered report.
pub(crate) fn print_json(report: &RenderedReport) -> Result<()> {
	println!("{}", format_report_json(report)?);
	Ok(())
}
