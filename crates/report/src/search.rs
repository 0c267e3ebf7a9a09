//! Rendering for a page of search hits.

use serde_json::Value;

use crate::error::RenderError;
use crate::value::{display_value, type_name};
use crate::Record;

/// Key under which the engine returns highlighted copies of a hit's fields.
pub const FORMATTED_KEY: &str = "_formatted";

/// Closing line appended after every rendered hit.
pub const HIT_SEPARATOR: &str = "-------------------------------";

/// Body used in place of the whole report when a page has no hits.
pub const NO_RESULTS: &str = "No results found";

/// One page of search results as returned by the search collaborator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchReport {
	pub estimated_total_hits: Option<u64>,
	pub processing_time_ms: u64,
	pub hits: Option<Vec<Record>>,
}

/// Rendered search text plus whether the engine reported more hits than it
/// returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRendering {
	pub text: String,
	pub has_more: bool,
}

impl SearchReport {
	pub fn new(
		estimated_total_hits: Option<u64>,
		processing_time_ms: u64,
		hits: Option<Vec<Record>>,
	) -> Self {
		Self {
			estimated_total_hits,
			processing_time_ms,
			hits,
		}
	}

	pub fn render(&self) -> Result<SearchRendering, RenderError> {
		render_search(
			self.estimated_total_hits,
			self.processing_time_ms,
			self.hits.as_deref(),
		)
	}

	/// Number of hits displayed in the header.
	#[must_use]
	pub fn display_hit_count(&self) -> u64 {
		self.estimated_total_hits.unwrap_or(0)
	}

	#[must_use]
	pub fn has_more(&self) -> bool {
		has_more(self.display_hit_count(), self.hits.as_deref())
	}
}

/// Render a page of hits into the report text.
///
/// An absent or empty page renders as [`NO_RESULTS`] with no header, even when
/// the estimated total is positive.
pub fn render_search(
	estimated_total_hits: Option<u64>,
	processing_time_ms: u64,
	hits: Option<&[Record]>,
) -> Result<SearchRendering, RenderError> {
	let display_hit_count = estimated_total_hits.unwrap_or(0);
	let has_more = has_more(display_hit_count, hits);

	let hits = match hits {
		Some(hits) if !hits.is_empty() => hits,
		_ => {
			return Ok(SearchRendering {
				text: NO_RESULTS.to_string(),
				has_more,
			});
		}
	};

	let mut lines = Vec::with_capacity(hits.len() * 4 + 1);
	lines.push(format!(
		"## Hits: ~{display_hit_count} | Search time: {processing_time_ms} ms\n"
	));

	for (position, hit) in hits.iter().enumerate() {
		for (name, value) in displayed_fields(position, hit)? {
			lines.push(format!("{name}: {}", display_value(value)));
		}
		lines.push(HIT_SEPARATOR.to_string());
	}

	Ok(SearchRendering {
		text: lines.join("\n"),
		has_more,
	})
}

fn has_more(display_hit_count: u64, hits: Option<&[Record]>) -> bool {
	let returned = hits.map_or(0, <[Record]>::len) as u64;
	display_hit_count > returned
}

/// Pick the fields to print for a hit, preferring highlighted values.
fn displayed_fields(
	position: usize,
	hit: &Record,
) -> Result<Box<dyn Iterator<Item = (&String, &Value)> + '_>, RenderError> {
	match hit.get(FORMATTED_KEY) {
		Some(Value::Object(formatted)) if !formatted.is_empty() => Ok(Box::new(formatted.iter())),
		None | Some(Value::Null | Value::Object(_)) => Ok(Box::new(
			hit.iter().filter(|(name, _)| name.as_str() != FORMATTED_KEY),
		)),
		Some(other) => Err(RenderError::FormattedNotObject {
			hit: position,
			found: type_name(other),
		}),
	}
}
