use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::from("Effective configuration:\n");
	let _ = writeln!(
		out,
		"  Meilisearch URL: {}",
		config.meilisearch_url.as_deref().unwrap_or("(not set)")
	);
	let _ = writeln!(
		out,
		"  Master key: {}",
		config
			.master_key
			.as_deref()
			.map_or("(not set)", |_| "********")
	);
	match config.timeout_ms {
		Some(timeout) => {
			let _ = writeln!(out, "  Timeout: {timeout} ms");
		}
		None => {
			let _ = writeln!(out, "  Timeout: (client default)");
		}
	}
	let _ = writeln!(out, "  Theme: {}", config.theme);
	if let Some(ratio) = config.semantic_ratio {
		let _ = writeln!(out, "  Semantic ratio: {ratio}");
	}
	if let Some(embedder) = &config.embedder {
		let _ = writeln!(out, "  Embedder: {embedder}");
	}
	out
}
