use meilisearch_tui::ThemeName;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedConfig {
	pub meilisearch_url: Option<String>,
	pub master_key: Option<String>,
	pub timeout_ms: Option<u64>,
	pub theme: ThemeName,
	pub semantic_ratio: Option<f64>,
	pub embedder: Option<String>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		eprint!("{}", summary::format_summary(self));
	}
}
