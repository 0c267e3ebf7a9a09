use anyhow::{Error, Result};
use meilisearch_tui::ThemeName;
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

/// Server address variable shared with the Meilisearch server itself.
pub(super) const SERVER_URL_ENV: &str = "MEILI_HTTP_ADDR";
/// Master key variable shared with the Meilisearch server itself.
pub(super) const MASTER_KEY_ENV: &str = "MEILI_MASTER_KEY";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	pub(super) meilisearch_url: Option<String>,
	pub(super) master_key: Option<String>,
	pub(super) timeout: Option<u64>,
	pub(super) theme: Option<String>,
	pub(super) semantic_ratio: Option<f64>,
	pub(super) embedder: Option<String>,
}

impl RawConfig {
	/// Apply `MEILI_HTTP_ADDR` and `MEILI_MASTER_KEY`; empty values are ignored.
	pub(super) fn apply_server_env<F>(&mut self, lookup: F)
	where
		F: Fn(&str) -> Option<String>,
	{
		if let Some(url) = lookup(SERVER_URL_ENV).and_then(non_empty) {
			self.meilisearch_url = Some(url);
		}
		if let Some(key) = lookup(MASTER_KEY_ENV).and_then(non_empty) {
			self.master_key = Some(key);
		}
	}

	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.url.clone() {
			self.meilisearch_url = Some(url);
		}
		if let Some(key) = cli.master_key.clone() {
			self.master_key = Some(key);
		}
		if let Some(theme) = cli.theme {
			self.theme = Some(theme.as_str().to_string());
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	///
	/// `lookup` reads environment variables and is used to name the origin of
	/// an invalid value.
	pub(super) fn resolve<F>(self, cli: &CliArgs, lookup: F) -> Result<ResolvedConfig>
	where
		F: Fn(&str) -> Option<String>,
	{
		let sources = ConfigSources {
			meilisearch_url: detect_source(
				self.meilisearch_url.is_some(),
				Some(("--url", cli.url.is_some())),
				&[SERVER_URL_ENV, "MEILISEARCH_TUI__MEILISEARCH_URL"],
				"meilisearch_url",
				&lookup,
			),
			timeout: detect_source(
				self.timeout.is_some(),
				None,
				&["MEILISEARCH_TUI__TIMEOUT"],
				"timeout",
				&lookup,
			),
			semantic_ratio: detect_source(
				self.semantic_ratio.is_some(),
				None,
				&["MEILISEARCH_TUI__SEMANTIC_RATIO"],
				"semantic_ratio",
				&lookup,
			),
			theme: detect_source(
				self.theme.is_some(),
				Some(("--theme", cli.theme.is_some())),
				&["MEILISEARCH_TUI__THEME"],
				"theme",
				&lookup,
			),
		};

		let theme = match self.theme.as_deref() {
			Some(value) => value.parse::<ThemeName>().map_err(|err| {
				ConfigError::invalid("theme", value, sources.source_for_theme(), err.to_string())
			})?,
			None => ThemeName::default(),
		};

		let config = ResolvedConfig {
			meilisearch_url: self.meilisearch_url.and_then(non_empty),
			master_key: self.master_key.and_then(non_empty),
			timeout_ms: self.timeout,
			theme,
			semantic_ratio: self.semantic_ratio,
			embedder: self.embedder.and_then(non_empty),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn non_empty(value: String) -> Option<String> {
	let trimmed = value.trim();
	if trimmed.is_empty() {
		None
	} else {
		Some(trimmed.to_string())
	}
}

fn detect_source(
	value_present: bool,
	cli_flag: Option<(&'static str, bool)>,
	env_vars: &[&'static str],
	key: &'static str,
	lookup: &dyn Fn(&str) -> Option<String>,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if let Some((flag, true)) = cli_flag {
		return Some(SettingSource::CliFlag(flag));
	}

	for &var in env_vars {
		if lookup(var).and_then(non_empty).is_some() {
			return Some(SettingSource::Environment(var));
		}
	}

	Some(SettingSource::ConfigKey(key))
}
