use std::env;

use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining config files, environment variables and
/// CLI arguments, in increasing order of precedence.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	let lookup = |name: &str| env::var(name).ok();
	raw.apply_server_env(lookup);
	raw.apply_cli_overrides(cli);
	let resolved = raw.resolve(cli, lookup)?;

	tracing::debug!(
		url = resolved.meilisearch_url.as_deref().unwrap_or("(not set)"),
		theme = %resolved.theme,
		"configuration resolved"
	);
	Ok(resolved)
}
