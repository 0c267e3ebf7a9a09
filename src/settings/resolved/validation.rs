use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if let Some(url) = &config.meilisearch_url
		&& !(url.starts_with("http://") || url.starts_with("https://"))
	{
		return Err(ConfigError::invalid(
			"meilisearch_url",
			url.as_str(),
			sources.source_for_url(),
			"must start with http:// or https://",
		));
	}

	if let Some(timeout) = config.timeout_ms
		&& timeout == 0
	{
		return Err(ConfigError::invalid(
			"timeout",
			timeout.to_string(),
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	if let Some(ratio) = config.semantic_ratio
		&& !(0.0..=1.0).contains(&ratio)
	{
		return Err(ConfigError::invalid(
			"semantic_ratio",
			ratio.to_string(),
			sources.source_for_semantic_ratio(),
			"must be between 0.0 and 1.0",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::super::SettingSource;
	use super::*;

	#[test]
	fn validation_rejects_urls_without_scheme() {
		let config = ResolvedConfig {
			meilisearch_url: Some("localhost:7700".into()),
			..ResolvedConfig::default()
		};
		let sources = ConfigSources {
			meilisearch_url: Some(SettingSource::Environment("MEILI_HTTP_ADDR")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "meilisearch_url"));
		let message = err.to_string();
		assert!(message.contains("value: localhost:7700"));
		assert!(message.contains("environment variable `MEILI_HTTP_ADDR`"));
	}

	#[test]
	fn validation_rejects_zero_timeout() {
		let config = ResolvedConfig {
			timeout_ms: Some(0),
			..ResolvedConfig::default()
		};

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert!(matches!(err.key, "timeout"));
		assert!(err.to_string().contains("configuration key `timeout`"));
	}

	#[test]
	fn validation_rejects_out_of_range_ratio() {
		for ratio in [-0.1, 1.01, f64::NAN] {
			let config = ResolvedConfig {
				semantic_ratio: Some(ratio),
				..ResolvedConfig::default()
			};
			assert!(validate(&config, &ConfigSources::default()).is_err());
		}
	}

	#[test]
	fn validation_accepts_sensible_values() {
		let config = ResolvedConfig {
			meilisearch_url: Some("https://search.example.com".into()),
			timeout_ms: Some(5_000),
			semantic_ratio: Some(0.5),
			..ResolvedConfig::default()
		};
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}
}
