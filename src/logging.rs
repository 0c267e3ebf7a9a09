//! Tracing subscriber setup.
//!
//! Printed reports go to stdout, so plain runs log to stderr. The viewer owns
//! the whole terminal and logs to a file in the data directory instead.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the verbosity flags.
pub const LOG_ENV: &str = "MEILISEARCH_TUI_LOG";

/// File name used for the viewer's log inside the data directory.
pub const LOG_FILE_NAME: &str = "meilisearch-tui.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
	Stderr,
	File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct LogOptions {
	pub verbose: u8,
	pub quiet: bool,
	pub target: LogTarget,
}

/// Install the global subscriber.
pub fn initialize(options: &LogOptions) -> Result<()> {
	let filter = match std::env::var(LOG_ENV) {
		Ok(directives) => EnvFilter::try_new(directives)
			.with_context(|| format!("invalid {LOG_ENV} directives"))?,
		Err(_) => default_filter(options.verbose, options.quiet),
	};

	let builder = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.without_time();

	let installed = match &options.target {
		LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
		LogTarget::File(path) => {
			if let Some(parent) = path.parent() {
				fs::create_dir_all(parent)
					.with_context(|| format!("failed to create {}", parent.display()))?;
			}
			let file = OpenOptions::new()
				.create(true)
				.append(true)
				.open(path)
				.with_context(|| format!("failed to open log file {}", path.display()))?;
			builder
				.with_ansi(false)
				.with_writer(Mutex::new(file))
				.try_init()
		}
	};

	installed.map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

fn default_filter(verbose: u8, quiet: bool) -> EnvFilter {
	EnvFilter::new(default_directive(verbose, quiet))
}

fn default_directive(verbose: u8, quiet: bool) -> &'static str {
	if quiet {
		return "warn";
	}
	match verbose {
		0 => "info",
		1 => "debug",
		_ => "trace",
	}
}
