mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli};
use meilisearch_tui::logging::{self, LogOptions, LogTarget};
use meilisearch_tui::{RenderedReport, Viewer, app_dirs};
use settings::ResolvedConfig;
use workflow::ReportWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	logging::initialize(&LogOptions {
		verbose: cli.verbose,
		quiet: cli.quiet,
		target: log_target(cli.view),
	})?;

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let workflow = ReportWorkflow::from_command(&cli.command);
	let report = workflow.run()?;

	if cli.view {
		show(report, &resolved)
	} else {
		print(cli.output, &report)
	}
}

fn log_target(view: bool) -> LogTarget {
	if !view {
		return LogTarget::Stderr;
	}
	match app_dirs::get_data_dir() {
		Ok(dir) => LogTarget::File(dir.join(logging::LOG_FILE_NAME)),
		Err(_) => LogTarget::Stderr,
	}
}

/// Open the rendered report in the terminal viewer.
fn show(report: RenderedReport, settings: &ResolvedConfig) -> Result<()> {
	let viewer = Viewer::new(report, settings.theme.theme())
		.with_server_label(settings.meilisearch_url.clone());
	meilisearch_tui::ui::run(viewer)
}

/// Print the rendered report in the chosen format.
fn print(format: OutputFormat, report: &RenderedReport) -> Result<()> {
	match format {
		OutputFormat::Plain => cli::print_plain(report),
		OutputFormat::Json => cli::print_json(report)?,
	}
	Ok(())
}
