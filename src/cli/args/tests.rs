use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};

use super::options::ThemeArg;
use super::{CliArgs, Command, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["meilisearch-tui", "search"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert_eq!(parsed.command, Command::Search { input: None });
	assert!(!parsed.view);
	assert_eq!(parsed.verbose, 0);
}

#[test]
fn global_flags_follow_the_subcommand() {
	let parsed = CliArgs::parse_from([
		"meilisearch-tui",
		"settings",
		"--index",
		"movies",
		"settings.json",
		"-o",
		"json",
		"--theme",
		"light",
		"-vv",
	]);

	assert_eq!(
		parsed.command,
		Command::Settings {
			index: "movies".into(),
			input: Some(PathBuf::from("settings.json")),
		}
	);
	assert_eq!(parsed.output, OutputFormat::Json);
	assert_eq!(parsed.theme, Some(ThemeArg::Light));
	assert_eq!(parsed.verbose, 2);
}

#[test]
fn settings_requires_an_index_name() {
	assert!(CliArgs::try_parse_from(["meilisearch-tui", "settings"]).is_err());
}

#[test]
fn a_subcommand_is_required() {
	assert!(CliArgs::try_parse_from(["meilisearch-tui"]).is_err());
}
