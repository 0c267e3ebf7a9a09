use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser, Subcommand};

use super::options::{OutputFormat, ThemeArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `meilisearch-tui` binary.
#[derive(Parser, Debug)]
#[command(
    name = "meilisearch-tui",
    version,
    long_version = long_version(),
    about = "Render Meilisearch search results, index settings, and index listings",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "MEILISEARCH_TUI_CONFIG",
        action = ArgAction::Append,
        global = true,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        global = true,
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        long,
        value_name = "URL",
        global = true,
        help = "Meilisearch server URL (default: MEILI_HTTP_ADDR or configuration)"
    )]
    pub(crate) url: Option<String>,
    #[arg(
        long = "master-key",
        value_name = "KEY",
        global = true,
        help = "Meilisearch master key (default: MEILI_MASTER_KEY or configuration)"
    )]
    pub(crate) master_key: Option<String>,
    #[arg(
        long,
        value_enum,
        global = true,
        help = "Select the viewer theme (default: dark)"
    )]
    pub(crate) theme: Option<ThemeArg>,
    #[arg(
        short = 'p',
        long = "print-config",
        global = true,
        help = "Print the resolved configuration before rendering (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        global = true,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the report"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        long,
        global = true,
        help = "Open the report in the terminal viewer instead of printing it (default: disabled)"
    )]
    pub(crate) view: bool,
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Increase log verbosity, repeat for more detail"
    )]
    pub(crate) verbose: u8,
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Only log warnings and errors (default: disabled)"
    )]
    pub(crate) quiet: bool,
    #[command(subcommand)]
    pub(crate) command: Command,
}

/// Report to render. Each reads a JSON response from a file, or stdin when
/// the path is omitted or `-`.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    /// Render the response of a search request
    Search {
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,
    },
    /// Render the settings of an index
    Settings {
        #[arg(short, long, value_name = "NAME", help = "Name of the index the settings belong to")]
        index: String,
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,
    },
    /// Render the list of indexes on a server
    Indexes {
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,
    },
}
