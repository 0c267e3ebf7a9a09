use clap::ValueEnum;
use meilisearch_tui::ThemeName;

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

/// Viewer themes selectable from the CLI.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ThemeArg {
	Dark,
	Light,
}

impl ThemeArg {
	/// Return the theme name consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		self.name().as_str()
	}

	pub(crate) fn name(self) -> ThemeName {
		match self {
			ThemeArg::Dark => ThemeName::Dark,
			ThemeArg::Light => ThemeName::Light,
		}
	}
}
