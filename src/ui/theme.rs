use std::fmt;
use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use thiserror::Error;

/// Styles used by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub header: Style,
	pub heading: Style,
	pub body: Style,
	pub muted: Style,
	pub marker: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn heading_style(&self) -> Style {
		self.heading
	}

	#[must_use]
	pub fn body_style(&self) -> Style {
		self.body
	}

	#[must_use]
	pub fn muted_style(&self) -> Style {
		self.muted
	}

	#[must_use]
	pub fn marker_style(&self) -> Style {
		self.marker
	}
}

pub const DARK: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	heading: Style::new().fg(Color::LightCyan).add_modifier(Modifier::BOLD),
	body: Style::new(),
	muted: Style::new().fg(Color::DarkGray),
	marker: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	heading: Style::new()
		.fg(Color::Rgb(0, 102, 153))
		.add_modifier(Modifier::BOLD),
	body: Style::new(),
	muted: Style::new().fg(Color::Rgb(100, 100, 100)),
	marker: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
};

/// Themes selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeName {
	#[default]
	Dark,
	Light,
}

impl ThemeName {
	pub const ALL: [ThemeName; 2] = [ThemeName::Dark, ThemeName::Light];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Dark => "dark",
			Self::Light => "light",
		}
	}

	#[must_use]
	pub fn theme(self) -> Theme {
		match self {
			Self::Dark => DARK,
			Self::Light => LIGHT,
		}
	}
}

impl fmt::Display for ThemeName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme '{0}' (expected dark or light)")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeName {
	type Err = UnknownTheme;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"dark" => Ok(Self::Dark),
			"light" => Ok(Self::Light),
			_ => Err(UnknownTheme(value.to_string())),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		ThemeName::default().theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn names_parse_case_insensitively() {
		assert_eq!(" Light ".parse::<ThemeName>(), Ok(ThemeName::Light));
		assert_eq!("DARK".parse::<ThemeName>(), Ok(ThemeName::Dark));
		assert!("solarized".parse::<ThemeName>().is_err());
	}

	#[test]
	fn every_name_round_trips_through_display() {
		for name in ThemeName::ALL {
			assert_eq!(name.to_string().parse::<ThemeName>(), Ok(name));
		}
	}

	#[test]
	fn default_theme_is_dark() {
		assert_eq!(Theme::default(), DARK);
	}
}
