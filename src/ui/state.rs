//! Scroll state and key handling for the report viewer.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::theme::Theme;
use crate::rendered::RenderedReport;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
	Continue,
	Quit,
}

/// A scrollable view over one rendered report.
#[derive(Debug, Clone)]
pub struct Viewer {
	pub(crate) report: RenderedReport,
	pub(crate) theme: Theme,
	pub(crate) server_label: Option<String>,
	pub(crate) scroll: u16,
	/// Body height and wrapped line count from the most recent draw.
	pub(crate) viewport_height: u16,
	pub(crate) content_height: u16,
}

impl Viewer {
	pub fn new(report: RenderedReport, theme: Theme) -> Self {
		Self {
			report,
			theme,
			server_label: None,
			scroll: 0,
			viewport_height: 0,
			content_height: 0,
		}
	}

	/// Show which server the report came from in the header bar.
	#[must_use]
	pub fn with_server_label(mut self, label: Option<String>) -> Self {
		self.server_label = label;
		self
	}

	pub fn report(&self) -> &RenderedReport {
		&self.report
	}

	pub fn scroll(&self) -> u16 {
		self.scroll
	}

	/// Largest scroll offset that still fills the viewport.
	pub fn max_scroll(&self) -> u16 {
		self.content_height.saturating_sub(self.viewport_height)
	}

	pub fn scroll_down(&mut self, lines: u16) {
		self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll());
	}

	pub fn scroll_up(&mut self, lines: u16) {
		self.scroll = self.scroll.saturating_sub(lines);
	}

	fn page(&self) -> u16 {
		self.viewport_height.saturating_sub(1).max(1)
	}

	pub fn handle_key(&mut self, key: KeyEvent) -> ViewerAction {
		match key.code {
			KeyCode::Char('q') | KeyCode::Esc => return ViewerAction::Quit,
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return ViewerAction::Quit;
			}
			KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
			KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
			KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_down(self.page()),
			KeyCode::PageUp => self.scroll_up(self.page()),
			KeyCode::Home | KeyCode::Char('g') => self.scroll = 0,
			KeyCode::End | KeyCode::Char('G') => self.scroll = self.max_scroll(),
			_ => {}
		}
		ViewerAction::Continue
	}
}
