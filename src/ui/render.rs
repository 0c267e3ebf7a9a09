use ratatui::{
	Frame,
	layout::{Constraint, Direction, Layout, Margin, Rect},
	text::{Line, Span, Text},
	widgets::{Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::state::Viewer;
use super::theme::Theme;

const KEY_HINT: &str = "j/k scroll  space/PgUp page  g/G top/bottom  q quit";
const MORE_MARKER: &str = "more results available";

impl Viewer {
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Min(1),
				Constraint::Length(1),
			])
			.split(area);

		self.render_header(frame, layout[0]);
		self.render_body(frame, layout[1]);

		let footer = Paragraph::new(KEY_HINT).style(self.theme.muted_style());
		frame.render_widget(footer, layout[2]);
	}

	fn render_header(&self, frame: &mut Frame, area: Rect) {
		let mut spans = vec![Span::raw(format!(" {} ", self.report.title))];
		if self.report.has_more {
			spans.push(Span::styled(
				format!("[{MORE_MARKER}] "),
				self.theme.marker_style(),
			));
		}

		if let Some(label) = &self.server_label {
			let used: usize = spans.iter().map(|span| span.content.width()).sum();
			let available = usize::from(area.width).saturating_sub(used);
			let label = format!("{label} ");
			if label.width() <= available {
				spans.push(Span::raw(" ".repeat(available - label.width())));
				spans.push(Span::raw(label));
			}
		}

		let header = Paragraph::new(Line::from(spans)).style(self.theme.header_style());
		frame.render_widget(header, area);
	}

	fn render_body(&mut self, frame: &mut Frame, area: Rect) {
		let text = styled_text(&self.report.text, &self.theme);
		let paragraph = Paragraph::new(text)
			.style(self.theme.body_style())
			.wrap(Wrap { trim: false });

		// `paragraph` borrows the report text, so only the layout fields are written here.
		self.viewport_height = area.height;
		self.content_height = u16::try_from(paragraph.line_count(area.width)).unwrap_or(u16::MAX);
		self.scroll = self.scroll.min(self.max_scroll());

		frame.render_widget(paragraph.scroll((self.scroll, 0)), area);
	}
}

/// Style headings and separators; everything else is drawn as-is.
fn styled_text<'a>(text: &'a str, theme: &Theme) -> Text<'a> {
	text.lines()
		.map(|line| {
			if line.starts_with('#') {
				Line::styled(line, theme.heading_style())
			} else if !line.is_empty() && line.chars().all(|ch| ch == '-') {
				Line::styled(line, theme.muted_style())
			} else {
				Line::raw(line)
			}
		})
		.collect()
}
