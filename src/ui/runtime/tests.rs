use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use crate::rendered::{RenderedReport, ReportKind};
use crate::ui::{Theme, Viewer, ViewerAction};

fn report(text: &str, has_more: bool) -> RenderedReport {
	RenderedReport {
		kind: ReportKind::Search,
		title: "Search results".into(),
		text: text.into(),
		has_more,
	}
}

fn long_report(lines: usize) -> RenderedReport {
	let text = (0..lines)
		.map(|line| format!("id: {line}"))
		.collect::<Vec<_>>()
		.join("\n");
	report(&text, false)
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line.trim_end().to_string());
	}
	lines.join("\n")
}

fn draw(viewer: &mut Viewer, width: u16, height: u16) -> String {
	let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
	terminal.draw(|frame| viewer.draw(frame)).unwrap();
	buffer_to_string(terminal.backend().buffer())
}

fn press(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn draws_title_body_and_hint() {
	let mut viewer = Viewer::new(
		report("## Hits: ~1 | Search time: 2 ms\n\nid: 1\n---", true),
		Theme::default(),
	);
	let view = draw(&mut viewer, 80, 8);
	let lines: Vec<&str> = view.lines().collect();

	assert!(lines[0].contains("Search results"));
	assert!(lines[0].contains("[more results available]"));
	assert_eq!(lines[1].trim(), "## Hits: ~1 | Search time: 2 ms");
	assert_eq!(lines[3].trim(), "id: 1");
	assert!(lines[7].contains("q quit"));
}

#[test]
fn server_label_is_right_aligned_when_it_fits() {
	let mut viewer = Viewer::new(report("Index UID: movies", false), Theme::default())
		.with_server_label(Some("http://localhost:7700".into()));

	let wide = draw(&mut viewer, 60, 4);
	assert!(wide.lines().next().unwrap().ends_with("http://localhost:7700"));

	let narrow = draw(&mut viewer, 24, 4);
	assert!(!narrow.contains("localhost"));
}

#[test]
fn scrolling_is_clamped_to_content() {
	let mut viewer = Viewer::new(long_report(20), Theme::default());
	draw(&mut viewer, 40, 7);

	// Five body rows for twenty lines of content.
	assert_eq!(viewer.max_scroll(), 15);

	viewer.handle_key(press(KeyCode::Char('G')));
	assert_eq!(viewer.scroll(), 15);
	viewer.handle_key(press(KeyCode::Down));
	assert_eq!(viewer.scroll(), 15);

	viewer.handle_key(press(KeyCode::PageUp));
	assert_eq!(viewer.scroll(), 11);
	viewer.handle_key(press(KeyCode::Char('g')));
	assert_eq!(viewer.scroll(), 0);
	viewer.handle_key(press(KeyCode::Up));
	assert_eq!(viewer.scroll(), 0);

	viewer.handle_key(press(KeyCode::Char('j')));
	let view = draw(&mut viewer, 40, 7);
	assert_eq!(view.lines().nth(1).unwrap().trim(), "id: 1");
}

#[test]
fn growing_the_viewport_pulls_the_scroll_back() {
	let mut viewer = Viewer::new(long_report(20), Theme::default());
	draw(&mut viewer, 40, 7);
	viewer.handle_key(press(KeyCode::End));
	assert_eq!(viewer.scroll(), 15);

	// Twelve body rows leave only eight lines to scroll past.
	let view = draw(&mut viewer, 40, 14);
	assert_eq!(viewer.max_scroll(), 8);
	assert_eq!(viewer.scroll(), 8);
	assert_eq!(view.lines().nth(1).unwrap().trim(), "id: 8");
	assert_eq!(view.lines().nth(12).unwrap().trim(), "id: 19");
}

#[test]
fn short_reports_do_not_scroll() {
	let mut viewer = Viewer::new(long_report(2), Theme::default());
	draw(&mut viewer, 40, 10);

	viewer.handle_key(press(KeyCode::PageDown));
	assert_eq!(viewer.scroll(), 0);
}

#[test]
fn wrapped_lines_count_towards_scrolling() {
	let text = "title: ".to_string() + &"word ".repeat(30);
	let mut viewer = Viewer::new(report(&text, false), Theme::default());
	draw(&mut viewer, 22, 5);

	assert!(viewer.max_scroll() > 0);
}

#[test]
fn quit_keys_end_the_session() {
	let mut viewer = Viewer::new(long_report(1), Theme::default());
	assert_eq!(viewer.handle_key(press(KeyCode::Char('q'))), ViewerAction::Quit);
	assert_eq!(viewer.handle_key(press(KeyCode::Esc)), ViewerAction::Quit);
	assert_eq!(
		viewer.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
		ViewerAction::Quit
	);
	assert_eq!(
		viewer.handle_key(press(KeyCode::Char('x'))),
		ViewerAction::Continue
	);
}
