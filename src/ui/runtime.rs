use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::{Viewer, ViewerAction};

/// Show the viewer until the user quits.
pub fn run(mut viewer: Viewer) -> Result<()> {
	let mut terminal = ratatui::init();
	terminal.clear()?;

	let (event_tx, event_rx) = mpsc::channel();
	let event_loop_running = Arc::new(AtomicBool::new(true));
	let event_loop_flag = Arc::clone(&event_loop_running);

	let event_thread = thread::spawn(move || -> Result<()> {
		while event_loop_flag.load(Ordering::Relaxed) {
			if event::poll(Duration::from_millis(50))? {
				let event = event::read()?;
				if event_tx.send(event).is_err() {
					break;
				}
			}
		}
		Ok(())
	});

	tracing::debug!(title = %viewer.report().title, "viewer started");

	let result: Result<()> = 'event_loop: loop {
		if let Err(err) = terminal.draw(|frame| viewer.draw(frame)) {
			break Err(err.into());
		}

		let event = match event_rx.recv_timeout(Duration::from_millis(250)) {
			Ok(event) => event,
			Err(mpsc::RecvTimeoutError::Timeout) => continue,
			Err(mpsc::RecvTimeoutError::Disconnected) => {
				break Err(anyhow!("input event channel disconnected"));
			}
		};

		if let Some(ViewerAction::Quit) = dispatch(&mut viewer, event) {
			break 'event_loop Ok(());
		}

		while let Ok(event) = event_rx.try_recv() {
			if let Some(ViewerAction::Quit) = dispatch(&mut viewer, event) {
				break 'event_loop Ok(());
			}
		}
	};

	ratatui::restore();

	event_loop_running.store(false, Ordering::Relaxed);
	match event_thread.join() {
		Ok(join_result) => join_result?,
		Err(err) => std::panic::resume_unwind(err),
	}

	tracing::debug!(scroll = viewer.scroll(), "viewer closed");
	result
}

fn dispatch(viewer: &mut Viewer, event: Event) -> Option<ViewerAction> {
	match event {
		Event::Key(key) if key.kind == KeyEventKind::Press => Some(viewer.handle_key(key)),
		_ => None,
	}
}

#[cfg(test)]
mod tests;
