use crate::error::RenderError;
use crate::indexes::IndexListReport;
use crate::search::SearchReport;
use crate::settings::SettingsReport;

/// Common surface for anything the front-end can show as a text report.
pub trait Report {
	/// Short heading shown above the rendered text.
	fn title(&self) -> String;

	fn render(&self) -> Result<String, RenderError>;

	/// Whether the collaborator has more results than this report carries.
	fn has_more(&self) -> bool {
		false
	}
}

impl Report for SearchReport {
	fn title(&self) -> String {
		"Search results".to_string()
	}

	fn render(&self) -> Result<String, RenderError> {
		SearchReport::render(self).map(|rendering| rendering.text)
	}

	fn has_more(&self) -> bool {
		SearchReport::has_more(self)
	}
}

impl Report for SettingsReport {
	fn title(&self) -> String {
		format!("Settings: {}", self.index_name)
	}

	fn render(&self) -> Result<String, RenderError> {
		Ok(SettingsReport::render(self))
	}
}

impl Report for IndexListReport {
	fn title(&self) -> String {
		"Indexes".to_string()
	}

	fn render(&self) -> Result<String, RenderError> {
		Ok(IndexListReport::render(self))
	}
}
