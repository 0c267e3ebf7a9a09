//! Text renderers for the reports shown by `meilisearch-tui`.
//!
//! Every renderer in this crate is a pure function: it reads already decoded
//! values and returns a freshly allocated string. Nothing here performs I/O or
//! keeps state between calls, so the same input always produces byte-identical
//! output.

mod error;
pub mod indexes;
mod report;
pub mod search;
pub mod settings;
mod value;

pub use error::RenderError;
pub use indexes::{IndexListReport, IndexSummary, render_indexes};
pub use report::Report;
pub use search::{SearchRendering, SearchReport, render_search};
pub use settings::{SettingsReport, render_settings, setting_label};
pub use value::display_value;

/// A single hit or settings map with its field order preserved.
pub type Record = serde_json::Map<String, serde_json::Value>;
