//! Library side of `meilisearch-tui`.
//!
//! Report rendering lives in the `meilisearch_tui_report` crate. This crate
//! decodes the search engine's responses into those reports, resolves the
//! directories and logging used by the binary, and hosts the terminal viewer.

pub mod app_dirs;
pub mod input;
pub mod logging;
pub mod rendered;
pub mod responses;
pub mod ui;

pub use input::InputSource;
pub use rendered::{RenderedReport, ReportKind};
pub use ui::{Theme, ThemeName, Viewer};
