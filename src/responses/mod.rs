//! Decoding of the search engine's JSON responses into report values.
//!
//! These types describe the wire shape (camelCase keys, optional envelopes)
//! and convert into the plain report types from `meilisearch_tui_report`.

mod indexes;
mod search;
mod settings;

pub use indexes::{IndexEntry, IndexList};
pub use search::SearchResponse;
pub use settings::IndexSettings;
