//! Terminal viewer for rendered reports.
//!
//! [`state`] holds the scroll position and key handling, [`render`] draws a
//! frame, and [`runtime`] drives the terminal event loop.

mod render;
mod runtime;
mod state;
pub mod theme;

pub use runtime::run;
pub use state::{Viewer, ViewerAction};
pub use theme::{Theme, ThemeName};
