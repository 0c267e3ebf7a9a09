//! Configuration loading and resolution.
//!
//! `load` merges config files, environment variables, and CLI flags into a
//! [`ResolvedConfig`] that `main` builds once and passes down explicitly.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
