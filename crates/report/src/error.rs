use thiserror::Error;

/// Input that cannot be rendered without silently dropping information.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
	#[error("hit {hit} has a `_formatted` value of type {found}, expected an object")]
	FormattedNotObject { hit: usize, found: &'static str },
}
