//! Reading collaborator responses from a file or stdin.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Where a JSON response document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
	Stdin,
	File(PathBuf),
}

impl InputSource {
	/// A missing path or `-` means stdin.
	pub fn from_arg(path: Option<&Path>) -> Self {
		match path {
			Some(path) if path != Path::new("-") => Self::File(path.to_path_buf()),
			_ => Self::Stdin,
		}
	}

	pub fn read_to_string(&self) -> Result<String> {
		match self {
			Self::Stdin => {
				let mut buffer = String::new();
				io::stdin()
					.read_to_string(&mut buffer)
					.context("failed to read response from stdin")?;
				Ok(buffer)
			}
			Self::File(path) => fs::read_to_string(path)
				.with_context(|| format!("failed to read response from {}", path.display())),
		}
	}

	/// Read and decode a JSON document.
	pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
		let raw = self.read_to_string()?;
		decode_json(&raw, self)
	}
}

impl fmt::Display for InputSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Stdin => f.write_str("stdin"),
			Self::File(path) => write!(f, "{}", path.display()),
		}
	}
}

/// Decode a JSON document read from `source`.
pub fn decode_json<T: DeserializeOwned>(raw: &str, source: &InputSource) -> Result<T> {
	serde_json::from_str(raw).with_context(|| format!("failed to parse response from {source}"))
}
