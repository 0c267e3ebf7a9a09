//! Rendering for the list of indexes on a server.

/// Body used when the server has no indexes.
pub const NO_INDEXES: &str = "No indexes available";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSummary {
	pub uid: String,
	pub primary_key: Option<String>,
}

impl IndexSummary {
	pub fn new(uid: impl Into<String>, primary_key: Option<String>) -> Self {
		Self {
			uid: uid.into(),
			primary_key,
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexListReport {
	pub indexes: Vec<IndexSummary>,
}

impl IndexListReport {
	#[must_use]
	pub fn render(&self) -> String {
		render_indexes(&self.indexes)
	}
}

/// Render each index uid, with its primary key when one is set.
#[must_use]
pub fn render_indexes(indexes: &[IndexSummary]) -> String {
	if indexes.is_empty() {
		return NO_INDEXES.to_string();
	}

	let mut out = String::new();
	for index in indexes {
		out.push_str("Index UID: ");
		out.push_str(&index.uid);
		out.push('\n');
		if let Some(primary_key) = &index.primary_key {
			out.push_str("Primary Key: ");
			out.push_str(primary_key);
			out.push('\n');
		}
		out.push('\n');
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn primary_key_is_listed_when_present() {
		let indexes = [IndexSummary::new("movies", Some("movie_id".into()))];
		assert_eq!(
			render_indexes(&indexes),
			"Index UID: movies\nPrimary Key: movie_id\n\n"
		);
	}

	#[test]
	fn order_follows_the_input() {
		let indexes = [
			IndexSummary::new("books", Some("book_id".into())),
			IndexSummary::new("movies", None),
		];
		assert_eq!(
			render_indexes(&indexes),
			"Index UID: books\nPrimary Key: book_id\n\nIndex UID: movies\n\n"
		);
	}

	#[test]
	fn empty_listing_has_a_fixed_message() {
		assert_eq!(render_indexes(&[]), NO_INDEXES);
	}
}
