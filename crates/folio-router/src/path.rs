//! Path normalization and location snapshots.

/// Removes every leading and trailing `/` from `path`.
///
/// ```
/// use folio_router::normalize;
///
/// assert_eq!(normalize("/contact/"), "contact");
/// assert_eq!(normalize("///"), "");
/// ```
pub fn normalize(path: &str) -> &str {
	path.trim_matches('/')
}

/// Builds the root-relative path for a slug: `/` for the empty slug,
/// `/<slug>` otherwise.
pub fn path_for_slug(slug: &str) -> String {
	let slug = normalize(slug);
	if slug.is_empty() {
		"/".to_string()
	} else {
		format!("/{}", slug)
	}
}

/// Snapshot of the parts of `window.location` the router reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
	/// `location.pathname`, e.g. `/contact`.
	pub pathname: String,
	/// `location.search`, including the leading `?` when present.
	pub search: String,
}

impl Location {
	/// Creates a location with an empty query string.
	pub fn new(pathname: impl Into<String>) -> Self {
		Self {
			pathname: pathname.into(),
			search: String::new(),
		}
	}

	/// Sets the query string.
	pub fn with_search(mut self, search: impl Into<String>) -> Self {
		self.search = search.into();
		self
	}

	/// Returns the value of query parameter `name`, if present.
	///
	/// A malformed query string is treated as having no parameters.
	pub fn query_param(&self, name: &str) -> Option<String> {
		let query = self.search.strip_prefix('?').unwrap_or(&self.search);
		if query.is_empty() {
			return None;
		}
		serde_urlencoded::from_str::<Vec<(String, String)>>(query)
			.ok()?
			.into_iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value)
	}
}
