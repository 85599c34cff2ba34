//! Error types for page routing.

use thiserror::Error;

/// Error type for router operations.
///
/// Only configuration and table construction surface errors to callers.
/// Runtime navigation degrades to the home page instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
	/// The same page id was registered twice.
	#[error("Duplicate page id: {0}")]
	DuplicatePageId(String),
	/// The designated home page has no table entry.
	#[error("Home page is not registered: {0}")]
	MissingHome(String),
	/// The home page must own the root slug.
	#[error("Home page '{id}' must use the empty slug, got '{slug}'")]
	HomeSlugNotEmpty {
		/// Home page id.
		id: String,
		/// Slug registered for it.
		slug: String,
	},
	/// A page other than home claimed the root slug.
	#[error("Empty slug is reserved for the home page, but '{0}' uses it")]
	EmptySlugReserved(String),
	/// A slug resolves to a different page than the one that registered it.
	#[error("Slug '{slug}' of page '{id}' is shadowed by page '{shadowed_by}'")]
	ShadowedSlug {
		/// Page whose slug no longer round-trips.
		id: String,
		/// Normalized slug.
		slug: String,
		/// Page the reverse table returns instead.
		shadowed_by: String,
	},
	/// Settings could not be parsed.
	#[error("Invalid router settings: {0}")]
	InvalidSettings(String),
	/// A history or DOM call failed.
	#[error("Navigation failed: {0}")]
	NavigationFailed(String),
}

/// Result alias for router operations.
pub type Result<T> = std::result::Result<T, RouterError>;
