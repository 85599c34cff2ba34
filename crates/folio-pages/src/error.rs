//! Error types for the page layer.

use folio_router::RouterError;
use thiserror::Error;

/// Error type for mounting and rendering the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagesError {
	/// Route table or settings error.
	#[error(transparent)]
	Router(#[from] RouterError),
	/// The global `window` or `document` is not available.
	#[error("Browser environment unavailable: {0}")]
	NoBrowser(&'static str),
	/// The mount element does not exist.
	#[error("No #{0} element found")]
	MissingElement(String),
	/// A DOM call failed.
	#[error("DOM operation failed: {0}")]
	Dom(String),
}

/// Result alias for page operations.
pub type Result<T> = std::result::Result<T, PagesError>;
