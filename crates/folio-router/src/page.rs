//! Page identifiers and their decoded form.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Prefix used to encode blog posts as page ids.
pub const DEFAULT_BLOG_PREFIX: &str = "blog-";

/// Opaque identifier of a logical view, e.g. `"home"` or `"blog-rust-tips"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
	/// Creates a page id.
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	/// Returns the id as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Encodes a blog post id from its slug.
	pub fn blog_post(prefix: &str, slug: &str) -> Self {
		Self(format!("{}{}", prefix, slug))
	}
}

impl fmt::Display for PageId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for PageId {
	fn from(id: &str) -> Self {
		Self(id.to_string())
	}
}

impl From<String> for PageId {
	fn from(id: String) -> Self {
		Self(id)
	}
}

impl AsRef<str> for PageId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for PageId {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl PartialEq<str> for PageId {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for PageId {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

/// Decoded form of a [`PageId`].
///
/// String prefixes are only inspected when decoding; everything past the
/// URL boundary matches on this enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Page {
	/// A page registered in the route table.
	Static(PageId),
	/// A blog post identified by its slug.
	BlogPost {
		/// Post slug without the blog prefix.
		slug: String,
	},
	/// An id that is neither registered nor a blog post.
	Unknown(PageId),
}

impl Page {
	/// Returns true for table-registered pages.
	pub fn is_static(&self) -> bool {
		matches!(self, Self::Static(_))
	}
}
