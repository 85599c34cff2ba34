//! In-app link interception rules.
//!
//! Only anchors that point at a registered page are handled by the router.
//! Everything else, such as downloads, new-tab links, static files, and
//! external URLs, keeps its default browser behavior.

use folio_router::RouteTable;

/// The anchor attributes the click handler inspects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkAttrs<'a> {
	/// `href` attribute.
	pub href: Option<&'a str>,
	/// `target` attribute.
	pub target: Option<&'a str>,
	/// Whether a `download` attribute is present.
	pub download: bool,
}

impl<'a> LinkAttrs<'a> {
	/// Creates attributes for a plain `<a href>`.
	pub fn href(href: &'a str) -> Self {
		Self {
			href: Some(href),
			..Self::default()
		}
	}

	/// Sets the `target` attribute.
	pub fn with_target(mut self, target: &'a str) -> Self {
		self.target = Some(target);
		self
	}

	/// Marks the link as a download.
	pub fn with_download(mut self) -> Self {
		self.download = true;
		self
	}
}

/// Returns the path to navigate to in-app, or `None` when the click should
/// be left to the browser.
///
/// The returned path has its query and fragment removed.
pub fn intercepted_path<'a>(table: &RouteTable, link: &LinkAttrs<'a>) -> Option<&'a str> {
	if link.download {
		return None;
	}
	if let Some(target) = link.target
		&& !target.is_empty()
		&& !target.eq_ignore_ascii_case("_self")
	{
		return None;
	}
	let href = link.href?;
	if !href.starts_with('/') || href.starts_with("//") {
		return None;
	}
	let path = href.split(['?', '#']).next().unwrap_or_default();
	table.reverse().contains(path).then_some(path)
}
