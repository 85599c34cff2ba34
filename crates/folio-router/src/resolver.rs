//! Startup page resolution.

use super::page::PageId;
use super::path::{Location, normalize};
use super::table::RouteTable;

/// Default name of the legacy query parameter carrying a page id.
pub const DEFAULT_PAGE_QUERY_PARAM: &str = "page";

/// Resolves the page to show on first render.
///
/// A non-root canonical path wins over the legacy `?page=<id>` parameter. The
/// query value is accepted only if it is a registered page id. Without a
/// location (no browser) or without a match the home page is returned.
pub fn resolve_initial_page(table: &RouteTable, location: Option<&Location>) -> PageId {
	resolve_initial_page_with(table, location, DEFAULT_PAGE_QUERY_PARAM)
}

/// [`resolve_initial_page`] with a custom query parameter name.
pub fn resolve_initial_page_with(
	table: &RouteTable,
	location: Option<&Location>,
	query_param: &str,
) -> PageId {
	let Some(location) = location else {
		tracing::debug!("no location available, starting on home page");
		return table.home().clone();
	};

	// The root path carries no page information of its own, so it defers to
	// the query string.
	let path = normalize(&location.pathname);
	if !path.is_empty()
		&& let Some(id) = table.lookup_path(path)
	{
		tracing::debug!(path, page = %id, "resolved initial page from path");
		return id.clone();
	}

	if let Some(requested) = location.query_param(query_param) {
		if table.contains(&requested) {
			tracing::debug!(page = %requested, "resolved initial page from query");
			return PageId::new(requested);
		}
		tracing::debug!(page = %requested, "ignoring unknown page in query");
	}

	table.home().clone()
}
