//! Route table: the single source of truth for page id ↔ URL slug mapping.
//!
//! The table is built once at startup and shared as an immutable value.
//! Construction derives the [`ReverseRouteTable`] and checks that it is a
//! left-inverse of the forward mapping, so a duplicate slug is reported at
//! build time instead of silently shadowing another page.

use super::error::{Result, RouterError};
use super::page::{DEFAULT_BLOG_PREFIX, Page, PageId};
use super::path::{normalize, path_for_slug};
use std::collections::HashMap;

/// A single `(page id, slug)` registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
	/// Logical page id.
	pub id: PageId,
	/// URL slug as declared (may carry slashes; compared normalized).
	pub slug: String,
}

/// Mapping from normalized slug to page id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReverseRouteTable {
	map: HashMap<String, PageId>,
}

impl ReverseRouteTable {
	/// Looks up a path or slug. The input is normalized first.
	pub fn get(&self, path: &str) -> Option<&PageId> {
		self.map.get(normalize(path))
	}

	/// Returns true if the normalized path is a key.
	pub fn contains(&self, path: &str) -> bool {
		self.map.contains_key(normalize(path))
	}

	/// Number of keys, aliases included.
	pub fn len(&self) -> usize {
		self.map.len()
	}

	/// Returns true if the table has no keys.
	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}

	fn insert_first(&mut self, key: &str, id: &PageId) {
		self.map
			.entry(key.to_string())
			.or_insert_with(|| id.clone());
	}
}

/// Derives the reverse table from entries in declaration order.
///
/// Each entry inserts `normalize(slug) -> id`. When the normalized id differs
/// from the normalized slug, `normalize(id) -> id` is inserted as well so a
/// bare page id also resolves. On key collisions the first insertion wins.
pub fn build_reverse_table<'a, I>(entries: I) -> ReverseRouteTable
where
	I: IntoIterator<Item = &'a RouteEntry>,
{
	let mut reverse = ReverseRouteTable::default();
	for entry in entries {
		let slug = normalize(&entry.slug);
		reverse.insert_first(slug, &entry.id);

		let alias = normalize(entry.id.as_str());
		if alias != slug {
			reverse.insert_first(alias, &entry.id);
		}
	}
	reverse
}

/// Immutable page id ↔ slug table.
#[derive(Debug, Clone)]
pub struct RouteTable {
	entries: Vec<RouteEntry>,
	index: HashMap<PageId, usize>,
	reverse: ReverseRouteTable,
	home: PageId,
	blog_prefix: String,
}

impl RouteTable {
	/// Starts a builder with `home` as the designated home page.
	pub fn builder(home: impl Into<PageId>) -> RouteTableBuilder {
		RouteTableBuilder {
			home: home.into(),
			entries: Vec::new(),
			blog_prefix: DEFAULT_BLOG_PREFIX.to_string(),
		}
	}

	/// Returns the home page id.
	pub fn home(&self) -> &PageId {
		&self.home
	}

	/// Returns the prefix used for blog post ids.
	pub fn blog_prefix(&self) -> &str {
		&self.blog_prefix
	}

	/// Returns the entries in declaration order.
	pub fn entries(&self) -> &[RouteEntry] {
		&self.entries
	}

	/// Returns the derived reverse table.
	pub fn reverse(&self) -> &ReverseRouteTable {
		&self.reverse
	}

	/// Number of registered pages.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if no page is registered.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns true if `id` is a registered page.
	pub fn contains(&self, id: &str) -> bool {
		self.index.contains_key(id)
	}

	/// Returns the declared slug for `id`.
	pub fn slug(&self, id: &str) -> Option<&str> {
		self.index
			.get(id)
			.map(|&i| self.entries[i].slug.as_str())
	}

	/// Returns the canonical path for `id`.
	///
	/// Ids without a table entry (blog posts included) map to `/`.
	pub fn path_for(&self, id: &str) -> String {
		path_for_slug(self.slug(id).unwrap_or(""))
	}

	/// Looks up a path in the reverse table.
	pub fn lookup_path(&self, path: &str) -> Option<&PageId> {
		self.reverse.get(path)
	}

	/// Resolves a path to a page id, falling back to home.
	pub fn resolve_path(&self, path: &str) -> &PageId {
		self.lookup_path(path).unwrap_or(&self.home)
	}

	/// Decodes a page id into a [`Page`].
	pub fn classify(&self, id: &PageId) -> Page {
		if self.contains(id.as_str()) {
			return Page::Static(id.clone());
		}
		match id.as_str().strip_prefix(self.blog_prefix.as_str()) {
			Some(slug) if !slug.is_empty() => Page::BlogPost {
				slug: slug.to_string(),
			},
			_ => Page::Unknown(id.clone()),
		}
	}
}

/// Builder for [`RouteTable`].
#[derive(Debug, Clone)]
pub struct RouteTableBuilder {
	home: PageId,
	entries: Vec<RouteEntry>,
	blog_prefix: String,
}

impl RouteTableBuilder {
	/// Registers a page and its slug.
	pub fn route(mut self, id: impl Into<PageId>, slug: impl Into<String>) -> Self {
		self.entries.push(RouteEntry {
			id: id.into(),
			slug: slug.into(),
		});
		self
	}

	/// Overrides the blog post id prefix.
	pub fn blog_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.blog_prefix = prefix.into();
		self
	}

	/// Validates the registrations and builds the table.
	pub fn build(self) -> Result<RouteTable> {
		let mut index = HashMap::with_capacity(self.entries.len());
		for (i, entry) in self.entries.iter().enumerate() {
			if index.insert(entry.id.clone(), i).is_some() {
				return Err(RouterError::DuplicatePageId(entry.id.to_string()));
			}
		}

		let home_slug = index
			.get(&self.home)
			.map(|&i| self.entries[i].slug.as_str())
			.ok_or_else(|| RouterError::MissingHome(self.home.to_string()))?;
		if !normalize(home_slug).is_empty() {
			return Err(RouterError::HomeSlugNotEmpty {
				id: self.home.to_string(),
				slug: home_slug.to_string(),
			});
		}

		if let Some(entry) = self
			.entries
			.iter()
			.find(|e| e.id != self.home && normalize(&e.slug).is_empty())
		{
			return Err(RouterError::EmptySlugReserved(entry.id.to_string()));
		}

		let reverse = build_reverse_table(&self.entries);
		for entry in &self.entries {
			let slug = normalize(&entry.slug);
			match reverse.get(slug) {
				Some(found) if *found == entry.id => {}
				found => {
					return Err(RouterError::ShadowedSlug {
						id: entry.id.to_string(),
						slug: slug.to_string(),
						shadowed_by: found.map(|f| f.to_string()).unwrap_or_default(),
					});
				}
			}
		}

		tracing::debug!(
			pages = self.entries.len(),
			keys = reverse.len(),
			home = %self.home,
			"built route table"
		);

		Ok(RouteTable {
			entries: self.entries,
			index,
			reverse,
			home: self.home,
			blog_prefix: self.blog_prefix,
		})
	}
}
