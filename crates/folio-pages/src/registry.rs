//! Page dispatch table.
//!
//! Maps decoded pages to view factories. Page content itself is opaque here:
//! the registry only decides which factory runs.

use crate::view::View;
use folio_router::{Page, PageId};
use std::collections::HashMap;
use std::sync::Arc;

type ViewFactory = Arc<dyn Fn() -> View + Send + Sync>;
type BlogPostFactory = Arc<dyn Fn(&str) -> View + Send + Sync>;

/// Dispatch table from page ids to views.
#[derive(Clone)]
pub struct PageRegistry {
	home: PageId,
	pages: HashMap<PageId, ViewFactory>,
	blog_post: Option<BlogPostFactory>,
}

impl std::fmt::Debug for PageRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut pages: Vec<_> = self.pages.keys().collect();
		pages.sort();
		f.debug_struct("PageRegistry")
			.field("home", &self.home)
			.field("pages", &pages)
			.field("has_blog_post", &self.blog_post.is_some())
			.finish()
	}
}

impl PageRegistry {
	/// Creates an empty registry whose fallback is `home`.
	pub fn new(home: impl Into<PageId>) -> Self {
		Self {
			home: home.into(),
			pages: HashMap::new(),
			blog_post: None,
		}
	}

	/// Registers the view factory for `id`.
	pub fn register<F>(mut self, id: impl Into<PageId>, factory: F) -> Self
	where
		F: Fn() -> View + Send + Sync + 'static,
	{
		self.pages.insert(id.into(), Arc::new(factory));
		self
	}

	/// Registers the blog post view; it receives the post slug.
	pub fn blog_post<F>(mut self, factory: F) -> Self
	where
		F: Fn(&str) -> View + Send + Sync + 'static,
	{
		self.blog_post = Some(Arc::new(factory));
		self
	}

	/// Returns true if `id` has a view.
	pub fn has_page(&self, id: &str) -> bool {
		self.pages.contains_key(id)
	}

	/// Number of registered static pages.
	pub fn page_count(&self) -> usize {
		self.pages.len()
	}

	/// Renders `page`.
	///
	/// Unknown pages, static pages without a view, and blog posts without a
	/// blog view all render the home view. Without a home view the result is
	/// [`View::Empty`].
	pub fn render(&self, page: &Page) -> View {
		match page {
			Page::Static(id) => {
				if let Some(factory) = self.pages.get(id) {
					return factory();
				}
				tracing::debug!(page = %id, "no view registered, rendering home");
			}
			Page::BlogPost { slug } => {
				if let Some(factory) = &self.blog_post {
					return factory(slug);
				}
				tracing::debug!(slug = %slug, "no blog post view registered, rendering home");
			}
			Page::Unknown(id) => {
				tracing::debug!(page = %id, "unknown page, rendering home");
			}
		}
		self.render_home()
	}

	fn render_home(&self) -> View {
		self.pages
			.get(&self.home)
			.map(|factory| factory())
			.unwrap_or(View::Empty)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn registry() -> PageRegistry {
		PageRegistry::new("home")
			.register("home", || View::text("Home"))
			.register("contact", || View::text("Contact"))
			.blog_post(|slug| View::text(format!("Post: {}", slug)))
	}

	#[rstest]
	fn test_render_static(registry: PageRegistry) {
		let view = registry.render(&Page::Static(PageId::new("contact")));
		assert_eq!(view.text_content(), "Contact");
	}

	#[rstest]
	fn test_render_blog_post_receives_slug(registry: PageRegistry) {
		let view = registry.render(&Page::BlogPost {
			slug: "rust-tips".to_string(),
		});
		assert_eq!(view.text_content(), "Post: rust-tips");
	}

	#[rstest]
	fn test_unknown_falls_back_to_home(registry: PageRegistry) {
		let view = registry.render(&Page::Unknown(PageId::new("nope")));
		assert_eq!(view.text_content(), "Home");
	}

	#[rstest]
	fn test_static_without_view_falls_back_to_home(registry: PageRegistry) {
		let view = registry.render(&Page::Static(PageId::new("resume")));
		assert_eq!(view.text_content(), "Home");
	}

	#[rstest]
	fn test_blog_post_without_view_falls_back_to_home() {
		let registry = PageRegistry::new("home").register("home", || View::text("Home"));
		let view = registry.render(&Page::BlogPost {
			slug: "x".to_string(),
		});
		assert_eq!(view.text_content(), "Home");
	}

	#[rstest]
	fn test_missing_home_renders_empty() {
		let registry = PageRegistry::new("home");
		assert_eq!(
			registry.render(&Page::Unknown(PageId::new("x"))),
			View::Empty
		);
	}
}
