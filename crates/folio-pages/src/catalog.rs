//! Built-in portfolio pages.
//!
//! Page content is placeholder markup: a heading and a one-line summary per
//! page. Sites replace individual entries through [`PageRegistry::register`].

use crate::registry::PageRegistry;
use crate::shell::page_label;
use crate::view::View;
use folio_router::RouterSettings;

/// Id of the landing page.
pub const HOME_PAGE: &str = "home";

/// `(id, slug, summary)` for every built-in page, in navigation order.
pub const PAGES: &[(&str, &str, &str)] = &[
	(HOME_PAGE, "", "Selected work, writing, and experiments."),
	("about", "about", "Background and the tools I reach for."),
	("projects", "projects", "Projects shipped and maintained."),
	("blog", "blog", "Notes on software and systems."),
	("contact", "contact", "Ways to get in touch."),
	("resume", "resume", "Experience and education."),
	(
		"fraud-detection",
		"demos/fraud-detection",
		"Mockup of a transaction risk scoring dashboard.",
	),
	(
		"container-orchestration",
		"demos/container-orchestration",
		"Mockup of a cluster scheduling console.",
	),
	(
		"object-detection",
		"demos/object-detection",
		"Mockup of an image labeling pipeline.",
	),
	("chat", "demos/chat", "Local-only chat room simulation."),
];

/// Settings with the built-in route table.
pub fn default_settings() -> RouterSettings {
	let settings = RouterSettings {
		home: HOME_PAGE.to_string(),
		..RouterSettings::default()
	};
	PAGES
		.iter()
		.fold(settings, |settings, (id, slug, _)| settings.with_route(*id, *slug))
}

/// Registry with a placeholder view for every built-in page and a blog post
/// view keyed by slug.
pub fn default_registry() -> PageRegistry {
	PAGES
		.iter()
		.fold(PageRegistry::new(HOME_PAGE), |registry, (id, _, summary)| {
			let title = if *id == HOME_PAGE {
				"Portfolio".to_string()
			} else {
				page_label(id)
			};
			registry.register(*id, move || placeholder(title.clone(), *summary))
		})
		.blog_post(|slug| {
			View::element("article")
				.attr("class", "blog-post")
				.attr("data-slug", slug.to_string())
				.child(View::element("h1").child(page_label(slug)))
				.into()
		})
}

fn placeholder(title: String, summary: &'static str) -> View {
	View::element("section")
		.attr("class", "page")
		.child(View::element("h1").child(title))
		.child(View::element("p").child(summary))
		.into()
}
