//! Navigation shell rendered around every page.

use crate::view::View;
use folio_router::{PageId, RouteTable};

/// Turns a page id such as `fraud-detection` into `Fraud Detection`.
pub fn page_label(id: &str) -> String {
	id.split(['-', '_'])
		.filter(|word| !word.is_empty())
		.map(|word| {
			let mut chars = word.chars();
			match chars.next() {
				Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
				None => String::new(),
			}
		})
		.collect::<Vec<_>>()
		.join(" ")
}

/// Renders the navigation bar with one link per table entry.
///
/// Links use canonical paths so the browser can open them directly; the link
/// for `current` carries `aria-current="page"`.
pub fn nav_shell(table: &RouteTable, current: &PageId) -> View {
	let links = table.entries().iter().map(|entry| {
		let mut link = View::element("a")
			.attr("href", table.path_for(entry.id.as_str()))
			.attr("data-page", entry.id.to_string());
		if entry.id == *current {
			link = link.attr("class", "nav-link active").attr("aria-current", "page");
		} else {
			link = link.attr("class", "nav-link");
		}
		View::element("li").child(link.child(page_label(entry.id.as_str())))
	});

	View::element("nav")
		.attr("class", "site-nav")
		.child(View::element("ul").children(links))
		.into()
}

/// Wraps a page view in the navigation shell.
pub fn with_shell(table: &RouteTable, current: &PageId, content: View) -> View {
	View::fragment([
		nav_shell(table, current),
		View::element("main").attr("id", "content").child(content).into(),
	])
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn table() -> RouteTable {
		RouteTable::builder("home")
			.route("home", "")
			.route("contact", "contact")
			.route("fraud-detection", "demos/fraud-detection")
			.build()
			.unwrap()
	}

	#[rstest]
	#[case("home", "Home")]
	#[case("fraud-detection", "Fraud Detection")]
	#[case("object_detection", "Object Detection")]
	#[case("a--b", "A B")]
	fn test_page_label(#[case] id: &str, #[case] expected: &str) {
		assert_eq!(page_label(id), expected);
	}

	#[rstest]
	fn test_nav_shell_marks_current(table: RouteTable) {
		let html = nav_shell(&table, &PageId::new("contact")).render_to_string();
		assert!(html.contains(
			r#"<a href="/contact" data-page="contact" class="nav-link active" aria-current="page">Contact</a>"#
		));
		assert!(html.contains(r#"<a href="/" data-page="home" class="nav-link">Home</a>"#));
		assert!(html.contains(r#"href="/demos/fraud-detection""#));
	}

	#[rstest]
	fn test_with_shell_wraps_content(table: RouteTable) {
		let html = with_shell(&table, &PageId::new("home"), View::text("Hello"))
			.render_to_string();
		assert!(html.starts_with(r#"<nav class="site-nav">"#));
		assert!(html.ends_with(r#"<main id="content">Hello</main>"#));
	}
}
