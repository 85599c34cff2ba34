//! Integration tests for history synchronization
//!
//! These tests drive the navigation controller the way a mounted app does:
//! a popstate listener bound once, user navigation, and a post-commit sync.

use folio_router::{
	BrowserHistory, MemoryEventTarget, MemoryHistory, NavigationController, PopstateBinding,
	RouteTable, SyncOutcome, normalize,
};
use rstest::{fixture, rstest};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

type SharedNav = Rc<RefCell<NavigationController<MemoryHistory>>>;

#[fixture]
fn table() -> Arc<RouteTable> {
	Arc::new(
		RouteTable::builder("home")
			.route("home", "")
			.route("about", "about")
			.route("projects", "projects")
			.route("blog", "blog")
			.route("contact", "contact")
			.route("fraud-detection", "demos/fraud-detection")
			.build()
			.unwrap(),
	)
}

/// Mounts a controller and binds its popstate handler once.
fn mount(
	table: Arc<RouteTable>,
	history: MemoryHistory,
) -> (SharedNav, PopstateBinding<MemoryEventTarget>) {
	let nav = Rc::new(RefCell::new(NavigationController::new(table, history)));
	let mut binding = PopstateBinding::new(MemoryEventTarget::new());
	binding
		.bind({
			let nav = Rc::clone(&nav);
			move || {
				nav.borrow_mut().on_popstate();
			}
		})
		.unwrap();
	nav.borrow_mut().on_navigation_state_changed();
	(nav, binding)
}

fn visit(nav: &SharedNav, page: &str) {
	let changed = nav.borrow_mut().navigate(page);
	if changed {
		nav.borrow_mut().on_navigation_state_changed();
	}
}

#[rstest]
fn test_round_trip_table_consistency(table: Arc<RouteTable>) {
	for entry in table.entries() {
		assert_eq!(
			table.reverse().get(normalize(&entry.slug)),
			Some(&entry.id),
			"slug {:?} does not round-trip",
			entry.slug
		);
	}
}

#[rstest]
#[case("home")]
#[case("about")]
#[case("contact")]
#[case("fraud-detection")]
#[case("blog-some-post")]
fn test_idempotent_sync_for_every_page(table: Arc<RouteTable>, #[case] page: &str) {
	let mut nav = NavigationController::new(table, MemoryHistory::at("/"));
	nav.on_navigation_state_changed();
	nav.navigate(page);

	let first = nav.on_navigation_state_changed();
	let second = nav.on_navigation_state_changed();
	let writes = nav.history().push_count() + nav.history().replace_count();

	assert!(writes <= 1, "{} wrote history {} times", page, writes);
	assert_eq!(second, SyncOutcome::AlreadyCurrent);
	assert_eq!(first.wrote_history(), writes == 1);
}

#[rstest]
fn test_popstate_listener_is_bound_exactly_once(table: Arc<RouteTable>) {
	let (nav, mut binding) = mount(table, MemoryHistory::at("/"));
	let target = binding.target().clone();

	// Re-mounting on re-render must not stack listeners.
	for _ in 0..3 {
		let nav = Rc::clone(&nav);
		binding
			.bind(move || {
				nav.borrow_mut().on_popstate();
			})
			.unwrap();
	}
	assert_eq!(target.listener_count(), 1);

	drop(binding);
	assert_eq!(target.listener_count(), 0);
}

#[rstest]
fn test_back_button_round_trip(table: Arc<RouteTable>) {
	let (nav, binding) = mount(table, MemoryHistory::at("/"));
	visit(&nav, "about");
	visit(&nav, "contact");
	assert_eq!(nav.borrow().history().len(), 3);

	nav.borrow_mut().history_mut().back();
	binding.target().dispatch_popstate();
	assert_eq!(nav.borrow().current_page(), "about");
	assert_eq!(
		nav.borrow_mut().on_navigation_state_changed(),
		SyncOutcome::Suppressed
	);

	nav.borrow_mut().history_mut().forward();
	binding.target().dispatch_popstate();
	assert_eq!(nav.borrow().current_page(), "contact");
	assert_eq!(
		nav.borrow_mut().on_navigation_state_changed(),
		SyncOutcome::Suppressed
	);

	// No history entries were added by back/forward.
	assert_eq!(nav.borrow().history().len(), 3);
	assert_eq!(nav.borrow().history().push_count(), 2);
	assert!(!nav.borrow().is_suppressing());
}

#[rstest]
fn test_rapid_double_back_press(table: Arc<RouteTable>) {
	let (nav, binding) = mount(table, MemoryHistory::at("/"));
	visit(&nav, "about");
	visit(&nav, "projects");
	visit(&nav, "contact");
	let pushes = nav.borrow().history().push_count();

	nav.borrow_mut().history_mut().back();
	binding.target().dispatch_popstate();
	nav.borrow_mut().history_mut().back();
	binding.target().dispatch_popstate();

	assert_eq!(nav.borrow().current_page(), "about");
	assert_eq!(
		nav.borrow_mut().on_navigation_state_changed(),
		SyncOutcome::Suppressed
	);
	assert_eq!(
		nav.borrow_mut().on_navigation_state_changed(),
		SyncOutcome::AlreadyCurrent
	);
	assert_eq!(nav.borrow().history().push_count(), pushes);
	assert_eq!(
		nav.borrow().history().current_path(),
		Some("/about".to_string())
	);
}

#[rstest]
fn test_navigation_after_back_truncates_forward_entries(table: Arc<RouteTable>) {
	let (nav, binding) = mount(table, MemoryHistory::at("/"));
	visit(&nav, "about");
	visit(&nav, "contact");

	nav.borrow_mut().history_mut().back();
	binding.target().dispatch_popstate();
	nav.borrow_mut().on_navigation_state_changed();

	visit(&nav, "fraud-detection");
	let nav = nav.borrow();
	let paths: Vec<&str> = nav
		.history()
		.entries()
		.iter()
		.map(|e| e.location.pathname.as_str())
		.collect();
	assert_eq!(paths, ["/", "/about", "/demos/fraud-detection"]);
}

#[rstest]
fn test_trailing_slash_load_is_canonicalized_by_replace(table: Arc<RouteTable>) {
	let mut nav = NavigationController::new(table, MemoryHistory::at("/contact/"));
	assert_eq!(nav.current_page(), "contact");
	assert_eq!(
		nav.on_navigation_state_changed(),
		SyncOutcome::Replaced("/contact".to_string())
	);
	assert_eq!(nav.history().len(), 1);
}
