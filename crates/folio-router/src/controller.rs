//! Navigation controller.
//!
//! [`NavigationController`] holds the current page and keeps the browser
//! history consistent with it. It is driven by three entry points:
//!
//! - [`NavigationController::navigate`] for user-initiated navigation,
//! - [`NavigationController::on_popstate`] for back/forward events,
//! - [`NavigationController::on_navigation_state_changed`], the post-commit
//!   hook that writes history entries.
//!
//! The host calls the post-commit hook once after mount and once after every
//! commit that follows a state change. A popstate-driven change sets a
//! suppression flag so that the following hook run does not push the entry the
//! browser has already moved to.

use super::history::{BrowserHistory, HistoryState, NavigationType};
use super::page::{Page, PageId};
use super::resolver::{DEFAULT_PAGE_QUERY_PARAM, resolve_initial_page_with};
use super::scroll::{DEFAULT_SCROLL_DELAY, ScrollCorrection, ScrollTicket};
use super::table::RouteTable;
use std::sync::Arc;
use std::time::Duration;

/// What a synchronization run did to the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
	/// The change came from popstate; history was left alone.
	Suppressed,
	/// No browser history is available.
	Detached,
	/// The live path already matched the current page.
	AlreadyCurrent,
	/// The current entry was replaced with this path.
	Replaced(String),
	/// A new entry was pushed with this path.
	Pushed(String),
	/// Writing this path failed; the failure was logged.
	Failed(String),
}

impl SyncOutcome {
	/// Returns true if a history entry was written.
	pub fn wrote_history(&self) -> bool {
		matches!(self, Self::Replaced(_) | Self::Pushed(_))
	}
}

/// Tunables for a [`NavigationController`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerOptions {
	/// Legacy query parameter consulted on startup.
	pub page_query_param: String,
	/// Delay of the deferred scroll correction.
	pub scroll_delay: Duration,
}

impl Default for ControllerOptions {
	fn default() -> Self {
		Self {
			page_query_param: DEFAULT_PAGE_QUERY_PARAM.to_string(),
			scroll_delay: DEFAULT_SCROLL_DELAY,
		}
	}
}

/// Owns the navigation state and synchronizes it with browser history.
pub struct NavigationController<H: BrowserHistory> {
	table: Arc<RouteTable>,
	history: H,
	current: PageId,
	suppress_next_sync: bool,
	first_sync_pending: bool,
	scroll: ScrollCorrection,
}

impl<H: BrowserHistory> std::fmt::Debug for NavigationController<H> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NavigationController")
			.field("current", &self.current)
			.field("suppress_next_sync", &self.suppress_next_sync)
			.field("first_sync_pending", &self.first_sync_pending)
			.finish()
	}
}

impl<H: BrowserHistory> NavigationController<H> {
	/// Creates a controller starting on the page resolved from the live location.
	pub fn new(table: Arc<RouteTable>, history: H) -> Self {
		Self::with_options(table, history, ControllerOptions::default())
	}

	/// Creates a controller with custom options.
	pub fn with_options(table: Arc<RouteTable>, history: H, options: ControllerOptions) -> Self {
		let location = history.location();
		let current =
			resolve_initial_page_with(&table, location.as_ref(), &options.page_query_param);
		tracing::debug!(page = %current, "navigation controller created");

		Self {
			table,
			history,
			current,
			suppress_next_sync: false,
			first_sync_pending: true,
			scroll: ScrollCorrection::new(options.scroll_delay),
		}
	}

	/// Returns the route table.
	pub fn table(&self) -> &Arc<RouteTable> {
		&self.table
	}

	/// Returns the history backend.
	pub fn history(&self) -> &H {
		&self.history
	}

	/// Returns the history backend mutably.
	pub fn history_mut(&mut self) -> &mut H {
		&mut self.history
	}

	/// Returns the current page id.
	pub fn current_page(&self) -> &PageId {
		&self.current
	}

	/// Returns the decoded current page.
	pub fn current_view(&self) -> Page {
		self.table.classify(&self.current)
	}

	/// Returns true if the next synchronization will be skipped.
	pub fn is_suppressing(&self) -> bool {
		self.suppress_next_sync
	}

	/// Returns true until the first synchronization has compared paths.
	pub fn is_first_sync_pending(&self) -> bool {
		self.first_sync_pending
	}

	/// Navigates to `page` on user request.
	///
	/// Returns true if the state changed. A pending popstate suppression is
	/// dropped, since this change did not come from the browser.
	pub fn navigate(&mut self, page: impl Into<PageId>) -> bool {
		let page = page.into();
		if page == self.current {
			return false;
		}
		tracing::debug!(from = %self.current, to = %page, "navigate");
		self.suppress_next_sync = false;
		self.set_current(page);
		true
	}

	/// Navigates to the page registered for `path`, falling back to home.
	pub fn navigate_to_path(&mut self, path: &str) -> bool {
		let page = self.table.resolve_path(path).clone();
		self.navigate(page)
	}

	/// Handles a back/forward event.
	///
	/// The page is derived from the live path, never from the event state.
	/// Returns true if the state changed, in which case the next
	/// synchronization is suppressed.
	pub fn on_popstate(&mut self) -> bool {
		let Some(path) = self.history.current_path() else {
			return false;
		};
		let page = self.table.resolve_path(&path).clone();
		if page == self.current {
			tracing::debug!(path = %path, page = %page, "popstate without page change");
			return false;
		}
		tracing::debug!(path = %path, from = %self.current, to = %page, "popstate");
		// Set before the state change becomes observable to the hook.
		self.suppress_next_sync = true;
		self.set_current(page);
		true
	}

	/// Post-commit hook: writes the history entry for the current page.
	pub fn on_navigation_state_changed(&mut self) -> SyncOutcome {
		if self.suppress_next_sync {
			self.suppress_next_sync = false;
			tracing::debug!(page = %self.current, "history sync suppressed after popstate");
			return SyncOutcome::Suppressed;
		}

		let Some(live_path) = self.history.current_path() else {
			return SyncOutcome::Detached;
		};
		let desired = self.table.path_for(self.current.as_str());
		let first_sync = std::mem::replace(&mut self.first_sync_pending, false);

		if desired == live_path {
			return SyncOutcome::AlreadyCurrent;
		}

		let nav_type = if first_sync {
			NavigationType::Replace
		} else {
			NavigationType::Push
		};
		let state = HistoryState::new(self.current.clone());
		match self.history.write(nav_type, &state, &desired) {
			Ok(()) => {
				tracing::debug!(?nav_type, path = %desired, page = %self.current, "history synced");
				match nav_type {
					NavigationType::Replace => SyncOutcome::Replaced(desired),
					NavigationType::Push => SyncOutcome::Pushed(desired),
				}
			}
			Err(err) => {
				tracing::warn!(path = %desired, error = %err, "history write failed");
				SyncOutcome::Failed(desired)
			}
		}
	}

	/// Schedules the deferred scroll correction for the current page.
	pub fn schedule_scroll_correction(&mut self) -> ScrollTicket {
		self.scroll.schedule(&self.current)
	}

	/// Returns true if `ticket` is still live; consumes it.
	pub fn fire_scroll_correction(&mut self, ticket: &ScrollTicket) -> bool {
		self.scroll.fire(ticket)
	}

	/// Cancels a pending scroll correction, e.g. on unmount.
	pub fn cancel_scroll_correction(&mut self) -> bool {
		self.scroll.cancel()
	}

	fn set_current(&mut self, page: PageId) {
		self.scroll.cancel();
		self.current = page;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::{Result, RouterError};
	use crate::history::{Detached, MemoryHistory};
	use crate::path::Location;
	use rstest::{fixture, rstest};

	#[fixture]
	fn table() -> Arc<RouteTable> {
		Arc::new(
			RouteTable::builder("home")
				.route("home", "")
				.route("about", "about")
				.route("contact", "contact")
				.route("projects", "projects")
				.build()
				.unwrap(),
		)
	}

	fn controller_at(table: Arc<RouteTable>, path: &str) -> NavigationController<MemoryHistory> {
		NavigationController::new(table, MemoryHistory::at(path))
	}

	#[rstest]
	fn test_direct_path_load_is_noop_but_flips_latch(table: Arc<RouteTable>) {
		let mut nav = controller_at(table, "/contact");
		assert_eq!(nav.current_page(), "contact");
		assert!(nav.is_first_sync_pending());

		assert_eq!(nav.on_navigation_state_changed(), SyncOutcome::AlreadyCurrent);
		assert!(!nav.is_first_sync_pending());
		assert_eq!(nav.history().push_count(), 0);
		assert_eq!(nav.history().replace_count(), 0);
	}

	#[rstest]
	fn test_legacy_query_load_replaces(table: Arc<RouteTable>) {
		let history = MemoryHistory::new(Location::new("/").with_search("?page=contact"));
		let mut nav = NavigationController::new(table, history);
		assert_eq!(nav.current_page(), "contact");

		assert_eq!(
			nav.on_navigation_state_changed(),
			SyncOutcome::Replaced("/contact".to_string())
		);
		assert_eq!(nav.history().len(), 1);
		assert_eq!(nav.history().replace_count(), 1);
		assert_eq!(nav.history().push_count(), 0);
	}

	#[rstest]
	fn test_later_navigation_pushes(table: Arc<RouteTable>) {
		let mut nav = controller_at(table, "/");
		assert_eq!(nav.on_navigation_state_changed(), SyncOutcome::AlreadyCurrent);

		assert!(nav.navigate("about"));
		assert_eq!(
			nav.on_navigation_state_changed(),
			SyncOutcome::Pushed("/about".to_string())
		);
		assert_eq!(nav.history().push_count(), 1);
		assert_eq!(
			nav.history().current().state,
			Some(HistoryState::new("about"))
		);
	}

	#[rstest]
	fn test_sync_is_idempotent(table: Arc<RouteTable>) {
		let mut nav = controller_at(table, "/");
		nav.on_navigation_state_changed();
		nav.navigate("projects");

		assert!(nav.on_navigation_state_changed().wrote_history());
		assert_eq!(nav.on_navigation_state_changed(), SyncOutcome::AlreadyCurrent);
		assert_eq!(nav.on_navigation_state_changed(), SyncOutcome::AlreadyCurrent);
		assert_eq!(nav.history().push_count(), 1);
	}

	#[rstest]
	fn test_navigate_to_same_page_is_not_a_change(table: Arc<RouteTable>) {
		let mut nav = controller_at(table, "/about");
		assert!(!nav.navigate("about"));
	}

	#[rstest]
	fn test_navigate_to_path(table: Arc<RouteTable>) {
		let mut nav = controller_at(table, "/");
		assert!(nav.navigate_to_path("/contact/"));
		assert_eq!(nav.current_page(), "contact");
		assert!(nav.navigate_to_path("/nowhere"));
		assert_eq!(nav.current_page(), "home");
	}

	#[rstest]
	fn test_popstate_suppresses_exactly_one_sync(table: Arc<RouteTable>) {
		let mut nav = controller_at(table, "/");
		nav.on_navigation_state_changed();
		nav.navigate("about");
		nav.on_navigation_state_changed();
		let entries_before = nav.history().len();

		assert!(nav.history_mut().back());
		assert!(nav.on_popstate());
		assert_eq!(nav.current_page(), "home");
		assert!(nav.is_suppressing());

		assert_eq!(nav.on_navigation_state_changed(), SyncOutcome::Suppressed);
		assert!(!nav.is_suppressing());
		assert_eq!(nav.history().len(), entries_before);
		assert_eq!(nav.history().push_count(), 1);

		// The flag does not survive into the next cycle.
		nav.navigate("contact");
		assert_eq!(
			nav.on_navigation_state_changed(),
			SyncOutcome::Pushed("/contact".to_string())
		);
	}

	#[rstest]
	fn test_popstate_without_change_leaves_flag_clear(table: Arc<RouteTable>) {
		let mut nav = controller_at(table, "/");
		nav.on_navigation_state_changed();
		nav.navigate("about");
		nav.on_navigation_state_changed();

		// Two steps back lands on "/", which is still home.
		nav.navigate_to_path("/nowhere");
		nav.on_navigation_state_changed();
		nav.history_mut().back();
		nav.history_mut().back();
		assert!(!nav.on_popstate());
		assert!(!nav.is_suppressing());
	}

	#[rstest]
	fn test_popstate_unknown_path_falls_back_home(table: Arc<RouteTable>) {
		let mut history = MemoryHistory::at("/about");
		history
			.write(
				NavigationType::Push,
				&HistoryState::new("stale"),
				"/removed-page",
			)
			.unwrap();
		history.back();
		history.forward();
		let mut nav = NavigationController::new(table, history);
		nav.navigate("about");

		assert!(nav.on_popstate());
		assert_eq!(nav.current_page(), "home");
	}

	#[rstest]
	fn test_rapid_double_popstate(table: Arc<RouteTable>) {
		let mut nav = controller_at(table, "/");
		nav.on_navigation_state_changed();
		for page in ["about", "contact", "projects"] {
			nav.navigate(page);
			nav.on_navigation_state_changed();
		}
		let entries_before = nav.history().len();
		let pushes_before = nav.history().push_count();

		// Two back presses before any commit.
		nav.history_mut().back();
		assert!(nav.on_popstate());
		nav.history_mut().back();
		assert!(nav.on_popstate());
		assert_eq!(nav.current_page(), "about");

		assert_eq!(nav.on_navigation_state_changed(), SyncOutcome::Suppressed);
		assert_eq!(nav.on_navigation_state_changed(), SyncOutcome::AlreadyCurrent);
		assert_eq!(nav.history().len(), entries_before);
		assert_eq!(nav.history().push_count(), pushes_before);
		assert_eq!(nav.history().current_path(), Some("/about".to_string()));
	}

	#[rstest]
	fn test_user_navigation_after_popstate_is_pushed(table: Arc<RouteTable>) {
		let mut nav = controller_at(table, "/");
		nav.on_navigation_state_changed();
		nav.navigate("about");
		nav.on_navigation_state_changed();

		nav.history_mut().back();
		nav.on_popstate();
		// The user clicks a link before the popstate change commits.
		nav.navigate("contact");
		assert!(!nav.is_suppressing());
		assert_eq!(
			nav.on_navigation_state_changed(),
			SyncOutcome::Pushed("/contact".to_string())
		);
	}

	#[rstest]
	fn test_detached_context(table: Arc<RouteTable>) {
		let mut nav = NavigationController::new(table, Detached);
		assert_eq!(nav.current_page(), "home");
		assert!(!nav.on_popstate());

		nav.navigate("about");
		assert_eq!(nav.on_navigation_state_changed(), SyncOutcome::Detached);
	}

	#[rstest]
	fn test_blog_post_syncs_to_root(table: Arc<RouteTable>) {
		let mut nav = controller_at(table, "/about");
		nav.on_navigation_state_changed();
		nav.navigate("blog-first-post");

		assert_eq!(
			nav.current_view(),
			Page::BlogPost {
				slug: "first-post".to_string()
			}
		);
		assert_eq!(
			nav.on_navigation_state_changed(),
			SyncOutcome::Pushed("/".to_string())
		);
	}

	#[rstest]
	fn test_custom_query_param(table: Arc<RouteTable>) {
		let history = MemoryHistory::new(Location::new("/").with_search("?view=about"));
		let options = ControllerOptions {
			page_query_param: "view".to_string(),
			..ControllerOptions::default()
		};
		let nav = NavigationController::with_options(table, history, options);
		assert_eq!(nav.current_page(), "about");
	}

	#[rstest]
	fn test_scroll_correction_cancelled_by_navigation(table: Arc<RouteTable>) {
		let mut nav = controller_at(table, "/");
		nav.navigate("about");
		let ticket = nav.schedule_scroll_correction();
		assert_eq!(ticket.page(), "about");

		nav.navigate("contact");
		assert!(!nav.fire_scroll_correction(&ticket));

		let ticket = nav.schedule_scroll_correction();
		assert!(nav.fire_scroll_correction(&ticket));
	}

	#[rstest]
	fn test_scroll_correction_cancel(table: Arc<RouteTable>) {
		let mut nav = controller_at(table, "/");
		let ticket = nav.schedule_scroll_correction();
		assert!(nav.cancel_scroll_correction());
		assert!(!nav.fire_scroll_correction(&ticket));
	}

	struct FailingHistory;

	impl BrowserHistory for FailingHistory {
		fn location(&self) -> Option<Location> {
			Some(Location::new("/"))
		}

		fn write(&mut self, _: NavigationType, _: &HistoryState, _: &str) -> Result<()> {
			Err(RouterError::NavigationFailed("SecurityError".to_string()))
		}
	}

	#[rstest]
	fn test_write_failure_does_not_break_navigation(table: Arc<RouteTable>) {
		let mut nav = NavigationController::new(table, FailingHistory);
		nav.navigate("about");
		assert_eq!(
			nav.on_navigation_state_changed(),
			SyncOutcome::Failed("/about".to_string())
		);
		assert_eq!(nav.current_page(), "about");
		assert!(nav.navigate("contact"));
	}
}
