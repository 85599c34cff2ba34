//! Application driver.
//!
//! [`PortfolioApp`] connects the navigation controller to a render cycle:
//! state changes mark the app dirty, the host renders, and
//! [`PortfolioApp::commit`] then runs the history synchronization and
//! schedules the scroll correction for what was just painted.

use crate::registry::PageRegistry;
use crate::shell::with_shell;
use crate::view::View;
use folio_router::{
	BrowserHistory, ControllerOptions, NavigationController, PageId, PopstateBinding,
	PopstateTarget, Result, RouteTable, ScrollTicket, SyncOutcome,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

type ChangeHook = Rc<dyn Fn()>;

/// Result of a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
	/// What the history synchronization did.
	pub outcome: SyncOutcome,
	/// Scroll correction to arm after `scroll.delay()`.
	pub scroll: ScrollTicket,
}

/// A mounted portfolio application.
pub struct PortfolioApp<H: BrowserHistory + 'static, T: PopstateTarget> {
	table: Arc<RouteTable>,
	registry: PageRegistry,
	nav: Rc<RefCell<NavigationController<H>>>,
	dirty: Rc<Cell<bool>>,
	binding: RefCell<PopstateBinding<T>>,
	on_change: Rc<RefCell<Option<ChangeHook>>>,
}

impl<H: BrowserHistory + 'static, T: PopstateTarget> std::fmt::Debug for PortfolioApp<H, T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PortfolioApp")
			.field("nav", &self.nav.borrow())
			.field("dirty", &self.dirty.get())
			.field("mounted", &self.is_mounted())
			.finish()
	}
}

impl<H: BrowserHistory + 'static, T: PopstateTarget> PortfolioApp<H, T> {
	/// Creates an unmounted app. The start page is resolved from `history`.
	pub fn new(
		table: Arc<RouteTable>,
		registry: PageRegistry,
		history: H,
		target: T,
		options: ControllerOptions,
	) -> Self {
		let nav = NavigationController::with_options(Arc::clone(&table), history, options);
		Self {
			table,
			registry,
			nav: Rc::new(RefCell::new(nav)),
			dirty: Rc::new(Cell::new(false)),
			binding: RefCell::new(PopstateBinding::new(target)),
			on_change: Rc::new(RefCell::new(None)),
		}
	}

	/// Sets the hook invoked after every state change, typically a re-render.
	///
	/// Replaces any earlier hook, including for an already bound popstate
	/// listener.
	pub fn set_on_change<F>(&self, hook: F)
	where
		F: Fn() + 'static,
	{
		*self.on_change.borrow_mut() = Some(Rc::new(hook));
	}

	/// Binds the popstate listener and marks the first sync as due.
	///
	/// Calling `mount` again while mounted does nothing and returns false.
	pub fn mount(&self) -> Result<bool> {
		let nav = Rc::clone(&self.nav);
		let dirty = Rc::clone(&self.dirty);
		let hook = Rc::clone(&self.on_change);
		let bound = self.binding.borrow_mut().bind(move || {
			apply_popstate(&nav, &dirty, &hook);
		})?;
		if bound {
			tracing::debug!(page = %self.current_page(), "app mounted");
			self.dirty.set(true);
		}
		Ok(bound)
	}

	/// Removes the popstate listener and cancels a pending scroll correction.
	pub fn unmount(&self) {
		if self.binding.borrow_mut().unbind() {
			tracing::debug!("app unmounted");
		}
		self.nav.borrow_mut().cancel_scroll_correction();
	}

	/// Returns true while the popstate listener is bound.
	pub fn is_mounted(&self) -> bool {
		self.binding.borrow().is_bound()
	}

	/// Returns true if a commit is due.
	pub fn is_dirty(&self) -> bool {
		self.dirty.get()
	}

	/// Returns the route table.
	pub fn table(&self) -> &Arc<RouteTable> {
		&self.table
	}

	/// Returns the current page id.
	pub fn current_page(&self) -> PageId {
		self.nav.borrow().current_page().clone()
	}

	/// Runs `f` with the navigation controller.
	pub fn with_controller<R>(&self, f: impl FnOnce(&NavigationController<H>) -> R) -> R {
		f(&self.nav.borrow())
	}

	/// Runs `f` with the navigation controller mutably.
	pub fn with_controller_mut<R>(&self, f: impl FnOnce(&mut NavigationController<H>) -> R) -> R {
		f(&mut self.nav.borrow_mut())
	}

	/// Navigates to `page`. Returns true if the state changed.
	pub fn navigate(&self, page: impl Into<PageId>) -> bool {
		let changed = self.nav.borrow_mut().navigate(page);
		if changed {
			self.changed();
		}
		changed
	}

	/// Opens the blog post `slug`.
	pub fn open_blog_post(&self, slug: &str) -> bool {
		self.navigate(PageId::blog_post(self.table.blog_prefix(), slug))
	}

	/// Navigates to the page registered for `path`, e.g. from a link click.
	pub fn navigate_to_path(&self, path: &str) -> bool {
		let changed = self.nav.borrow_mut().navigate_to_path(path);
		if changed {
			self.changed();
		}
		changed
	}

	/// Handles a back/forward event. Returns true if the page changed.
	///
	/// The bound listener does the same; this is for hosts that deliver
	/// popstate themselves.
	pub fn handle_popstate(&self) -> bool {
		apply_popstate(&self.nav, &self.dirty, &self.on_change)
	}

	/// Renders the current page inside the navigation shell.
	pub fn render(&self) -> View {
		let nav = self.nav.borrow();
		let content = self.registry.render(&nav.current_view());
		with_shell(&self.table, nav.current_page(), content)
	}

	/// Post-render hook. Returns `None` when nothing changed since the last
	/// commit.
	pub fn commit(&self) -> Option<Commit> {
		if !self.dirty.replace(false) {
			return None;
		}
		let mut nav = self.nav.borrow_mut();
		let outcome = nav.on_navigation_state_changed();
		let scroll = nav.schedule_scroll_correction();
		Some(Commit { outcome, scroll })
	}

	/// Returns true if the scroll correction for `ticket` should run now.
	pub fn fire_scroll_correction(&self, ticket: &ScrollTicket) -> bool {
		self.nav.borrow_mut().fire_scroll_correction(ticket)
	}

	fn changed(&self) {
		self.dirty.set(true);
		notify(&self.on_change);
	}
}

fn notify(hook: &RefCell<Option<ChangeHook>>) {
	// Cloned out so the hook may replace itself.
	let hook = hook.borrow().clone();
	if let Some(hook) = hook {
		hook();
	}
}

fn apply_popstate<H: BrowserHistory>(
	nav: &RefCell<NavigationController<H>>,
	dirty: &Cell<bool>,
	hook: &RefCell<Option<ChangeHook>>,
) -> bool {
	let changed = nav.borrow_mut().on_popstate();
	if changed {
		dirty.set(true);
		notify(hook);
	}
	changed
}
