//! Browser bindings (`wasm32` only).
//!
//! [`WebHistory`] and [`WindowEvents`] back the router seams with
//! `window.history` and `window` popstate listeners, and [`launch`] mounts a
//! [`PortfolioApp`] into a DOM element.

use crate::app::PortfolioApp;
use crate::error::{PagesError, Result};
use crate::links::{LinkAttrs, intercepted_path};
use crate::registry::PageRegistry;
use folio_router::{
	BrowserHistory, HistoryState, ListenerId, Location, NavigationType, PopstateCallback,
	PopstateTarget, RouterError, RouterSettings, ScrollTicket,
};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, MouseEvent};

/// The app as mounted in a browser.
pub type WebApp = PortfolioApp<WebHistory, WindowEvents>;

type EventClosure = Closure<dyn FnMut(Event)>;

fn js_error(err: JsValue) -> String {
	format!("{:?}", err)
}

fn navigation_failed(err: JsValue) -> RouterError {
	RouterError::NavigationFailed(js_error(err))
}

fn window() -> folio_router::Result<web_sys::Window> {
	web_sys::window().ok_or_else(|| RouterError::NavigationFailed("no window".to_string()))
}

/// `window.location` and `window.history`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebHistory;

impl BrowserHistory for WebHistory {
	fn location(&self) -> Option<Location> {
		let location = web_sys::window()?.location();
		let pathname = location.pathname().ok()?;
		let search = location.search().unwrap_or_default();
		Some(Location::new(pathname).with_search(search))
	}

	fn write(
		&mut self,
		nav_type: NavigationType,
		state: &HistoryState,
		path: &str,
	) -> folio_router::Result<()> {
		let history = window()?.history().map_err(navigation_failed)?;
		let state = js_sys::JSON::parse(&state.to_json()?).map_err(navigation_failed)?;
		match nav_type {
			NavigationType::Push => history.push_state_with_url(&state, "", Some(path)),
			NavigationType::Replace => history.replace_state_with_url(&state, "", Some(path)),
		}
		.map_err(navigation_failed)
	}
}

/// Popstate listeners registered on `window`.
///
/// Owns the JS closures; removing a listener drops its closure.
#[derive(Default)]
pub struct WindowEvents {
	next_id: Cell<u64>,
	listeners: RefCell<HashMap<ListenerId, EventClosure>>,
}

impl std::fmt::Debug for WindowEvents {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("WindowEvents")
			.field("listeners", &self.listeners.borrow().len())
			.finish()
	}
}

impl WindowEvents {
	/// Creates a target with no listeners.
	pub fn new() -> Self {
		Self::default()
	}
}

impl PopstateTarget for WindowEvents {
	fn add_popstate_listener(&self, mut callback: PopstateCallback) -> folio_router::Result<ListenerId> {
		let closure = Closure::wrap(Box::new(move |_event: Event| callback()) as Box<dyn FnMut(_)>);
		window()?
			.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
			.map_err(navigation_failed)?;

		let id = ListenerId(self.next_id.get());
		self.next_id.set(id.0 + 1);
		self.listeners.borrow_mut().insert(id, closure);
		Ok(id)
	}

	fn remove_popstate_listener(&self, id: ListenerId) {
		let Some(closure) = self.listeners.borrow_mut().remove(&id) else {
			return;
		};
		if let Some(window) = web_sys::window()
			&& let Err(err) =
				window.remove_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
		{
			tracing::warn!(error = %js_error(err), "failed to remove popstate listener");
		}
	}
}

/// Mounts the portfolio into the element with id `mount_id`.
///
/// Renders the current page, binds popstate, and intercepts clicks on links
/// to registered pages so they navigate without a page load.
pub fn launch(settings: &RouterSettings, registry: PageRegistry, mount_id: &str) -> Result<Rc<WebApp>> {
	let window = web_sys::window().ok_or(PagesError::NoBrowser("window"))?;
	let document = window.document().ok_or(PagesError::NoBrowser("document"))?;
	let root = document
		.get_element_by_id(mount_id)
		.ok_or_else(|| PagesError::MissingElement(mount_id.to_string()))?;

	let table = Arc::new(settings.route_table()?);
	let app = Rc::new(PortfolioApp::new(
		table,
		registry,
		WebHistory,
		WindowEvents::new(),
		settings.controller_options(),
	));

	let weak = Rc::downgrade(&app);
	let hook_root = root.clone();
	app.set_on_change(move || {
		if let Some(app) = weak.upgrade() {
			paint(&app, &hook_root);
		}
	});
	app.mount()?;
	paint(&app, &root);

	let link_app = Rc::downgrade(&app);
	let link_handler = Closure::wrap(Box::new(move |event: Event| {
		if let Some(app) = link_app.upgrade() {
			handle_link_click(&app, &event);
		}
	}) as Box<dyn FnMut(_)>);
	document
		.add_event_listener_with_callback("click", link_handler.as_ref().unchecked_ref())
		.map_err(|e| PagesError::Dom(js_error(e)))?;
	// Lives as long as the document.
	link_handler.forget();

	tracing::debug!(mount_id, page = %app.current_page(), "portfolio launched");
	Ok(app)
}

fn paint(app: &Rc<WebApp>, root: &Element) {
	// SAFETY(XSS): render_to_string() escapes all text and attribute values.
	root.set_inner_html(&app.render().render_to_string());
	if let Some(commit) = app.commit() {
		tracing::debug!(outcome = ?commit.outcome, "committed");
		arm_scroll_correction(app, commit.scroll);
	}
}

fn arm_scroll_correction(app: &Rc<WebApp>, ticket: ScrollTicket) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let delay = i32::try_from(ticket.delay().as_millis()).unwrap_or(i32::MAX);
	let app = Rc::downgrade(app);
	let callback = Closure::once_into_js(move || {
		if let Some(app) = app.upgrade()
			&& app.fire_scroll_correction(&ticket)
			&& let Some(window) = web_sys::window()
		{
			window.scroll_to_with_x_and_y(0.0, 0.0);
		}
	});
	if let Err(err) =
		window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
	{
		tracing::warn!(error = %js_error(err), "failed to arm scroll correction");
	}
}

fn handle_link_click(app: &WebApp, event: &Event) {
	// Leave modified and non-primary clicks to the browser.
	if let Some(mouse) = event.dyn_ref::<MouseEvent>()
		&& (mouse.button() != 0
			|| mouse.ctrl_key()
			|| mouse.meta_key()
			|| mouse.shift_key()
			|| mouse.alt_key())
	{
		return;
	}
	let Some(link) = event
		.target()
		.and_then(|target| target.dyn_into::<Element>().ok())
		.and_then(|element| element.closest("a[href]").ok().flatten())
	else {
		return;
	};
	let href = link.get_attribute("href");
	let target = link.get_attribute("target");
	let attrs = LinkAttrs {
		href: href.as_deref(),
		target: target.as_deref(),
		download: link.has_attribute("download"),
	};
	if let Some(path) = intercepted_path(app.table(), &attrs) {
		event.prevent_default();
		app.navigate_to_path(path);
	}
}
