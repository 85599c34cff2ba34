//! Folio Router - history-synchronized page routing
//!
//! Client-side routing for the folio single-page portfolio. Pages are addressed
//! by opaque [`PageId`]s; a static [`RouteTable`] maps them to URL slugs, and a
//! [`NavigationController`] keeps the browser address bar in sync with the
//! current page without creating duplicate history entries.
//!
//! ## Architecture
//!
//! - [`path`]: slash normalization and location snapshots
//! - [`page`]: page ids and the decoded [`Page`] union
//! - [`table`]: route table, reverse table, and their invariants
//! - [`resolver`]: startup page resolution (path first, `?page=` second)
//! - [`history`]: the [`BrowserHistory`] seam with detached and in-memory backends
//! - [`events`]: single-registration popstate binding
//! - [`controller`]: navigation state, history sync, and popstate handling
//! - [`scroll`]: cancellable deferred scroll correction
//! - [`settings`]: TOML-backed router configuration
//!
//! ## Example
//!
//! ```
//! use folio_router::{MemoryHistory, NavigationController, RouteTable, SyncOutcome};
//! use std::sync::Arc;
//!
//! let table = Arc::new(
//!     RouteTable::builder("home")
//!         .route("home", "")
//!         .route("contact", "contact")
//!         .build()
//!         .unwrap(),
//! );
//! let mut nav = NavigationController::new(table, MemoryHistory::at("/"));
//! assert_eq!(nav.on_navigation_state_changed(), SyncOutcome::AlreadyCurrent);
//!
//! nav.navigate("contact");
//! assert_eq!(
//!     nav.on_navigation_state_changed(),
//!     SyncOutcome::Pushed("/contact".to_string())
//! );
//! ```

pub mod controller;
pub mod error;
pub mod events;
pub mod history;
pub mod page;
pub mod path;
pub mod resolver;
pub mod scroll;
pub mod settings;
pub mod table;

pub use controller::{ControllerOptions, NavigationController, SyncOutcome};
pub use error::{Result, RouterError};
pub use events::{ListenerId, MemoryEventTarget, PopstateBinding, PopstateCallback, PopstateTarget};
pub use history::{
	BrowserHistory, Detached, HistoryEntry, HistoryState, MemoryHistory, NavigationType,
};
pub use page::{DEFAULT_BLOG_PREFIX, Page, PageId};
pub use path::{Location, normalize, path_for_slug};
pub use resolver::{DEFAULT_PAGE_QUERY_PARAM, resolve_initial_page, resolve_initial_page_with};
pub use scroll::{DEFAULT_SCROLL_DELAY, ScrollCorrection, ScrollTicket};
pub use settings::{RouteSetting, RouterSettings};
pub use table::{ReverseRouteTable, RouteEntry, RouteTable, RouteTableBuilder, build_reverse_table};
