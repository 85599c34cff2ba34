//! Folio Pages - page rendering and browser mounting
//!
//! Renders the portfolio around the [`folio_router`] navigation controller:
//! a small [`View`] tree, a [`PageRegistry`] dispatching decoded pages to
//! views, the navigation shell, and the [`PortfolioApp`] driver that runs
//! history synchronization after each render.
//!
//! On `wasm32`, [`web::launch`] mounts the app into the document.
//!
//! ## Example
//!
//! ```
//! use folio_pages::{PortfolioApp, default_registry, default_settings};
//! use folio_router::{MemoryEventTarget, MemoryHistory, SyncOutcome};
//! use std::sync::Arc;
//!
//! let settings = default_settings();
//! let table = Arc::new(settings.route_table().unwrap());
//! let app = PortfolioApp::new(
//!     table,
//!     default_registry(),
//!     MemoryHistory::at("/"),
//!     MemoryEventTarget::new(),
//!     settings.controller_options(),
//! );
//! app.mount().unwrap();
//! let _html = app.render().render_to_string();
//! assert_eq!(app.commit().unwrap().outcome, SyncOutcome::AlreadyCurrent);
//! ```

pub mod app;
pub mod catalog;
pub mod error;
pub mod links;
pub mod registry;
pub mod shell;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::{Commit, PortfolioApp};
pub use catalog::{HOME_PAGE, PAGES, default_registry, default_settings};
pub use error::{PagesError, Result};
pub use links::{LinkAttrs, intercepted_path};
pub use registry::PageRegistry;
pub use shell::{nav_shell, page_label, with_shell};
pub use view::{ElementView, View};
