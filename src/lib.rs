//! # Folio
//!
//! A single-page portfolio with client-side routing that stays in sync with
//! the browser history.
//!
//! Pages are addressed by opaque ids. A static route table maps them to URL
//! slugs, the navigation controller writes exactly one history entry per
//! user navigation, and back/forward events restore the page without writing
//! any.
//!
//! ## Feature Flags
//!
//! - `pages` (default) - Page rendering, navigation shell, and browser mounting
//!
//! ## Quick Example
//!
//! ```rust
//! use folio::router::{MemoryHistory, NavigationController, SyncOutcome};
//! use std::sync::Arc;
//!
//! let settings = folio::pages::default_settings();
//! let table = Arc::new(settings.route_table().unwrap());
//! let mut nav = NavigationController::new(table, MemoryHistory::at("/"));
//! nav.on_navigation_state_changed();
//!
//! nav.navigate("contact");
//! assert_eq!(
//!     nav.on_navigation_state_changed(),
//!     SyncOutcome::Pushed("/contact".to_string())
//! );
//! ```

pub mod router;

#[cfg(feature = "pages")]
pub mod pages;

pub use folio_router::{NavigationController, Page, PageId, RouteTable, RouterError, RouterSettings};

#[cfg(feature = "pages")]
pub use folio_pages::{PagesError, PortfolioApp, View};
