//! History-synchronized page routing
//!
//! This module provides access to folio-router: the route table, startup
//! page resolution, the navigation controller, and the browser seams it
//! writes through.

// Re-export all folio-router functionality
pub use folio_router::*;
