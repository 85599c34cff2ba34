//! Page rendering and browser mounting
//!
//! This module provides access to folio-pages: the view tree, page registry,
//! navigation shell, and the app driver that runs history synchronization
//! after each render.
//!
//! ## Example
//!
//! ```rust,ignore
//! use folio::pages::{default_registry, default_settings};
//!
//! // In a wasm32 entry point
//! let app = folio::pages::web::launch(&default_settings(), default_registry(), "app")?;
//! ```

// Re-export all folio-pages functionality
pub use folio_pages::*;
