//! History API abstraction.
//!
//! [`BrowserHistory`] is the seam between the navigation controller and the
//! browser. [`Detached`] stands in when there is no browser (server-side
//! rendering, native tests), and [`MemoryHistory`] keeps a full in-memory
//! session history with back/forward support.

use super::error::{Result, RouterError};
use super::page::PageId;
use super::path::Location;
use serde::{Deserialize, Serialize};

/// Payload stored with every history entry.
///
/// Consumers must not rely on reading it back: the popstate handler derives
/// the page from the live path instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
	/// Page the entry was written for.
	pub page: PageId,
}

impl HistoryState {
	/// Creates a new history state.
	pub fn new(page: impl Into<PageId>) -> Self {
		Self { page: page.into() }
	}

	/// Serializes the state to the JSON form passed to `history.pushState`.
	pub fn to_json(&self) -> Result<String> {
		serde_json::to_string(self).map_err(|e| RouterError::NavigationFailed(e.to_string()))
	}
}

/// How a history entry is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationType {
	/// `history.pushState`: adds an entry.
	Push,
	/// `history.replaceState`: overwrites the current entry.
	Replace,
}

/// Access to the browser location and session history.
pub trait BrowserHistory {
	/// Returns the live location, or `None` outside a browser.
	fn location(&self) -> Option<Location>;

	/// Writes a history entry for `path`.
	fn write(&mut self, nav_type: NavigationType, state: &HistoryState, path: &str) -> Result<()>;

	/// Returns the live pathname, or `None` outside a browser.
	fn current_path(&self) -> Option<String> {
		self.location().map(|l| l.pathname)
	}
}

/// History backend for contexts without a browser.
///
/// Reads report no location and writes are no-ops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Detached;

impl BrowserHistory for Detached {
	fn location(&self) -> Option<Location> {
		None
	}

	fn write(&mut self, _nav_type: NavigationType, _state: &HistoryState, _path: &str) -> Result<()> {
		Ok(())
	}
}

/// A single in-memory history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
	/// Location of the entry.
	pub location: Location,
	/// State payload, absent for the entry the session started on.
	pub state: Option<HistoryState>,
}

/// In-memory session history.
///
/// Behaves like the browser's joint session history for a single document:
/// pushing truncates forward entries, `back`/`forward` only move the cursor.
/// Moving the cursor does not notify anyone; callers dispatch popstate
/// themselves.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
	entries: Vec<HistoryEntry>,
	cursor: usize,
	push_count: usize,
	replace_count: usize,
}

impl MemoryHistory {
	/// Starts a session on `location`.
	pub fn new(location: Location) -> Self {
		Self {
			entries: vec![HistoryEntry {
				location,
				state: None,
			}],
			cursor: 0,
			push_count: 0,
			replace_count: 0,
		}
	}

	/// Starts a session on `pathname` with no query string.
	pub fn at(pathname: &str) -> Self {
		Self::new(Location::new(pathname))
	}

	/// Returns every entry, oldest first.
	pub fn entries(&self) -> &[HistoryEntry] {
		&self.entries
	}

	/// Number of entries in the session.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Always false: a session has at least one entry.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Index of the current entry.
	pub fn index(&self) -> usize {
		self.cursor
	}

	/// Returns the current entry.
	pub fn current(&self) -> &HistoryEntry {
		&self.entries[self.cursor]
	}

	/// Number of push-style writes so far.
	pub fn push_count(&self) -> usize {
		self.push_count
	}

	/// Number of replace-style writes so far.
	pub fn replace_count(&self) -> usize {
		self.replace_count
	}

	/// Moves one entry back. Returns false at the start of the session.
	pub fn back(&mut self) -> bool {
		self.go(-1)
	}

	/// Moves one entry forward. Returns false at the end of the session.
	pub fn forward(&mut self) -> bool {
		self.go(1)
	}

	/// Moves the cursor by `delta`. Out-of-range moves leave it unchanged.
	pub fn go(&mut self, delta: isize) -> bool {
		let Some(target) = self.cursor.checked_add_signed(delta) else {
			return false;
		};
		if delta == 0 || target >= self.entries.len() {
			return false;
		}
		self.cursor = target;
		true
	}
}

impl BrowserHistory for MemoryHistory {
	fn location(&self) -> Option<Location> {
		Some(self.current().location.clone())
	}

	fn write(&mut self, nav_type: NavigationType, state: &HistoryState, path: &str) -> Result<()> {
		let entry = HistoryEntry {
			location: Location::new(path),
			state: Some(state.clone()),
		};
		match nav_type {
			NavigationType::Push => {
				self.entries.truncate(self.cursor + 1);
				self.entries.push(entry);
				self.cursor += 1;
				self.push_count += 1;
			}
			NavigationType::Replace => {
				self.entries[self.cursor] = entry;
				self.replace_count += 1;
			}
		}
		Ok(())
	}
}
