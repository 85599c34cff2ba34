//! Deferred scroll-to-top correction.
//!
//! After a navigation commits, content may still be rendering, so the scroll
//! reset is retried after a short delay. Each scheduled correction is a
//! [`ScrollTicket`]; scheduling again or navigating elsewhere invalidates the
//! previous ticket, so a stale correction never fires.

use super::page::PageId;
use std::time::Duration;

/// Delay before the deferred scroll correction runs.
pub const DEFAULT_SCROLL_DELAY: Duration = Duration::from_millis(100);

/// A scheduled scroll correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollTicket {
	generation: u64,
	page: PageId,
	delay: Duration,
}

impl ScrollTicket {
	/// Page the correction was scheduled for.
	pub fn page(&self) -> &PageId {
		&self.page
	}

	/// Delay the host timer should wait before firing.
	pub fn delay(&self) -> Duration {
		self.delay
	}
}

/// Tracks the single live scroll correction.
#[derive(Debug, Clone)]
pub struct ScrollCorrection {
	delay: Duration,
	generation: u64,
	pending: Option<u64>,
}

impl Default for ScrollCorrection {
	fn default() -> Self {
		Self::new(DEFAULT_SCROLL_DELAY)
	}
}

impl ScrollCorrection {
	/// Creates a tracker using `delay` for every ticket.
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			generation: 0,
			pending: None,
		}
	}

	/// Schedules a correction for `page`, invalidating any earlier ticket.
	pub fn schedule(&mut self, page: &PageId) -> ScrollTicket {
		self.generation += 1;
		self.pending = Some(self.generation);
		ScrollTicket {
			generation: self.generation,
			page: page.clone(),
			delay: self.delay,
		}
	}

	/// Invalidates the pending ticket. Returns true if one was pending.
	pub fn cancel(&mut self) -> bool {
		self.pending.take().is_some()
	}

	/// Consumes `ticket`. Returns true only if it is still the live ticket.
	pub fn fire(&mut self, ticket: &ScrollTicket) -> bool {
		if self.pending == Some(ticket.generation) {
			self.pending = None;
			true
		} else {
			false
		}
	}

	/// Returns true while a ticket is live.
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}
}
