//! Popstate subscription management.
//!
//! A [`PopstateBinding`] owns at most one listener registration on a
//! [`PopstateTarget`]. Binding twice keeps the first registration and dropping
//! the binding removes it, so exactly one listener is active for the lifetime
//! of a mounted app.

use super::error::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// Callback invoked on back/forward navigation.
///
/// The event payload is deliberately not passed: handlers read the live
/// location instead.
pub type PopstateCallback = Box<dyn FnMut()>;

/// Handle identifying a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Something that dispatches popstate events.
pub trait PopstateTarget {
	/// Registers `callback` and returns its handle.
	fn add_popstate_listener(&self, callback: PopstateCallback) -> Result<ListenerId>;

	/// Removes a listener. Unknown handles are ignored.
	fn remove_popstate_listener(&self, id: ListenerId);
}

/// Owns a single popstate registration.
pub struct PopstateBinding<T: PopstateTarget> {
	target: T,
	listener: Option<ListenerId>,
}

impl<T: PopstateTarget> std::fmt::Debug for PopstateBinding<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PopstateBinding")
			.field("listener", &self.listener)
			.finish()
	}
}

impl<T: PopstateTarget> PopstateBinding<T> {
	/// Creates an unbound binding.
	pub fn new(target: T) -> Self {
		Self {
			target,
			listener: None,
		}
	}

	/// Registers `callback` unless a listener is already registered.
	///
	/// Returns `Ok(true)` when a new listener was added.
	pub fn bind<F>(&mut self, callback: F) -> Result<bool>
	where
		F: FnMut() + 'static,
	{
		if self.listener.is_some() {
			tracing::debug!("popstate listener already bound");
			return Ok(false);
		}
		let id = self.target.add_popstate_listener(Box::new(callback))?;
		tracing::debug!(listener = id.0, "bound popstate listener");
		self.listener = Some(id);
		Ok(true)
	}

	/// Removes the registered listener. Returns false if none was bound.
	pub fn unbind(&mut self) -> bool {
		match self.listener.take() {
			Some(id) => {
				self.target.remove_popstate_listener(id);
				tracing::debug!(listener = id.0, "unbound popstate listener");
				true
			}
			None => false,
		}
	}

	/// Returns true while a listener is registered.
	pub fn is_bound(&self) -> bool {
		self.listener.is_some()
	}

	/// Returns the event target.
	pub fn target(&self) -> &T {
		&self.target
	}
}

impl<T: PopstateTarget> Drop for PopstateBinding<T> {
	fn drop(&mut self) {
		self.unbind();
	}
}

type SharedCallback = Rc<RefCell<PopstateCallback>>;

#[derive(Default)]
struct MemoryTargetInner {
	next_id: u64,
	listeners: Vec<(ListenerId, SharedCallback)>,
}

/// In-memory popstate dispatcher.
///
/// Clones share the same listener list, like handles to one `window`.
#[derive(Clone, Default)]
pub struct MemoryEventTarget {
	inner: Rc<RefCell<MemoryTargetInner>>,
}

impl std::fmt::Debug for MemoryEventTarget {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MemoryEventTarget")
			.field("listeners", &self.listener_count())
			.finish()
	}
}

impl MemoryEventTarget {
	/// Creates a target with no listeners.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of registered listeners.
	pub fn listener_count(&self) -> usize {
		self.inner.borrow().listeners.len()
	}

	/// Invokes every listener in registration order and returns how many ran.
	pub fn dispatch_popstate(&self) -> usize {
		// Snapshot first so a listener may unregister itself.
		let callbacks: Vec<SharedCallback> = self
			.inner
			.borrow()
			.listeners
			.iter()
			.map(|(_, cb)| Rc::clone(cb))
			.collect();
		for callback in &callbacks {
			let mut callback = callback.borrow_mut();
			(*callback)();
		}
		callbacks.len()
	}
}

impl PopstateTarget for MemoryEventTarget {
	fn add_popstate_listener(&self, callback: PopstateCallback) -> Result<ListenerId> {
		let mut inner = self.inner.borrow_mut();
		let id = ListenerId(inner.next_id);
		inner.next_id += 1;
		inner.listeners.push((id, Rc::new(RefCell::new(callback))));
		Ok(id)
	}

	fn remove_popstate_listener(&self, id: ListenerId) {
		self.inner
			.borrow_mut()
			.listeners
			.retain(|(listener, _)| *listener != id);
	}
}
