//! Deferred re-evaluation queue for pre-close and pre-move notifications.
//!
//! A window whose view is about to leave still counts that view in its
//! facts; evaluating at the `will-*` notification would bake in stale
//! state. The window is parked here instead and re-evaluated when the
//! matching post notification arrives.

use autosidebar_core::SharedWindow;
use parking_lot::Mutex;

/// Windows awaiting re-evaluation, deduplicated by window id.
#[derive(Default)]
pub struct DeferredWindows {
	queue: Mutex<Vec<SharedWindow>>,
}

impl DeferredWindows {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parks a window for later re-evaluation.
	///
	/// A window already parked is not parked twice; draining applies each
	/// window once regardless of how many views it is losing.
	pub fn push(&self, window: &SharedWindow) {
		let mut queue = self.queue.lock();
		if queue.iter().any(|w| w.id() == window.id()) {
			tracing::trace!(window = window.id().0, "deferral.already_parked");
			return;
		}
		tracing::trace!(window = window.id().0, parked = queue.len() + 1, "deferral.park");
		queue.push(window.clone());
	}

	/// Drains every parked window through `apply`.
	///
	/// The queue is swapped out under the lock, so `apply` may park new
	/// windows without deadlocking.
	pub fn drain(&self, mut apply: impl FnMut(&SharedWindow)) {
		let drained = std::mem::take(&mut *self.queue.lock());
		for window in &drained {
			apply(window);
		}
	}

	pub fn len(&self) -> usize {
		self.queue.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.queue.lock().is_empty()
	}
}
