//! Per-event handler registry with serialized delivery.
//!
//! A thin observer layer over the host's notification stream. Handlers
//! are registered per [`WorkspaceEvent`] and run to completion in
//! priority order on the emitting thread; the host's serialized delivery
//! guarantee is preserved, not re-established here.

use std::sync::Arc;

use autosidebar_core::{EventCtx, WorkspaceEvent};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Handler function invoked for a matching event.
pub type Handler = Arc<dyn Fn(&EventCtx<'_>) + Send + Sync>;

/// A registered handler for one event kind.
#[derive(Clone)]
pub struct HandlerDef {
	/// Unique identifier, used for duplicate rejection and logging.
	pub id: &'static str,
	/// Event this handler listens to.
	pub event: WorkspaceEvent,
	/// Execution priority (lower runs first, default 100).
	pub priority: i16,
	/// The handler itself.
	pub handler: Handler,
}

impl std::fmt::Debug for HandlerDef {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("HandlerDef")
			.field("id", &self.id)
			.field("event", &self.event)
			.field("priority", &self.priority)
			.finish()
	}
}

/// Registration failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DispatchError {
	/// A handler with the same id is already registered.
	#[error("duplicate handler id: {0}")]
	DuplicateId(&'static str),
}

/// Observer registry keyed by event kind.
#[derive(Default)]
pub struct Dispatcher {
	by_event: RwLock<FxHashMap<WorkspaceEvent, Vec<HandlerDef>>>,
}

impl Dispatcher {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a handler, keeping the per-event list priority-sorted.
	///
	/// Insertion is stable for equal priorities: later registrations run
	/// after earlier ones.
	pub fn subscribe(&self, def: HandlerDef) -> Result<(), DispatchError> {
		let mut map = self.by_event.write();
		if map.values().flatten().any(|h| h.id == def.id) {
			return Err(DispatchError::DuplicateId(def.id));
		}
		let list = map.entry(def.event).or_default();
		let pos = list.partition_point(|h| h.priority <= def.priority);
		tracing::trace!(handler = def.id, event = def.event.as_str(), "dispatch.subscribe");
		list.insert(pos, def);
		Ok(())
	}

	/// Number of registered handlers across all events.
	pub fn len(&self) -> usize {
		self.by_event.read().values().map(Vec::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Delivers a notification to every matching handler, in priority order.
	///
	/// Handlers run on the calling thread and to completion. The lock is
	/// released before any handler runs, so handlers may subscribe.
	pub fn emit(&self, ctx: &EventCtx<'_>) {
		let matching: Vec<HandlerDef> = {
			let map = self.by_event.read();
			map.get(&ctx.event()).cloned().unwrap_or_default()
		};
		for def in &matching {
			tracing::trace!(handler = def.id, event = ctx.event().as_str(), "dispatch.run");
			(def.handler)(ctx);
		}
	}
}
