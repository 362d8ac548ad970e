//! The auto-sidebar subscriber: read facts, decide, apply.
//!
//! [`AutoSidebar`] wires one handler per workspace notification into a
//! [`Dispatcher`]. Most notifications re-evaluate the affected window
//! immediately; `will-*` notifications park it in the deferral queue and
//! the matching post notification flushes the queue.

use std::sync::Arc;

use autosidebar_core::{
	EventCtx, SharedWindow, WindowFacts, WorkspaceEvent, desired_visibility,
};

use crate::deferral::DeferredWindows;
use crate::dispatch::{DispatchError, Dispatcher, HandlerDef};

/// Default settings key controlling the tab strip.
pub const DEFAULT_TABS_SETTING: &str = "show_tabs";

/// Notifications that re-evaluate the affected window immediately.
const APPLY_EVENTS: &[(&str, WorkspaceEvent)] = &[
	("autosidebar.window-created", WorkspaceEvent::WindowCreated),
	("autosidebar.view-new", WorkspaceEvent::ViewNew),
	("autosidebar.view-loaded", WorkspaceEvent::ViewLoaded),
	("autosidebar.view-reloaded", WorkspaceEvent::ViewReloaded),
	("autosidebar.view-cloned", WorkspaceEvent::ViewCloned),
	("autosidebar.buffer-associated", WorkspaceEvent::BufferAssociated),
	("autosidebar.view-activated", WorkspaceEvent::ViewActivated),
	("autosidebar.view-deactivated", WorkspaceEvent::ViewDeactivated),
	("autosidebar.project-new", WorkspaceEvent::ProjectNew),
	("autosidebar.project-loaded", WorkspaceEvent::ProjectLoaded),
	("autosidebar.project-saved", WorkspaceEvent::ProjectSaved),
];

/// Notifications that fire before the window's facts are updated; the
/// window is parked and re-evaluated on the matching post notification.
const DEFER_EVENTS: &[(&str, WorkspaceEvent)] = &[
	("autosidebar.view-will-close", WorkspaceEvent::ViewWillClose),
	("autosidebar.view-will-move", WorkspaceEvent::ViewWillMove),
	("autosidebar.project-will-close", WorkspaceEvent::ProjectWillClose),
];

/// Post notifications that flush the deferral queue.
const FLUSH_EVENTS: &[(&str, WorkspaceEvent)] = &[
	("autosidebar.view-closed", WorkspaceEvent::ViewClosed),
	("autosidebar.view-moved", WorkspaceEvent::ViewMoved),
];

/// Keeps each window's sidebar visibility consistent with its facts.
///
/// Stateless between notifications: every qualifying event triggers a
/// full recomputation from the window's current facts, and the host is
/// only called when the desired state differs from what it reports.
///
/// Cloning is cheap and clones share the deferral queue, so the handler
/// closures handed to the dispatcher all flush the same set of parked
/// windows.
#[derive(Clone)]
pub struct AutoSidebar {
	tabs_setting_key: Arc<str>,
	deferred: Arc<DeferredWindows>,
}

impl Default for AutoSidebar {
	fn default() -> Self {
		Self::new()
	}
}

impl AutoSidebar {
	/// Creates a subscriber watching [`DEFAULT_TABS_SETTING`].
	pub fn new() -> Self {
		Self::with_tabs_setting_key(DEFAULT_TABS_SETTING)
	}

	/// Overrides the settings key treated as the tab-strip toggle.
	///
	/// The key is host-defined and passed through opaquely.
	pub fn with_tabs_setting_key(key: impl Into<Arc<str>>) -> Self {
		Self {
			tabs_setting_key: key.into(),
			deferred: Arc::new(DeferredWindows::new()),
		}
	}

	/// Settings key currently treated as the tab-strip toggle.
	pub fn tabs_setting_key(&self) -> &str {
		&self.tabs_setting_key
	}

	/// Re-evaluates a window now, flushing earlier deferrals with it.
	pub fn apply(&self, window: &SharedWindow) {
		self.deferred.push(window);
		self.flush();
	}

	/// Parks a window for re-evaluation at the next flush.
	pub fn defer(&self, window: &SharedWindow) {
		self.deferred.push(window);
	}

	/// Re-evaluates every parked window.
	pub fn flush(&self) {
		self.deferred.drain(apply_now);
	}

	/// Registers the full handler set on a dispatcher.
	///
	/// Fails if any of the handler ids is already taken, in which case
	/// none of the remaining handlers are registered.
	pub fn install(&self, dispatcher: &Dispatcher) -> Result<(), DispatchError> {
		for &(id, event) in APPLY_EVENTS {
			let this = self.clone();
			dispatcher.subscribe(HandlerDef {
				id,
				event,
				priority: 100,
				handler: Arc::new(move |ctx| this.apply(ctx.window)),
			})?;
		}
		for &(id, event) in DEFER_EVENTS {
			let this = self.clone();
			dispatcher.subscribe(HandlerDef {
				id,
				event,
				priority: 100,
				handler: Arc::new(move |ctx| this.defer(ctx.window)),
			})?;
		}
		for &(id, event) in FLUSH_EVENTS {
			let this = self.clone();
			dispatcher.subscribe(HandlerDef {
				id,
				event,
				priority: 100,
				handler: Arc::new(move |_ctx| this.flush()),
			})?;
		}

		let this = self.clone();
		dispatcher.subscribe(HandlerDef {
			id: "autosidebar.setting-changed",
			event: WorkspaceEvent::SettingChanged,
			priority: 100,
			handler: Arc::new(move |ctx| this.on_setting_changed(ctx)),
		})?;

		Ok(())
	}

	fn on_setting_changed(&self, ctx: &EventCtx<'_>) {
		match ctx.setting_key() {
			Some(key) if *key == *self.tabs_setting_key => self.apply(ctx.window),
			Some(key) => tracing::trace!(key, "sidebar.setting_ignored"),
			None => {}
		}
	}
}

/// Captures facts, evaluates, and applies the result when it differs
/// from the host's current state.
fn apply_now(window: &SharedWindow) {
	let facts = WindowFacts::capture(window.as_ref());
	let want = desired_visibility(&facts);
	let current = window.is_sidebar_visible();

	tracing::debug!(
		window = window.id().0,
		has_open_folder = facts.has_open_folder,
		open_file_views = facts.open_file_views,
		tabs_enabled = facts.tabs_enabled,
		want,
		current,
		"sidebar.evaluate"
	);

	if want == current {
		return;
	}
	if let Err(e) = window.set_sidebar_visible(want) {
		// Not retried; the next workspace event re-evaluates from scratch.
		tracing::warn!(window = window.id().0, error = %e, "sidebar.apply_failed");
	}
}
