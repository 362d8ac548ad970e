//! Workspace lifecycle events that can change the visibility decision.
//!
//! Every host notification that can change a window's folder list, view
//! count, or tab setting has a variant here. `view:will-*` and
//! `project:will-close` fire while the departing view or project is still
//! counted in the window's facts; subscribers defer those windows and
//! re-evaluate on the matching post notification.

use crate::host::SharedWindow;

/// Events the subscriber reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkspaceEvent {
	/// A window was created, or reported during host startup.
	WindowCreated,
	/// A new scratch view was opened.
	ViewNew,
	/// A file-backed view finished loading.
	ViewLoaded,
	/// A view was reloaded from disk.
	ViewReloaded,
	/// A view was cloned within its window.
	ViewCloned,
	/// A buffer became associated with a file on disk.
	BufferAssociated,
	/// A view gained focus.
	ViewActivated,
	/// A view lost focus.
	ViewDeactivated,
	/// A view is about to move to another window.
	ViewWillMove,
	/// A view finished moving.
	ViewMoved,
	/// A view is about to close.
	ViewWillClose,
	/// A view was closed.
	ViewClosed,
	/// A project was created in a window.
	ProjectNew,
	/// A project finished loading into a window.
	ProjectLoaded,
	/// A project file was saved.
	ProjectSaved,
	/// A project is about to close.
	ProjectWillClose,
	/// A settings key changed for a window.
	SettingChanged,
}

impl WorkspaceEvent {
	pub fn as_str(&self) -> &'static str {
		match self {
			WorkspaceEvent::WindowCreated => "window:created",
			WorkspaceEvent::ViewNew => "view:new",
			WorkspaceEvent::ViewLoaded => "view:loaded",
			WorkspaceEvent::ViewReloaded => "view:reloaded",
			WorkspaceEvent::ViewCloned => "view:cloned",
			WorkspaceEvent::BufferAssociated => "buffer:associated",
			WorkspaceEvent::ViewActivated => "view:activated",
			WorkspaceEvent::ViewDeactivated => "view:deactivated",
			WorkspaceEvent::ViewWillMove => "view:will-move",
			WorkspaceEvent::ViewMoved => "view:moved",
			WorkspaceEvent::ViewWillClose => "view:will-close",
			WorkspaceEvent::ViewClosed => "view:closed",
			WorkspaceEvent::ProjectNew => "project:new",
			WorkspaceEvent::ProjectLoaded => "project:loaded",
			WorkspaceEvent::ProjectSaved => "project:saved",
			WorkspaceEvent::ProjectWillClose => "project:will-close",
			WorkspaceEvent::SettingChanged => "setting:changed",
		}
	}
}

/// Event-specific payload.
///
/// Only `SettingChanged` carries data: the changed key, host-defined and
/// treated as opaque by this crate.
#[derive(Debug, Clone, Copy)]
pub enum WorkspaceEventData<'a> {
	WindowCreated,
	ViewNew,
	ViewLoaded,
	ViewReloaded,
	ViewCloned,
	BufferAssociated,
	ViewActivated,
	ViewDeactivated,
	ViewWillMove,
	ViewMoved,
	ViewWillClose,
	ViewClosed,
	ProjectNew,
	ProjectLoaded,
	ProjectSaved,
	ProjectWillClose,
	/// A settings key changed.
	SettingChanged { key: &'a str },
}

impl WorkspaceEventData<'_> {
	/// Returns the event type for this payload.
	pub fn event(&self) -> WorkspaceEvent {
		match self {
			WorkspaceEventData::WindowCreated => WorkspaceEvent::WindowCreated,
			WorkspaceEventData::ViewNew => WorkspaceEvent::ViewNew,
			WorkspaceEventData::ViewLoaded => WorkspaceEvent::ViewLoaded,
			WorkspaceEventData::ViewReloaded => WorkspaceEvent::ViewReloaded,
			WorkspaceEventData::ViewCloned => WorkspaceEvent::ViewCloned,
			WorkspaceEventData::BufferAssociated => WorkspaceEvent::BufferAssociated,
			WorkspaceEventData::ViewActivated => WorkspaceEvent::ViewActivated,
			WorkspaceEventData::ViewDeactivated => WorkspaceEvent::ViewDeactivated,
			WorkspaceEventData::ViewWillMove => WorkspaceEvent::ViewWillMove,
			WorkspaceEventData::ViewMoved => WorkspaceEvent::ViewMoved,
			WorkspaceEventData::ViewWillClose => WorkspaceEvent::ViewWillClose,
			WorkspaceEventData::ViewClosed => WorkspaceEvent::ViewClosed,
			WorkspaceEventData::ProjectNew => WorkspaceEvent::ProjectNew,
			WorkspaceEventData::ProjectLoaded => WorkspaceEvent::ProjectLoaded,
			WorkspaceEventData::ProjectSaved => WorkspaceEvent::ProjectSaved,
			WorkspaceEventData::ProjectWillClose => WorkspaceEvent::ProjectWillClose,
			WorkspaceEventData::SettingChanged { .. } => WorkspaceEvent::SettingChanged,
		}
	}
}

/// Context delivered to event handlers: payload plus the affected window.
pub struct EventCtx<'a> {
	/// The event-specific payload.
	pub data: WorkspaceEventData<'a>,
	/// The window the notification is about.
	pub window: &'a SharedWindow,
}

impl<'a> EventCtx<'a> {
	/// Creates a new context for one notification.
	pub fn new(data: WorkspaceEventData<'a>, window: &'a SharedWindow) -> Self {
		Self { data, window }
	}

	/// Returns the event type for this context.
	pub fn event(&self) -> WorkspaceEvent {
		self.data.event()
	}

	/// Changed settings key, for `setting:changed` notifications.
	pub fn setting_key(&self) -> Option<&'a str> {
		match self.data {
			WorkspaceEventData::SettingChanged { key } => Some(key),
			_ => None,
		}
	}
}
