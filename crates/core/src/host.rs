//! Host window surface consumed by the evaluator and subscriber.
//!
//! The host editor owns every fact behind these methods. Implementations
//! are expected to read live state; nothing here is cached.

use std::sync::Arc;

/// Unique identifier for a host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u64);

/// Failure reported by the host when a visibility change is refused.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HostError {
	/// The host rejected the sidebar visibility change.
	#[error("host rejected sidebar visibility change: {reason}")]
	Rejected {
		/// Host-supplied reason, opaque to this crate.
		reason: String,
	},
	/// The window no longer exists on the host side.
	#[error("window {0:?} is gone")]
	WindowGone(WindowId),
}

/// Read surface of a host window plus the sidebar toggle.
pub trait HostWindow: Send + Sync {
	/// Identifier used for deferral dedup and log correlation.
	fn id(&self) -> WindowId;

	/// Whether any folder is open in this window.
	fn has_open_folder(&self) -> bool;

	/// Number of file-backed views currently attached to this window.
	fn open_file_view_count(&self) -> usize;

	/// Whether the tab strip is enabled for this window.
	fn tabs_enabled(&self) -> bool;

	/// Current sidebar visibility as reported by the host.
	fn is_sidebar_visible(&self) -> bool;

	/// Asks the host to show or hide the sidebar.
	fn set_sidebar_visible(&self, visible: bool) -> Result<(), HostError>;
}

/// Shared handle to a host window.
pub type SharedWindow = Arc<dyn HostWindow>;
