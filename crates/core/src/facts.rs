//! Point-in-time snapshot of the facts the visibility rule consumes.

use crate::host::HostWindow;

/// The three observable facts the visibility rule depends on.
///
/// Captured immediately before evaluation and discarded afterwards; a
/// snapshot is never reused across events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowFacts {
	/// Whether any folder is open in the window.
	pub has_open_folder: bool,
	/// Number of file-backed views attached to the window.
	pub open_file_views: usize,
	/// Whether the tab strip is enabled for the window.
	pub tabs_enabled: bool,
}

impl WindowFacts {
	/// Reads the current facts from a host window.
	pub fn capture(window: &dyn HostWindow) -> Self {
		Self {
			has_open_folder: window.has_open_folder(),
			open_file_views: window.open_file_view_count(),
			tabs_enabled: window.tabs_enabled(),
		}
	}
}
