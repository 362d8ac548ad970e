//! The sidebar visibility rule.

use crate::facts::WindowFacts;

/// Computes whether the sidebar should be visible for the given facts.
///
/// Folder-backed windows always show the sidebar: it is the primary
/// navigation surface for a project. Without a folder the sidebar is just
/// a list of open files, which only earns its space as a tab substitute,
/// when more than one file is open and the tab strip is disabled.
pub fn desired_visibility(facts: &WindowFacts) -> bool {
	if facts.has_open_folder {
		return true;
	}
	facts.open_file_views > 1 && !facts.tabs_enabled
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	fn facts(has_open_folder: bool, open_file_views: usize, tabs_enabled: bool) -> WindowFacts {
		WindowFacts {
			has_open_folder,
			open_file_views,
			tabs_enabled,
		}
	}

	#[test]
	fn folder_with_no_files_shows_sidebar() {
		assert!(desired_visibility(&facts(true, 0, true)));
	}

	#[test]
	fn single_file_without_tabs_hides_sidebar() {
		assert!(!desired_visibility(&facts(false, 1, false)));
	}

	#[test]
	fn several_files_without_tabs_show_sidebar() {
		assert!(desired_visibility(&facts(false, 3, false)));
	}

	#[test]
	fn several_files_with_tabs_hide_sidebar() {
		assert!(!desired_visibility(&facts(false, 3, true)));
	}

	#[test]
	fn empty_window_hides_sidebar() {
		assert!(!desired_visibility(&facts(false, 0, false)));
	}

	proptest! {
		#[test]
		fn open_folder_always_shows(views in 0usize..64, tabs in any::<bool>()) {
			prop_assert!(desired_visibility(&facts(true, views, tabs)));
		}

		#[test]
		fn at_most_one_view_never_shows_without_folder(views in 0usize..=1, tabs in any::<bool>()) {
			prop_assert!(!desired_visibility(&facts(false, views, tabs)));
		}

		#[test]
		fn tabs_enabled_never_shows_without_folder(views in 0usize..64) {
			prop_assert!(!desired_visibility(&facts(false, views, true)));
		}

		#[test]
		fn several_views_without_tabs_always_show(views in 2usize..64) {
			prop_assert!(desired_visibility(&facts(false, views, false)));
		}

		#[test]
		fn deterministic(folder in any::<bool>(), views in 0usize..64, tabs in any::<bool>()) {
			let f = facts(folder, views, tabs);
			prop_assert_eq!(desired_visibility(&f), desired_visibility(&f));
		}
	}
}
