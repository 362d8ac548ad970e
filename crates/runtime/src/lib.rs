//! Reactive layer for automatic sidebar visibility.
//!
//! Subscribes to the host's workspace notifications and keeps each
//! window's sidebar consistent with its current facts. There is no state
//! machine: every notification triggers a full recomputation through
//! [`autosidebar_core::desired_visibility`], so separate toggles can never
//! drift from the true workspace state.

pub mod deferral;
pub mod dispatch;
pub mod sidebar;

pub use dispatch::{DispatchError, Dispatcher, HandlerDef};
pub use sidebar::{AutoSidebar, DEFAULT_TABS_SETTING};
