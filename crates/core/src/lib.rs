//! Decision core for automatic sidebar visibility.
//!
//! This crate holds the shared vocabulary (host window surface, workspace
//! events) and the pure visibility rule. It performs no I/O and keeps no
//! state between evaluations: the desired sidebar state is always a
//! function of the window facts captured at call time.
//!
//! The reactive layer that subscribes to host notifications and applies
//! decisions lives in `autosidebar-runtime`.

pub mod evaluator;
pub mod event;
pub mod facts;
pub mod host;

pub use evaluator::desired_visibility;
pub use event::{EventCtx, WorkspaceEvent, WorkspaceEventData};
pub use facts::WindowFacts;
pub use host::{HostError, HostWindow, SharedWindow, WindowId};
