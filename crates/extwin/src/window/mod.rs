//! Window module
//!
//! The window owns its controls and notifications and drives them from the
//! host's per-frame calls. Its behaviour is split across focused files:
//! - `window`: struct, construction and lifecycle
//! - `controls`: registry and notification passthroughs
//! - `frame`: per-frame update and draw passes
//! - `events`: routed input fan-out

#[allow(clippy::module_inception)]
mod window;
mod config;
mod context;
mod hooks;
mod controls;
mod frame;
mod events;

use std::sync::atomic::{AtomicU64, Ordering};

pub use window::Window;
pub use config::WindowSettings;
pub use context::WindowContext;
pub use hooks::WindowHooks;
pub(crate) use frame::DispatchOrder;

/// Unique window identifier
pub type WindowId = u64;

static NEXT_WINDOW_ID: AtomicU64 = AtomicU64::new(1);

/// Allocate a process-unique window id
pub(crate) fn next_window_id() -> WindowId {
    NEXT_WINDOW_ID.fetch_add(1, Ordering::Relaxed)
}
