//! Persistence module for window state
//!
//! Provides snapshot export/import for a window and its controls. The
//! storage medium is the caller's concern.

mod snapshot;
mod factory;
mod restore;

pub use snapshot::{PersistedControl, WindowSnapshot};
pub use factory::ControlFactory;
