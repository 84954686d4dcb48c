//! Per-control bookkeeping owned by the registry

use serde::{Deserialize, Serialize};
use crate::window::WindowId;

/// Lifecycle flag and owner back-reference embedded in every control
///
/// The owner is a lookup key only; the window owns the control, never the
/// other way round. It is not persisted and is re-established by
/// [`Window::on_deserialized`](crate::Window::on_deserialized).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    #[serde(skip)]
    window: Option<WindowId>,
    initialized: bool,
}

impl ControlState {
    /// Fresh state: detached and uninitialized
    pub fn new() -> Self {
        Self::default()
    }

    /// The window this control is registered with
    #[inline]
    pub fn window(&self) -> Option<WindowId> {
        self.window
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub(crate) fn attach(&mut self, window: WindowId) {
        self.window = Some(window);
    }

    pub(crate) fn detach(&mut self) {
        self.window = None;
    }

    pub(crate) fn set_initialized(&mut self, initialized: bool) {
        self.initialized = initialized;
    }
}
