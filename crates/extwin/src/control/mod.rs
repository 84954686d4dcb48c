//! Controls and the registry that owns them
//!
//! A control is a self-contained UI element living inside exactly one
//! window. The window drives it through the [`Control`] capability set;
//! every callback is optional except access to its [`ControlState`].

mod kind;
mod state;
mod handle;
mod registry;

pub use kind::{ControlKind, ControlType};
pub use state::ControlState;
pub use handle::ControlHandle;
pub use registry::ControlRegistry;

use serde_json::Value;
use crate::error::Result;
use crate::host::Surface;
use crate::math::Vec2;
use crate::window::WindowContext;

/// Capability set a window drives on each of its controls
///
/// Event callbacks receive a [`WindowContext`] so a control can add or
/// remove controls, query siblings, or show a notification while a pass
/// is running.
pub trait Control {
    fn state(&self) -> &ControlState;

    fn state_mut(&mut self) -> &mut ControlState;

    /// Called once when the control is first added to a window
    fn initialize(&mut self) {}

    /// Per-frame logic
    fn update(&mut self, _cx: &mut WindowContext<'_>, _has_focus: bool) {}

    /// Per-frame drawing
    fn draw(&mut self, _cx: &mut WindowContext<'_>, _surface: &mut dyn Surface) {}

    /// Called when the control is removed from an initialized state
    fn on_destroy(&mut self) {}

    /// Called after the owning window has been restored from a snapshot
    fn on_deserialized(&mut self) {}

    fn on_context_click(&mut self, _cx: &mut WindowContext<'_>, _position: Vec2) {}

    fn on_drag_perform(&mut self, _cx: &mut WindowContext<'_>, _paths: &[String], _position: Vec2) {}

    fn on_drag_update(&mut self, _cx: &mut WindowContext<'_>, _paths: &[String], _position: Vec2) {}

    fn on_drag_exited(&mut self, _cx: &mut WindowContext<'_>) {}

    fn on_scroll_wheel(&mut self, _cx: &mut WindowContext<'_>, _delta: Vec2) {}

    /// Control-specific state written into window snapshots
    fn save_state(&self) -> Result<Value> {
        Ok(Value::Null)
    }
}
