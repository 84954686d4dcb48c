//! Control registry and notification passthroughs

use crate::control::{ControlHandle, ControlKind, ControlType};
use crate::error::Result;
use crate::math::Color;
use super::Window;

impl Window {
    /// Register a control; a control already present is left as is
    pub fn add_control(&mut self, handle: ControlHandle) -> Result<()> {
        self.registry.add(handle)
    }

    /// Unregister a control, running its destroy callback
    pub fn remove_control(&mut self, handle: &ControlHandle) -> Result<()> {
        self.registry.remove(handle)
    }

    /// Controls whose exact kind is `T`
    pub fn controls<T: ControlType>(&self) -> &[ControlHandle] {
        self.registry.controls::<T>()
    }

    /// Controls whose exact kind is `kind`
    pub fn controls_of_kind(&self, kind: ControlKind) -> &[ControlHandle] {
        self.registry.controls_of_kind(kind)
    }

    /// Controls specializing `T` (ancestor match, linear scan)
    pub fn controls_polymorphic_of<T: ControlType>(&self) -> Vec<ControlHandle> {
        self.registry.controls_polymorphic_of::<T>()
    }

    /// Controls specializing `kind` (ancestor match, linear scan)
    pub fn controls_polymorphic(&self, kind: ControlKind) -> Vec<ControlHandle> {
        self.registry.controls_polymorphic(kind)
    }

    /// Show `text` in white for the default duration; empty text is ignored
    pub fn show_notification<'a>(&mut self, text: impl Into<Option<&'a str>>) -> bool {
        self.notifications.show(text)
    }

    /// Show `text` tinted `color` for `duration` seconds; empty text is ignored
    pub fn show_notification_with<'a>(
        &mut self,
        text: impl Into<Option<&'a str>>,
        color: Color,
        duration: f32,
    ) -> bool {
        self.notifications.show_with(text, color, duration)
    }
}
