//! Mutable view of a window handed to control callbacks

use crate::control::{ControlHandle, ControlKind, ControlRegistry, ControlType};
use crate::error::Result;
use crate::math::{Color, Rect, Size, Vec2};
use crate::notification::NotificationStack;
use super::WindowId;

/// What a control may touch on its window while a pass is running
///
/// Structural changes made here take effect in the registry immediately;
/// the pass in progress keeps iterating the snapshot it started with.
pub struct WindowContext<'a> {
    window_id: WindowId,
    rect: Rect,
    registry: &'a mut ControlRegistry,
    notifications: &'a mut NotificationStack,
}

impl<'a> WindowContext<'a> {
    pub(crate) fn new(
        window_id: WindowId,
        rect: Rect,
        registry: &'a mut ControlRegistry,
        notifications: &'a mut NotificationStack,
    ) -> Self {
        Self {
            window_id,
            rect,
            registry,
            notifications,
        }
    }

    #[inline]
    pub fn window_id(&self) -> WindowId {
        self.window_id
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.rect.position()
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.rect.size()
    }

    pub fn add_control(&mut self, handle: ControlHandle) -> Result<()> {
        self.registry.add(handle)
    }

    pub fn remove_control(&mut self, handle: &ControlHandle) -> Result<()> {
        self.registry.remove(handle)
    }

    pub fn controls<T: ControlType>(&self) -> &[ControlHandle] {
        self.registry.controls::<T>()
    }

    pub fn controls_of_kind(&self, kind: ControlKind) -> &[ControlHandle] {
        self.registry.controls_of_kind(kind)
    }

    pub fn controls_polymorphic_of<T: ControlType>(&self) -> Vec<ControlHandle> {
        self.registry.controls_polymorphic_of::<T>()
    }

    pub fn controls_polymorphic(&self, kind: ControlKind) -> Vec<ControlHandle> {
        self.registry.controls_polymorphic(kind)
    }

    pub fn show_notification<'t>(&mut self, text: impl Into<Option<&'t str>>) -> bool {
        self.notifications.show(text)
    }

    pub fn show_notification_with<'t>(
        &mut self,
        text: impl Into<Option<&'t str>>,
        color: Color,
        duration: f32,
    ) -> bool {
        self.notifications.show_with(text, color, duration)
    }
}
