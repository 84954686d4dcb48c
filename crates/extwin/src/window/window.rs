//! Window struct and lifecycle

use tracing::{debug, warn};

use crate::control::{ControlHandle, ControlRegistry};
use crate::host::Host;
use crate::input::EventRouter;
use crate::math::{Rect, Size, Vec2};
use crate::notification::NotificationStack;
use super::{next_window_id, WindowHooks, WindowId, WindowSettings};

/// A host-embedded window composed of controls
///
/// The host drives it with [`Window::update`] once per frame and
/// [`Window::draw`] for each GUI pass. Controls are dispatched in insertion
/// order for update and draw, and in reverse insertion order for input.
pub struct Window {
    pub(crate) id: WindowId,
    pub(crate) settings: WindowSettings,
    /// Window bounds, in the same space as host cursor positions
    pub(crate) rect: Rect,
    pub(crate) initialized: bool,
    /// Content size seen on the previous fullscreen update
    pub(crate) previous_content_size: Size,
    pub(crate) registry: ControlRegistry,
    /// Controls captured at the start of the last update
    pub(crate) snapshot: Vec<ControlHandle>,
    pub(crate) router: EventRouter,
    pub(crate) notifications: NotificationStack,
    pub(crate) hooks: Option<Box<dyn WindowHooks>>,
}

impl Default for Window {
    fn default() -> Self {
        Self::new(WindowSettings::default())
    }
}

impl Window {
    /// Create an uninitialized window
    pub fn new(settings: WindowSettings) -> Self {
        let id = next_window_id();
        Self {
            id,
            settings,
            rect: Rect::default(),
            initialized: false,
            previous_content_size: Size::ZERO,
            registry: ControlRegistry::new(id),
            snapshot: Vec::new(),
            router: EventRouter::new(),
            notifications: NotificationStack::new(),
            hooks: None,
        }
    }

    /// Install window-level overrides
    pub fn with_hooks(mut self, hooks: impl WindowHooks + 'static) -> Self {
        self.hooks = Some(Box::new(hooks));
        self
    }

    pub fn set_hooks(&mut self, hooks: Option<Box<dyn WindowHooks>>) {
        self.hooks = hooks;
    }

    /// Size the window to the host's content area and mark it initialized
    pub fn initialize(&mut self, host: &dyn Host) {
        let size = host.content_size();
        self.rect = Rect::from_position_size(Vec2::ZERO, size);
        self.initialized = true;
        debug!(window = self.id, width = size.width, height = size.height, "window initialized");
    }

    /// Mark the window uninitialized
    ///
    /// Registered controls are left untouched; remove them first if their
    /// destroy callbacks should run.
    pub fn destroy(&mut self) {
        self.initialized = false;
        self.router.reset();
        debug!(window = self.id, "window destroyed");
    }

    pub fn on_focus(&mut self) {
        if let Some(hooks) = self.hooks.as_mut() {
            hooks.on_focus();
        }
    }

    pub fn on_lost_focus(&mut self) {
        if let Some(hooks) = self.hooks.as_mut() {
            hooks.on_lost_focus();
        }
    }

    /// Re-link every control to this window after a restore
    ///
    /// Sets each control's back-reference and delivers its
    /// `on_deserialized` callback, in insertion order.
    pub fn on_deserialized(&mut self) {
        for handle in self.registry.iter() {
            match handle.try_borrow_mut() {
                Ok(mut control) => {
                    control.state_mut().attach(self.id);
                    control.on_deserialized();
                }
                Err(_) => warn!(kind = %handle.kind(), "control busy during relink"),
            }
        }
    }

    #[inline]
    pub fn id(&self) -> WindowId {
        self.id
    }

    #[inline]
    pub fn settings(&self) -> &WindowSettings {
        &self.settings
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Move or resize the window
    ///
    /// For fullscreen windows the size is overwritten again on the next
    /// update where the host's content size changes.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.rect.position()
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.rect.size()
    }

    /// Registered controls
    #[inline]
    pub fn registry(&self) -> &ControlRegistry {
        &self.registry
    }

    /// Controls captured by the last update
    #[inline]
    pub fn frame_controls(&self) -> &[ControlHandle] {
        &self.snapshot
    }

    #[inline]
    pub fn notifications(&self) -> &NotificationStack {
        &self.notifications
    }

    /// Check if a drag payload is hovering this window
    #[inline]
    pub fn is_drag_hovering(&self) -> bool {
        self.router.is_drag_hovering()
    }
}
