//! Window-level overrides

use crate::host::Surface;
use super::WindowContext;

/// Optional per-window behaviour layered on top of the control passes
pub trait WindowHooks {
    /// Drawn after controls and the toolbar, before notifications
    fn on_gui(&mut self, _cx: &mut WindowContext<'_>, _surface: &mut dyn Surface) {}

    /// Drawn inside the toolbar strip when the window has one
    fn on_toolbar_gui(&mut self, _cx: &mut WindowContext<'_>, _surface: &mut dyn Surface) {}

    fn on_focus(&mut self) {}

    fn on_lost_focus(&mut self) {}
}
