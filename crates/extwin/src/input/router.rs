//! Event router state machine

use tracing::trace;
use crate::math::Rect;
use super::{EventKind, HostEvent, RoutedEvent};

/// Routes the host's current event against a window rectangle
///
/// Context clicks and drag perform/update only pass when the cursor is
/// inside the window. Drag exit and scroll always pass.
pub struct EventRouter {
    /// A drag payload is hovering the window
    drag_hover: bool,
}

impl Default for EventRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl EventRouter {
    /// Create a new event router
    pub fn new() -> Self {
        Self { drag_hover: false }
    }

    /// Check if a routed drag update is in progress over the window
    #[inline]
    pub fn is_drag_hovering(&self) -> bool {
        self.drag_hover
    }

    /// Classify `event` against `rect`, returning what to dispatch
    pub fn route(&mut self, event: &HostEvent, rect: Rect, drag_paths: &[String]) -> Option<RoutedEvent> {
        let position = event.mouse_position;

        if event.kind.is_geometry_gated() && !rect.contains(position) {
            if event.kind == EventKind::DragUpdated {
                self.drag_hover = false;
            }
            return None;
        }

        let routed = match event.kind {
            EventKind::ContextClick => RoutedEvent::ContextClick { position },
            EventKind::DragPerform => {
                self.drag_hover = false;
                RoutedEvent::DragPerform {
                    paths: drag_paths.to_vec(),
                    position,
                }
            }
            EventKind::DragUpdated => {
                self.drag_hover = true;
                RoutedEvent::DragUpdate {
                    paths: drag_paths.to_vec(),
                    position,
                }
            }
            EventKind::DragExited => {
                self.drag_hover = false;
                RoutedEvent::DragExited
            }
            EventKind::ScrollWheel => RoutedEvent::ScrollWheel { delta: event.delta },
            EventKind::Other => return None,
        };

        trace!(event = ?routed, "routed host event");
        Some(routed)
    }

    /// Forget any drag in progress
    pub fn reset(&mut self) {
        self.drag_hover = false;
    }
}
