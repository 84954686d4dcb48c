//! Host input event as seen by a window

use serde::{Deserialize, Serialize};
use crate::math::Vec2;

/// Classification of the host's current event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Secondary click requesting a context menu
    ContextClick,
    /// Drag payload dropped
    DragPerform,
    /// Drag payload moved while held
    DragUpdated,
    /// Drag left the window or was cancelled
    DragExited,
    /// Scroll wheel or trackpad scroll
    ScrollWheel,
    /// Anything the window does not route (layout, repaint, keys, ...)
    #[default]
    Other,
}

impl EventKind {
    /// Whether the event only reaches controls when the cursor is inside
    /// the window rectangle
    #[inline]
    pub fn is_geometry_gated(&self) -> bool {
        matches!(
            self,
            EventKind::ContextClick | EventKind::DragPerform | EventKind::DragUpdated
        )
    }
}

/// The event the host is processing this frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HostEvent {
    pub kind: EventKind,
    /// Cursor position in window-space points
    pub mouse_position: Vec2,
    /// Scroll delta, zero for non-scroll events
    pub delta: Vec2,
}

impl HostEvent {
    /// Event of `kind` at `mouse_position`
    pub fn at(kind: EventKind, mouse_position: Vec2) -> Self {
        Self {
            kind,
            mouse_position,
            delta: Vec2::ZERO,
        }
    }

    /// Scroll event with `delta` at `mouse_position`
    pub fn scroll(mouse_position: Vec2, delta: Vec2) -> Self {
        Self {
            kind: EventKind::ScrollWheel,
            mouse_position,
            delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_gating_classification() {
        assert!(EventKind::ContextClick.is_geometry_gated());
        assert!(EventKind::DragPerform.is_geometry_gated());
        assert!(EventKind::DragUpdated.is_geometry_gated());
        assert!(!EventKind::DragExited.is_geometry_gated());
        assert!(!EventKind::ScrollWheel.is_geometry_gated());
        assert!(!EventKind::Other.is_geometry_gated());
    }

    #[test]
    fn test_event_kind_serialization() {
        let json = serde_json::to_string(&EventKind::DragUpdated).unwrap();
        assert_eq!(json, "\"drag_updated\"");
    }
}
