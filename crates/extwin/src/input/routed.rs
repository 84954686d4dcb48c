//! Events that passed routing and are dispatched to controls

use serde::Serialize;
use crate::math::Vec2;

/// An event the window will fan out to its controls
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoutedEvent {
    ContextClick {
        position: Vec2,
    },
    DragPerform {
        paths: Vec<String>,
        position: Vec2,
    },
    DragUpdate {
        paths: Vec<String>,
        position: Vec2,
    },
    DragExited,
    ScrollWheel {
        delta: Vec2,
    },
}
