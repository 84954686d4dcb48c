//! Routed input fan-out
//!
//! Every routed event reaches every control in the frame snapshot, last
//! added first. Controls cannot consume an event to stop the fan-out.

use crate::input::RoutedEvent;
use crate::math::Vec2;
use super::{DispatchOrder, Window};

impl Window {
    /// Fan a routed event out to the matching hook
    pub fn dispatch_event(&mut self, event: RoutedEvent) {
        match event {
            RoutedEvent::ContextClick { position } => self.on_context_click(position),
            RoutedEvent::DragPerform { paths, position } => self.on_drag_perform(&paths, position),
            RoutedEvent::DragUpdate { paths, position } => self.on_drag_update(&paths, position),
            RoutedEvent::DragExited => self.on_drag_exited(),
            RoutedEvent::ScrollWheel { delta } => self.on_scroll_wheel(delta),
        }
    }

    pub fn on_context_click(&mut self, position: Vec2) {
        self.dispatch(DispatchOrder::Reverse, |control, cx| {
            control.on_context_click(cx, position)
        });
    }

    pub fn on_drag_perform(&mut self, paths: &[String], position: Vec2) {
        self.dispatch(DispatchOrder::Reverse, |control, cx| {
            control.on_drag_perform(cx, paths, position)
        });
    }

    pub fn on_drag_update(&mut self, paths: &[String], position: Vec2) {
        self.dispatch(DispatchOrder::Reverse, |control, cx| {
            control.on_drag_update(cx, paths, position)
        });
    }

    pub fn on_drag_exited(&mut self) {
        self.dispatch(DispatchOrder::Reverse, |control, cx| control.on_drag_exited(cx));
    }

    pub fn on_scroll_wheel(&mut self, delta: Vec2) {
        self.dispatch(DispatchOrder::Reverse, |control, cx| {
            control.on_scroll_wheel(cx, delta)
        });
    }
}
