//! Per-frame update and draw passes

use tracing::{debug, trace_span, warn};

use crate::control::Control;
use crate::host::{Host, Surface};
use crate::math::Size;
use super::{Window, WindowContext};

/// Order in which a pass visits the frame's controls
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchOrder {
    /// Insertion order, used for update and draw
    Forward,
    /// Last added first, used for input so overlays see events first
    Reverse,
}

impl Window {
    /// Advance one frame
    ///
    /// Captures the control snapshot used by this frame's update and draw
    /// passes, tracks the host size for fullscreen windows, updates every
    /// control and steps notification fades.
    pub fn update(&mut self, host: &dyn Host, has_focus: bool) {
        self.snapshot = self.registry.as_slice().to_vec();

        if self.settings.fullscreen {
            self.track_content_size(host.content_size());
        }

        self.dispatch(DispatchOrder::Forward, |control, cx| control.update(cx, has_focus));

        self.notifications.advance(host.delta_time());
    }

    fn track_content_size(&mut self, current: Size) {
        if current != self.previous_content_size {
            debug!(
                window = self.id,
                width = current.width,
                height = current.height,
                "content area resized"
            );
            self.rect.set_size(current);
        }
        self.previous_content_size = current;
    }

    /// Run one GUI pass
    ///
    /// Routes the host's current event to the controls, draws the controls,
    /// the toolbar and the window hook, then composites notifications on
    /// top of everything.
    pub fn draw(&mut self, frame_id: u64, host: &dyn Host, surface: &mut dyn Surface) {
        let _span = trace_span!("window_draw", window = self.id, frame_id).entered();

        let event = host.current_event();
        if let Some(routed) = self.router.route(&event, self.rect, host.drag_paths()) {
            self.dispatch_event(routed);
        }

        self.dispatch(DispatchOrder::Forward, |control, cx| control.draw(cx, &mut *surface));

        if self.settings.draw_toolbar {
            surface.begin_toolbar();
            if let Some(hooks) = self.hooks.as_mut() {
                let mut cx = WindowContext::new(self.id, self.rect, &mut self.registry, &mut self.notifications);
                hooks.on_toolbar_gui(&mut cx, surface);
            }
            surface.end_toolbar();
        }

        if let Some(hooks) = self.hooks.as_mut() {
            let mut cx = WindowContext::new(self.id, self.rect, &mut self.registry, &mut self.notifications);
            hooks.on_gui(&mut cx, surface);
        }
        self.registry.flush_deferred();

        self.notifications.draw(surface, self.rect.size());
    }

    /// Call `f` on every control in the frame snapshot
    ///
    /// Controls added or removed by `f` do not change which controls this
    /// call visits. A control that is already borrowed (re-entrant dispatch)
    /// is skipped.
    pub(crate) fn dispatch<F>(&mut self, order: DispatchOrder, mut f: F)
    where
        F: FnMut(&mut dyn Control, &mut WindowContext<'_>),
    {
        let mut handles = self.snapshot.clone();
        if order == DispatchOrder::Reverse {
            handles.reverse();
        }

        for handle in &handles {
            match handle.try_borrow_mut() {
                Ok(mut control) => {
                    let mut cx = WindowContext::new(self.id, self.rect, &mut self.registry, &mut self.notifications);
                    f(&mut *control, &mut cx);
                }
                Err(_) => {
                    warn!(kind = %handle.kind(), "control busy, skipped");
                    continue;
                }
            }
            self.registry.flush_deferred();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{ControlHandle, ControlKind, ControlState, ControlType};
    use crate::input::HostEvent;
    use crate::math::Vec2;
    use crate::window::WindowSettings;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct StaticHost {
        size: Size,
    }

    impl Host for StaticHost {
        fn content_size(&self) -> Size {
            self.size
        }
        fn delta_time(&self) -> f32 {
            0.1
        }
        fn current_event(&self) -> HostEvent {
            HostEvent::default()
        }
        fn drag_paths(&self) -> &[String] {
            &[]
        }
    }

    type Log = Rc<RefCell<Vec<&'static str>>>;

    struct Named {
        state: ControlState,
        name: &'static str,
        log: Log,
    }

    impl Control for Named {
        fn state(&self) -> &ControlState {
            &self.state
        }
        fn state_mut(&mut self) -> &mut ControlState {
            &mut self.state
        }
        fn update(&mut self, _cx: &mut WindowContext<'_>, _has_focus: bool) {
            self.log.borrow_mut().push(self.name);
        }
        fn on_scroll_wheel(&mut self, _cx: &mut WindowContext<'_>, _delta: Vec2) {
            self.log.borrow_mut().push(self.name);
        }
    }

    impl ControlType for Named {
        const KIND: ControlKind = ControlKind::new("Named");
    }

    fn named(name: &'static str, log: &Log) -> ControlHandle {
        ControlHandle::new(Named {
            state: ControlState::new(),
            name,
            log: log.clone(),
        })
    }

    #[test]
    fn test_update_forward_and_events_reverse() {
        let log: Log = Rc::default();
        let mut window = Window::new(WindowSettings::default());
        for name in ["a", "b", "c"] {
            window.add_control(named(name, &log)).unwrap();
        }
        let host = StaticHost { size: Size::new(100.0, 100.0) };

        window.update(&host, true);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);

        log.borrow_mut().clear();
        window.on_scroll_wheel(Vec2::new(0.0, 1.0));
        assert_eq!(*log.borrow(), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_fullscreen_tracks_content_size() {
        let mut window = Window::new(WindowSettings {
            fullscreen: true,
            ..Default::default()
        });
        let mut host = StaticHost { size: Size::new(640.0, 480.0) };
        window.initialize(&host);
        window.update(&host, true);
        assert_eq!(window.size(), Size::new(640.0, 480.0));

        host.size = Size::new(1024.0, 768.0);
        window.update(&host, true);
        assert_eq!(window.size(), Size::new(1024.0, 768.0));
    }

    #[test]
    fn test_fullscreen_leaves_manual_size_when_unchanged() {
        let mut window = Window::new(WindowSettings {
            fullscreen: true,
            ..Default::default()
        });
        let host = StaticHost { size: Size::new(640.0, 480.0) };
        window.update(&host, true);

        window.set_rect(crate::math::Rect::new(0.0, 0.0, 10.0, 10.0));
        window.update(&host, true);
        assert_eq!(window.size(), Size::new(10.0, 10.0));
    }

    #[test]
    fn test_non_fullscreen_ignores_content_size() {
        let mut window = Window::new(WindowSettings::default());
        window.set_rect(crate::math::Rect::new(0.0, 0.0, 300.0, 200.0));
        let host = StaticHost { size: Size::new(640.0, 480.0) };
        window.update(&host, true);
        assert_eq!(window.size(), Size::new(300.0, 200.0));
    }
}
