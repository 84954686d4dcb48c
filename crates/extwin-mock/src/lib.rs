//! Mock host for testing extwin windows
//!
//! Provides a scriptable [`MockHost`], a [`RecordingSurface`] that captures
//! every draw call, and a [`Probe`] control that logs each callback it
//! receives, so window behaviour can be asserted without an editor.

use std::cell::RefCell;
use std::rc::Rc;

use extwin::{
    Color, Control, ControlKind, ControlState, ControlType, EventKind, Host, HostEvent, Rect, Size,
    Style, Surface, Vec2, WindowContext,
};

/// Scriptable per-frame host state
#[derive(Clone, Debug)]
pub struct MockHost {
    content_size: Size,
    delta_time: f32,
    event: HostEvent,
    drag_paths: Vec<String>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHost {
    /// 800x600 content area, 0.1s frames, no input
    pub fn new() -> Self {
        Self {
            content_size: Size::new(800.0, 600.0),
            delta_time: 0.1,
            event: HostEvent::default(),
            drag_paths: Vec::new(),
        }
    }

    pub fn with_content_size(mut self, width: f32, height: f32) -> Self {
        self.content_size = Size::new(width, height);
        self
    }

    pub fn with_delta_time(mut self, delta_time: f32) -> Self {
        self.delta_time = delta_time;
        self
    }

    pub fn set_content_size(&mut self, width: f32, height: f32) {
        self.content_size = Size::new(width, height);
    }

    pub fn set_event(&mut self, event: HostEvent) {
        self.event = event;
    }

    /// Queue an event of `kind` at `(x, y)`
    pub fn set_event_at(&mut self, kind: EventKind, x: f32, y: f32) {
        self.event = HostEvent::at(kind, Vec2::new(x, y));
    }

    pub fn clear_event(&mut self) {
        self.event = HostEvent::default();
    }

    pub fn set_drag_paths(&mut self, paths: &[&str]) {
        self.drag_paths = paths.iter().map(|p| p.to_string()).collect();
    }
}

impl Host for MockHost {
    fn content_size(&self) -> Size {
        self.content_size
    }

    fn delta_time(&self) -> f32 {
        self.delta_time
    }

    fn current_event(&self) -> HostEvent {
        self.event
    }

    fn drag_paths(&self) -> &[String] {
        &self.drag_paths
    }
}

/// A draw call captured by [`RecordingSurface`]
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Box {
        rect: Rect,
        style: &'static str,
        color: Color,
        background_color: Color,
    },
    Label {
        rect: Rect,
        text: String,
        style: &'static str,
        color: Color,
    },
    BeginToolbar,
    EndToolbar,
}

/// Surface that records draw calls instead of painting
///
/// Text is measured as a fixed advance per character plus the style's
/// padding, which keeps layout assertions exact.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
    color: Color,
    background_color: Color,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub const CHAR_WIDTH: f32 = 8.0;
    pub const LINE_HEIGHT: f32 = 16.0;

    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            color: Color::WHITE,
            background_color: Color::WHITE,
        }
    }

    /// Labels drawn so far, in order
    pub fn labels(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Boxes drawn with `style`, in order
    pub fn boxes_with_style(&self, style: &str) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Box { rect, style: s, .. } if *s == style => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn draw_box(&mut self, rect: Rect, style: &Style) {
        self.ops.push(DrawOp::Box {
            rect,
            style: style.name,
            color: self.color,
            background_color: self.background_color,
        });
    }

    fn draw_label(&mut self, rect: Rect, text: &str, style: &Style) {
        self.ops.push(DrawOp::Label {
            rect,
            text: text.to_string(),
            style: style.name,
            color: self.color,
        });
    }

    fn measure_text(&self, text: &str, style: &Style) -> Size {
        let width = text.chars().count() as f32 * Self::CHAR_WIDTH;
        Size::new(width + style.padding * 2.0, Self::LINE_HEIGHT + style.padding * 2.0)
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn background_color(&self) -> Color {
        self.background_color
    }

    fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
    }

    fn begin_toolbar(&mut self) {
        self.ops.push(DrawOp::BeginToolbar);
    }

    fn end_toolbar(&mut self) {
        self.ops.push(DrawOp::EndToolbar);
    }
}

/// Shared, ordered record of callbacks
pub type CallLog = Rc<RefCell<Vec<String>>>;

/// Create an empty call log
pub fn call_log() -> CallLog {
    Rc::default()
}

/// Control that appends `"<name>:<callback>"` to a [`CallLog`] for every
/// callback it receives, and draws its name as a label
pub struct Probe {
    state: ControlState,
    name: String,
    log: CallLog,
}

impl Probe {
    pub fn new(name: impl Into<String>, log: &CallLog) -> Self {
        Self {
            state: ControlState::new(),
            name: name.into(),
            log: log.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn record(&self, callback: &str) {
        self.log.borrow_mut().push(format!("{}:{}", self.name, callback));
    }
}

impl Control for Probe {
    fn state(&self) -> &ControlState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ControlState {
        &mut self.state
    }

    fn initialize(&mut self) {
        self.record("initialize");
    }

    fn update(&mut self, _cx: &mut WindowContext<'_>, _has_focus: bool) {
        self.record("update");
    }

    fn draw(&mut self, _cx: &mut WindowContext<'_>, surface: &mut dyn Surface) {
        self.record("draw");
        surface.draw_label(Rect::default(), &self.name, &Style::named("Probe"));
    }

    fn on_destroy(&mut self) {
        self.record("destroy");
    }

    fn on_deserialized(&mut self) {
        self.record("deserialized");
    }

    fn on_context_click(&mut self, _cx: &mut WindowContext<'_>, _position: Vec2) {
        self.record("context_click");
    }

    fn on_drag_perform(&mut self, _cx: &mut WindowContext<'_>, paths: &[String], _position: Vec2) {
        self.record(&format!("drag_perform({})", paths.join(",")));
    }

    fn on_drag_update(&mut self, _cx: &mut WindowContext<'_>, _paths: &[String], _position: Vec2) {
        self.record("drag_update");
    }

    fn on_drag_exited(&mut self, _cx: &mut WindowContext<'_>) {
        self.record("drag_exited");
    }

    fn on_scroll_wheel(&mut self, _cx: &mut WindowContext<'_>, _delta: Vec2) {
        self.record("scroll_wheel");
    }
}

impl ControlType for Probe {
    const KIND: ControlKind = ControlKind::new("Probe");
}
