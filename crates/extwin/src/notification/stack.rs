//! The set of notifications active on one window

use tracing::{debug, trace};
use crate::host::Surface;
use crate::math::{Color, Rect, Size};
use super::{
    Notification, DEFAULT_DURATION, NOTIFICATION_BACKGROUND_STYLE, NOTIFICATION_GAP,
    NOTIFICATION_MARGIN, NOTIFICATION_TEXT_STYLE,
};

/// Active notifications in the order they were shown
#[derive(Clone, Debug, Default)]
pub struct NotificationStack {
    items: Vec<Notification>,
}

impl NotificationStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    /// Show `text` in white for [`DEFAULT_DURATION`] seconds
    ///
    /// Empty or missing text is ignored. Returns whether a notification was
    /// added.
    pub fn show<'a>(&mut self, text: impl Into<Option<&'a str>>) -> bool {
        self.show_with(text, Color::WHITE, DEFAULT_DURATION)
    }

    /// Show `text` tinted `color`, holding for `duration` seconds
    pub fn show_with<'a>(&mut self, text: impl Into<Option<&'a str>>, color: Color, duration: f32) -> bool {
        let text = match text.into() {
            Some(text) if !text.is_empty() => text,
            _ => {
                trace!("ignoring empty notification");
                return false;
            }
        };

        debug!(text, duration, "showing notification");
        self.items.push(Notification::new(text, color, duration));
        true
    }

    /// Advance every notification by `dt` seconds, dropping expired ones
    pub fn advance(&mut self, dt: f32) {
        for i in (0..self.items.len()).rev() {
            if !self.items[i].advance(dt) {
                let expired = self.items.remove(i);
                trace!(text = expired.text(), "notification expired");
            }
        }
    }

    /// Where each notification is drawn inside a window of size `area`
    ///
    /// The most recent notification sits in the bottom-right corner and
    /// older ones stack upward. Rects are returned newest first.
    pub fn layout(&self, surface: &dyn Surface, area: Size) -> Vec<(Rect, &Notification)> {
        let mut bottom = area.height - NOTIFICATION_MARGIN;
        self.items
            .iter()
            .rev()
            .map(|item| {
                let size = surface.measure_text(item.text(), &NOTIFICATION_TEXT_STYLE);
                let rect = Rect::new(
                    area.width - size.width - NOTIFICATION_MARGIN,
                    bottom - size.height,
                    size.width,
                    size.height,
                );
                bottom = rect.y - NOTIFICATION_GAP;
                (rect, item)
            })
            .collect()
    }

    /// Composite every notification on top of whatever was drawn so far
    ///
    /// The surface's tint colors are restored before returning.
    pub fn draw(&self, surface: &mut dyn Surface, area: Size) {
        if self.items.is_empty() {
            return;
        }

        let placed = self.layout(&*surface, area);

        let color = surface.color();
        let background_color = surface.background_color();
        for (rect, item) in placed {
            let tint = item.draw_color();
            surface.set_background_color(tint);
            surface.set_color(tint);
            surface.draw_box(rect, &NOTIFICATION_BACKGROUND_STYLE);
            surface.draw_label(rect, item.text(), &NOTIFICATION_TEXT_STYLE);
        }
        surface.set_background_color(background_color);
        surface.set_color(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Style;

    /// Surface that measures every label as 100x40 and records boxes
    struct FixedSurface {
        color: Color,
        background_color: Color,
        boxes: Vec<(Rect, Color)>,
    }

    impl FixedSurface {
        fn new() -> Self {
            Self {
                color: Color::BLACK,
                background_color: Color::rgba(0.5, 0.5, 0.5, 1.0),
                boxes: Vec::new(),
            }
        }
    }

    impl Surface for FixedSurface {
        fn draw_box(&mut self, rect: Rect, _style: &Style) {
            self.boxes.push((rect, self.background_color));
        }
        fn draw_label(&mut self, _rect: Rect, _text: &str, _style: &Style) {}
        fn measure_text(&self, _text: &str, _style: &Style) -> Size {
            Size::new(100.0, 40.0)
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
    }

    #[test]
    fn test_show_rejects_empty_and_none() {
        let mut stack = NotificationStack::new();
        assert!(!stack.show(""));
        assert!(!stack.show(None::<&str>));
        assert!(stack.is_empty());

        assert!(stack.show("Saved"));
        assert_eq!(stack.len(), 1);
        let n = stack.iter().next().unwrap();
        assert_eq!(n.text(), "Saved");
        assert_eq!(n.alpha(), 0.0);
        assert!((n.duration() - DEFAULT_DURATION).abs() < 0.001);
    }

    #[test]
    fn test_advance_removes_expired_without_skipping() {
        let mut stack = NotificationStack::new();
        stack.show_with("a", Color::WHITE, 0.0);
        stack.show_with("b", Color::WHITE, 10.0);
        stack.show_with("c", Color::WHITE, 0.0);

        // Zero-duration notifications with zero alpha expire on first advance
        stack.advance(0.1);
        let texts: Vec<&str> = stack.iter().map(|n| n.text()).collect();
        assert_eq!(texts, vec!["b"]);
    }

    #[test]
    fn test_layout_stacks_newest_at_bottom() {
        let mut stack = NotificationStack::new();
        stack.show("first");
        stack.show("second");
        let surface = FixedSurface::new();

        let placed = stack.layout(&surface, Size::new(800.0, 600.0));
        assert_eq!(placed.len(), 2);

        let (newest, item) = placed[0];
        assert_eq!(item.text(), "second");
        assert!((newest.x - 680.0).abs() < 0.001);
        assert!((newest.y - 540.0).abs() < 0.001);

        let (older, item) = placed[1];
        assert_eq!(item.text(), "first");
        assert!((older.x - 680.0).abs() < 0.001);
        assert!((older.y - 495.0).abs() < 0.001);
    }

    #[test]
    fn test_draw_restores_tints() {
        let mut stack = NotificationStack::new();
        stack.show_with("hi", Color::rgba(1.0, 0.0, 0.0, 1.0), 1.0);
        stack.advance(0.1);
        let mut surface = FixedSurface::new();

        stack.draw(&mut surface, Size::new(400.0, 300.0));

        assert_eq!(surface.boxes.len(), 1);
        let (_, tint) = surface.boxes[0];
        assert!((tint.r - 1.0).abs() < 0.001);
        assert!((tint.a - 0.5).abs() < 0.001);
        assert_eq!(surface.color, Color::BLACK);
        assert_eq!(surface.background_color, Color::rgba(0.5, 0.5, 0.5, 1.0));
    }
}
