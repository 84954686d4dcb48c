//! Axis-aligned rectangle used for window bounds and hit tests

use serde::{Deserialize, Serialize};
use super::{Size, Vec2};

/// Rectangle with a top-left origin
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle anchored at `position` with `size`
    #[inline]
    pub fn from_position_size(position: Vec2, size: Size) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Replace the size, keeping the origin
    #[inline]
    pub fn set_size(&mut self, size: Size) {
        self.width = size.width;
        self.height = size.height;
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Half-open containment: the right and bottom edges are outside
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(Vec2::new(10.0, 20.0)));
        assert!(r.contains(Vec2::new(109.9, 69.9)));
        assert!(!r.contains(Vec2::new(110.0, 30.0)));
        assert!(!r.contains(Vec2::new(50.0, 70.0)));
        assert!(!r.contains(Vec2::new(9.0, 30.0)));
    }

    #[test]
    fn test_rect_set_size_keeps_origin() {
        let mut r = Rect::new(5.0, 6.0, 1.0, 1.0);
        r.set_size(Size::new(800.0, 600.0));
        assert_eq!(r.position(), Vec2::new(5.0, 6.0));
        assert_eq!(r.size(), Size::new(800.0, 600.0));
    }
}
