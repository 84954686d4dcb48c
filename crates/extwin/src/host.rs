//! Host collaborator interfaces
//!
//! The window never talks to a windowing system directly. Everything it
//! needs per frame (content size, timing, the current input event, the
//! drag payload) comes from a [`Host`], and everything it paints goes
//! through a [`Surface`].

use crate::input::HostEvent;
use crate::math::{Color, Rect, Size};

/// Per-frame state supplied by the editor hosting the window
pub trait Host {
    /// Size of the host's content area in points
    fn content_size(&self) -> Size;

    /// Seconds elapsed since the previous frame
    fn delta_time(&self) -> f32;

    /// The input event being processed this frame
    fn current_event(&self) -> HostEvent;

    /// Paths carried by the current drag-and-drop payload
    fn drag_paths(&self) -> &[String];
}

/// A named visual style understood by the host's skin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    /// Skin entry to draw with
    pub name: &'static str,
    /// Inner padding applied on every side
    pub padding: f32,
    /// Font size override, `0` keeps the skin default
    pub font_size: u32,
}

impl Style {
    /// A style that uses the skin entry unmodified
    pub const fn named(name: &'static str) -> Self {
        Self {
            name,
            padding: 0.0,
            font_size: 0,
        }
    }
}

/// Immediate-mode drawing primitives
///
/// The two ambient tint colors are global to the host's GUI pass; anything
/// that changes them must restore the previous values before returning.
pub trait Surface {
    /// Fill `rect` with the background of `style`
    fn draw_box(&mut self, rect: Rect, style: &Style);

    /// Draw `text` inside `rect` using `style`
    fn draw_label(&mut self, rect: Rect, text: &str, style: &Style);

    /// Size `text` would occupy when drawn with `style`, padding included
    fn measure_text(&self, text: &str, style: &Style) -> Size;

    /// Current foreground tint
    fn color(&self) -> Color;

    fn set_color(&mut self, color: Color);

    /// Current background tint
    fn background_color(&self) -> Color;

    fn set_background_color(&mut self, color: Color);

    /// Open the toolbar strip at the top of the window
    fn begin_toolbar(&mut self) {}

    /// Close the toolbar strip opened by [`Surface::begin_toolbar`]
    fn end_toolbar(&mut self) {}
}
