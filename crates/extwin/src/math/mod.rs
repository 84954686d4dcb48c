//! Geometry and color primitives shared by windows, controls and the host.

mod vec2;
mod size;
mod rect;
mod color;

pub use vec2::Vec2;
pub use size::Size;
pub use rect::Rect;
pub use color::Color;
