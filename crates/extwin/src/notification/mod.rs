//! Transient notifications drawn over a window
//!
//! A notification fades in, holds for its duration, fades out and is then
//! dropped. Its phase is never stored; it is read off the remaining
//! duration and the current alpha.

#[allow(clippy::module_inception)]
mod notification;
mod stack;

pub use notification::{Notification, NotificationPhase};
pub use stack::NotificationStack;

use crate::host::Style;

/// Alpha units gained or lost per second while fading
pub const FADE_RATE: f32 = 5.0;

/// Hold time in seconds for notifications shown without an explicit duration
pub const DEFAULT_DURATION: f32 = 1.25;

/// Distance in points from the right and bottom window edges
pub const NOTIFICATION_MARGIN: f32 = 20.0;

/// Vertical gap in points between stacked notifications
pub const NOTIFICATION_GAP: f32 = 5.0;

/// Skin entry painted behind notification text
pub const NOTIFICATION_BACKGROUND_STYLE: Style = Style::named("NotificationBackground");

/// Skin entry used for notification text
pub const NOTIFICATION_TEXT_STYLE: Style = Style {
    name: "NotificationText",
    padding: 20.0,
    font_size: 17,
};
