//! Control composition for host-embedded editor windows
//!
//! A [`Window`] owns an ordered set of [`Control`]s and drives them from
//! the host's frame loop:
//!
//! - `update` snapshots the controls, tracks the host size for fullscreen
//!   windows, updates every control and advances notification fades
//! - `draw` routes the host's current input event to the controls (last
//!   added first), draws them, then draws notifications on top
//!
//! Everything host-specific (content size, timing, input, drawing) is
//! reached through the [`Host`] and [`Surface`] traits.

pub mod control;
pub mod error;
pub mod host;
pub mod input;
pub mod math;
pub mod notification;
pub mod persistence;
pub mod window;

pub use control::{Control, ControlHandle, ControlKind, ControlRegistry, ControlState, ControlType};
pub use error::{Result, WindowError};
pub use host::{Host, Style, Surface};
pub use input::{EventKind, EventRouter, HostEvent, RoutedEvent};
pub use math::{Color, Rect, Size, Vec2};
pub use notification::{
    Notification, NotificationPhase, NotificationStack, DEFAULT_DURATION, FADE_RATE,
    NOTIFICATION_GAP, NOTIFICATION_MARGIN,
};
pub use persistence::{ControlFactory, PersistedControl, WindowSnapshot};
pub use window::{Window, WindowContext, WindowHooks, WindowId, WindowSettings};
