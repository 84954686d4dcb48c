//! Input routing module
//!
//! Classifies the host's current event and decides whether it reaches the
//! window's controls.

mod event;
mod routed;
mod router;

pub use event::{EventKind, HostEvent};
pub use routed::RoutedEvent;
pub use router::EventRouter;
