//! Error types for window and control registry operations

use thiserror::Error;

use crate::control::ControlKind;

/// Errors surfaced by [`Window`](crate::Window) operations
#[derive(Debug, Error)]
pub enum WindowError {
    /// A control was removed from a window it was never added to.
    ///
    /// This indicates the caller's bookkeeping is out of sync with the
    /// registry, so it is reported instead of ignored.
    #[error("control of kind `{kind}` is not registered with this window")]
    ControlNotFound { kind: ControlKind },

    /// A control needed a lifecycle callback while it was already borrowed
    /// by an in-flight dispatch.
    #[error("control of kind `{kind}` is busy in another callback")]
    ControlBusy { kind: ControlKind },

    /// A persisted control names a kind the factory cannot build
    #[error("no factory registered for control kind `{0}`")]
    UnknownControlKind(String),

    /// Snapshot encoding or decoding failed
    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, WindowError>;
