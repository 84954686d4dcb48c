//! Window settings

use serde::{Deserialize, Serialize};
use crate::error::Result;

/// Settings a window is created with
///
/// Every field has a default so partial documents deserialize.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Window title shown by the host
    pub title: String,
    /// Track the host's content area size every frame
    pub fullscreen: bool,
    /// Draw the toolbar strip after controls
    pub draw_toolbar: bool,
}

impl WindowSettings {
    /// Settings with the given title and everything else default
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
