//! Snapshot serialization for window state

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use crate::error::Result;
use crate::math::Rect;
use crate::window::WindowSettings;

/// One control as written to a snapshot
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedControl {
    /// Exact kind name, used to find the factory entry on restore
    pub kind: String,
    /// Whether the control had been initialized when saved
    #[serde(default)]
    pub initialized: bool,
    /// Control-specific state
    #[serde(default)]
    pub state: Value,
}

/// Snapshot of a window for persistence
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowSnapshot {
    /// Version for migration support
    pub version: u32,
    pub settings: WindowSettings,
    pub rect: Rect,
    #[serde(default)]
    pub initialized: bool,
    /// Controls in insertion order
    #[serde(default)]
    pub controls: Vec<PersistedControl>,
}

impl WindowSnapshot {
    /// Current snapshot version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a new snapshot
    pub fn new(settings: WindowSettings, rect: Rect, initialized: bool, controls: Vec<PersistedControl>) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            settings,
            rect,
            initialized,
            controls,
        }
    }

    /// Check if snapshot needs migration
    pub fn needs_migration(&self) -> bool {
        self.version < Self::CURRENT_VERSION
    }

    /// Migrate snapshot to current version
    ///
    /// Version 0 carried no lifecycle flags. Windows were only saved after
    /// initialization and controls only after being added, so both are
    /// marked initialized.
    pub fn migrate(&mut self) {
        if self.version < 1 {
            debug!(controls = self.controls.len(), "migrating snapshot from version 0");
            self.initialized = true;
            for control in &mut self.controls {
                control.initialized = true;
            }
        }
        self.version = Self::CURRENT_VERSION;
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> WindowSnapshot {
        WindowSnapshot::new(
            WindowSettings {
                title: "Graph".to_string(),
                fullscreen: true,
                draw_toolbar: true,
            },
            Rect::new(0.0, 0.0, 800.0, 600.0),
            true,
            vec![PersistedControl {
                kind: "Node".to_string(),
                initialized: true,
                state: json!({ "label": "Start" }),
            }],
        )
    }

    #[test]
    fn test_snapshot_creation() {
        let snapshot = sample();
        assert_eq!(snapshot.version, WindowSnapshot::CURRENT_VERSION);
        assert!(!snapshot.needs_migration());
        assert_eq!(snapshot.controls.len(), 1);
    }

    #[test]
    fn test_snapshot_json_structure() {
        let json = sample().to_json().unwrap();
        assert!(json.contains("\"version\""));
        assert!(json.contains("\"settings\""));
        assert!(json.contains("\"rect\""));
        assert!(json.contains("\"controls\""));
        assert!(json.contains("\"kind\":\"Node\""));
    }

    #[test]
    fn test_snapshot_missing_fields_default() {
        let snapshot = WindowSnapshot::from_json(
            r#"{ "version": 0, "settings": {}, "rect": { "x": 0, "y": 0, "width": 10, "height": 10 } }"#,
        )
        .unwrap();
        assert!(snapshot.needs_migration());
        assert!(snapshot.controls.is_empty());
        assert!(!snapshot.initialized);
    }

    #[test]
    fn test_snapshot_migrate() {
        let mut snapshot = sample();
        snapshot.version = 0;
        assert!(snapshot.needs_migration());

        snapshot.migrate();

        assert!(!snapshot.needs_migration());
        assert_eq!(snapshot.settings.title, "Graph");
        assert_eq!(snapshot.controls[0].kind, "Node");
    }

    #[test]
    fn test_migrate_version_0_marks_initialized() {
        let mut snapshot = WindowSnapshot::from_json(
            r#"{
                "version": 0,
                "settings": { "title": "Old" },
                "rect": { "x": 0, "y": 0, "width": 10, "height": 10 },
                "controls": [{ "kind": "Node", "state": null }, { "kind": "Edge" }]
            }"#,
        )
        .unwrap();
        assert!(!snapshot.initialized);
        assert!(snapshot.controls.iter().all(|c| !c.initialized));

        snapshot.migrate();

        assert!(snapshot.initialized);
        assert!(snapshot.controls.iter().all(|c| c.initialized));
    }

    #[test]
    fn test_migrate_current_version_keeps_flags() {
        let mut snapshot = sample();
        snapshot.initialized = false;
        snapshot.controls[0].initialized = false;

        snapshot.migrate();

        assert!(!snapshot.initialized);
        assert!(!snapshot.controls[0].initialized);
    }

    #[test]
    fn test_snapshot_rejects_garbage() {
        assert!(WindowSnapshot::from_json("not json").is_err());
    }
}
