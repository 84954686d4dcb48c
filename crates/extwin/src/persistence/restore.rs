//! Saving and restoring windows

use tracing::debug;

use crate::control::ControlRegistry;
use crate::error::{Result, WindowError};
use crate::window::Window;
use super::{ControlFactory, PersistedControl, WindowSnapshot};

impl Window {
    /// Capture settings, geometry and controls
    ///
    /// Fails if a control is mid-callback or its state cannot be encoded.
    pub fn to_snapshot(&self) -> Result<WindowSnapshot> {
        let controls = self
            .registry
            .iter()
            .map(|handle| -> Result<PersistedControl> {
                let control = handle
                    .try_borrow()
                    .map_err(|_| WindowError::ControlBusy { kind: handle.kind() })?;
                Ok(PersistedControl {
                    kind: handle.kind().name().to_string(),
                    initialized: control.state().is_initialized(),
                    state: control.save_state()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(WindowSnapshot::new(
            self.settings.clone(),
            self.rect,
            self.initialized,
            controls,
        ))
    }

    /// Rebuild a window from a snapshot
    ///
    /// Controls keep their persisted initialized flag and get no
    /// `initialize` call. The kind index is rebuilt from the ordered list,
    /// then [`Window::on_deserialized`] re-links every control.
    pub fn restore(mut snapshot: WindowSnapshot, factory: &ControlFactory) -> Result<Window> {
        if snapshot.needs_migration() {
            snapshot.migrate();
        }

        let mut handles = Vec::with_capacity(snapshot.controls.len());
        for persisted in snapshot.controls {
            let handle = factory.build(&persisted.kind, persisted.state)?;
            handle.borrow_mut().state_mut().set_initialized(persisted.initialized);
            handles.push(handle);
        }

        let mut window = Window::new(snapshot.settings);
        window.rect = snapshot.rect;
        window.initialized = snapshot.initialized;
        window.registry = ControlRegistry::from_ordered(window.id, handles);
        window.on_deserialized();

        debug!(window = window.id, controls = window.registry.len(), "window restored");
        Ok(window)
    }
}
