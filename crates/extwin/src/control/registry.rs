//! Control registry: ordered sequence plus exact-kind index

use std::collections::HashMap;
use tracing::{debug, trace};

use crate::error::{Result, WindowError};
use crate::window::WindowId;
use super::{Control, ControlHandle, ControlKind, ControlType};

/// Ordered collection of a window's controls
///
/// Insertion order decides draw order and event order. `by_kind` is a
/// denormalized index: each bucket is exactly the ordered sequence filtered
/// by one kind, and no bucket is ever empty.
pub struct ControlRegistry {
    /// Owning window, written into each control's back-reference
    owner: WindowId,
    /// All controls in insertion order
    controls: Vec<ControlHandle>,
    /// Exact-kind index
    by_kind: HashMap<ControlKind, Vec<ControlHandle>>,
    /// Removed controls whose destroy callback waits for their borrow to end
    pending_destroy: Vec<ControlHandle>,
}

impl ControlRegistry {
    /// Create an empty registry for `owner`
    pub fn new(owner: WindowId) -> Self {
        Self {
            owner,
            controls: Vec::new(),
            by_kind: HashMap::new(),
            pending_destroy: Vec::new(),
        }
    }

    /// Rebuild a registry from an already-ordered list without running any
    /// lifecycle callbacks
    pub(crate) fn from_ordered(owner: WindowId, controls: Vec<ControlHandle>) -> Self {
        let mut registry = Self::new(owner);
        for handle in controls {
            if registry.contains(&handle) {
                continue;
            }
            registry.by_kind.entry(handle.kind()).or_default().push(handle.clone());
            registry.controls.push(handle);
        }
        debug_assert!(registry.is_consistent());
        registry
    }

    #[inline]
    pub fn owner(&self) -> WindowId {
        self.owner
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Controls in insertion order
    #[inline]
    pub fn as_slice(&self) -> &[ControlHandle] {
        &self.controls
    }

    pub fn iter(&self) -> impl Iterator<Item = &ControlHandle> {
        self.controls.iter()
    }

    /// Check if this exact control is registered
    pub fn contains(&self, handle: &ControlHandle) -> bool {
        self.position(handle).is_some()
    }

    fn position(&self, handle: &ControlHandle) -> Option<usize> {
        self.controls.iter().position(|c| c.ptr_eq(handle))
    }

    /// Register a control
    ///
    /// Adding a control that is already registered does nothing. Otherwise
    /// the control is attached to the owner, initialized if it has not been
    /// yet, and appended.
    ///
    /// A control that removed itself earlier in the callback it is still
    /// running can add itself back: its pending destroy is cancelled and it
    /// keeps its owner and initialized state.
    pub fn add(&mut self, handle: ControlHandle) -> Result<()> {
        if self.contains(&handle) {
            trace!(kind = %handle.kind(), window = self.owner, "control already registered");
            return Ok(());
        }

        match handle.try_borrow_mut() {
            Ok(mut control) => {
                control.state_mut().attach(self.owner);
                if !control.state().is_initialized() {
                    control.initialize();
                    control.state_mut().set_initialized(true);
                }
            }
            Err(_) => {
                let pending = self
                    .pending_destroy
                    .iter()
                    .position(|c| c.ptr_eq(&handle))
                    .ok_or(WindowError::ControlBusy { kind: handle.kind() })?;
                self.pending_destroy.remove(pending);
                trace!(kind = %handle.kind(), window = self.owner, "pending destroy cancelled");
            }
        }

        self.by_kind.entry(handle.kind()).or_default().push(handle.clone());
        debug!(kind = %handle.kind(), window = self.owner, "control added");
        self.controls.push(handle);

        debug_assert!(self.is_consistent());
        Ok(())
    }

    /// Unregister a control and run its destroy callback
    ///
    /// Fails with [`WindowError::ControlNotFound`] if the control is not
    /// registered. A control removing itself from inside one of its own
    /// callbacks is unregistered immediately; its destroy callback runs once
    /// that callback returns.
    pub fn remove(&mut self, handle: &ControlHandle) -> Result<()> {
        let kind = handle.kind();
        let index = self
            .position(handle)
            .ok_or(WindowError::ControlNotFound { kind })?;

        let removed = self.controls.remove(index);
        if let Some(bucket) = self.by_kind.get_mut(&kind) {
            bucket.retain(|c| !c.ptr_eq(&removed));
            if bucket.is_empty() {
                self.by_kind.remove(&kind);
            }
        }
        debug_assert!(self.is_consistent());
        debug!(kind = %kind, window = self.owner, "control removed");

        let destroyed = match removed.try_borrow_mut() {
            Ok(mut control) => {
                destroy(&mut *control);
                true
            }
            Err(_) => false,
        };
        if !destroyed {
            trace!(kind = %kind, "control busy, deferring destroy");
            self.pending_destroy.push(removed);
        }
        Ok(())
    }

    /// Run destroy callbacks deferred by self-removal
    pub(crate) fn flush_deferred(&mut self) {
        if self.pending_destroy.is_empty() {
            return;
        }

        for handle in std::mem::take(&mut self.pending_destroy) {
            let destroyed = match handle.try_borrow_mut() {
                Ok(mut control) => {
                    destroy(&mut *control);
                    true
                }
                Err(_) => false,
            };
            if !destroyed {
                self.pending_destroy.push(handle);
            }
        }
    }

    /// Controls whose exact kind is `kind`, in insertion order
    pub fn controls_of_kind(&self, kind: ControlKind) -> &[ControlHandle] {
        self.by_kind.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Controls whose exact kind is `T`
    pub fn controls<T: ControlType>(&self) -> &[ControlHandle] {
        self.controls_of_kind(T::KIND)
    }

    /// Controls that specialize `kind`
    ///
    /// Linear scan of the ordered sequence against each control's ancestor
    /// chain. Controls whose exact kind is `kind` are not included; use
    /// [`ControlRegistry::controls_of_kind`] for those.
    pub fn controls_polymorphic(&self, kind: ControlKind) -> Vec<ControlHandle> {
        self.controls
            .iter()
            .filter(|c| c.descends_from(kind))
            .cloned()
            .collect()
    }

    /// Controls that specialize `T`
    pub fn controls_polymorphic_of<T: ControlType>(&self) -> Vec<ControlHandle> {
        self.controls_polymorphic(T::KIND)
    }

    /// Check that the kind index mirrors the ordered sequence
    pub fn is_consistent(&self) -> bool {
        let unique = self
            .controls
            .iter()
            .enumerate()
            .all(|(i, c)| !self.controls[..i].iter().any(|o| o.ptr_eq(c)));
        if !unique {
            return false;
        }

        let indexed: usize = self.by_kind.values().map(Vec::len).sum();
        if indexed != self.controls.len() {
            return false;
        }

        self.by_kind.iter().all(|(kind, bucket)| {
            !bucket.is_empty()
                && bucket
                    .iter()
                    .eq(self.controls.iter().filter(|c| c.kind() == *kind))
        })
    }
}

fn destroy(control: &mut dyn Control) {
    if control.state().is_initialized() {
        control.on_destroy();
        control.state_mut().set_initialized(false);
    }
    control.state_mut().detach();
}
