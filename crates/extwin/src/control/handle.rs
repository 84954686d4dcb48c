//! Shared handle to a registered control

use std::any::Any;
use std::cell::{BorrowError, BorrowMutError, Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use super::{Control, ControlKind, ControlType};

/// Reference-counted handle to a control
///
/// Clones point at the same control. Equality is identity: two handles are
/// equal only if they refer to the same allocation. The kind chain is
/// captured when the handle is created so queries never need to borrow the
/// control, which may be mid-callback.
#[derive(Clone)]
pub struct ControlHandle {
    control: Rc<RefCell<dyn Control>>,
    any: Rc<dyn Any>,
    kind: ControlKind,
    ancestors: &'static [ControlKind],
}

impl ControlHandle {
    /// Wrap a control in a new handle
    pub fn new<T: ControlType>(control: T) -> Self {
        let shared = Rc::new(RefCell::new(control));
        let any: Rc<dyn Any> = shared.clone();
        Self {
            control: shared,
            any,
            kind: T::KIND,
            ancestors: T::ANCESTORS,
        }
    }

    /// Exact kind of the wrapped control
    #[inline]
    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    /// Kinds the wrapped control specializes, nearest first
    #[inline]
    pub fn ancestors(&self) -> &'static [ControlKind] {
        self.ancestors
    }

    /// Check if `kind` appears in the ancestor chain
    #[inline]
    pub fn descends_from(&self, kind: ControlKind) -> bool {
        self.ancestors.contains(&kind)
    }

    /// Identity comparison
    #[inline]
    pub fn ptr_eq(&self, other: &ControlHandle) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.any), Rc::as_ptr(&other.any))
    }

    pub fn borrow(&self) -> Ref<'_, dyn Control + 'static> {
        self.control.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, dyn Control + 'static> {
        self.control.borrow_mut()
    }

    pub fn try_borrow(&self) -> Result<Ref<'_, dyn Control + 'static>, BorrowError> {
        self.control.try_borrow()
    }

    pub fn try_borrow_mut(&self) -> Result<RefMut<'_, dyn Control + 'static>, BorrowMutError> {
        self.control.try_borrow_mut()
    }

    /// Typed access to the wrapped control, `None` if it is not a `T`
    pub fn downcast<T: ControlType>(&self) -> Option<Rc<RefCell<T>>> {
        Rc::clone(&self.any).downcast::<RefCell<T>>().ok()
    }

    /// Run `f` against the control as a `T`
    pub fn with<T: ControlType, R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let typed = self.downcast::<T>()?;
        let control = typed.borrow();
        Some(f(&control))
    }
}

impl PartialEq for ControlHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ControlHandle {}

impl fmt::Debug for ControlHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlHandle")
            .field("kind", &self.kind)
            .field("ptr", &Rc::as_ptr(&self.any))
            .finish()
    }
}
