//! Control kind tags
//!
//! Kinds replace runtime type inspection: each concrete control declares
//! its own tag and the tags of the kinds it specializes, once, at compile
//! time.

use std::fmt;
use serde::Serialize;
use super::Control;

/// Identifier of a concrete control kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ControlKind(&'static str);

impl ControlKind {
    /// Create a kind tag
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Stable name, used as the persistence key
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A concrete control type with a statically known kind chain
///
/// `ANCESTORS` lists the kinds this control specializes, nearest first. It
/// never contains `KIND` itself, so exact-kind and ancestor queries stay
/// disjoint.
pub trait ControlType: Control + 'static {
    const KIND: ControlKind;
    const ANCESTORS: &'static [ControlKind] = &[];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display_and_name() {
        const BUTTON: ControlKind = ControlKind::new("Button");
        assert_eq!(BUTTON.name(), "Button");
        assert_eq!(BUTTON.to_string(), "Button");
        assert_eq!(BUTTON, ControlKind::new("Button"));
        assert_ne!(BUTTON, ControlKind::new("Label"));
    }
}
