//! Control construction from persisted state

use std::collections::HashMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::control::{ControlHandle, ControlKind, ControlType};
use crate::error::{Result, WindowError};

type Builder = fn(Value) -> Result<ControlHandle>;

/// Maps persisted kind names back to concrete control types
#[derive(Default)]
pub struct ControlFactory {
    builders: HashMap<&'static str, Builder>,
}

impl ControlFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `T` restorable from the state written by its `save_state`
    pub fn register<T: ControlType + DeserializeOwned>(&mut self) -> &mut Self {
        self.builders.insert(T::KIND.name(), build::<T>);
        self
    }

    pub fn contains(&self, kind: ControlKind) -> bool {
        self.builders.contains_key(kind.name())
    }

    /// Construct a control of `kind` from `state`
    pub fn build(&self, kind: &str, state: Value) -> Result<ControlHandle> {
        let builder = self
            .builders
            .get(kind)
            .ok_or_else(|| WindowError::UnknownControlKind(kind.to_string()))?;
        builder(state)
    }
}

fn build<T: ControlType + DeserializeOwned>(state: Value) -> Result<ControlHandle> {
    let control: T = serde_json::from_value(state)?;
    Ok(ControlHandle::new(control))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Control, ControlState};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Label {
        #[serde(default)]
        state: ControlState,
        text: String,
    }

    impl Control for Label {
        fn state(&self) -> &ControlState {
            &self.state
        }
        fn state_mut(&mut self) -> &mut ControlState {
            &mut self.state
        }
    }

    impl ControlType for Label {
        const KIND: ControlKind = ControlKind::new("Label");
    }

    #[test]
    fn test_register_and_build() {
        let mut factory = ControlFactory::new();
        factory.register::<Label>();
        assert!(factory.contains(Label::KIND));

        let handle = factory.build("Label", json!({ "text": "Hello" })).unwrap();
        assert_eq!(handle.kind(), Label::KIND);
        assert_eq!(handle.with(|label: &Label| label.text.clone()), Some("Hello".to_string()));
    }

    #[test]
    fn test_unknown_kind() {
        let factory = ControlFactory::new();
        assert!(!factory.contains(Label::KIND));
        assert!(matches!(
            factory.build("Label", json!({})),
            Err(WindowError::UnknownControlKind(kind)) if kind == "Label"
        ));
    }

    #[test]
    fn test_bad_state_is_a_serialization_error() {
        let mut factory = ControlFactory::new();
        factory.register::<Label>();
        assert!(matches!(
            factory.build("Label", json!({ "text": 3 })),
            Err(WindowError::Serialization(_))
        ));
    }
}
