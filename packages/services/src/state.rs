//! Typed partial-state updates.
//!
//! A caller describes the change as a [`StateUpdate`] and hands it to whatever
//! owns the state through [`StateStore`]. Applying an update never mutates
//! the previous state in place: nested objects are copied along with the root,
//! so nothing else holding the old state observes the change.

use serde_json::{Map, Value};

use crate::utils::is_truthy;

/// Value passed to the legacy calling convention to request a toggle.
pub const TOGGLE_SENTINEL: &str = "reverse_value";

#[derive(Clone, Debug, PartialEq)]
pub enum UpdateValue {
    Set(Value),
    /// Negate the truthiness of the current value.
    Toggle,
}

impl UpdateValue {
    fn from_raw(value: Value) -> Self {
        match value {
            Value::String(ref s) if s == TOGGLE_SENTINEL => UpdateValue::Toggle,
            other => UpdateValue::Set(other),
        }
    }

    fn resolve(self, previous: Option<&Value>) -> Value {
        match self {
            UpdateValue::Set(value) => value,
            UpdateValue::Toggle => Value::Bool(!previous.is_some_and(is_truthy)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StateUpdate {
    Replace(Value),
    Toggle,
    SetField { name: String, value: UpdateValue },
    SetNestedField { root: String, name: String, value: UpdateValue },
}

impl StateUpdate {
    /// Map `(value, name, root)` onto a typed update.
    ///
    /// Returns `None` when only `root` is given; that combination leaves the
    /// state untouched.
    pub fn from_parts(value: Value, name: Option<&str>, root: Option<&str>) -> Option<Self> {
        let name = name.filter(|n| !n.is_empty());
        let root = root.filter(|r| !r.is_empty());

        match (name, root) {
            (None, None) => Some(match UpdateValue::from_raw(value) {
                UpdateValue::Toggle => StateUpdate::Toggle,
                UpdateValue::Set(value) => StateUpdate::Replace(value),
            }),
            (Some(name), None) => Some(StateUpdate::SetField {
                name: name.to_string(),
                value: UpdateValue::from_raw(value),
            }),
            (Some(name), Some(root)) => Some(StateUpdate::SetNestedField {
                root: root.to_string(),
                name: name.to_string(),
                value: UpdateValue::from_raw(value),
            }),
            (None, Some(_)) => None,
        }
    }

    /// Produce the next state from `previous`.
    pub fn apply(self, previous: &Value) -> Value {
        match self {
            StateUpdate::Replace(value) => value,
            StateUpdate::Toggle => Value::Bool(!is_truthy(previous)),
            StateUpdate::SetField { name, value } => {
                let mut next = object_copy(previous);
                let resolved = value.resolve(next.get(&name));
                next.insert(name, resolved);
                Value::Object(next)
            }
            StateUpdate::SetNestedField { root, name, value } => {
                let mut next = object_copy(previous);
                let mut nested = match next.get(&root) {
                    None | Some(Value::Null) => Map::new(),
                    Some(Value::Object(map)) => map.clone(),
                    Some(_) => {
                        tracing::warn!(%root, "nested state update skipped: root is not an object");
                        return previous.clone();
                    }
                };
                let resolved = value.resolve(nested.get(&name));
                nested.insert(name, resolved);
                next.insert(root, Value::Object(nested));
                Value::Object(next)
            }
        }
    }
}

fn object_copy(value: &Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    }
}

/// Receiver of state updates, implemented by the caller's state layer.
#[cfg_attr(test, mockall::automock)]
pub trait StateStore {
    fn dispatch(&mut self, update: StateUpdate);
}

/// In-memory state over a JSON value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct State {
    value: Value,
}

impl State {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}

impl StateStore for State {
    fn dispatch(&mut self, update: StateUpdate) {
        self.value = update.apply(&self.value);
    }
}

/// Apply `value` at `root`/`name` through `store`.
///
/// Returns whether a store was supplied, so callers can detect a no-op call.
pub fn handle_state<S>(store: Option<&mut S>, value: Value, name: Option<&str>, root: Option<&str>) -> bool
where
    S: StateStore + ?Sized,
{
    let Some(store) = store else {
        return false;
    };

    if let Some(update) = StateUpdate::from_parts(value, name, root) {
        store.dispatch(update);
    }
    true
}
