use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::error_record::ErrorRecord;

/// One entry of an [`ErrorTree`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorNode {
    Leaf(ErrorRecord),
    Branch(ErrorTree),
    /// A null or non-composite entry; never holds an error.
    Absent,
}

impl ErrorNode {
    /// Classify a JSON value: objects carrying `hasError` are leaves, other
    /// objects and arrays are branches, everything else is absent.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Object(map) if map.contains_key("hasError") => {
                ErrorNode::Leaf(ErrorRecord {
                    has_error: map.get("hasError") == Some(&Value::Bool(true)),
                    message: map
                        .get("message")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                })
            }
            Value::Object(_) | Value::Array(_) => ErrorNode::Branch(ErrorTree::from_json(value)),
            _ => ErrorNode::Absent,
        }
    }
}

impl From<ErrorRecord> for ErrorNode {
    fn from(record: ErrorRecord) -> Self {
        ErrorNode::Leaf(record)
    }
}

impl From<ErrorTree> for ErrorNode {
    fn from(tree: ErrorTree) -> Self {
        ErrorNode::Branch(tree)
    }
}

/// Insertion-ordered mapping of keys to error nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorTree {
    entries: Vec<(String, ErrorNode)>,
}

impl ErrorTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace `key`. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<ErrorNode>) {
        let key = key.into();
        let node = node.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = node,
            None => self.entries.push((key, node)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, node: impl Into<ErrorNode>) -> Self {
        self.insert(key, node);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ErrorNode> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, n)| n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ErrorNode)> {
        self.entries.iter().map(|(k, n)| (k.as_str(), n))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a tree from a JSON object or array. Array elements are keyed by
    /// their index. Scalar input yields an empty tree.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Object(map) => map
                .iter()
                .map(|(key, child)| (key.clone(), ErrorNode::from_json(child)))
                .collect(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, child)| (index.to_string(), ErrorNode::from_json(child)))
                .collect(),
            _ => Self::default(),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, ErrorNode)> for ErrorTree {
    fn from_iter<I: IntoIterator<Item = (K, ErrorNode)>>(iter: I) -> Self {
        let mut tree = ErrorTree::new();
        for (key, node) in iter {
            tree.insert(key, node);
        }
        tree
    }
}

impl Serialize for ErrorNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ErrorNode::Leaf(record) => record.serialize(serializer),
            ErrorNode::Branch(tree) => tree.serialize(serializer),
            ErrorNode::Absent => serializer.serialize_none(),
        }
    }
}

impl Serialize for ErrorTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, node) in &self.entries {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ErrorTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(ErrorTree::from_json(&value))
    }
}
