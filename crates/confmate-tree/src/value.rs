//! Dynamically typed values and nested mapping nodes.

use chrono::TimeDelta;
use std::collections::HashMap;

/// The "no timeout" sentinel: a duration of minus one second.
///
/// Trees may store it and the plain duration getter returns it; the
/// strict getter variant in the provider crate refuses it.
pub fn infinite_duration() -> TimeDelta {
    TimeDelta::seconds(-1)
}

/// A single settings value: a scalar, a list of strings, or a nested
/// mapping.
///
/// Integers are stored at full `i64` width and floats at `f64`; the
/// provider narrows on read when a caller asks for a smaller width.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar, any width up to 64 bits.
    Int(i64),
    /// Floating point scalar.
    Float(f64),
    /// String scalar.
    String(String),
    /// Time duration, signed so the infinite sentinel is representable.
    Duration(TimeDelta),
    /// Homogeneous list of strings.
    StringList(Vec<String>),
    /// Nested mapping.
    Table(Table),
}

/// A nested string-keyed mapping node of a settings tree.
///
/// Tables are built by their owner and handed to readers as shared
/// references; readers never mutate. Iteration order is unspecified.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    entries: HashMap<String, Value>,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value under a single (undotted) key, returning the
    /// previously stored value if the key was already set.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Look up a single key, scalar or nested.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Look up a single key as a nested table.
    ///
    /// `None` when the key is missing or names a scalar.
    pub fn subtree(&self, key: &str) -> Option<&Table> {
        match self.entries.get(key) {
            Some(Value::Table(table)) => Some(table),
            _ => None,
        }
    }

    /// Descend one subtree per segment, in order.
    ///
    /// Short-circuits to `None` on the first segment that does not name
    /// a mapping; absence is a normal result, not an error.
    pub fn descend(&self, segments: &[&str]) -> Option<&Table> {
        let mut node = self;
        for segment in segments {
            node = node.subtree(segment)?;
        }
        Some(node)
    }

    /// Whether a single key is explicitly set on this node.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Top-level key names of this node, in unspecified order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Dotted key for every leaf reachable from this node.
    pub fn leaf_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        self.collect_leaf_keys("", &mut keys);
        keys
    }

    fn collect_leaf_keys(&self, prefix: &str, keys: &mut Vec<String>) {
        for (key, value) in &self.entries {
            let dotted = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            match value {
                Value::Table(table) => table.collect_leaf_keys(&dotted, keys),
                _ => keys.push(dotted),
            }
        }
    }

    /// Whether the tree below this node holds no leaves at all.
    ///
    /// Uses the full recursive enumeration, so a node containing only
    /// empty subtables still counts as empty.
    pub fn is_empty(&self) -> bool {
        self.leaf_keys().is_empty()
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<TimeDelta> for Value {
    fn from(value: TimeDelta) -> Self {
        Value::Duration(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Value::StringList(value)
    }
}

impl From<Table> for Value {
    fn from(value: Table) -> Self {
        Value::Table(value)
    }
}
