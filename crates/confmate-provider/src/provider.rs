//! Tree-backed implementation of the [`Configuration`] capability.

use crate::api::Configuration;
use crate::error::ConfigError;
use crate::path::split_path;
use chrono::TimeDelta;
use confmate_tree::{Table, Value, infinite_duration};
use log::debug;
use std::fmt;

/// Read-only configuration view bound to one settings tree node.
///
/// Views are cheap to copy and hold no state beyond the borrowed node;
/// [`Configuration::get_subtree`] hands out further views over
/// descendant nodes of the same tree. The view adds no locking of its
/// own and must not be used while the tree is being mutated.
#[derive(Debug, Clone, Copy)]
pub struct TreeConfig<'t> {
    tree: &'t Table,
}

/// Outcome of resolving a path expression against the bound node.
enum Resolved<'t> {
    /// The zero-segment path: the bound node itself.
    Root,
    /// A value stored under the final segment.
    Value(&'t Value),
}

impl<'t> TreeConfig<'t> {
    /// Bind a view to a populated settings tree.
    ///
    /// `None` stands in for the absent reference of a miswired caller
    /// and is rejected with a recoverable error, since it is
    /// correctable at setup time.
    pub fn new(tree: Option<&'t Table>) -> Result<Self, ConfigError> {
        match tree {
            Some(tree) => Ok(Self { tree }),
            None => Err(ConfigError::MissingTree),
        }
    }

    /// Resolve a full path expression against the bound node.
    ///
    /// All segments but the last navigate subtrees; the last is a
    /// single-level lookup. Absence at any step is overall absence.
    fn resolve(&self, path: &str) -> Option<Resolved<'t>> {
        let segments = split_path(path);
        let Some((last, parents)) = segments.split_last() else {
            return Some(Resolved::Root);
        };
        let node = self.tree.descend(parents)?;
        node.get(last).map(Resolved::Value)
    }
}

impl Configuration for TreeConfig<'_> {
    fn get_boolean(&self, path: &str, default: Option<bool>) -> bool {
        match self.resolve(path) {
            Some(Resolved::Value(Value::Bool(flag))) => *flag,
            _ => default.unwrap_or(false),
        }
    }

    fn get_int32(&self, path: &str, default: Option<i32>) -> i32 {
        match self.resolve(path) {
            Some(Resolved::Value(Value::Int(int))) => *int as i32,
            _ => default.unwrap_or(0),
        }
    }

    fn get_int64(&self, path: &str, default: Option<i64>) -> i64 {
        match self.resolve(path) {
            Some(Resolved::Value(Value::Int(int))) => *int,
            _ => default.unwrap_or(0),
        }
    }

    fn get_float32(&self, path: &str, default: Option<f32>) -> f32 {
        match self.resolve(path) {
            Some(Resolved::Value(Value::Float(num))) => *num as f32,
            _ => default.unwrap_or(0.0),
        }
    }

    fn get_float64(&self, path: &str, default: Option<f64>) -> f64 {
        match self.resolve(path) {
            Some(Resolved::Value(Value::Float(num))) => *num,
            _ => default.unwrap_or(0.0),
        }
    }

    fn get_string(&self, path: &str, default: Option<&str>) -> String {
        match self.resolve(path) {
            Some(Resolved::Value(Value::String(text))) => text.clone(),
            _ => default.unwrap_or_default().to_string(),
        }
    }

    fn get_time_duration(&self, path: &str, default: Option<TimeDelta>) -> TimeDelta {
        match self.resolve(path) {
            Some(Resolved::Value(Value::Duration(duration))) => *duration,
            _ => default.unwrap_or_else(TimeDelta::zero),
        }
    }

    fn get_time_duration_infinite_not_allowed(
        &self,
        path: &str,
        default: Option<TimeDelta>,
    ) -> TimeDelta {
        // The check runs after default substitution, so a caller-passed
        // sentinel is refused too.
        let duration = self.get_time_duration(path, default);
        if duration == infinite_duration() {
            panic!("infinite time duration not allowed (path={path})");
        }
        duration
    }

    fn get_byte_size(&self, path: &str) -> i128 {
        match self.resolve(path) {
            Some(Resolved::Value(Value::Int(int))) => i128::from(*int),
            _ => 0,
        }
    }

    fn get_string_list(&self, path: &str) -> Vec<String> {
        match self.resolve(path) {
            Some(Resolved::Value(Value::StringList(list))) => list.clone(),
            _ => Vec::new(),
        }
    }

    fn get_boolean_list(&self, _path: &str) -> Vec<bool> {
        Vec::new()
    }

    fn get_float32_list(&self, _path: &str) -> Vec<f32> {
        Vec::new()
    }

    fn get_float64_list(&self, _path: &str) -> Vec<f64> {
        Vec::new()
    }

    fn get_int32_list(&self, _path: &str) -> Vec<i32> {
        Vec::new()
    }

    fn get_int64_list(&self, _path: &str) -> Vec<i64> {
        Vec::new()
    }

    fn get_byte_list(&self, _path: &str) -> Vec<u8> {
        Vec::new()
    }

    fn has_path(&self, path: &str) -> bool {
        let segments = split_path(path);
        let Some((last, parents)) = segments.split_last() else {
            return false;
        };
        match self.tree.descend(parents) {
            Some(node) => node.contains(last),
            None => false,
        }
    }

    fn keys(&self) -> Vec<String> {
        self.tree.keys()
    }

    fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    fn get_subtree(&self, path: &str) -> Option<Self> {
        let segments = split_path(path);
        self.tree.descend(&segments).map(|tree| Self { tree })
    }

    fn with_fallback(&self, _fallback: &Self) -> Result<Self, ConfigError> {
        debug!("rejecting with_fallback on tree-backed provider");
        Err(ConfigError::Unsupported("with_fallback"))
    }

    fn parse_string(&self, _raw: &str) -> &Self {
        self
    }

    fn load_config(&self, source: &str) -> Result<Self, ConfigError> {
        debug!("rejecting load_config on tree-backed provider (source={source})");
        Err(ConfigError::Unsupported("load_config"))
    }
}

impl fmt::Display for TreeConfig<'_> {
    /// Render the full settings snapshot of the bound node.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.tree)
    }
}
