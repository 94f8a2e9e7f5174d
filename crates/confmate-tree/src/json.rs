//! Bridge from parsed JSON documents to settings tables.

use crate::{Table, Value};
use log::debug;

impl Table {
    /// Convert a parsed JSON object into a settings table.
    ///
    /// Returns `None` when the root is not an object. Nulls and arrays
    /// holding anything but strings have no tree representation and are
    /// skipped.
    pub fn from_json(value: &serde_json::Value) -> Option<Table> {
        let map = value.as_object()?;
        let mut table = Table::new();
        for (key, entry) in map {
            match Value::from_json(entry) {
                Some(value) => {
                    table.insert(key.clone(), value);
                }
                None => debug!("skipping unrepresentable setting (key={key})"),
            }
        }
        Some(table)
    }
}

impl Value {
    fn from_json(value: &serde_json::Value) -> Option<Value> {
        match value {
            serde_json::Value::Null => None,
            serde_json::Value::Bool(flag) => Some(Value::Bool(*flag)),
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(int) => Some(Value::Int(int)),
                None => number.as_f64().map(Value::Float),
            },
            serde_json::Value::String(text) => Some(Value::String(text.clone())),
            serde_json::Value::Array(items) => {
                let mut list = Vec::with_capacity(items.len());
                for item in items {
                    list.push(item.as_str()?.to_string());
                }
                Some(Value::StringList(list))
            }
            serde_json::Value::Object(_) => Table::from_json(value).map(Value::Table),
        }
    }
}
