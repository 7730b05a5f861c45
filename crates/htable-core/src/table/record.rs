//! Row records and field lookup.

use indexmap::IndexMap;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Default row type: a JSON object, keys in document order.
pub type Row = serde_json::Map<String, Value>;

/// A row whose fields can be read by name.
///
/// Only the default extractor of a column needs this; custom extractors are
/// free to read the row however they like.
pub trait Record {
    /// Text of the named field, or `None` when the row has no such field.
    fn field(&self, name: &str) -> Option<String>;
}

/// Display text of a JSON value. `null` renders as empty.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

impl Record for serde_json::Map<String, Value> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).map(value_to_text)
    }
}

impl Record for Value {
    fn field(&self, name: &str) -> Option<String> {
        self.as_object().and_then(|obj| obj.field(name))
    }
}

impl Record for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Record for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Record for IndexMap<String, String> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_to_text() {
        assert_eq!(value_to_text(&json!(null)), "");
        assert_eq!(value_to_text(&json!("abc")), "abc");
        assert_eq!(value_to_text(&json!(42)), "42");
        assert_eq!(value_to_text(&json!(1.5)), "1.5");
        assert_eq!(value_to_text(&json!(true)), "true");
        assert_eq!(value_to_text(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn test_json_object_record() {
        let row = json!({"name": "Ada", "age": 36});
        assert_eq!(row.field("name"), Some("Ada".to_string()));
        assert_eq!(row.field("age"), Some("36".to_string()));
        assert_eq!(row.field("email"), None);
        assert_eq!(json!([1, 2]).field("name"), None);
    }

    #[test]
    fn test_string_map_records() {
        let mut hash = HashMap::new();
        hash.insert("id".to_string(), "7".to_string());
        assert_eq!(hash.field("id"), Some("7".to_string()));

        let btree: BTreeMap<String, String> = [("id".to_string(), "8".to_string())].into();
        assert_eq!(btree.field("id"), Some("8".to_string()));
        assert_eq!(btree.field("nope"), None);

        let ordered: IndexMap<String, String> =
            [("id".to_string(), "9".to_string())].into_iter().collect();
        assert_eq!(ordered.field("id"), Some("9".to_string()));
        assert_eq!(ordered.field("nope"), None);
    }
}
