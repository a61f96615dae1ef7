//! Field Values
//!
//! JSON-compatible values held in the field-state store and delivered to submit handlers.

use hashlink::LinkedHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::view::format_number;

/// Ordered `{name: value}` map, in field declaration order
pub type FieldValues = LinkedHashMap<String, FieldValue>;

/// Handle to a file chosen in a file picker. Contents are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FileHandle {
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            mime: None,
        }
    }
}

/// A single field value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// Multi-select choices
    Many(Vec<String>),
    File(FileHandle),
}

impl FieldValue {
    /// Whether the value counts as "nothing supplied"
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::Many(items) => items.is_empty(),
            FieldValue::Bool(_) | FieldValue::Number(_) | FieldValue::File(_) => false,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Display form used for control `value` attributes
    pub fn display(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Number(n) => format_number(*n),
            FieldValue::Text(text) => text.clone(),
            FieldValue::Many(items) => items.join(","),
            FieldValue::File(file) => file.name.clone(),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<FileHandle> for FieldValue {
    fn from(value: FileHandle) -> Self {
        FieldValue::File(value)
    }
}

/// Build a [`FieldValues`] map from `(name, value)` pairs
pub fn field_values<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> FieldValues
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values() {
        assert!(FieldValue::Null.is_blank());
        assert!(FieldValue::Text(String::new()).is_blank());
        assert!(FieldValue::Many(vec![]).is_blank());
        assert!(!FieldValue::Bool(false).is_blank());
        assert!(!FieldValue::Number(0.0).is_blank());
    }

    #[test]
    fn test_untagged_json_shapes() {
        let values: FieldValues = serde_json::from_str(
            r#"{"email":"a@b.com","age":42,"terms":true,"tags":["a","b"],"cv":{"name":"cv.pdf","size":10},"note":null}"#,
        )
        .expect("valid values");

        assert_eq!(values["email"], FieldValue::Text("a@b.com".into()));
        assert_eq!(values["age"], FieldValue::Number(42.0));
        assert_eq!(values["terms"], FieldValue::Bool(true));
        assert_eq!(values["tags"], FieldValue::Many(vec!["a".into(), "b".into()]));
        assert_eq!(values["cv"], FieldValue::File(FileHandle::new("cv.pdf", 10)));
        assert_eq!(values["note"], FieldValue::Null);

        let keys: Vec<&str> = values.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["email", "age", "terms", "tags", "cv", "note"]);
    }
}
