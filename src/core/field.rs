//! Field values exposed to the query view

use serde::{Deserialize, Serialize};

/// A polymorphic field value that can hold different types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
}

impl FieldValue {
    /// Case-insensitive substring test against a needle that is already lowercase.
    ///
    /// Only string values take part in text search.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        match self {
            FieldValue::String(s) => s.to_lowercase().contains(needle),
            FieldValue::Integer(_) => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}
