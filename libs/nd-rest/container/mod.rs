//! JSON document abstraction shared by requests and responses
//!
//! The controller speaks JSON with deeply nested envelopes (`imdata`,
//! `error.attributes`, ...), so both request payloads and response bodies are
//! handled through `Container`: parse once, look fields up by path, and
//! re-serialize explicitly when bytes are needed.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContainerError {
    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Path not found: {0}")]
    NotFound(String),

    #[error("Type mismatch at {path}: expected {expected}")]
    TypeMismatch { path: String, expected: &'static str },
}

pub type Result<T> = std::result::Result<T, ContainerError>;

/// Parsed JSON document. Immutable once constructed; callers re-serialize
/// through [`Container::encode_json`] when raw bytes are needed.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    value: Value,
}

impl Container {
    /// Parse a document from raw bytes.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let value = serde_json::from_slice(data)?;
        Ok(Self { value })
    }

    pub fn from_value(value: Value) -> Self {
        Self { value }
    }

    /// Serialize back to raw bytes.
    pub fn encode_json(&self) -> Vec<u8> {
        self.value.to_string().into_bytes()
    }

    /// Generic escape hatch for callers that need untyped access, e.g. when
    /// formatting arbitrary response content into an error message.
    pub fn raw(&self) -> &Value {
        &self.value
    }

    /// Hierarchical field lookup: `search(&["imdata", "error"])` walks object
    /// keys in order and returns the node, if present.
    pub fn search(&self, path: &[&str]) -> Option<&Value> {
        let mut node = &self.value;
        for key in path {
            node = node.get(key)?;
        }
        Some(node)
    }

    /// Compact JSON rendering of the node at `path`. String values keep their
    /// surrounding quotes, matching the controller's own rendering of scalar
    /// fields (see `utils::strip_quotes`).
    pub fn search_string(&self, path: &[&str]) -> Option<String> {
        self.search(path).map(Value::to_string)
    }

    /// String value at `path`.
    pub fn str_at(&self, path: &[&str]) -> Result<&str> {
        let node = self
            .search(path)
            .ok_or_else(|| ContainerError::NotFound(path.join(".")))?;
        node.as_str().ok_or_else(|| ContainerError::TypeMismatch {
            path: path.join("."),
            expected: "string",
        })
    }

    /// Unsigned integer value at `path`.
    pub fn u64_at(&self, path: &[&str]) -> Result<u64> {
        let node = self
            .search(path)
            .ok_or_else(|| ContainerError::NotFound(path.join(".")))?;
        node.as_u64().ok_or_else(|| ContainerError::TypeMismatch {
            path: path.join("."),
            expected: "number",
        })
    }

    /// Boolean value at `path`.
    pub fn bool_at(&self, path: &[&str]) -> Result<bool> {
        let node = self
            .search(path)
            .ok_or_else(|| ContainerError::NotFound(path.join(".")))?;
        node.as_bool().ok_or_else(|| ContainerError::TypeMismatch {
            path: path.join("."),
            expected: "boolean",
        })
    }

    /// Array elements at `path`.
    pub fn array_at(&self, path: &[&str]) -> Result<&Vec<Value>> {
        let node = self
            .search(path)
            .ok_or_else(|| ContainerError::NotFound(path.join(".")))?;
        node.as_array().ok_or_else(|| ContainerError::TypeMismatch {
            path: path.join("."),
            expected: "array",
        })
    }

    /// True when the document holds no data (`null` or empty object/array).
    pub fn is_empty(&self) -> bool {
        match &self.value {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn error_body() -> Container {
        Container::from_value(json!({
            "imdata": {
                "error": {
                    "attributes": {
                        "code": "107",
                        "text": "object already deleted",
                        "count": 1,
                        "retriable": false
                    }
                }
            }
        }))
    }

    #[test]
    fn test_search_nested_path() {
        let body = error_body();
        let code = body.search(&["imdata", "error", "attributes", "code"]);
        assert_eq!(code.and_then(|v| v.as_str()), Some("107"));
    }

    #[test]
    fn test_search_missing_path_is_none() {
        let body = error_body();
        assert!(body.search(&["imdata", "error", "nope"]).is_none());
    }

    #[test]
    fn test_search_string_keeps_json_quotes() {
        let body = error_body();
        let rendered = body.search_string(&["imdata", "error", "attributes", "code"]);
        assert_eq!(rendered.as_deref(), Some("\"107\""));
    }

    #[test]
    fn test_typed_accessors() {
        let body = error_body();
        assert_eq!(
            body.str_at(&["imdata", "error", "attributes", "text"]).unwrap(),
            "object already deleted"
        );
        assert_eq!(
            body.u64_at(&["imdata", "error", "attributes", "count"]).unwrap(),
            1
        );
        assert!(!body
            .bool_at(&["imdata", "error", "attributes", "retriable"])
            .unwrap());
    }

    #[test]
    fn test_typed_accessor_not_found() {
        let body = error_body();
        let err = body.str_at(&["imdata", "missing"]).unwrap_err();
        assert!(matches!(err, ContainerError::NotFound(_)));
    }

    #[test]
    fn test_typed_accessor_type_mismatch() {
        let body = error_body();
        let err = body
            .u64_at(&["imdata", "error", "attributes", "code"])
            .unwrap_err();
        assert!(matches!(err, ContainerError::TypeMismatch { .. }));
    }

    #[test]
    fn test_parse_and_encode_round_trip() {
        let data = br#"{"fvTenant":{"attributes":{"dn":"uni/tn-Example"}}}"#;
        let body = Container::parse(data).unwrap();
        let encoded = body.encode_json();
        assert_eq!(Container::parse(&encoded).unwrap(), body);
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(Container::parse(b"{not json").is_err());
    }

    #[test]
    fn test_is_empty() {
        assert!(Container::from_value(json!(null)).is_empty());
        assert!(Container::from_value(json!({})).is_empty());
        assert!(!error_body().is_empty());
    }
}
