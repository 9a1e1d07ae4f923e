//! Field-level patch operations.
//!
//! An ordered list of these is passed through to the client's point-patch
//! primitive; the core never applies them itself.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One field-level patch operation, addressed by a JSON-pointer-style path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    /// Adds a value at the path.
    Add { path: String, value: Value },
    /// Sets the value at the path, creating it if absent.
    Set { path: String, value: Value },
    /// Replaces the existing value at the path.
    Replace { path: String, value: Value },
    /// Removes the value at the path.
    Remove { path: String },
    /// Adds the given amount to the numeric value at the path.
    Increment { path: String, value: f64 },
}

impl PatchOperation {
    /// An `add` operation.
    pub fn add(path: impl Into<String>, value: Value) -> Self {
        Self::Add {
            path: path.into(),
            value,
        }
    }

    /// A `set` operation.
    pub fn set(path: impl Into<String>, value: Value) -> Self {
        Self::Set {
            path: path.into(),
            value,
        }
    }

    /// A `replace` operation.
    pub fn replace(path: impl Into<String>, value: Value) -> Self {
        Self::Replace {
            path: path.into(),
            value,
        }
    }

    /// A `remove` operation.
    pub fn remove(path: impl Into<String>) -> Self {
        Self::Remove { path: path.into() }
    }

    /// An `increment` operation.
    pub fn increment(path: impl Into<String>, value: f64) -> Self {
        Self::Increment {
            path: path.into(),
            value,
        }
    }

    /// The path this operation addresses.
    pub fn path(&self) -> &str {
        match self {
            Self::Add { path, .. }
            | Self::Set { path, .. }
            | Self::Replace { path, .. }
            | Self::Remove { path }
            | Self::Increment { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_patch_operation_serialization() {
        let op = PatchOperation::replace("/status", json!("active"));
        let serialized = serde_json::to_value(&op).unwrap();
        assert_eq!(
            serialized,
            json!({"op": "replace", "path": "/status", "value": "active"})
        );
    }

    #[test]
    fn test_patch_operation_roundtrip_remove() {
        let op = PatchOperation::remove("/obsolete");
        let text = serde_json::to_string(&op).unwrap();
        let parsed: PatchOperation = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, op);
        assert_eq!(parsed.path(), "/obsolete");
    }

    #[test]
    fn test_patch_operation_increment() {
        let op = PatchOperation::increment("/retries", 1.0);
        let serialized = serde_json::to_value(&op).unwrap();
        assert_eq!(serialized["op"], "increment");
        assert_eq!(serialized["value"], 1.0);
    }
}
