//! Core types shared across queries and writes.
//!
//! - [`PartitionKey`] - validated shard-routing key
//! - [`query`] - opaque filter and sort criteria
//! - [`page`] - one unit of server-returned feed results
//! - [`patch`] - field-level patch operations
//! - [`write`] - metadata returned by write operations

pub mod page;
pub mod patch;
pub mod query;
pub mod write;

pub use page::FeedPage;
pub use patch::PatchOperation;
pub use query::{Predicate, QueryCriteria, SortDirection, SortSpec, match_all, predicate};
pub use write::WriteResult;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// The shard-routing key required on every write and delete.
///
/// Construction enforces the contract that a partition key is never empty or
/// whitespace-only; a blank key is a configuration error, not a retryable
/// condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartitionKey(String);

impl PartitionKey {
    /// Validates and wraps a partition key value.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::MissingPartitionKey`] if the value is empty or
    /// contains only whitespace.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigurationError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigurationError::MissingPartitionKey);
        }
        Ok(Self(key))
    }

    /// The key value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
