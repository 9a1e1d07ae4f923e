//! Error types for the data-access layer.
//!
//! The taxonomy separates fatal configuration problems, the retryable
//! throttling signal, non-retryable transient store failures, cancellation,
//! and the aggregate raised by bulk writes.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Missing or invalid connection parameters, a blank partition key on a
    /// write, or an invalid bulk batch size. Fatal; never retried.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The store reported a rate-limit condition. This is the only error
    /// class the retry executor will retry.
    #[error("store throttled the request: {message}")]
    Throttled { message: String },

    /// A non-throttle store failure, surfaced immediately without retry.
    #[error(transparent)]
    Transient(#[from] TransientError),

    /// A read was cancelled mid-drain; partial results are discarded.
    #[error("operation cancelled before completion")]
    Cancelled,

    /// One or more per-item failures from a bulk write, surfaced only after
    /// every batch has finished.
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}

impl StoreError {
    /// Builds a throttling error from a store-reported message.
    pub fn throttled(message: impl Into<String>) -> Self {
        StoreError::Throttled {
            message: message.into(),
        }
    }

    /// Returns true if the store signalled rate-limiting.
    pub fn is_throttled(&self) -> bool {
        matches!(self, StoreError::Throttled { .. })
    }
}

/// Errors in connection parameters or write preconditions.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("connection string is missing or empty")]
    MissingConnectionString,

    #[error("database name is missing or empty")]
    MissingDatabase,

    #[error("container name is missing or empty")]
    MissingContainer,

    #[error("partition key is missing or empty")]
    MissingPartitionKey,

    #[error("batch size must be at least 1")]
    InvalidBatchSize,
}

/// Non-throttle failures reported by the store client.
#[derive(Error, Debug)]
pub enum TransientError {
    /// The addressed document does not exist.
    #[error("document not found: {id}")]
    NotFound { id: String },

    /// A concurrent write won; the operation was rejected.
    #[error("write conflict on document: {id}")]
    Conflict { id: String },

    /// Any other store-reported request failure.
    #[error("store request failed: {message}")]
    Request { message: String },
}

/// Every per-item failure collected during one bulk write.
#[derive(Error, Debug)]
#[error("bulk write failed for {} item(s)", .failures.len())]
pub struct AggregateError {
    failures: Vec<StoreError>,
}

impl AggregateError {
    /// Wraps the collected per-item failures.
    pub fn new(failures: Vec<StoreError>) -> Self {
        Self { failures }
    }

    /// The individual failures, in the order they were recorded.
    pub fn failures(&self) -> &[StoreError] {
        &self.failures
    }

    /// Consumes the aggregate, returning the individual failures.
    pub fn into_failures(self) -> Vec<StoreError> {
        self.failures
    }

    /// Number of failed items.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// True when no failures were recorded.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
