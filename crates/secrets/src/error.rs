//! Error types for secret retrieval.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// Errors surfaced by single-key secret retrieval.
///
/// Multi-key retrieval never surfaces these; per-key failures are downgraded
/// to an empty value instead.
#[derive(Error, Debug)]
pub enum SecretError {
    /// No name was supplied and the default-name environment variable is
    /// unset or blank.
    #[error("secret name is missing and no default is configured")]
    MissingName,

    /// The secret store rejected or failed the fetch.
    #[error("secret fetch failed: {message}")]
    Fetch { message: String },
}

impl SecretError {
    /// Builds a fetch error from a store-reported message.
    pub fn fetch(message: impl Into<String>) -> Self {
        SecretError::Fetch {
            message: message.into(),
        }
    }
}
