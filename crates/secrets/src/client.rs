//! The injected secret store client.

use async_trait::async_trait;

use crate::error::SecretError;

/// The managed secret store collaborator.
///
/// Client/vault construction and authentication are the caller's concern;
/// this layer only fetches.
#[async_trait]
pub trait SecretClient: Send + Sync {
    /// Fetches one secret value by name.
    async fn fetch_secret(&self, name: &str) -> Result<String, SecretError>;
}
