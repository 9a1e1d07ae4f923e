//! Secret fetch operations.

use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::client::SecretClient;
use crate::error::SecretError;

/// Environment variable consulted when no secret name is supplied.
pub const DEFAULT_SECRET_NAME_VAR: &str = "SECRET_NAME";

/// Upper bound on concurrently in-flight key lookups during a multi-key
/// fetch.
pub const MAX_CONCURRENT_FETCHES: usize = 20;

/// Fetch operations over an injected secret store client.
pub struct SecretOperations<C> {
    client: Arc<C>,
}

impl<C> SecretOperations<C>
where
    C: SecretClient + 'static,
{
    /// Wraps an injected client.
    pub fn new(client: C) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Fetches one secret, falling back to the name configured in
    /// [`DEFAULT_SECRET_NAME_VAR`] when none is supplied.
    ///
    /// # Errors
    ///
    /// [`SecretError::MissingName`] when no name is supplied and the default
    /// is unset; fetch failures propagate unchanged.
    pub async fn get_secret(&self, name: Option<&str>) -> Result<String, SecretError> {
        let name = match name {
            Some(name) => name.to_string(),
            None => env::var(DEFAULT_SECRET_NAME_VAR)
                .ok()
                .filter(|value| !value.trim().is_empty())
                .ok_or(SecretError::MissingName)?,
        };
        self.client.fetch_secret(&name).await
    }

    /// Fetches many secrets concurrently, at most [`MAX_CONCURRENT_FETCHES`]
    /// in flight.
    ///
    /// Each key fails independently: a failed fetch maps that key to an
    /// empty string rather than failing the batch.
    pub async fn get_secrets(&self, names: &[String]) -> HashMap<String, String> {
        let semaphore = Arc::new(Semaphore::new(MAX_CONCURRENT_FETCHES));
        let mut in_flight: JoinSet<(String, String)> = JoinSet::new();

        for name in names {
            let name = name.clone();
            let client = Arc::clone(&self.client);
            let semaphore = Arc::clone(&semaphore);
            in_flight.spawn(async move {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => return (name, String::new()),
                };
                match client.fetch_secret(&name).await {
                    Ok(value) => (name, value),
                    Err(err) => {
                        tracing::warn!(secret = %name, error = %err, "secret fetch downgraded to empty value");
                        (name, String::new())
                    }
                }
            });
        }

        let mut values = HashMap::with_capacity(names.len());
        while let Some(joined) = in_flight.join_next().await {
            match joined {
                Ok((name, value)) => {
                    values.insert(name, value);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "secret fetch task failed to complete");
                }
            }
        }
        values
    }
}

impl<C> Clone for SecretOperations<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}
