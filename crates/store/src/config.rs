//! Connection configuration resolution.
//!
//! Each parameter falls back to an environment variable when not supplied
//! explicitly; a missing or blank value fails resolution immediately, before
//! any store operation runs. Client construction itself is the caller's
//! concern.

use std::env;

use crate::error::ConfigurationError;

/// Environment variable consulted when no connection string is supplied.
pub const CONNECTION_STRING_VAR: &str = "DOCSTORE_CONNECTION_STRING";

/// Environment variable consulted when no database name is supplied.
pub const DATABASE_VAR: &str = "DOCSTORE_DATABASE";

/// Environment variable consulted when no container name is supplied.
pub const CONTAINER_VAR: &str = "DOCSTORE_CONTAINER";

/// Unresolved connection parameters.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    connection_string: Option<String>,
    database: Option<String>,
    container: Option<String>,
}

impl StoreConfig {
    /// A config where every parameter falls back to its environment variable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the connection string explicitly.
    pub fn with_connection_string(mut self, value: impl Into<String>) -> Self {
        self.connection_string = Some(value.into());
        self
    }

    /// Sets the database name explicitly.
    pub fn with_database(mut self, value: impl Into<String>) -> Self {
        self.database = Some(value.into());
        self
    }

    /// Sets the container name explicitly.
    pub fn with_container(mut self, value: impl Into<String>) -> Self {
        self.container = Some(value.into());
        self
    }

    /// Resolves every parameter, applying environment fallbacks.
    ///
    /// # Errors
    ///
    /// The [`ConfigurationError`] variant naming the first parameter that is
    /// missing or blank after fallback.
    pub fn resolve(self) -> Result<ResolvedConfig, ConfigurationError> {
        let connection_string = resolve_value(self.connection_string, CONNECTION_STRING_VAR)
            .ok_or(ConfigurationError::MissingConnectionString)?;
        let database = resolve_value(self.database, DATABASE_VAR)
            .ok_or(ConfigurationError::MissingDatabase)?;
        let container = resolve_value(self.container, CONTAINER_VAR)
            .ok_or(ConfigurationError::MissingContainer)?;

        Ok(ResolvedConfig {
            connection_string,
            database,
            container,
        })
    }
}

/// Fully resolved connection parameters, ready to hand to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// The store connection string.
    pub connection_string: String,
    /// The database name.
    pub database: String,
    /// The container name.
    pub container: String,
}

fn resolve_value(explicit: Option<String>, var: &str) -> Option<String> {
    explicit
        .or_else(|| env::var(var).ok())
        .filter(|value| !value.trim().is_empty())
}
