//! Atoll secret store access layer.
//!
//! A thin wrapper over an injected managed-secret-store client: single-key
//! fetch with an environment-configured default name, and multi-key fetch
//! with bounded concurrency where each key fails independently to an empty
//! value instead of failing the whole batch.
//!
//! ```ignore
//! use atoll_secrets::SecretOperations;
//!
//! let ops = SecretOperations::new(client);
//! let connection_string = ops.get_secret(Some("docstore-connection")).await?;
//! let many = ops.get_secrets(&["api-key".into(), "signing-key".into()]).await;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod error;
pub mod ops;

pub use client::SecretClient;
pub use error::SecretError;
pub use ops::{DEFAULT_SECRET_NAME_VAR, MAX_CONCURRENT_FETCHES, SecretOperations};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
