//! Atoll document store access layer.
//!
//! This crate provides a type-parametric query and mutation interface over a
//! partitioned document store, hiding the store's pagination, throttling, and
//! partitioning mechanics behind [`DocumentOperations`]. The store itself is
//! an injected collaborator implementing [`DocumentClient`]; this crate ships
//! no storage engine, indexing, or network protocol.
//!
//! # Architecture
//!
//! - [`types`] - partition keys, opaque filter/sort criteria, pages, patch
//!   operations, write results
//! - [`error`] - the error taxonomy for all operations
//! - [`client`] - the injected store client and feed traits
//! - [`query`] - query planning and paginated feed draining
//! - [`bulk`] - chunked, retrying, partial-failure-tolerant bulk upserts
//! - [`config`] - connection parameter resolution with environment fallbacks
//! - [`ops`] - the public facade composing the above
//!
//! # Queries
//!
//! Filter and sort criteria are opaque capabilities supplied by the caller;
//! the planner only selects an execution shape and the client translates the
//! criteria into its native query mechanism:
//!
//! ```
//! use atoll_store::{QueryPlan, QueryShape, SortSpec, predicate};
//!
//! struct Event {
//!     level: u8,
//!     timestamp: i64,
//! }
//!
//! let plan = QueryPlan::new(
//!     Some(predicate(|event: &Event| event.level >= 3)),
//!     Some(SortSpec::descending(|event: &Event| event.timestamp)),
//! );
//! assert_eq!(plan.shape(), QueryShape::FilteredOrdered);
//! ```
//!
//! # Bulk writes
//!
//! [`DocumentOperations::bulk_upsert`] splits the input into sequential
//! batches, runs every upsert in a batch concurrently with bounded
//! retry-on-throttle, and either returns every write result or fails with an
//! aggregate carrying every per-item failure:
//!
//! ```ignore
//! let results = ops
//!     .bulk_upsert(events, |event| event.tenant.clone(), Some(50))
//!     .await?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bulk;
pub mod client;
pub mod config;
pub mod error;
pub mod ops;
pub mod query;
pub mod types;

// Re-export commonly used types at crate root
pub use client::{DocumentClient, FeedSource};
pub use config::{ResolvedConfig, StoreConfig};
pub use error::{AggregateError, ConfigurationError, StoreError, StoreResult, TransientError};
pub use ops::DocumentOperations;
pub use query::{QueryPlan, QueryShape, drain};
pub use types::{
    FeedPage, PartitionKey, PatchOperation, Predicate, QueryCriteria, SortDirection, SortSpec,
    WriteResult, match_all, predicate,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
