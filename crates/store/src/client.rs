//! Store client collaborator traits.
//!
//! The data-access layer owns no storage engine, indexing, or network
//! protocol; everything below the facade is delegated to an injected
//! [`DocumentClient`]. A client must expose a cursor-based paginated query
//! primitive, point upsert/patch/delete by id and partition key, and signal
//! throttling as [`StoreError::Throttled`](crate::error::StoreError::Throttled)
//! so the retry executor can distinguish it from other failures.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::types::{FeedPage, PartitionKey, PatchOperation, QueryCriteria, WriteResult};

/// A server-side cursor over one query's results.
///
/// Produced lazily: building a feed performs no I/O, and each
/// [`next_page`](FeedSource::next_page) call is a suspension point that
/// yields until the store responds.
#[async_trait]
pub trait FeedSource<T>: Send {
    /// True until the store reports the feed is exhausted.
    fn has_more(&self) -> bool;

    /// Fetches the next page. Only called while [`has_more`](FeedSource::has_more)
    /// is true.
    async fn next_page(&mut self) -> StoreResult<FeedPage<T>>;
}

/// The injected document-store client.
///
/// Shared immutably across all concurrent operations; implementations must
/// hold no per-call mutable state behind `&self`.
#[async_trait]
pub trait DocumentClient<T>: Send + Sync
where
    T: Send + 'static,
{
    /// A human-readable name for this client, for logs.
    fn client_name(&self) -> &'static str;

    /// Builds a lazy feed over the container for the given criteria.
    ///
    /// The criteria's filter and sort are opaque, pre-validated capabilities;
    /// the client translates them into its native query mechanism. No I/O
    /// happens until the first page is requested.
    fn query(&self, criteria: QueryCriteria<T>) -> Box<dyn FeedSource<T>>;

    /// Inserts or replaces one item under the given partition key.
    async fn upsert(&self, item: T, partition_key: &PartitionKey) -> StoreResult<WriteResult<T>>;

    /// Applies an ordered list of patch operations to the addressed item.
    async fn patch(
        &self,
        id: &str,
        partition_key: &PartitionKey,
        operations: &[PatchOperation],
    ) -> StoreResult<WriteResult<T>>;

    /// Deletes the addressed item.
    async fn delete(&self, id: &str, partition_key: &PartitionKey) -> StoreResult<()>;
}
