//! The public facade over an injected document-store client.

use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::bulk;
use crate::client::DocumentClient;
use crate::error::StoreResult;
use crate::query::{QueryPlan, drain};
use crate::types::{PartitionKey, PatchOperation, Predicate, SortSpec, WriteResult};

/// Typed query and mutation interface over one container of a partitioned
/// document store.
///
/// Composes the query planner and feed reader for reads and the concurrent
/// bulk-upsert engine for writes, hiding pagination, throttling, and
/// partitioning mechanics. The injected client is shared immutably; the
/// facade holds no other cross-call state.
///
/// # Example
///
/// ```ignore
/// use atoll_store::{DocumentOperations, SortSpec, predicate};
/// use tokio_util::sync::CancellationToken;
///
/// async fn recent_failures<C>(ops: &DocumentOperations<Event, C>) -> Vec<Event>
/// where
///     C: atoll_store::DocumentClient<Event> + 'static,
/// {
///     ops.list_sorted(
///         predicate(|event: &Event| event.level == Level::Error),
///         SortSpec::descending(|event: &Event| event.timestamp),
///         &CancellationToken::new(),
///     )
///     .await
///     .unwrap()
/// }
/// ```
pub struct DocumentOperations<T, C> {
    client: Arc<C>,
    _record: PhantomData<fn() -> T>,
}

impl<T, C> DocumentOperations<T, C>
where
    T: Clone + Send + Sync + 'static,
    C: DocumentClient<T> + 'static,
{
    /// Wraps an injected client.
    pub fn new(client: C) -> Self {
        Self {
            client: Arc::new(client),
            _record: PhantomData,
        }
    }

    /// Wraps an already shared client.
    pub fn from_shared(client: Arc<C>) -> Self {
        Self {
            client,
            _record: PhantomData,
        }
    }

    /// The underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    async fn run(&self, plan: QueryPlan<T>, cancel: &CancellationToken) -> StoreResult<Vec<T>> {
        drain(plan.execute(self.client.as_ref()), cancel).await
    }

    /// Every item in the container, in feed order.
    pub async fn list_all(&self, cancel: &CancellationToken) -> StoreResult<Vec<T>> {
        self.run(QueryPlan::new(None, None), cancel).await
    }

    /// Every item matching the filter, in feed order.
    pub async fn list_where(
        &self,
        filter: Predicate<T>,
        cancel: &CancellationToken,
    ) -> StoreResult<Vec<T>> {
        self.run(QueryPlan::new(Some(filter), None), cancel).await
    }

    /// Every item matching the filter, ordered by the sort criterion.
    pub async fn list_sorted(
        &self,
        filter: Predicate<T>,
        sort: SortSpec<T>,
        cancel: &CancellationToken,
    ) -> StoreResult<Vec<T>> {
        self.run(QueryPlan::new(Some(filter), Some(sort)), cancel)
            .await
    }

    /// Like [`list_sorted`](Self::list_sorted), de-duplicated by a projected
    /// key after sort order is applied; the first occurrence per key wins.
    pub async fn list_distinct<K, F>(
        &self,
        filter: Predicate<T>,
        sort: SortSpec<T>,
        distinct_key: F,
        cancel: &CancellationToken,
    ) -> StoreResult<Vec<T>>
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let mut items = self.list_sorted(filter, sort, cancel).await?;
        let mut seen = HashSet::new();
        items.retain(|item| seen.insert(distinct_key(item)));
        Ok(items)
    }

    /// The first item matching the filter, in feed order.
    pub async fn find_first(
        &self,
        filter: Predicate<T>,
        cancel: &CancellationToken,
    ) -> StoreResult<Option<T>> {
        let items = self.list_where(filter, cancel).await?;
        Ok(items.into_iter().next())
    }

    /// The first item matching the filter under the given tie-break sort.
    ///
    /// With the default descending direction this reads as "the most recent
    /// match".
    pub async fn find_latest(
        &self,
        filter: Predicate<T>,
        sort: SortSpec<T>,
        cancel: &CancellationToken,
    ) -> StoreResult<Option<T>> {
        let items = self.list_sorted(filter, sort, cancel).await?;
        Ok(items.into_iter().next())
    }

    /// The item with the smallest key over a full scan.
    pub async fn first_by<K, F>(&self, key: F, cancel: &CancellationToken) -> StoreResult<Option<T>>
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        let plan = QueryPlan::new(None, Some(SortSpec::ascending(key)));
        Ok(self.run(plan, cancel).await?.into_iter().next())
    }

    /// The item with the largest key over a full scan.
    pub async fn last_by<K, F>(&self, key: F, cancel: &CancellationToken) -> StoreResult<Option<T>>
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        let plan = QueryPlan::new(None, Some(SortSpec::descending(key)));
        Ok(self.run(plan, cancel).await?.into_iter().next())
    }

    /// Inserts or replaces one item.
    ///
    /// Fails with a configuration error before any client call when the
    /// partition key is blank.
    pub async fn upsert(&self, item: T, partition_key: &str) -> StoreResult<WriteResult<T>> {
        let key = PartitionKey::new(partition_key)?;
        tracing::debug!(partition_key = %key, "upserting item");
        self.client.upsert(item, &key).await
    }

    /// Applies an ordered list of patch operations to the addressed item.
    pub async fn patch(
        &self,
        id: &str,
        partition_key: &str,
        operations: &[PatchOperation],
    ) -> StoreResult<WriteResult<T>> {
        let key = PartitionKey::new(partition_key)?;
        tracing::debug!(id, partition_key = %key, operations = operations.len(), "patching item");
        self.client.patch(id, &key, operations).await
    }

    /// Deletes the addressed item.
    pub async fn delete(&self, id: &str, partition_key: &str) -> StoreResult<()> {
        let key = PartitionKey::new(partition_key)?;
        tracing::debug!(id, partition_key = %key, "deleting item");
        self.client.delete(id, &key).await
    }

    /// Upserts many items with bounded concurrency.
    ///
    /// See [`bulk::bulk_upsert`] for batching, retry, and failure-aggregation
    /// semantics.
    pub async fn bulk_upsert<K>(
        &self,
        items: Vec<T>,
        partition_key_of: K,
        batch_size: Option<usize>,
    ) -> StoreResult<Vec<WriteResult<T>>>
    where
        K: Fn(&T) -> String,
    {
        bulk::bulk_upsert(&self.client, items, partition_key_of, batch_size).await
    }
}

impl<T, C> Clone for DocumentOperations<T, C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            _record: PhantomData,
        }
    }
}
