//! Concurrent, partial-failure-tolerant bulk upsert.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinSet;

use crate::bulk::chunk::chunks;
use crate::bulk::retry::execute_with_retry;
use crate::client::DocumentClient;
use crate::error::{AggregateError, ConfigurationError, StoreError, StoreResult, TransientError};
use crate::types::{PartitionKey, WriteResult};

/// Upserts many items, chunked for bounded concurrency.
///
/// Batches run strictly sequentially; within a batch every upsert runs
/// concurrently, each wrapped in the retry-on-throttle executor. A blank
/// derived partition key records a per-item failure and excludes the item
/// without aborting its batch. When any failure was recorded the whole call
/// fails with [`StoreError::Aggregate`] carrying every collected failure;
/// otherwise one [`WriteResult`] per item is returned in the order upserts
/// completed within their batch.
///
/// An absent `batch_size` treats the whole input as a single batch;
/// `Some(0)` fails with [`ConfigurationError::InvalidBatchSize`] before any
/// work starts.
pub async fn bulk_upsert<T, C, K>(
    client: &Arc<C>,
    items: Vec<T>,
    partition_key_of: K,
    batch_size: Option<usize>,
) -> StoreResult<Vec<WriteResult<T>>>
where
    T: Clone + Send + Sync + 'static,
    C: DocumentClient<T> + 'static,
    K: Fn(&T) -> String,
{
    if batch_size == Some(0) {
        return Err(ConfigurationError::InvalidBatchSize.into());
    }
    let size = batch_size.unwrap_or_else(|| items.len().max(1));

    // The only mutable state shared with in-flight upserts; appends from
    // every task within a batch.
    let failures: Arc<Mutex<Vec<StoreError>>> = Arc::new(Mutex::new(Vec::new()));
    let mut results = Vec::with_capacity(items.len());

    for (batch_index, batch) in chunks(items, size).enumerate() {
        let mut in_flight: JoinSet<Option<WriteResult<T>>> = JoinSet::new();
        tracing::debug!(batch_index, batch_len = batch.len(), "starting bulk batch");

        for item in batch {
            let key = match PartitionKey::new(partition_key_of(&item)) {
                Ok(key) => key,
                Err(err) => {
                    failures.lock().push(err.into());
                    continue;
                }
            };

            let client = Arc::clone(client);
            let collector = Arc::clone(&failures);
            in_flight.spawn(async move {
                let outcome = execute_with_retry(|| {
                    let client = Arc::clone(&client);
                    let item = item.clone();
                    let key = key.clone();
                    async move { client.upsert(item, &key).await }
                })
                .await;

                match outcome {
                    Ok(result) => Some(result),
                    Err(err) => {
                        collector.lock().push(err);
                        None
                    }
                }
            });
        }

        // The next batch never starts until this one fully completes.
        while let Some(joined) = in_flight.join_next().await {
            match joined {
                Ok(Some(result)) => results.push(result),
                Ok(None) => {}
                Err(err) => failures.lock().push(StoreError::Transient(TransientError::Request {
                    message: format!("upsert task failed to complete: {err}"),
                })),
            }
        }
    }

    let collected = std::mem::take(&mut *failures.lock());
    if collected.is_empty() {
        Ok(results)
    } else {
        tracing::warn!(failed = collected.len(), "bulk upsert recorded failures");
        Err(AggregateError::new(collected).into())
    }
}
