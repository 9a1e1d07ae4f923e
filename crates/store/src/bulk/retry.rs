//! Bounded retry on throttling.

use std::future::Future;
use std::time::Duration;

use crate::error::StoreResult;

/// Additional attempts made after the first throttled failure.
pub const MAX_THROTTLE_RETRIES: u32 = 3;

/// Fixed delay between attempts; there is no backoff.
pub const THROTTLE_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Executes one asynchronous unit of work, retrying only on throttling.
///
/// Up to [`MAX_THROTTLE_RETRIES`] retries (four attempts in total) with a
/// fixed [`THROTTLE_RETRY_DELAY`] wait between them. Any non-throttle failure
/// propagates immediately; after retries exhaust, the last throttled failure
/// propagates unchanged.
pub async fn execute_with_retry<T, F, Fut>(mut work: F) -> StoreResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = StoreResult<T>>,
{
    let mut attempt: u32 = 0;
    loop {
        match work().await {
            Err(err) if err.is_throttled() && attempt < MAX_THROTTLE_RETRIES => {
                attempt += 1;
                tracing::debug!(attempt, "throttled, waiting before retry");
                tokio::time::sleep(THROTTLE_RETRY_DELAY).await;
            }
            outcome => return outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::pin::Pin;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::error::{StoreError, TransientError};

    type BoxedWork = Pin<Box<dyn Future<Output = StoreResult<u32>> + Send>>;

    fn throttle_then_succeed(failures: u32) -> (Arc<AtomicU32>, impl FnMut() -> BoxedWork) {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);
        let work = move || {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            Box::pin(async move {
                if n <= failures {
                    Err(StoreError::throttled("429"))
                } else {
                    Ok(n)
                }
            }) as BoxedWork
        };
        (calls, work)
    }

    #[tokio::test(start_paused = true)]
    async fn test_succeeds_on_fourth_attempt() {
        let (calls, work) = throttle_then_succeed(3);
        let result = execute_with_retry(work).await.unwrap();
        assert_eq!(result, 4);
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausted_retries_surface_last_throttle() {
        let (calls, work) = throttle_then_succeed(10);
        let err = execute_with_retry(work).await.unwrap_err();
        assert!(err.is_throttled());
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_non_throttle_failure_is_not_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);
        let err = execute_with_retry(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async {
                Err::<u32, _>(StoreError::Transient(TransientError::Request {
                    message: "boom".to_string(),
                }))
            }
        })
        .await
        .unwrap_err();

        assert!(matches!(err, StoreError::Transient(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_first_attempt_success_does_not_sleep() {
        // No paused clock here: an immediate success never reaches the timer.
        let result = execute_with_retry(|| async { Ok(7) }).await.unwrap();
        assert_eq!(result, 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fixed_delay_between_attempts() {
        let start = tokio::time::Instant::now();
        let (_, work) = throttle_then_succeed(2);
        execute_with_retry(work).await.unwrap();
        assert_eq!(start.elapsed(), THROTTLE_RETRY_DELAY * 2);
    }
}
