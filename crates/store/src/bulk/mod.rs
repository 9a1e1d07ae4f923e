//! Concurrent bulk writes.
//!
//! [`chunk`] bounds concurrency by splitting the input into contiguous
//! batches, [`retry`] wraps each upsert with bounded retry-on-throttle, and
//! [`engine`] composes the two into a partial-failure-tolerant bulk upsert.

pub mod chunk;
pub mod engine;
pub mod retry;

pub use chunk::{Chunks, chunks};
pub use engine::bulk_upsert;
pub use retry::{MAX_THROTTLE_RETRIES, THROTTLE_RETRY_DELAY, execute_with_retry};
