//! Test infrastructure for the store layer.
//!
//! Provides an in-memory [`MemoryClient`] implementing the injected client
//! contract: paginated feeds with a configurable page size, point writes, and
//! an injectable throttling signal for retry tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use serde_json::json;

use atoll_store::{
    DocumentClient, FeedPage, FeedSource, PartitionKey, PatchOperation, QueryCriteria, StoreError,
    StoreResult, TransientError, WriteResult,
};

/// The record type used across integration tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDoc {
    pub id: String,
    pub tenant: String,
    pub score: i64,
}

/// Builds a test document.
pub fn doc(id: &str, tenant: &str, score: i64) -> TestDoc {
    TestDoc {
        id: id.to_string(),
        tenant: tenant.to_string(),
        score,
    }
}

/// In-memory document client with cursor-style pagination.
pub struct MemoryClient {
    docs: Mutex<Vec<TestDoc>>,
    page_size: usize,
    throttle_remaining: AtomicU32,
    upsert_calls: AtomicU32,
    page_fetches: Arc<AtomicU32>,
}

impl MemoryClient {
    pub fn new(page_size: usize) -> Self {
        Self {
            docs: Mutex::new(Vec::new()),
            page_size,
            throttle_remaining: AtomicU32::new(0),
            upsert_calls: AtomicU32::new(0),
            page_fetches: Arc::new(AtomicU32::new(0)),
        }
    }

    pub fn with_docs(self, docs: Vec<TestDoc>) -> Self {
        *self.docs.lock().unwrap() = docs;
        self
    }

    /// Makes the next `n` upsert calls fail with a throttling error.
    pub fn throttle_next_upserts(&self, n: u32) {
        self.throttle_remaining.store(n, Ordering::SeqCst);
    }

    pub fn upsert_calls(&self) -> u32 {
        self.upsert_calls.load(Ordering::SeqCst)
    }

    pub fn page_fetches(&self) -> u32 {
        self.page_fetches.load(Ordering::SeqCst)
    }

    /// A snapshot of the stored documents.
    pub fn stored(&self) -> Vec<TestDoc> {
        self.docs.lock().unwrap().clone()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.docs.lock().unwrap().iter().any(|d| d.id == id)
    }
}

struct MemoryFeed {
    pages: Vec<Vec<TestDoc>>,
    served: usize,
    fetch_counter: Arc<AtomicU32>,
}

#[async_trait]
impl FeedSource<TestDoc> for MemoryFeed {
    fn has_more(&self) -> bool {
        self.served < self.pages.len()
    }

    async fn next_page(&mut self) -> StoreResult<FeedPage<TestDoc>> {
        self.fetch_counter.fetch_add(1, Ordering::SeqCst);
        let items = self.pages[self.served].clone();
        self.served += 1;
        Ok(if self.served == self.pages.len() {
            FeedPage::last(items)
        } else {
            FeedPage::new(items, Some(format!("cursor-{}", self.served)))
        })
    }
}

#[async_trait]
impl DocumentClient<TestDoc> for MemoryClient {
    fn client_name(&self) -> &'static str {
        "memory"
    }

    fn query(&self, criteria: QueryCriteria<TestDoc>) -> Box<dyn FeedSource<TestDoc>> {
        let mut matched: Vec<TestDoc> = self
            .docs
            .lock()
            .unwrap()
            .iter()
            .filter(|d| criteria.matches(d))
            .cloned()
            .collect();

        if let Some(sort) = &criteria.sort {
            matched.sort_by(|a, b| sort.compare_directed(a, b));
        }

        // A feed always serves at least one page, like a real cursor that
        // reports exhaustion only after a fetch.
        let pages: Vec<Vec<TestDoc>> = if matched.is_empty() {
            vec![Vec::new()]
        } else {
            matched
                .chunks(self.page_size)
                .map(|page| page.to_vec())
                .collect()
        };

        Box::new(MemoryFeed {
            pages,
            served: 0,
            fetch_counter: Arc::clone(&self.page_fetches),
        })
    }

    async fn upsert(
        &self,
        item: TestDoc,
        _partition_key: &PartitionKey,
    ) -> StoreResult<WriteResult<TestDoc>> {
        self.upsert_calls.fetch_add(1, Ordering::SeqCst);

        let remaining = self.throttle_remaining.load(Ordering::SeqCst);
        if remaining > 0 {
            self.throttle_remaining.store(remaining - 1, Ordering::SeqCst);
            return Err(StoreError::throttled("request rate too large"));
        }

        let mut docs = self.docs.lock().unwrap();
        if let Some(existing) = docs.iter_mut().find(|d| d.id == item.id) {
            *existing = item.clone();
        } else {
            docs.push(item.clone());
        }

        Ok(WriteResult::new(item)
            .with_etag("\"mem-1\"")
            .with_request_charge(1.0))
    }

    async fn patch(
        &self,
        id: &str,
        _partition_key: &PartitionKey,
        operations: &[PatchOperation],
    ) -> StoreResult<WriteResult<TestDoc>> {
        let mut docs = self.docs.lock().unwrap();
        let doc = docs.iter_mut().find(|d| d.id == id).ok_or_else(|| {
            StoreError::Transient(TransientError::NotFound { id: id.to_string() })
        })?;

        for op in operations {
            match op {
                PatchOperation::Set { path, value } | PatchOperation::Replace { path, value }
                    if path == "/score" =>
                {
                    doc.score = value.as_i64().unwrap_or(doc.score);
                }
                PatchOperation::Increment { path, value } if path == "/score" => {
                    doc.score += *value as i64;
                }
                other => {
                    return Err(StoreError::Transient(TransientError::Request {
                        message: format!("unsupported patch path: {}", other.path()),
                    }));
                }
            }
        }

        Ok(WriteResult::new(doc.clone()).with_request_charge(1.0))
    }

    async fn delete(&self, id: &str, _partition_key: &PartitionKey) -> StoreResult<()> {
        let mut docs = self.docs.lock().unwrap();
        let before = docs.len();
        docs.retain(|d| d.id != id);
        if docs.len() == before {
            return Err(StoreError::Transient(TransientError::NotFound {
                id: id.to_string(),
            }));
        }
        Ok(())
    }
}

/// JSON value for a score patch.
pub fn score_value(score: i64) -> serde_json::Value {
    json!(score)
}
