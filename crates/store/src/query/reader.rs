//! Feed draining.

use tokio_util::sync::CancellationToken;

use crate::client::FeedSource;
use crate::error::{StoreError, StoreResult};

/// Fully drains a feed into an ordered, in-memory sequence.
///
/// The cancellation token is checked before every page fetch; once signalled,
/// no further pages are requested and accumulated results are discarded in
/// favour of [`StoreError::Cancelled`]. The returned sequence preserves
/// server-reported page order and its length equals the sum of all page
/// sizes.
pub async fn drain<T>(
    mut feed: Box<dyn FeedSource<T>>,
    cancel: &CancellationToken,
) -> StoreResult<Vec<T>> {
    let mut collected = Vec::new();

    while feed.has_more() {
        if cancel.is_cancelled() {
            tracing::debug!(
                collected = collected.len(),
                "drain cancelled, discarding partial results"
            );
            return Err(StoreError::Cancelled);
        }

        let page = feed.next_page().await?;
        tracing::trace!(page_len = page.len(), "drained feed page");
        collected.extend(page.into_items());
    }

    Ok(collected)
}
