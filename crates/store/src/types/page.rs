//! One unit of server-returned feed results.

/// A page of results from a cursor-based feed.
///
/// Items arrive in server-reported order, which reflects the sort criterion
/// bound to the feed, if any. The continuation marker is opaque; the feed
/// handle, not the page, decides whether more results are available.
#[derive(Debug, Clone)]
pub struct FeedPage<T> {
    items: Vec<T>,
    continuation: Option<String>,
}

impl<T> FeedPage<T> {
    /// Builds a page with a continuation marker for a following page.
    pub fn new(items: Vec<T>, continuation: Option<String>) -> Self {
        Self {
            items,
            continuation,
        }
    }

    /// Builds the final page of a feed.
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            continuation: None,
        }
    }

    /// The items in server order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page, returning its items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// The opaque continuation marker, if the store returned one.
    pub fn continuation(&self) -> Option<&str> {
        self.continuation.as_deref()
    }

    /// Number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the page carries no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_accessors() {
        let page = FeedPage::new(vec![1, 2, 3], Some("cursor-1".to_string()));
        assert_eq!(page.len(), 3);
        assert!(!page.is_empty());
        assert_eq!(page.continuation(), Some("cursor-1"));
        assert_eq!(page.into_items(), vec![1, 2, 3]);
    }

    #[test]
    fn test_last_page_has_no_continuation() {
        let page: FeedPage<i32> = FeedPage::last(vec![]);
        assert!(page.is_empty());
        assert_eq!(page.continuation(), None);
    }
}
