//! Opaque filter and sort criteria.
//!
//! The core never introspects a filter or a sort key; both are caller-supplied
//! callables that the injected client translates into whatever native
//! filter/sort mechanism the target store offers. A sort key projection is
//! reified as an ascending comparator so criteria stay object-safe without a
//! key type parameter.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// An opaque boolean predicate over `T`. Absent means "match all".
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Builds a predicate that accepts every record.
///
/// A query with no filter must behave identically to one carrying this
/// predicate.
pub fn match_all<T>() -> Predicate<T> {
    Arc::new(|_| true)
}

/// Wraps a closure as a [`Predicate`].
pub fn predicate<T, F>(filter: F) -> Predicate<T>
where
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Arc::new(filter)
}

/// Direction of an ordered scan.
///
/// Defaults to descending, matching the common "most recent first" read
/// pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest sort key first.
    Ascending,
    /// Largest sort key first.
    #[default]
    Descending,
}

/// An opaque sort key projection plus a direction.
pub struct SortSpec<T> {
    compare: Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>,
    direction: SortDirection,
}

impl<T> SortSpec<T> {
    /// Builds a sort over the given key projection and direction.
    pub fn by_key<K, F>(key: F, direction: SortDirection) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self {
            compare: Arc::new(move |a, b| key(a).cmp(&key(b))),
            direction,
        }
    }

    /// Descending sort over the given key projection.
    pub fn descending<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::by_key(key, SortDirection::Descending)
    }

    /// Ascending sort over the given key projection.
    pub fn ascending<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::by_key(key, SortDirection::Ascending)
    }

    /// The requested direction.
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Compares two records in ascending key order, ignoring direction.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare)(a, b)
    }

    /// Compares two records with the direction applied.
    pub fn compare_directed(&self, a: &T, b: &T) -> Ordering {
        let ordering = (self.compare)(a, b);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl<T> Clone for SortSpec<T> {
    fn clone(&self) -> Self {
        Self {
            compare: Arc::clone(&self.compare),
            direction: self.direction,
        }
    }
}

impl<T> fmt::Debug for SortSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortSpec")
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

/// The filter and sort criteria bound to one feed-producing query.
///
/// Handed to the injected client, which translates them into its native
/// query capability.
pub struct QueryCriteria<T> {
    /// The predicate, or `None` for a full scan.
    pub filter: Option<Predicate<T>>,
    /// The requested ordering, or `None` for feed order.
    pub sort: Option<SortSpec<T>>,
}

impl<T> QueryCriteria<T> {
    /// Criteria for an unfiltered, unordered full scan.
    pub fn unfiltered() -> Self {
        Self {
            filter: None,
            sort: None,
        }
    }

    /// Sets the filter.
    pub fn with_filter(mut self, filter: Predicate<T>) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Sets the sort.
    pub fn with_sort(mut self, sort: SortSpec<T>) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Evaluates the filter against one record; an absent filter matches all.
    pub fn matches(&self, record: &T) -> bool {
        self.filter.as_ref().is_none_or(|filter| filter(record))
    }
}

impl<T> Clone for QueryCriteria<T> {
    fn clone(&self) -> Self {
        Self {
            filter: self.filter.as_ref().map(Arc::clone),
            sort: self.sort.clone(),
        }
    }
}

impl<T> Default for QueryCriteria<T> {
    fn default() -> Self {
        Self::unfiltered()
    }
}

impl<T> fmt::Debug for QueryCriteria<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryCriteria")
            .field("filter", &self.filter.as_ref().map(|_| "<predicate>"))
            .field("sort", &self.sort)
            .finish()
    }
}
