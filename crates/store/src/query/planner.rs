//! Deterministic selection of a query execution shape.

use crate::client::{DocumentClient, FeedSource};
use crate::types::{Predicate, QueryCriteria, SortSpec, match_all};

/// The four execution shapes a plan can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryShape {
    /// No filter, no sort.
    FullScan,
    /// Filter only.
    Filtered,
    /// Sort only; the filter is treated as match-all.
    Ordered,
    /// Filter and sort.
    FilteredOrdered,
}

/// A query plan bound to optional filter and sort criteria.
///
/// Planning is pure: the plan performs no I/O until [`execute`](QueryPlan::execute)
/// hands its criteria to a client, and even then pages are only fetched on
/// demand.
pub struct QueryPlan<T> {
    criteria: QueryCriteria<T>,
    shape: QueryShape,
}

impl<T> QueryPlan<T> {
    /// Selects the execution shape for the given criteria.
    ///
    /// A sort without a filter scans the whole container: the absent filter
    /// is replaced by a match-all predicate so an ordered scan behaves
    /// identically whether the caller passed no filter or an always-true one.
    /// Direction travels inside the [`SortSpec`] and defaults to descending.
    pub fn new(filter: Option<Predicate<T>>, sort: Option<SortSpec<T>>) -> Self {
        let shape = match (&filter, &sort) {
            (None, None) => QueryShape::FullScan,
            (Some(_), None) => QueryShape::Filtered,
            (None, Some(_)) => QueryShape::Ordered,
            (Some(_), Some(_)) => QueryShape::FilteredOrdered,
        };

        let criteria = match shape {
            QueryShape::Ordered => QueryCriteria {
                filter: Some(match_all()),
                sort,
            },
            _ => QueryCriteria { filter, sort },
        };

        Self { criteria, shape }
    }

    /// The selected execution shape.
    pub fn shape(&self) -> QueryShape {
        self.shape
    }

    /// The criteria this plan will bind to a client.
    pub fn criteria(&self) -> &QueryCriteria<T> {
        &self.criteria
    }

    /// Binds the plan to a client, producing a lazy feed.
    pub fn execute<C>(&self, client: &C) -> Box<dyn FeedSource<T>>
    where
        T: Send + 'static,
        C: DocumentClient<T> + ?Sized,
    {
        tracing::debug!(
            client = client.client_name(),
            shape = ?self.shape,
            "binding query plan to feed"
        );
        client.query(self.criteria.clone())
    }
}
