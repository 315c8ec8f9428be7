//! Query system for filtering and sorting catalog collections.

pub mod descriptor;
pub mod engine;

pub use self::descriptor::{CategoryFilter, QueryDescriptor, RatingFilter, SortKey};
pub use self::engine::CatalogQueryEngine;

use serde::{Deserialize, Serialize};

/// The filtered, ordered view produced by a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult<T> {
    /// Matching items, in filter-then-sort order.
    pub items: Vec<T>,
    /// Number of matching items.
    pub count: usize,
}

impl<T> QueryResult<T> {
    /// Wrap an ordered sequence of matches.
    pub fn new(items: Vec<T>) -> Self {
        let count = items.len();
        QueryResult { items, count }
    }

    /// Check whether the query matched anything.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
