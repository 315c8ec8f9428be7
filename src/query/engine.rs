//! The catalog query engine: filter, sort, execute.

use crate::catalog::CatalogItem;
use crate::query::descriptor::{CategoryFilter, QueryDescriptor, RatingFilter, SortKey};
use crate::query::QueryResult;

/// Stateless engine producing filtered, ordered views of a catalog
/// collection.
///
/// The engine holds no state: every call is a pure function of the
/// collection snapshot and the descriptor, so one engine value can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogQueryEngine;

impl CatalogQueryEngine {
    /// Create a new engine.
    pub fn new() -> Self {
        CatalogQueryEngine
    }

    /// Check a single item against every predicate of the descriptor.
    ///
    /// Predicates compose with logical AND: free-text search is
    /// case-insensitive over the primary and secondary text fields,
    /// category matching is case-sensitive equality on the grouping key,
    /// and rating matching compares the rating rounded to the nearest
    /// integer for exact equality.
    pub fn matches<T: CatalogItem>(&self, item: &T, descriptor: &QueryDescriptor) -> bool {
        if !descriptor.search_term.is_empty() {
            let needle = descriptor.search_term.to_lowercase();
            let in_primary = item.primary_text().to_lowercase().contains(&needle);
            let in_secondary = item.secondary_text().to_lowercase().contains(&needle);
            if !in_primary && !in_secondary {
                return false;
            }
        }

        if let CategoryFilter::Category(category) = &descriptor.category_filter {
            if item.grouping_key() != category {
                return false;
            }
        }

        if let RatingFilter::Exactly(rating) = descriptor.rating_filter {
            if item.rating().round() as i32 != i32::from(rating) {
                return false;
            }
        }

        true
    }

    /// Filter a collection, preserving input order.
    ///
    /// Filter values absent from the data yield zero matches, never an
    /// error: "no results" is a normal outcome here.
    pub fn filter<T>(&self, items: &[T], descriptor: &QueryDescriptor) -> Vec<T>
    where
        T: CatalogItem + Clone,
    {
        items
            .iter()
            .filter(|item| self.matches(*item, descriptor))
            .cloned()
            .collect()
    }

    /// Sort a collection by the given key into a new sequence.
    ///
    /// The input is never mutated. Every comparator is stable, so items
    /// with equal keys keep their relative input order; items missing the
    /// relevant key (e.g. products under a date sort) compare equal among
    /// themselves and sort after dated items on `Newest`.
    pub fn sort<T>(&self, items: &[T], key: SortKey) -> Vec<T>
    where
        T: CatalogItem + Clone,
    {
        let mut sorted = items.to_vec();
        match key {
            SortKey::Newest => sorted.sort_by(|a, b| b.date().cmp(&a.date())),
            SortKey::Oldest => sorted.sort_by(|a, b| a.date().cmp(&b.date())),
            SortKey::Highest => sorted.sort_by(|a, b| b.rating().total_cmp(&a.rating())),
            SortKey::Lowest => sorted.sort_by(|a, b| a.rating().total_cmp(&b.rating())),
            SortKey::Helpful => sorted.sort_by(|a, b| b.helpful_count().cmp(&a.helpful_count())),
            SortKey::Unsorted => {}
        }
        sorted
    }

    /// Execute a full query: filter, then sort, then count.
    pub fn execute<T>(&self, items: &[T], descriptor: &QueryDescriptor) -> QueryResult<T>
    where
        T: CatalogItem + Clone,
    {
        let filtered = self.filter(items, descriptor);
        let sorted = self.sort(&filtered, descriptor.sort_key);
        QueryResult::new(sorted)
    }
}
