//! The queryable shape shared by products and reviews.

use chrono::NaiveDate;

/// Trait for records that can be filtered and sorted by the query engine.
///
/// Products and reviews stay separate concrete types; this trait is the
/// query contract they share. The two text fields feed case-insensitive
/// substring search, the grouping key feeds case-sensitive category
/// filtering, and the optional accessors feed the sort comparators.
pub trait CatalogItem {
    /// Unique identifier within the collection.
    fn id(&self) -> &str;

    /// Primary searchable text (product name, review title).
    fn primary_text(&self) -> &str;

    /// Secondary searchable text (product description, review comment).
    fn secondary_text(&self) -> &str;

    /// Equality-filterable grouping key (product category, review's
    /// product name). Matched case-sensitively.
    fn grouping_key(&self) -> &str;

    /// Rating in `[0, 5]`.
    fn rating(&self) -> f32;

    /// Date used by the `Newest`/`Oldest` comparators, if the record
    /// carries one. Items without a date compare equal and keep their
    /// input order.
    fn date(&self) -> Option<NaiveDate> {
        None
    }

    /// Helpfulness count used by the `Helpful` comparator, if present.
    fn helpful_count(&self) -> Option<u32> {
        None
    }
}
