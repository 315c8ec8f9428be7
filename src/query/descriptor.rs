//! Immutable query descriptors.
//!
//! A [`QueryDescriptor`] carries everything the engine needs for one query:
//! free-text search term, category filter, rating filter, and sort key.
//! The presentation layer that owned this as ambient UI state passes it
//! here explicitly, per call.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Category filter: either pass everything or match one category exactly.
///
/// Category matching is case-sensitive, unlike free-text search. The
/// asymmetry follows the source data convention and is pinned by tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Only items whose grouping key equals this value exactly.
    Category(String),
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => "all".to_string(),
            CategoryFilter::Category(category) => category,
        }
    }
}

/// Rating filter: either pass everything or match one star value exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RatingFilter {
    /// No rating restriction.
    #[default]
    All,
    /// Only items whose rating rounds to exactly this value (not >=).
    Exactly(u8),
}

impl From<String> for RatingFilter {
    fn from(value: String) -> Self {
        // Unparsable values fall back to no restriction.
        match value.parse::<u8>() {
            Ok(rating) => RatingFilter::Exactly(rating),
            Err(_) => RatingFilter::All,
        }
    }
}

impl From<RatingFilter> for String {
    fn from(filter: RatingFilter) -> Self {
        match filter {
            RatingFilter::All => "all".to_string(),
            RatingFilter::Exactly(rating) => rating.to_string(),
        }
    }
}

/// Sort key for query results.
///
/// Every comparator is stable: items with equal keys keep their input
/// order. An unrecognized key string parses to [`SortKey::Unsorted`],
/// which leaves the input order untouched; this is a defined fallback,
/// not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    /// Descending by date, most recent first.
    Newest,
    /// Ascending by date.
    Oldest,
    /// Descending by rating.
    Highest,
    /// Ascending by rating.
    Lowest,
    /// Descending by helpfulness count.
    Helpful,
    /// Identity: no reordering.
    #[default]
    Unsorted,
}

impl SortKey {
    /// Parse a sort-key string; unrecognized keys map to `Unsorted`.
    pub fn parse(value: &str) -> SortKey {
        match value {
            "newest" => SortKey::Newest,
            "oldest" => SortKey::Oldest,
            "highest" => SortKey::Highest,
            "lowest" => SortKey::Lowest,
            "helpful" => SortKey::Helpful,
            _ => SortKey::Unsorted,
        }
    }

    /// The string form used at the descriptor boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Highest => "highest",
            SortKey::Lowest => "lowest",
            SortKey::Helpful => "helpful",
            SortKey::Unsorted => "unsorted",
        }
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        SortKey::parse(&value)
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable value object describing one query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryDescriptor {
    /// Free-text search term; empty means no text restriction.
    pub search_term: String,
    /// Category filter.
    pub category_filter: CategoryFilter,
    /// Rating filter.
    pub rating_filter: RatingFilter,
    /// Sort key applied after filtering.
    pub sort_key: SortKey,
}

impl QueryDescriptor {
    /// Create a descriptor that matches everything in input order.
    pub fn new() -> Self {
        QueryDescriptor::default()
    }

    /// Set the search term.
    pub fn with_search_term<S: Into<String>>(mut self, term: S) -> Self {
        self.search_term = term.into();
        self
    }

    /// Restrict to one category (case-sensitive).
    pub fn with_category<S: Into<String>>(mut self, category: S) -> Self {
        self.category_filter = CategoryFilter::Category(category.into());
        self
    }

    /// Restrict to one star rating.
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating_filter = RatingFilter::Exactly(rating);
        self
    }

    /// Set the sort key.
    pub fn sorted_by(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }

    /// Deserialize a descriptor from its JSON form at the UI boundary.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the descriptor to its JSON form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
