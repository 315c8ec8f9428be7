//! Review records and review submission drafts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::item::CatalogItem;

/// A customer review of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique review identifier.
    pub id: String,
    /// Name of the reviewed product; the grouping key for review queries.
    pub product_name: String,
    /// Identifier of the reviewed product.
    pub product_id: String,
    /// Display name of the reviewer.
    pub user_name: String,
    /// Avatar reference for the presentation layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_avatar: Option<String>,
    /// Star rating. 1 to 5 by data invariant.
    pub rating: u8,
    /// Review headline.
    pub title: String,
    /// Review body.
    pub comment: String,
    /// Submission date, used by the `Newest`/`Oldest` comparators.
    pub date: NaiveDate,
    /// Number of "helpful" votes.
    pub helpful_count: u32,
    /// Whether the review comes from a verified purchase.
    pub verified: bool,
    /// Attached image references.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

impl CatalogItem for Review {
    fn id(&self) -> &str {
        &self.id
    }

    fn primary_text(&self) -> &str {
        &self.title
    }

    fn secondary_text(&self) -> &str {
        &self.comment
    }

    fn grouping_key(&self) -> &str {
        &self.product_name
    }

    fn rating(&self) -> f32 {
        f32::from(self.rating)
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }

    fn helpful_count(&self) -> Option<u32> {
        Some(self.helpful_count)
    }
}

/// A review being composed, before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDraft {
    /// Review headline. Whitespace-only counts as missing.
    pub title: String,
    /// Star rating; 0 means not yet chosen.
    pub rating: u8,
    /// Review body. Whitespace-only counts as missing.
    pub comment: String,
}

/// A field of a [`ReviewDraft`] that submission requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Title,
    Rating,
    Comment,
}

/// The outcome of submitting a review draft.
///
/// Whether and how to notify the user is entirely the caller's concern;
/// the engine only reports the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Title, rating, and comment are all present.
    Accepted,
    /// One or more required fields are missing, in field order.
    Incomplete { missing: Vec<DraftField> },
}

impl ReviewDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        ReviewDraft::default()
    }

    /// Check whether every required field is present.
    pub fn is_complete(&self) -> bool {
        matches!(self.outcome(), SubmitOutcome::Accepted)
    }

    /// Evaluate the draft for submission.
    pub fn outcome(&self) -> SubmitOutcome {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push(DraftField::Title);
        }
        if self.rating == 0 {
            missing.push(DraftField::Rating);
        }
        if self.comment.trim().is_empty() {
            missing.push(DraftField::Comment);
        }

        if missing.is_empty() {
            SubmitOutcome::Accepted
        } else {
            SubmitOutcome::Incomplete { missing }
        }
    }
}
