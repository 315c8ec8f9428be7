//! Derived aggregate statistics over review collections.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::Review;
use crate::error::{Result, VitrineError};

/// Summary statistics for a review collection: average rating and a
/// per-star histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Mean of all ratings.
    pub average: f64,
    /// Review count per star value; every key in 1..=5 is present, zero
    /// when no review carries that rating.
    pub count_by_rating: AHashMap<u8, u64>,
    /// Total number of reviews aggregated. Always greater than zero.
    pub total: u64,
}

impl AggregateStats {
    /// Compute statistics over a review collection.
    ///
    /// Fails fast with `InvalidArgument` on an empty collection (an
    /// average of nothing is meaningless, not zero) and on any rating
    /// outside 1..=5, which is a data-integrity violation rather than a
    /// queryable value.
    pub fn compute(reviews: &[Review]) -> Result<AggregateStats> {
        if reviews.is_empty() {
            return Err(VitrineError::invalid_argument(
                "cannot aggregate an empty review collection",
            ));
        }

        let mut count_by_rating: AHashMap<u8, u64> = (1..=5).map(|r| (r, 0)).collect();
        let mut sum: u64 = 0;

        for review in reviews {
            match count_by_rating.get_mut(&review.rating) {
                Some(count) => *count += 1,
                None => {
                    return Err(VitrineError::invalid_argument(format!(
                        "rating {} on review {} is outside 1..=5",
                        review.rating, review.id
                    )));
                }
            }
            sum += u64::from(review.rating);
        }

        Ok(AggregateStats {
            average: sum as f64 / reviews.len() as f64,
            count_by_rating,
            total: reviews.len() as u64,
        })
    }

    /// Number of reviews with the given star value.
    pub fn count_for(&self, rating: u8) -> u64 {
        self.count_by_rating.get(&rating).copied().unwrap_or(0)
    }

    /// Share of reviews with the given star value, as a percentage.
    /// This is the histogram bar width in the presentation layer.
    pub fn percent_for(&self, rating: u8) -> f64 {
        self.count_for(rating) as f64 / self.total as f64 * 100.0
    }
}
