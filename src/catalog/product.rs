//! Product records and product-level helpers.

use serde::{Deserialize, Serialize};

use crate::catalog::item::CatalogItem;
use crate::pricing;

/// A product in the storefront catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Current price. Must be non-negative.
    pub price: f64,
    /// Pre-discount price, when the product is on sale. When present it is
    /// expected to be greater than or equal to `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Image reference for the presentation layer.
    pub image: String,
    /// Average rating in `[0, 5]`.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Marketing description.
    pub description: String,
    /// Category name, matched case-sensitively by the category filter.
    pub category: String,
    /// Whether the current user has wishlisted the product.
    #[serde(default)]
    pub is_liked: bool,
}

impl Product {
    /// Discount as a whole percentage, 0 when not on sale.
    pub fn discount_percent(&self) -> u8 {
        pricing::discount_percent(self.price, self.original_price)
    }
}

impl CatalogItem for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn primary_text(&self) -> &str {
        &self.name
    }

    fn secondary_text(&self) -> &str {
        &self.description
    }

    fn grouping_key(&self) -> &str {
        &self.category
    }

    fn rating(&self) -> f32 {
        self.rating
    }
}

/// Compute the next wishlist state for a product.
///
/// Pure negation; the caller owns where the new value is stored and
/// whether the user is notified of the change.
pub fn toggle_like(current: bool) -> bool {
    !current
}
