//! Catalog data model: the records the query engine operates on.

pub mod item;
pub mod product;
pub mod review;

pub use self::item::CatalogItem;
pub use self::product::{Product, toggle_like};
pub use self::review::{DraftField, Review, ReviewDraft, SubmitOutcome};
