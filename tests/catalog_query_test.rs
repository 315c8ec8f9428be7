//! Integration tests for product catalog queries.

use vitrine::catalog::Product;
use vitrine::error::Result;
use vitrine::query::{CatalogQueryEngine, QueryDescriptor, SortKey};

fn product(
    id: &str,
    name: &str,
    price: f64,
    original_price: Option<f64>,
    rating: f32,
    description: &str,
    category: &str,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        original_price,
        image: format!("product-{id}.jpg"),
        rating,
        review_count: 100,
        description: description.to_string(),
        category: category.to_string(),
        is_liked: false,
    }
}

fn storefront_catalog() -> Vec<Product> {
    vec![
        product(
            "1",
            "Premium Wireless Earbuds",
            149.0,
            Some(199.0),
            4.8,
            "Crystal-clear audio with active noise cancellation and 30-hour battery life.",
            "Audio",
        ),
        product(
            "2",
            "Pro Smartphone",
            899.0,
            Some(1099.0),
            4.9,
            "Cutting-edge camera technology and a blazing-fast processor.",
            "Mobile",
        ),
        product(
            "3",
            "Smart Fitness Watch",
            299.0,
            None,
            4.7,
            "Track your health and fitness with advanced sensors and GPS.",
            "Wearables",
        ),
        product(
            "4",
            "Ultra-Thin Laptop",
            1299.0,
            Some(1499.0),
            4.6,
            "Powerful performance meets elegant design in this ultra-portable laptop.",
            "Computing",
        ),
        product(
            "5",
            "Wireless Gaming Mouse",
            79.0,
            Some(99.0),
            4.5,
            "High-precision gaming mouse with ultra-responsive wireless connectivity.",
            "Computing",
        ),
        product(
            "6",
            "Smart Home Speaker",
            199.0,
            None,
            4.4,
            "Voice-controlled speaker with seamless smart home integration.",
            "Audio",
        ),
    ]
}

#[test]
fn test_search_is_case_insensitive() {
    let catalog = storefront_catalog();
    let engine = CatalogQueryEngine::new();

    let descriptor = QueryDescriptor::new().with_search_term("EARBUDS");
    let result = engine.execute(&catalog, &descriptor);
    assert_eq!(result.count, 1);
    assert_eq!(result.items[0].name, "Premium Wireless Earbuds");
}

#[test]
fn test_search_covers_name_and_description() {
    let catalog = storefront_catalog();
    let engine = CatalogQueryEngine::new();

    // "camera" appears only in the smartphone's description.
    let descriptor = QueryDescriptor::new().with_search_term("camera");
    let result = engine.execute(&catalog, &descriptor);
    assert_eq!(result.count, 1);
    assert_eq!(result.items[0].id, "2");
}

#[test]
fn test_category_filter_is_case_sensitive() {
    let catalog = storefront_catalog();
    let engine = CatalogQueryEngine::new();

    let descriptor = QueryDescriptor::new().with_category("Audio");
    let result = engine.execute(&catalog, &descriptor);
    assert_eq!(result.count, 2);

    // Lower-cased category names match nothing; this asymmetry with
    // free-text search follows the source data convention.
    let descriptor = QueryDescriptor::new().with_category("audio");
    let result = engine.execute(&catalog, &descriptor);
    assert_eq!(result.count, 0);
}

#[test]
fn test_search_and_category_compose_with_and() {
    let catalog = storefront_catalog();
    let engine = CatalogQueryEngine::new();

    let descriptor = QueryDescriptor::new()
        .with_search_term("wireless")
        .with_category("Computing");
    let result = engine.execute(&catalog, &descriptor);
    assert_eq!(result.count, 1);
    assert_eq!(result.items[0].name, "Wireless Gaming Mouse");
}

#[test]
fn test_unknown_category_yields_empty_result_not_error() {
    let catalog = storefront_catalog();
    let engine = CatalogQueryEngine::new();

    let descriptor = QueryDescriptor::new().with_category("Appliances");
    let result = engine.execute(&catalog, &descriptor);
    assert!(result.is_empty());
}

#[test]
fn test_filter_is_idempotent() {
    let catalog = storefront_catalog();
    let engine = CatalogQueryEngine::new();

    let descriptor = QueryDescriptor::new().with_search_term("smart");
    let once = engine.filter(&catalog, &descriptor);
    let twice = engine.filter(&once, &descriptor);
    assert_eq!(once, twice);
}

#[test]
fn test_filter_preserves_catalog_order() {
    let catalog = storefront_catalog();
    let engine = CatalogQueryEngine::new();

    let descriptor = QueryDescriptor::new().with_search_term("wireless");
    let ids: Vec<String> = engine
        .execute(&catalog, &descriptor)
        .items
        .into_iter()
        .map(|p| p.id)
        .collect();

    // Output order must be a subsequence of the catalog order.
    let full = ["1", "2", "3", "4", "5", "6"];
    let mut cursor = full.iter();
    for id in &ids {
        assert!(cursor.any(|candidate| *candidate == id.as_str()));
    }
}

#[test]
fn test_default_descriptor_returns_everything_in_order() {
    let catalog = storefront_catalog();
    let engine = CatalogQueryEngine::new();

    let result = engine.execute(&catalog, &QueryDescriptor::new());
    assert_eq!(result.count, catalog.len());
    assert_eq!(result.items, catalog);
}

#[test]
fn test_product_sort_by_rating() {
    let catalog = storefront_catalog();
    let engine = CatalogQueryEngine::new();

    let descriptor = QueryDescriptor::new().sorted_by(SortKey::Highest);
    let result = engine.execute(&catalog, &descriptor);
    let ratings: Vec<f32> = result.items.iter().map(|p| p.rating).collect();
    assert_eq!(ratings, vec![4.9, 4.8, 4.7, 4.6, 4.5, 4.4]);
}

#[test]
fn test_descriptor_from_ui_json() -> Result<()> {
    let catalog = storefront_catalog();
    let engine = CatalogQueryEngine::new();

    let descriptor = QueryDescriptor::from_json(
        r#"{"searchTerm":"speaker","categoryFilter":"Audio","sortKey":"highest"}"#,
    )?;
    let result = engine.execute(&catalog, &descriptor);
    assert_eq!(result.count, 1);
    assert_eq!(result.items[0].name, "Smart Home Speaker");

    Ok(())
}

#[test]
fn test_discounts_across_catalog() {
    let catalog = storefront_catalog();

    let discounts: Vec<u8> = catalog.iter().map(|p| p.discount_percent()).collect();
    assert_eq!(discounts, vec![25, 18, 0, 13, 20, 0]);
}
