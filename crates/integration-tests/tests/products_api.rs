//! Integration tests for the catalog API.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::Value;

use snkrs_integration_tests::TestClient;

fn slugs(products: &Value) -> Vec<&str> {
    products
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p.get("slug").and_then(Value::as_str).unwrap())
        .collect()
}

// ============================================================================
// Listing & Filtering
// ============================================================================

#[tokio::test]
async fn test_listing_returns_the_full_catalog_in_shelf_order() {
    let mut client = TestClient::new();

    let resp = client.get("/api/products").await;
    assert_eq!(resp.status, StatusCode::OK);

    let slugs = slugs(resp.json());
    assert_eq!(slugs.len(), 12);
    assert_eq!(slugs.first().copied(), Some("nike-air-max-90"));
    assert_eq!(slugs.last().copied(), Some("new-balance-574"));
}

#[tokio::test]
async fn test_listing_criteria_combine_with_and() {
    let mut client = TestClient::new();

    let resp = client.get("/api/products?brand=nike&maxPrice=13000").await;
    assert_eq!(resp.status, StatusCode::OK);

    let products = resp.json().as_array().unwrap().clone();
    assert_eq!(products.len(), 2);
    for product in &products {
        assert_eq!(product.get("brand").and_then(Value::as_str), Some("Nike"));
        assert!(product.get("price").and_then(Value::as_u64).unwrap() <= 13000);
    }
}

#[tokio::test]
async fn test_listing_brand_filter_is_case_insensitive() {
    let mut client = TestClient::new();

    let resp = client.get("/api/products?brand=nIkE").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json().as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_listing_filters_by_category() {
    let mut client = TestClient::new();

    let resp = client.get("/api/products?category=running").await;
    assert_eq!(resp.status, StatusCode::OK);

    let products = resp.json().as_array().unwrap().clone();
    assert_eq!(products.len(), 2);
    for product in &products {
        assert_eq!(
            product.get("category").and_then(Value::as_str),
            Some("running")
        );
    }
}

#[tokio::test]
async fn test_listing_min_price_bound_is_inclusive() {
    let mut client = TestClient::new();

    let resp = client.get("/api/products?minPrice=24990").await;
    assert_eq!(resp.status, StatusCode::OK);

    let products = resp.json().as_array().unwrap().clone();
    assert!(!products.is_empty());
    for product in &products {
        assert_eq!(product.get("price").and_then(Value::as_u64), Some(24990));
    }
}

#[tokio::test]
async fn test_listing_search_matches_name_or_brand() {
    let mut client = TestClient::new();

    let resp = client.get("/api/products?search=JORDAN").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json().as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_listing_sorts_by_price() {
    let mut client = TestClient::new();

    let resp = client.get("/api/products?sort=price-asc").await;
    let prices: Vec<u64> = resp
        .json()
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p.get("price").and_then(Value::as_u64).unwrap())
        .collect();
    assert!(prices.windows(2).all(|w| w.first() <= w.last()));
    assert_eq!(prices.first().copied(), Some(10990));

    let resp = client.get("/api/products?sort=price-desc").await;
    let top = resp
        .json()
        .as_array()
        .unwrap()
        .first()
        .and_then(|p| p.get("price"))
        .and_then(Value::as_u64);
    assert_eq!(top, Some(24990));
}

#[tokio::test]
async fn test_listing_unknown_sort_falls_back_to_shelf_order() {
    let mut client = TestClient::new();

    let resp = client.get("/api/products?sort=garbage").await;
    assert_eq!(resp.status, StatusCode::OK);

    let slugs = slugs(resp.json());
    assert_eq!(slugs.len(), 12);
    assert_eq!(slugs.first().copied(), Some("nike-air-max-90"));
}

// ============================================================================
// Featured Shelf
// ============================================================================

#[tokio::test]
async fn test_featured_shelf_has_eight_products() {
    let mut client = TestClient::new();

    let resp = client.get("/api/products/featured").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json().as_array().unwrap().len(), 8);
}

// ============================================================================
// Product Detail
// ============================================================================

#[tokio::test]
async fn test_product_detail_by_slug() {
    let mut client = TestClient::new();

    let resp = client.get("/api/products/nike-air-max-90").await;
    assert_eq!(resp.status, StatusCode::OK);

    let product = resp.json();
    assert_eq!(
        product.get("name").and_then(Value::as_str),
        Some("Nike Air Max 90")
    );
    assert_eq!(product.get("price").and_then(Value::as_u64), Some(14990));
    let sizes = product.get("sizes").and_then(Value::as_array).unwrap();
    assert!(sizes.contains(&Value::from(42)));
}

#[tokio::test]
async fn test_product_detail_unknown_slug_is_not_found() {
    let mut client = TestClient::new();

    let resp = client.get("/api/products/air-nonexistent-9000").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.error_message(), "Товар не найден");
}

#[tokio::test]
async fn test_product_detail_hostile_slugs_are_not_found() {
    let mut client = TestClient::new();

    for uri in [
        "/api/products/..%2F..%2Fetc%2Fpasswd",
        "/api/products/%3Cscript%3Ealert(1)%3C%2Fscript%3E",
        "/api/products/NIKE-AIR-MAX-90",
    ] {
        let resp = client.get(uri).await;
        assert_eq!(resp.status, StatusCode::NOT_FOUND, "uri {uri}");
    }
}

// ============================================================================
// Directories
// ============================================================================

#[tokio::test]
async fn test_brand_directory() {
    let mut client = TestClient::new();

    let resp = client.get("/api/brands").await;
    assert_eq!(resp.status, StatusCode::OK);

    let brands = resp.json().as_array().unwrap().clone();
    assert_eq!(brands.len(), 6);
    assert!(
        brands
            .iter()
            .any(|b| b.get("name").and_then(Value::as_str) == Some("Nike"))
    );
}

#[tokio::test]
async fn test_category_directory_includes_the_all_entry() {
    let mut client = TestClient::new();

    let resp = client.get("/api/categories").await;
    assert_eq!(resp.status, StatusCode::OK);

    let categories = resp.json().as_array().unwrap().clone();
    assert_eq!(categories.len(), 3);
    assert!(
        categories
            .iter()
            .any(|c| c.get("slug").and_then(Value::as_str) == Some(""))
    );
}
