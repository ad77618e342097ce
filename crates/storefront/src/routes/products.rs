//! Product catalog route handlers.
//!
//! Read-only JSON views over the in-memory catalog. Filtering happens
//! server-side; handlers only translate query parameters into
//! [`FilterParams`].

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use crate::catalog::{Brand, Category, FilterParams, Product, SortOrder};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Catalog filter query parameters.
///
/// Unknown `sort` values fall back to the default ordering; absent filters
/// match everything.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    pub brand: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

impl From<CatalogQuery> for FilterParams {
    fn from(query: CatalogQuery) -> Self {
        Self {
            brand: query.brand,
            category: query.category,
            min_price: query.min_price,
            max_price: query.max_price,
            search: query.search,
            sort: query
                .sort
                .as_deref()
                .map_or_else(SortOrder::default, SortOrder::parse),
        }
    }
}

/// List products matching the query filters.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<Vec<Product>> {
    let params = FilterParams::from(query);
    let products = state
        .catalog()
        .filter(&params)
        .into_iter()
        .cloned()
        .collect();
    Json(products)
}

/// List the featured products shown on the home page.
#[instrument(skip(state))]
pub async fn featured(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog().featured().to_vec())
}

/// Look up a single product by slug.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Product>> {
    state
        .catalog()
        .lookup(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Товар не найден".to_string()))
}

/// List all brands.
#[instrument(skip(state))]
pub async fn brands(State(state): State<AppState>) -> Json<Vec<Brand>> {
    Json(state.catalog().brands().to_vec())
}

/// List all categories.
#[instrument(skip(state))]
pub async fn categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.catalog().categories().to_vec())
}
