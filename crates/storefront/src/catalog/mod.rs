//! In-memory product catalog.
//!
//! The catalog is loaded once at startup, validated, and never mutated
//! afterwards. Lookup is exact by slug; filtering combines independently
//! optional criteria with logical AND and applies a stable sort.

pub mod data;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use snkrs_core::ProductId;

/// Lower bound of stocked EU sizes.
pub const MIN_SIZE: u8 = 35;
/// Upper bound of stocked EU sizes.
pub const MAX_SIZE: u8 = 50;
/// How many products the featured shelf shows.
const FEATURED_COUNT: usize = 8;

/// A product as sold in the shop.
///
/// Prices are whole rubles. `sizes` is the list of EU sizes the shop stocks
/// for this model, always within [`MIN_SIZE`]..=[`MAX_SIZE`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub brand: String,
    pub price: u32,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub description: String,
    pub category: String,
    pub sizes: Vec<u8>,
}

impl Product {
    /// Whether the shop stocks the given size for this product.
    #[must_use]
    pub fn offers_size(&self, size: u8) -> bool {
        self.sizes.contains(&size)
    }
}

/// A brand entry in the brand directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Brand {
    pub name: String,
    pub slug: String,
}

/// A category entry in the category directory.
///
/// The "all products" category uses an empty slug.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub slug: String,
}

/// Sort orders the catalog filter supports.
///
/// Unknown sort strings fall back to `Newest` (insertion order), so a bad
/// query parameter degrades to the default listing instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Insertion order (the default listing).
    #[default]
    Newest,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Alphabetical by name, case-insensitive.
    NameAsc,
}

impl SortOrder {
    /// Parse a sort string from a query parameter.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            "name-asc" => Self::NameAsc,
            _ => Self::Newest,
        }
    }
}

/// Filter criteria for the product listing.
///
/// Every field is independently optional; provided criteria combine with
/// logical AND. Text criteria are matched literally (never as patterns).
#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    /// Case-insensitive exact brand match.
    pub brand: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    /// Inclusive lower price bound (rubles).
    pub min_price: Option<u32>,
    /// Inclusive upper price bound (rubles).
    pub max_price: Option<u32>,
    /// Case-insensitive literal substring match against name or brand.
    pub search: Option<String>,
    /// Result ordering.
    pub sort: SortOrder,
}

/// Errors detected while validating the catalog at load time.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate product id: {0}")]
    DuplicateId(String),
    #[error("duplicate product slug: {0}")]
    DuplicateSlug(String),
    #[error("product {0} has no sizes")]
    NoSizes(String),
    #[error("product {0} stocks size {1}, outside the {MIN_SIZE}-{MAX_SIZE} range")]
    SizeOutOfRange(String, u8),
    #[error("product {0} has a zero price")]
    ZeroPrice(String),
}

/// Catalog store holding all products in memory.
///
/// Cheap to clone; the product list is shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
    by_slug: Arc<HashMap<String, usize>>,
    brands: Arc<Vec<Brand>>,
    categories: Arc<Vec<Category>>,
}

impl Catalog {
    /// Load the built-in demo catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the data violates catalog invariants
    /// (duplicate ids/slugs, missing or out-of-range sizes, zero prices).
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_products(data::all_products(), data::brands(), data::categories())
    }

    /// Build a catalog from explicit data, validating invariants.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on the first invariant violation found.
    pub fn from_products(
        products: Vec<Product>,
        brands: Vec<Brand>,
        categories: Vec<Category>,
    ) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        let mut by_slug = HashMap::new();

        for (index, product) in products.iter().enumerate() {
            if !ids.insert(product.id.clone()) {
                return Err(CatalogError::DuplicateId(product.id.to_string()));
            }
            if by_slug.insert(product.slug.clone(), index).is_some() {
                return Err(CatalogError::DuplicateSlug(product.slug.clone()));
            }
            if product.sizes.is_empty() {
                return Err(CatalogError::NoSizes(product.slug.clone()));
            }
            for &size in &product.sizes {
                if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
                    return Err(CatalogError::SizeOutOfRange(product.slug.clone(), size));
                }
            }
            if product.price == 0 {
                return Err(CatalogError::ZeroPrice(product.slug.clone()));
            }
        }

        Ok(Self {
            products: Arc::new(products),
            by_slug: Arc::new(by_slug),
            brands: Arc::new(brands),
            categories: Arc::new(categories),
        })
    }

    /// Look up a product by its exact slug.
    ///
    /// Case-sensitive; any non-matching input (including traversal-like or
    /// markup-like strings) is simply not found. The slug is never
    /// interpreted as a pattern.
    #[must_use]
    pub fn lookup(&self, slug: &str) -> Option<&Product> {
        self.by_slug
            .get(slug)
            .and_then(|&index| self.products.get(index))
    }

    /// Filter and sort the product list.
    ///
    /// Returns a fresh sequence each call; the underlying catalog is never
    /// mutated. All sorts are stable, so ties keep their prior relative
    /// order.
    #[must_use]
    pub fn filter(&self, params: &FilterParams) -> Vec<&Product> {
        let mut filtered: Vec<&Product> = self.products.iter().collect();

        if let Some(brand) = &params.brand {
            let brand = brand.to_lowercase();
            filtered.retain(|p| p.brand.to_lowercase() == brand);
        }

        if let Some(category) = &params.category {
            filtered.retain(|p| p.category == *category);
        }

        if let Some(min) = params.min_price {
            filtered.retain(|p| p.price >= min);
        }

        if let Some(max) = params.max_price {
            filtered.retain(|p| p.price <= max);
        }

        if let Some(search) = &params.search {
            let query = search.to_lowercase();
            filtered.retain(|p| {
                p.name.to_lowercase().contains(&query) || p.brand.to_lowercase().contains(&query)
            });
        }

        match params.sort {
            SortOrder::Newest => {}
            SortOrder::PriceAsc => filtered.sort_by_key(|p| p.price),
            SortOrder::PriceDesc => filtered.sort_by(|a, b| b.price.cmp(&a.price)),
            SortOrder::NameAsc => {
                filtered.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            }
        }

        filtered
    }

    /// The featured shelf: the first eight products in insertion order.
    #[must_use]
    pub fn featured(&self) -> &[Product] {
        self.products
            .get(..FEATURED_COUNT.min(self.products.len()))
            .unwrap_or(&[])
    }

    /// The brand directory.
    #[must_use]
    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    /// The category directory.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
