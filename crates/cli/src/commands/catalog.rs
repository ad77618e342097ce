//! Catalog inspection commands.
//!
//! # Usage
//!
//! ```bash
//! # Validate catalog invariants and print a summary
//! snkrs-cli catalog check
//!
//! # Print the full catalog as JSON
//! snkrs-cli catalog dump
//! ```

use std::collections::HashSet;

use snkrs_storefront::catalog::{Catalog, CatalogError, FilterParams};
use thiserror::Error;

/// Errors that can occur during catalog commands.
#[derive(Debug, Error)]
pub enum CatalogCommandError {
    /// The catalog data violates a load-time invariant.
    #[error("catalog validation failed: {0}")]
    Validation(#[from] CatalogError),

    /// A product references a brand missing from the brand directory.
    #[error("product {slug} references unknown brand: {brand}")]
    UnknownBrand { slug: String, brand: String },

    /// A product references a category missing from the category directory.
    #[error("product {slug} references unknown category: {category}")]
    UnknownCategory { slug: String, category: String },

    /// The catalog could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Validate the embedded catalog and print a summary.
///
/// `Catalog::load` already enforces unique ids and slugs, size ranges, and
/// non-zero prices. This adds cross-checks between products and the brand
/// and category directories. Directory entries without products only warn;
/// the shop renders them as empty filters.
#[allow(clippy::print_stdout)]
pub fn check() -> Result<(), CatalogCommandError> {
    let catalog = Catalog::load()?;
    let products = catalog.filter(&FilterParams::default());

    let brands: HashSet<&str> = catalog.brands().iter().map(|b| b.name.as_str()).collect();
    // The "all products" category has an empty slug; products never use it.
    let categories: HashSet<&str> = catalog
        .categories()
        .iter()
        .filter(|c| !c.slug.is_empty())
        .map(|c| c.slug.as_str())
        .collect();

    for product in &products {
        if !brands.contains(product.brand.as_str()) {
            return Err(CatalogCommandError::UnknownBrand {
                slug: product.slug.clone(),
                brand: product.brand.clone(),
            });
        }
        if !categories.contains(product.category.as_str()) {
            return Err(CatalogCommandError::UnknownCategory {
                slug: product.slug.clone(),
                category: product.category.clone(),
            });
        }
    }

    for brand in catalog.brands() {
        if !products.iter().any(|p| p.brand == brand.name) {
            tracing::warn!("brand {} has no products", brand.name);
        }
    }

    println!(
        "catalog ok: {} products, {} brands, {} categories",
        catalog.len(),
        catalog.brands().len(),
        catalog.categories().len()
    );
    Ok(())
}

/// Print the catalog as pretty JSON.
#[allow(clippy::print_stdout)]
pub fn dump() -> Result<(), CatalogCommandError> {
    let catalog = Catalog::load()?;
    let products = catalog.filter(&FilterParams::default());
    println!("{}", serde_json::to_string_pretty(&products)?);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_check_passes_on_embedded_catalog() {
        check().unwrap();
    }
}
