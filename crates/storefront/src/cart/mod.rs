//! Cart aggregate.
//!
//! The cart is an ordered collection of line items keyed by `(product id,
//! size)`. The same product in two sizes is two distinct entries; adding an
//! existing `(id, size)` pair merges by summing quantities. Items are
//! denormalized snapshots taken from the catalog at add time, so later
//! catalog changes never reach into a cart.

pub mod storage;

use serde::{Deserialize, Serialize};

use snkrs_core::ProductId;

use crate::catalog::Product;

/// One cart line: a product snapshot plus chosen size and quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub brand: String,
    pub price: u32,
    pub image: String,
    pub size: u8,
    pub quantity: u32,
}

impl CartItem {
    /// Snapshot a catalog product into a cart line.
    #[must_use]
    pub fn from_product(product: &Product, size: u8, quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            slug: product.slug.clone(),
            brand: product.brand.clone(),
            price: product.price,
            image: product.image.clone(),
            size,
            quantity,
        }
    }
}

/// The cart aggregate for one browser session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Add an item, merging on `(id, size)`.
    ///
    /// Existing entries keep their position; a new `(id, size)` pair appends
    /// at the end.
    pub fn add(&mut self, item: CartItem) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|entry| entry.id == item.id && entry.size == item.size)
        {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
        } else {
            self.items.push(item);
        }
    }

    /// Remove the `(id, size)` entry. No-op if absent.
    pub fn remove(&mut self, id: &ProductId, size: u8) {
        self.items
            .retain(|entry| !(entry.id == *id && entry.size == size));
    }

    /// Overwrite the quantity of the `(id, size)` entry.
    ///
    /// A quantity of zero or less removes the entry. No-op if absent.
    pub fn set_quantity(&mut self, id: &ProductId, size: u8, quantity: i64) {
        if quantity <= 0 {
            self.remove(id, size);
            return;
        }
        if let Some(entry) = self
            .items
            .iter_mut()
            .find(|entry| entry.id == *id && entry.size == size)
        {
            entry.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all quantities; 0 for an empty cart.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items
            .iter()
            .map(|entry| u64::from(entry.quantity))
            .sum()
    }

    /// Sum of `price × quantity` over all entries; 0 for an empty cart.
    ///
    /// Prices are integer rubles, so no rounding happens here.
    #[must_use]
    pub fn total_price(&self) -> u64 {
        self.items
            .iter()
            .map(|entry| u64::from(entry.price) * u64::from(entry.quantity))
            .sum()
    }

    /// The entries in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct `(id, size)` entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
