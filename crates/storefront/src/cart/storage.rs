//! Cart persistence behind a storage trait.
//!
//! The aggregate itself is storage-agnostic; this module supplies the
//! collaborator that persists it. The production store writes the cart into
//! the tower-sessions record under a fixed key. Persistence failures are
//! logged and swallowed: the in-memory cart stays authoritative for the
//! request, and a lost save only costs state on the next page load.

use async_trait::async_trait;
use tower_sessions::Session;

use crate::models::session_keys;

use super::Cart;

/// Storage collaborator for the cart aggregate.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Load the persisted cart, or an empty one if nothing usable is stored.
    async fn load(&self) -> Cart;

    /// Persist the cart. Failures are absorbed, not surfaced.
    async fn save(&self, cart: &Cart);
}

/// Session-backed cart store (the production implementation).
#[derive(Debug, Clone)]
pub struct SessionCartStore {
    session: Session,
}

impl SessionCartStore {
    /// Wrap a request's session handle.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }
}

#[async_trait]
impl CartStore for SessionCartStore {
    async fn load(&self) -> Cart {
        match self.session.get::<Cart>(session_keys::CART).await {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::default(),
            Err(e) => {
                // An unreadable record is treated as an empty cart rather
                // than a failed request.
                tracing::warn!("Failed to load cart from session: {e}");
                Cart::default()
            }
        }
    }

    async fn save(&self, cart: &Cart) {
        if let Err(e) = self.session.insert(session_keys::CART, cart).await {
            tracing::error!("Failed to persist cart to session: {e}");
        }
    }
}

/// In-memory cart store for tests and tooling.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    cart: tokio::sync::Mutex<Cart>,
}

#[async_trait]
impl CartStore for MemoryCartStore {
    async fn load(&self) -> Cart {
        self.cart.lock().await.clone()
    }

    async fn save(&self, cart: &Cart) {
        *self.cart.lock().await = cart.clone();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cart::CartItem;
    use snkrs_core::ProductId;

    fn item(id: &str, size: u8) -> CartItem {
        CartItem {
            id: ProductId::new(id),
            name: "Nike Air Max 90".to_string(),
            slug: "nike-air-max-90".to_string(),
            brand: "Nike".to_string(),
            price: 14990,
            image: "/products/nike-air-max-90.jpg".to_string(),
            size,
            quantity: 1,
        }
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryCartStore::default();
        assert!(store.load().await.is_empty());

        let mut cart = Cart::default();
        cart.add(item("1", 42));
        store.save(&cart).await;

        let loaded = store.load().await;
        assert_eq!(loaded, cart);
    }

    #[tokio::test]
    async fn test_store_keeps_aggregate_storage_agnostic() {
        // A mutation sequence against the trait behaves like direct calls
        // on the aggregate.
        let store = MemoryCartStore::default();

        let mut cart = store.load().await;
        cart.add(item("1", 42));
        cart.add(item("1", 42));
        store.save(&cart).await;

        let loaded = store.load().await;
        assert_eq!(loaded.total_items(), 2);
        assert_eq!(loaded.len(), 1);
    }
}
