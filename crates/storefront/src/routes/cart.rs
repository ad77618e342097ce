//! Cart route handlers.
//!
//! The cart aggregate lives in the server-side session. Every handler is a
//! load-modify-save round trip through [`SessionCartStore`]; mutations
//! return the updated cart state so clients never need a follow-up read.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use snkrs_core::ProductId;

use crate::cart::storage::{CartStore, SessionCartStore};
use crate::cart::{Cart, CartItem};
use crate::error::{AppError, Result};
use crate::state::AppState;

// =============================================================================
// Request / Response Types
// =============================================================================

/// Cart state returned to the client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub total_items: u64,
    pub total_price: u64,
}

impl CartView {
    fn from_cart(cart: &Cart) -> Self {
        Self {
            items: cart.items().to_vec(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
        }
    }
}

/// Cart count badge payload.
#[derive(Debug, Serialize)]
pub struct CartCountView {
    pub count: u64,
}

/// Add item request body.
#[derive(Debug, Deserialize)]
pub struct AddItemBody {
    pub slug: String,
    pub size: u8,
    pub quantity: Option<u32>,
}

/// Update quantity request body.
#[derive(Debug, Deserialize)]
pub struct UpdateItemBody {
    pub id: ProductId,
    pub size: u8,
    pub quantity: i64,
}

/// Remove item request body.
#[derive(Debug, Deserialize)]
pub struct RemoveItemBody {
    pub id: ProductId,
    pub size: u8,
}

// =============================================================================
// Handlers
// =============================================================================

/// Get the full cart state.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Json<CartView> {
    let store = SessionCartStore::new(session);
    let cart = store.load().await;
    Json(CartView::from_cart(&cart))
}

/// Add an item to the cart.
///
/// The item is snapshotted from the catalog; clients submit only the slug,
/// size, and quantity. Unknown slugs are a 404, sizes the product does not
/// offer a 400.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<AddItemBody>,
) -> Result<Json<CartView>> {
    let product = state
        .catalog()
        .lookup(&body.slug)
        .ok_or_else(|| AppError::NotFound("Товар не найден".to_string()))?;
    if !product.offers_size(body.size) {
        return Err(AppError::BadRequest("Размер недоступен".to_string()));
    }

    let item = CartItem::from_product(product, body.size, body.quantity.unwrap_or(1));

    let store = SessionCartStore::new(session);
    let mut cart = store.load().await;
    cart.add(item);
    store.save(&cart).await;

    Ok(Json(CartView::from_cart(&cart)))
}

/// Set the quantity of a cart line.
///
/// Quantities of zero or below remove the line; an absent line is a no-op.
#[instrument(skip(session))]
pub async fn update(session: Session, Json(body): Json<UpdateItemBody>) -> Json<CartView> {
    let store = SessionCartStore::new(session);
    let mut cart = store.load().await;
    cart.set_quantity(&body.id, body.size, body.quantity);
    store.save(&cart).await;

    Json(CartView::from_cart(&cart))
}

/// Remove a cart line.
#[instrument(skip(session))]
pub async fn remove(session: Session, Json(body): Json<RemoveItemBody>) -> Json<CartView> {
    let store = SessionCartStore::new(session);
    let mut cart = store.load().await;
    cart.remove(&body.id, body.size);
    store.save(&cart).await;

    Json(CartView::from_cart(&cart))
}

/// Empty the cart.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Json<CartView> {
    let store = SessionCartStore::new(session);
    let mut cart = store.load().await;
    cart.clear();
    store.save(&cart).await;

    Json(CartView::from_cart(&cart))
}

/// Get the cart item count.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Json<CartCountView> {
    let store = SessionCartStore::new(session);
    let cart = store.load().await;

    Json(CartCountView {
        count: cart.total_items(),
    })
}
