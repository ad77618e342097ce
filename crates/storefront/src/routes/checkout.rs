//! Checkout route handler.
//!
//! The client submits its cart as a raw JSON batch; nothing in the body is
//! trusted. The batch goes through [`validate_batch`] and only its typed
//! output reaches the payment gateway. A successful session creation clears
//! the server-side cart.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::Serialize;
use serde_json::Value;
use tower_sessions::Session;
use tracing::instrument;

use crate::cart::storage::{CartStore, SessionCartStore};
use crate::checkout::validate_batch;
use crate::error::{self, Result};
use crate::state::AppState;

/// Successful checkout response: where to send the browser.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub url: String,
}

/// Create a payment session for the submitted cart.
///
/// Reads only the `items` key from the body; extra top-level keys (including
/// prototype-pollution-style ones) are ignored. Unreadable bodies take the
/// same path as an absent batch and reject as an empty cart.
#[instrument(skip(state, session, payload))]
pub async fn create_session(
    State(state): State<AppState>,
    session: Session,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<CheckoutResponse>> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable checkout body");
            Value::Null
        }
    };

    let items = validate_batch(body.get("items"))?;

    let item_count = items.len().to_string();
    error::add_breadcrumb(
        "checkout",
        "Validated checkout batch",
        Some(&[("items", item_count.as_str())]),
    );

    let checkout = state.payments().create_session(&items).await?;

    // Checkout succeeded, retire the session cart
    let store = SessionCartStore::new(session);
    let mut cart = store.load().await;
    if !cart.is_empty() {
        cart.clear();
        store.save(&cart).await;
    }

    Ok(Json(CheckoutResponse {
        url: checkout.redirect_url,
    }))
}
