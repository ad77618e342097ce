//! HTTP route handlers for the storefront JSON API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check (wired in main)
//!
//! # Products
//! GET  /api/products           - Product listing with filters and sorting
//! GET  /api/products/featured  - Featured products
//! GET  /api/products/{slug}    - Product detail
//! GET  /api/brands             - Brand list
//! GET  /api/categories         - Category list
//!
//! # Cart (session-backed)
//! GET    /api/cart             - Full cart state
//! DELETE /api/cart             - Empty the cart
//! POST   /api/cart/items       - Add item (snapshotted from the catalog)
//! PUT    /api/cart/items       - Set line quantity
//! DELETE /api/cart/items       - Remove line
//! GET    /api/cart/count       - Item count badge
//!
//! # Checkout
//! POST /api/checkout           - Validate the batch, create a payment session
//!
//! # Auth
//! POST /api/auth/login         - Login against the user directory
//! POST /api/auth/logout        - Logout
//! GET  /api/auth/me            - Current principal
//! ```

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware;
use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/featured", get(products::featured))
        .route("/{slug}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show).delete(cart::clear))
        .route(
            "/items",
            post(cart::add).put(cart::update).delete(cart::remove),
        )
        .route("/count", get(cart::count))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Create all routes for the storefront API, without rate limits.
///
/// Integration tests drive this tree directly: the governor key extractor
/// needs a peer address or forwarded header that `tower::oneshot` requests
/// do not carry. The binary serves [`rate_limited_routes`] instead.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/products", product_routes())
        .route("/api/brands", get(products::brands))
        .route("/api/categories", get(products::categories))
        .nest("/api/cart", cart_routes())
        .route("/api/checkout", post(checkout::create_session))
        .nest("/api/auth", auth_routes())
}

/// Create all routes with the governor layers attached.
///
/// The general limiter covers products, cart, and checkout; the auth group
/// gets the strict limiter.
pub fn rate_limited_routes() -> Router<AppState> {
    // route_layer wraps only the routes registered above it, so the auth
    // group is nested after the general API limiter.
    Router::new()
        .nest("/api/products", product_routes())
        .route("/api/brands", get(products::brands))
        .route("/api/categories", get(products::categories))
        .nest("/api/cart", cart_routes())
        .route("/api/checkout", post(checkout::create_session))
        .route_layer(middleware::api_rate_limiter())
        .nest(
            "/api/auth",
            auth_routes().route_layer(middleware::auth_rate_limiter()),
        )
}
