//! Integration tests for SNKRS.
//!
//! The tests drive the real storefront router in-process through
//! [`TestClient`]; no server or network access is involved. The test
//! configuration has no live payment key, so checkout always runs in demo
//! mode and never leaves the process either.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p snkrs-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `products_api` - Catalog listing, filtering, and lookup
//! - `cart_api` - Session cart round trips
//! - `checkout_api` - Batch validation and payment session creation
//! - `auth_api` - Login, logout, and session identity

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::{IpAddr, Ipv4Addr};

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use snkrs_storefront::config::StorefrontConfig;
use snkrs_storefront::middleware::create_session_layer;
use snkrs_storefront::routes;
use snkrs_storefront::state::AppState;

/// Storefront configuration for tests: demo payments, no Sentry, no CORS.
fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        stripe_secret_key: None,
        cors_allowed_origin: None,
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    }
}

/// A response captured from the in-process router.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    body: Option<Value>,
}

impl TestResponse {
    /// The parsed JSON body.
    ///
    /// # Panics
    ///
    /// Panics if the response had no JSON body.
    #[must_use]
    pub fn json(&self) -> &Value {
        self.body.as_ref().expect("response had no JSON body")
    }

    /// The `error` field of a JSON error envelope.
    ///
    /// # Panics
    ///
    /// Panics if the body is not an error envelope.
    #[must_use]
    pub fn error_message(&self) -> &str {
        self.json()
            .get("error")
            .and_then(Value::as_str)
            .expect("response had no error field")
    }
}

/// An in-process HTTP client for the storefront router.
///
/// Persists cookies between requests, so session state (cart, login)
/// behaves as it would for one browser. Each client gets its own app
/// instance, state, and session store.
pub struct TestClient {
    app: Router,
    cookies: Vec<String>,
}

impl TestClient {
    /// Build a fresh storefront app with its own state and session store.
    ///
    /// # Panics
    ///
    /// Panics if application state fails to build.
    #[must_use]
    pub fn new() -> Self {
        let state = AppState::new(test_config()).expect("failed to build application state");
        let app = Router::new()
            .merge(routes::routes())
            .layer(create_session_layer(state.config()))
            .with_state(state);

        Self {
            app,
            cookies: Vec::new(),
        }
    }

    /// Send a GET request.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    /// Send a POST request with a JSON body.
    pub async fn post_json(&mut self, uri: &str, body: &Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body.to_string()))
            .await
    }

    /// Send a POST request with a raw `application/json` body.
    ///
    /// Lets tests submit byte sequences that are not valid JSON.
    pub async fn post_raw(&mut self, uri: &str, body: &str) -> TestResponse {
        self.request(Method::POST, uri, Some(body.to_string()))
            .await
    }

    /// Send a PUT request with a JSON body.
    pub async fn put_json(&mut self, uri: &str, body: &Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(body.to_string())).await
    }

    /// Send a DELETE request.
    pub async fn delete(&mut self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }

    /// Send a DELETE request with a JSON body.
    pub async fn delete_json(&mut self, uri: &str, body: &Value) -> TestResponse {
        self.request(Method::DELETE, uri, Some(body.to_string()))
            .await
    }

    async fn request(&mut self, method: Method, uri: &str, body: Option<String>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if !self.cookies.is_empty() {
            builder = builder.header(header::COOKIE, self.cookies.join("; "));
        }

        let request = match body {
            Some(payload) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload))
                .expect("failed to build request"),
            None => builder.body(Body::empty()).expect("failed to build request"),
        };

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        self.absorb_cookies(&response);

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("failed to collect response body")
            .to_bytes();
        let body = serde_json::from_slice(&bytes).ok();

        TestResponse { status, body }
    }

    /// Fold `set-cookie` headers into the cookie jar, replacing by name.
    fn absorb_cookies(&mut self, response: &Response<Body>) {
        for value in response.headers().get_all(header::SET_COOKIE) {
            let Ok(raw) = value.to_str() else { continue };
            let Some(pair) = raw.split(';').next() else { continue };
            let Some((name, _)) = pair.split_once('=') else { continue };
            let prefix = format!("{name}=");
            self.cookies.retain(|cookie| !cookie.starts_with(&prefix));
            self.cookies.push(pair.trim().to_string());
        }
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}
