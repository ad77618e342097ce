//! Integration tests for the session auth API.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::{Value, json};

use snkrs_integration_tests::TestClient;

fn user(resp_json: &Value) -> &Value {
    resp_json.get("user").unwrap()
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_demo_login_returns_the_principal() {
    let mut client = TestClient::new();

    let resp = client
        .post_json(
            "/api/auth/login",
            &json!({"email": "demo@snkrs.ru", "password": "demo123"}),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);

    let principal = user(resp.json());
    assert_eq!(principal.get("id").and_then(Value::as_str), Some("1"));
    assert_eq!(
        principal.get("name").and_then(Value::as_str),
        Some("Демо Пользователь")
    );
    assert_eq!(
        principal.get("email").and_then(Value::as_str),
        Some("demo@snkrs.ru")
    );
    assert_eq!(principal.get("role").and_then(Value::as_str), Some("USER"));
}

#[tokio::test]
async fn test_admin_login_carries_the_admin_role() {
    let mut client = TestClient::new();

    let resp = client
        .post_json(
            "/api/auth/login",
            &json!({"email": "admin@snkrs.ru", "password": "admin123"}),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);

    let principal = user(resp.json());
    assert_eq!(principal.get("id").and_then(Value::as_str), Some("admin"));
    assert_eq!(principal.get("role").and_then(Value::as_str), Some("ADMIN"));
}

#[tokio::test]
async fn test_bad_credentials_collapse_into_one_rejection() {
    let mut client = TestClient::new();

    for body in [
        json!({"email": "demo@snkrs.ru", "password": "wrong-password"}),
        json!({"email": "nobody@snkrs.ru", "password": "demo123"}),
        json!({"email": "DEMO@snkrs.ru", "password": "demo123"}),
        json!({"email": "' OR '1'='1' --", "password": "demo123"}),
        json!({"email": "", "password": ""}),
    ] {
        let resp = client.post_json("/api/auth/login", &body).await;
        assert_eq!(resp.status, StatusCode::UNAUTHORIZED, "body = {body}");
        assert_eq!(resp.error_message(), "Неверный email или пароль", "body = {body}");
    }
}

#[tokio::test]
async fn test_malformed_login_bodies_are_plain_rejections() {
    let mut client = TestClient::new();

    let resp = client.post_raw("/api/auth/login", "{not json").await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp.error_message(), "Неверный email или пароль");

    for body in [
        json!({}),
        json!({"email": 42, "password": ["demo123"]}),
        json!({"email": null, "password": null}),
    ] {
        let resp = client.post_json("/api/auth/login", &body).await;
        assert_eq!(resp.status, StatusCode::UNAUTHORIZED, "body = {body}");
    }
}

// ============================================================================
// Session Lifecycle
// ============================================================================

#[tokio::test]
async fn test_me_tracks_the_login_state() {
    let mut client = TestClient::new();

    let resp = client.get("/api/auth/me").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(user(resp.json()).is_null());

    client
        .post_json(
            "/api/auth/login",
            &json!({"email": "demo@snkrs.ru", "password": "demo123"}),
        )
        .await;

    let resp = client.get("/api/auth/me").await;
    assert_eq!(
        user(resp.json()).get("email").and_then(Value::as_str),
        Some("demo@snkrs.ru")
    );

    let resp = client.post_json("/api/auth/logout", &json!({})).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(user(resp.json()).is_null());

    let resp = client.get("/api/auth/me").await;
    assert!(user(resp.json()).is_null());
}

#[tokio::test]
async fn test_logout_without_login_is_fine() {
    let mut client = TestClient::new();

    let resp = client.post_json("/api/auth/logout", &json!({})).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(user(resp.json()).is_null());
}

#[tokio::test]
async fn test_cart_survives_login_and_logout() {
    let mut client = TestClient::new();

    client
        .post_json("/api/cart/items", &json!({"slug": "nike-air-max-90", "size": 42}))
        .await;

    client
        .post_json(
            "/api/auth/login",
            &json!({"email": "demo@snkrs.ru", "password": "demo123"}),
        )
        .await;

    let resp = client.get("/api/cart").await;
    assert_eq!(resp.json().get("totalItems").and_then(Value::as_u64), Some(1));

    client.post_json("/api/auth/logout", &json!({})).await;

    let resp = client.get("/api/cart").await;
    assert_eq!(resp.json().get("totalItems").and_then(Value::as_u64), Some(1));

    let resp = client.get("/api/auth/me").await;
    assert!(user(resp.json()).is_null());
}
