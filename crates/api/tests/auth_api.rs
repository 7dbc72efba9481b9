//! HTTP-level integration tests for admin registration and login.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, post_json};
use sitesmith_api::auth::jwt::JwtConfig;
use sitesmith_db::{MemoryStore, Store};

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// A valid registration returns 201 with a success message.
#[tokio::test]
async fn register_returns_201() {
    let app = common::build_test_app();

    let body = serde_json::json!({ "username": "admin", "password": "sekrit-pw" });
    let response = post_json(&app, "/api/admin/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Admin registered successfully");
}

/// Registering the same username twice fails with 400 and does not create
/// a second record.
#[tokio::test]
async fn register_duplicate_username_fails() {
    let store = Arc::new(MemoryStore::new());
    let app = common::build_test_app_with_store(store.clone());

    let body = serde_json::json!({ "username": "admin", "password": "sekrit-pw" });
    let response = post_json(&app, "/api/admin/register", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(&app, "/api/admin/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Username already exists");

    // The original credential is untouched and still the only one.
    let admin = store
        .find_admin_by_username("admin")
        .await
        .unwrap()
        .expect("original admin still exists");
    assert_eq!(admin.username, "admin");
}

/// A password under 6 characters is rejected with 400 and no record is
/// created.
#[tokio::test]
async fn register_short_password_fails() {
    let store = Arc::new(MemoryStore::new());
    let app = common::build_test_app_with_store(store.clone());

    let body = serde_json::json!({ "username": "shorty", "password": "12345" });
    let response = post_json(&app, "/api/admin/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let msg = json["error"].as_str().unwrap_or_default();
    assert!(
        msg.contains("at least 6 characters"),
        "error should state the minimum length, got: {msg}"
    );

    let admin = store.find_admin_by_username("shorty").await.unwrap();
    assert!(admin.is_none(), "no record should be created");
}

/// Missing or empty fields are rejected with 400.
#[tokio::test]
async fn register_missing_fields_fails() {
    let app = common::build_test_app();

    for body in [
        serde_json::json!({}),
        serde_json::json!({ "username": "only-user" }),
        serde_json::json!({ "username": "", "password": "sekrit-pw" }),
    ] {
        let response = post_json(&app, "/api/admin/register", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Login with a registered username and correct password returns a token.
#[tokio::test]
async fn login_returns_token() {
    let app = common::build_test_app();

    let body = serde_json::json!({ "username": "admin", "password": "sekrit-pw" });
    let response = post_json(&app, "/api/admin/register", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(&app, "/api/admin/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let token = json["token"].as_str().expect("token must be a string");
    assert!(!token.is_empty());
}

/// A wrong password and an unknown username produce the same status and
/// the same body, so callers cannot tell which case occurred.
#[tokio::test]
async fn login_failure_is_uniform() {
    let app = common::build_test_app();

    let body = serde_json::json!({ "username": "admin", "password": "sekrit-pw" });
    post_json(&app, "/api/admin/register", body).await;

    let wrong_password = serde_json::json!({ "username": "admin", "password": "not-the-pw" });
    let response_a = post_json(&app, "/api/admin/login", wrong_password).await;
    let status_a = response_a.status();
    let body_a = body_json(response_a).await;

    let unknown_user = serde_json::json!({ "username": "ghost", "password": "whatever-pw" });
    let response_b = post_json(&app, "/api/admin/login", unknown_user).await;
    let status_b = response_b.status();
    let body_b = body_json(response_b).await;

    assert_eq!(status_a, StatusCode::BAD_REQUEST);
    assert_eq!(status_a, status_b);
    assert_eq!(body_a, body_b, "both failure cases must be indistinguishable");
    assert_eq!(body_a["error"], "Invalid username or password");
}

/// Missing fields are rejected with 400.
#[tokio::test]
async fn login_missing_fields_fails() {
    let app = common::build_test_app();

    let response = post_json(&app, "/api/admin/login", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A missing signing secret is a deployment defect: login fails with 500
/// rather than silently issuing an unsigned token.
#[tokio::test]
async fn login_without_signing_secret_returns_500() {
    let mut config = common::test_config();
    config.jwt = JwtConfig {
        secret: None,
        expiry_hours: 24,
    };
    let app = common::build_test_app_with(Arc::new(MemoryStore::new()), config);

    let body = serde_json::json!({ "username": "admin", "password": "sekrit-pw" });
    let response = post_json(&app, "/api/admin/register", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(&app, "/api/admin/login", body).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
