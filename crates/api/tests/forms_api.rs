//! HTTP-level integration tests for the token-guarded admin data endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, delete_auth, get, get_auth, post_json, register_and_login};
use jsonwebtoken::{encode, EncodingKey, Header};
use sitesmith_api::auth::jwt::Claims;

// ---------------------------------------------------------------------------
// Guard behaviour
// ---------------------------------------------------------------------------

/// Requests without an Authorization header return 401.
#[tokio::test]
async fn missing_token_returns_401() {
    let app = common::build_test_app();

    let response = get(&app, "/api/admin/forms").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = delete(&app, "/api/admin/forms/1").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A syntactically invalid token returns 403.
#[tokio::test]
async fn invalid_token_returns_403() {
    let app = common::build_test_app();

    let response = get_auth(&app, "/api/admin/forms", "not-a-real-token").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(&app, "/api/admin/forms/1", "not-a-real-token").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A correctly signed but expired token returns 401 with the distinct
/// expiry reason, not the generic 403.
#[tokio::test]
async fn expired_token_returns_401() {
    let app = common::build_test_app();
    let config = common::test_config();

    // Craft an expired token with the test secret, well past the
    // validation leeway.
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: 1,
        exp: now - 300,
        iat: now - 600,
        jti: "test-expired-token".to_string(),
    };
    let secret = config.jwt.secret.unwrap();
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("encoding should succeed");

    let response = get_auth(&app, "/api/admin/forms", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    let msg = json["error"].as_str().unwrap_or_default();
    assert!(msg.contains("expired"), "reason should mention expiry, got: {msg}");
}

// ---------------------------------------------------------------------------
// Data access
// ---------------------------------------------------------------------------

/// Deleting a non-existent id returns the same success response as
/// deleting an existing one. Store-dependent behaviour confirmed here on
/// purpose, not "fixed".
#[tokio::test]
async fn delete_is_idempotent_looking() {
    let app = common::build_test_app();
    let token = register_and_login(&app, "admin", "sekrit-pw").await;

    let response = delete_auth(&app, "/api/admin/forms/999999", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let missing_body = body_json(response).await;

    let body = serde_json::json!({ "name": "Victim", "description": "Phone: 9998887776" });
    post_json(&app, "/api/submit-form", body).await;
    let forms = body_json(get_auth(&app, "/api/admin/forms", &token).await).await;
    let id = forms[0]["id"].as_i64().expect("submission id");

    let response = delete_auth(&app, &format!("/api/admin/forms/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let existing_body = body_json(response).await;

    assert_eq!(missing_body, existing_body);
}

/// End-to-end: submit -> login -> list includes the record -> delete ->
/// list no longer includes it.
#[tokio::test]
async fn end_to_end_submission_lifecycle() {
    let app = common::build_test_app();

    let body = serde_json::json!({
        "name": "Ann",
        "projectType": "React",
        "timeline": "2 weeks",
        "budget": "200",
        "description": "Phone: 9876543210"
    });
    let response = post_json(&app, "/api/submit-form", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let token = register_and_login(&app, "admin", "sekrit-pw").await;

    let forms = body_json(get_auth(&app, "/api/admin/forms", &token).await).await;
    let forms = forms.as_array().expect("array of submissions");
    let ann = forms
        .iter()
        .find(|f| f["name"] == "Ann")
        .expect("Ann's record should be listed");
    assert_eq!(ann["projectType"], "React");
    assert_eq!(ann["budget"], "200");
    assert_eq!(ann["description"], "Phone: 9876543210");
    let id = ann["id"].as_i64().expect("submission id");

    let response = delete_auth(&app, &format!("/api/admin/forms/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Form deleted successfully");

    let forms = body_json(get_auth(&app, "/api/admin/forms", &token).await).await;
    let forms = forms.as_array().expect("array of submissions");
    assert!(
        forms.iter().all(|f| f["id"].as_i64() != Some(id)),
        "deleted record must no longer be listed"
    );
}
