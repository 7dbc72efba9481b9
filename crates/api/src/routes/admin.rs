//! Admin endpoints: credential registration, login, and submission access.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use sitesmith_core::error::CoreError;
use sitesmith_core::types::DbId;
use sitesmith_db::models::admin::CreateAdmin;
use sitesmith_db::models::submission::Submission;

use crate::auth::jwt::generate_token;
use crate::auth::password::{
    hash_password, validate_password_strength, verify_password, MIN_PASSWORD_LENGTH,
};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/admin/register` and `POST /api/admin/login`.
///
/// Fields are optional so that a missing field yields the endpoint's own
/// 400 rather than a body-deserialization rejection; empty strings count
/// as missing.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Response body for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Generic acknowledgment body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Extract non-empty username and password or fail with the endpoint's
/// missing-fields error.
fn require_credentials(input: CredentialsRequest) -> Result<(String, String), AppError> {
    match (input.username, input.password) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => Ok((u, p)),
        _ => Err(AppError::Core(CoreError::Validation(
            "Username and password are required".into(),
        ))),
    }
}

/// POST /api/admin/register
///
/// Create an admin credential. Intended for out-of-band setup; no exposed
/// flow updates or deletes a credential afterwards.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let (username, password) = require_credentials(input)?;

    validate_password_strength(&password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    // Lookup-first keeps the common duplicate case a clean 400; the
    // unique constraint backstops the race and maps to the same 400.
    if state
        .store
        .find_admin_by_username(&username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Validation(
            "Username already exists".into(),
        )));
    }

    let hashed = hash_password(&password)
        .map_err(|e| AppError::Core(CoreError::Internal(format!("Password hashing error: {e}"))))?;

    let create = CreateAdmin {
        username,
        password_hash: hashed,
    };
    let admin = state.store.create_admin(&create).await?;
    tracing::info!(admin_id = admin.id, "Admin credential registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Admin registered successfully",
        }),
    ))
}

/// POST /api/admin/login
///
/// Verify username + password and issue a signed bearer token. The
/// failure message is identical whether the username is unknown or the
/// password mismatches, so callers cannot enumerate usernames.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (username, password) = require_credentials(input)?;

    // 1. Find the credential by username.
    let admin = state
        .store
        .find_admin_by_username(&username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation("Invalid username or password".into()))
        })?;

    // 2. Verify the password against the stored hash.
    let password_valid = verify_password(&password, &admin.password_hash).map_err(|e| {
        AppError::Core(CoreError::Internal(format!(
            "Password verification error: {e}"
        )))
    })?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Validation(
            "Invalid username or password".into(),
        )));
    }

    // 3. Issue the token. A missing signing secret surfaces here as a
    // 500 configuration error.
    let token = generate_token(admin.id, &state.config.jwt).map_err(AppError::Core)?;

    Ok(Json(LoginResponse { token }))
}

/// GET /api/admin/forms
///
/// All submissions, newest first, as a bare JSON array. No pagination or
/// filtering.
pub async fn list_forms(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> AppResult<Json<Vec<Submission>>> {
    let submissions = state.store.list_submissions().await?;
    Ok(Json(submissions))
}

/// DELETE /api/admin/forms/{id}
///
/// Delete by id. The store does not report whether the row existed, so
/// the response is the same success message either way.
pub async fn delete_form(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    state.store.delete_submission(id).await?;
    tracing::debug!(submission_id = id, "Submission deleted");

    Ok(Json(MessageResponse {
        message: "Form deleted successfully",
    }))
}

/// Routes mounted at `/api/admin`.
///
/// ```text
/// POST   /register     -> register
/// POST   /login        -> login
/// GET    /forms        -> list_forms (bearer token)
/// DELETE /forms/{id}   -> delete_form (bearer token)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/forms", get(list_forms))
        .route("/forms/{id}", delete(delete_form))
}
