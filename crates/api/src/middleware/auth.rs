//! Bearer-token authentication extractor for admin handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use jsonwebtoken::errors::ErrorKind;
use sitesmith_core::error::CoreError;
use sitesmith_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated admin extracted from a Bearer token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires admin
/// authentication. Rejections follow the admin-endpoint contract: a
/// missing token is 401, an expired token is 401 with a distinct reason,
/// and any other verification failure (bad signature, malformed token)
/// is 403.
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    /// The admin's internal database id (from `claims.sub`).
    ///
    /// No current handler consumes it, but it travels with the request
    /// for any that will.
    pub admin_id: DbId,
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Missing bearer token".into()))
        })?;

        // The outer error is a missing signing secret (a deployment
        // defect, 500); the inner error is a verification failure.
        let claims = validate_token(token, &state.config.jwt)
            .map_err(AppError::Core)?
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::Core(CoreError::Unauthorized("Token expired".into()))
                }
                _ => AppError::Core(CoreError::Forbidden("Invalid token".into())),
            })?;

        Ok(AuthAdmin {
            admin_id: claims.sub,
        })
    }
}
