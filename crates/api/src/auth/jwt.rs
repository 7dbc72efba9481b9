//! Bearer-token generation and validation.
//!
//! Admin tokens are HS256-signed JWTs containing a [`Claims`] payload.
//! The token is stateless: no server-side session row backs it, so a
//! token is valid until its expiry claim passes.

use jsonwebtoken::errors::Error as JwtError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sitesmith_core::error::CoreError;
use sitesmith_core::types::DbId;
use uuid::Uuid;

/// JWT claims embedded in every admin token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the admin's internal database id.
    pub sub: DbId,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4).
    pub jti: String,
}

/// Configuration for token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    ///
    /// `None` when `JWT_SECRET` is unset. The server still starts; any
    /// operation that needs the secret fails with an internal error so a
    /// missing secret surfaces as a deployment defect, never a silent
    /// bypass.
    pub secret: Option<String>,
    /// Token lifetime in hours (default: 24).
    pub expiry_hours: i64,
}

/// Default token expiry in hours.
const DEFAULT_EXPIRY_HOURS: i64 = 24;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var            | Required | Default |
    /// |--------------------|----------|---------|
    /// | `JWT_SECRET`       | no       | --      |
    /// | `JWT_EXPIRY_HOURS` | no       | `24`    |
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").ok().filter(|s| !s.is_empty());
        if secret.is_none() {
            tracing::warn!("JWT_SECRET is not set; admin login will fail until it is configured");
        }

        let expiry_hours: i64 = std::env::var("JWT_EXPIRY_HOURS")
            .unwrap_or_else(|_| DEFAULT_EXPIRY_HOURS.to_string())
            .parse()
            .expect("JWT_EXPIRY_HOURS must be a valid i64");

        Self {
            secret,
            expiry_hours,
        }
    }

    /// The signing secret, or a configuration error if it is absent.
    fn require_secret(&self) -> Result<&str, CoreError> {
        self.secret
            .as_deref()
            .ok_or_else(|| CoreError::Internal("JWT signing secret is not configured".into()))
    }
}

/// Generate an HS256 token for the given admin.
pub fn generate_token(admin_id: DbId, config: &JwtConfig) -> Result<String, CoreError> {
    let secret = config.require_secret()?;

    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: admin_id,
        exp: now + config.expiry_hours * 3600,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| CoreError::Internal(format!("Token generation error: {e}")))
}

/// Validate and decode a token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration. The caller inspects the
/// [`JwtError`] kind to distinguish expiry from other failures.
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<Result<Claims, JwtError>, CoreError> {
    let secret = config.require_secret()?;

    let result = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )
    .map(|data| data.claims);

    Ok(result)
}
