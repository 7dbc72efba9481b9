//! Admin credential entity model and DTOs.

use sitesmith_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full admin row from the `admins` table.
///
/// Contains the password hash -- never serialize this to API responses.
/// No exposed flow updates or deletes a credential once created.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new admin credential.
#[derive(Debug, Clone)]
pub struct CreateAdmin {
    pub username: String,
    /// Argon2id PHC string, hashed by the caller.
    pub password_hash: String,
}
