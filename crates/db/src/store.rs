//! The [`Store`] trait and its Postgres implementation.
//!
//! Handlers hold an `Arc<dyn Store>` so the HTTP layer can be exercised
//! against [`crate::MemoryStore`] without a running database.

use async_trait::async_trait;
use sitesmith_core::types::DbId;
use sqlx::PgPool;

use crate::models::admin::{Admin, CreateAdmin};
use crate::models::submission::{CreateSubmission, Submission};
use crate::repositories::{AdminRepo, SubmissionRepo};

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A unique constraint rejected the write.
    #[error("duplicate value for unique field '{field}'")]
    Duplicate { field: &'static str },

    /// Any other database failure.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Persistence operations the HTTP layer depends on.
#[async_trait]
pub trait Store: Send + Sync {
    /// Cheap reachability probe for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Persist one submission with a store-assigned id and timestamp.
    async fn insert_submission(&self, input: &CreateSubmission)
        -> Result<Submission, StoreError>;

    /// All submissions, newest first.
    async fn list_submissions(&self) -> Result<Vec<Submission>, StoreError>;

    /// Delete by id. Succeeds whether or not the row existed.
    async fn delete_submission(&self, id: DbId) -> Result<(), StoreError>;

    /// Persist one admin credential.
    async fn create_admin(&self, input: &CreateAdmin) -> Result<Admin, StoreError>;

    /// Look up an admin credential by username.
    async fn find_admin_by_username(&self, username: &str) -> Result<Option<Admin>, StoreError>;
}

/// Postgres-backed [`Store`] delegating to the repository layer.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn insert_submission(
        &self,
        input: &CreateSubmission,
    ) -> Result<Submission, StoreError> {
        Ok(SubmissionRepo::create(&self.pool, input).await?)
    }

    async fn list_submissions(&self) -> Result<Vec<Submission>, StoreError> {
        Ok(SubmissionRepo::list(&self.pool).await?)
    }

    async fn delete_submission(&self, id: DbId) -> Result<(), StoreError> {
        Ok(SubmissionRepo::delete_by_id(&self.pool, id).await?)
    }

    async fn create_admin(&self, input: &CreateAdmin) -> Result<Admin, StoreError> {
        AdminRepo::create(&self.pool, input)
            .await
            .map_err(classify_unique_violation)
    }

    async fn find_admin_by_username(&self, username: &str) -> Result<Option<Admin>, StoreError> {
        Ok(AdminRepo::find_by_username(&self.pool, username).await?)
    }
}

/// Map a PostgreSQL unique-constraint violation (error code 23505 on a
/// `uq_`-prefixed constraint) to [`StoreError::Duplicate`].
fn classify_unique_violation(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505")
            && db_err.constraint() == Some("uq_admins_username")
        {
            return StoreError::Duplicate { field: "username" };
        }
    }
    StoreError::Database(err)
}
