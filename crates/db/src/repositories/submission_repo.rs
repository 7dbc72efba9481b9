//! Repository for the `submissions` table.

use sitesmith_core::types::DbId;
use sqlx::PgPool;

use crate::models::submission::{CreateSubmission, Submission};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, project_type, description, budget, timeline, created_at";

/// Provides CRUD operations for lead submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert a new submission, returning the created row with its
    /// server-assigned id and timestamp.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSubmission,
    ) -> Result<Submission, sqlx::Error> {
        let query = format!(
            "INSERT INTO submissions (name, email, project_type, description, budget, timeline)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.project_type)
            .bind(&input.description)
            .bind(&input.budget)
            .bind(&input.timeline)
            .fetch_one(pool)
            .await
    }

    /// List all submissions, newest first. The id tiebreak keeps ordering
    /// deterministic when two rows share a timestamp.
    pub async fn list(pool: &PgPool) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM submissions ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Submission>(&query).fetch_all(pool).await
    }

    /// Delete a submission by id. Deleting an id that does not exist is
    /// not an error; the row count is not inspected.
    pub async fn delete_by_id(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM submissions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
