//! Lead submission entity model and DTOs.

use serde::{Deserialize, Serialize};
use sitesmith_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full submission row from the `submissions` table.
///
/// Every field the public form can send is optional free text. The wire
/// format uses camelCase so the admin dashboard sees the same field names
/// the form posted.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: DbId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub project_type: Option<String>,
    /// Free text; by convention carries `Phone: <digits>` from the form.
    pub description: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    /// Server-assigned at insert, immutable thereafter.
    pub created_at: Timestamp,
}

/// DTO for creating a new submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub project_type: Option<String>,
    pub description: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
}
