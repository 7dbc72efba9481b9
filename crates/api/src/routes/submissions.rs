//! Public lead-submission endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use sitesmith_db::models::submission::CreateSubmission;

use crate::error::AppResult;
use crate::state::AppState;

/// Request body for `POST /api/submit-form`.
///
/// Every field is optional free text; the form performs its own
/// required-field checks client-side and the server persists whatever
/// arrives. The description conventionally carries `Phone: <digits>`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFormRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub project_type: Option<String>,
    pub description: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
}

/// Acknowledgment body returned on success.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// POST /api/submit-form
///
/// Persist one submission with a server-assigned creation timestamp and
/// return 201. Duplicate submissions create duplicate records; there is
/// no idempotency key.
pub async fn submit_form(
    State(state): State<AppState>,
    Json(input): Json<SubmitFormRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let create = CreateSubmission {
        name: input.name,
        email: input.email,
        project_type: input.project_type,
        description: input.description,
        budget: input.budget,
        timeline: input.timeline,
    };

    let submission = state.store.insert_submission(&create).await?;
    tracing::debug!(submission_id = submission.id, "Lead submission stored");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Form submitted successfully",
        }),
    ))
}

/// Routes mounted at `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/submit-form", post(submit_form))
}
