//! Axum route handlers for the Cover Letter API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::job::JobApplication;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

/// POST /generate-cover-letter
///
/// Generates a cover letter tailored to the job description from the resume.
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<JobApplication>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    request.validate()?;

    let cover_letter = state
        .cover_letters
        .generate(&request.job_description, &request.resume)
        .await?;

    Ok(Json(CoverLetterResponse { cover_letter }))
}
