//! Axum route handlers for the Match API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::matching::analyzer::{analyze_resume_match, MatchResult};
use crate::models::job::JobApplication;
use crate::state::AppState;

/// POST /analyze-job
///
/// Scores the resume against the job description and lists missing keywords.
/// Embedding inference is CPU-bound, so the analysis runs on the blocking pool.
pub async fn handle_analyze_job(
    State(state): State<AppState>,
    Json(request): Json<JobApplication>,
) -> Result<Json<MatchResult>, AppError> {
    request.validate()?;

    let scorer = state.scorer.clone();
    let result = tokio::task::spawn_blocking(move || {
        analyze_resume_match(&scorer, &request.job_description, &request.resume)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::Error::new(e).context("match analysis task failed")))??;

    Ok(Json(result))
}
