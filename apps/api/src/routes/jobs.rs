use axum::Json;

use crate::models::job::{sample_jobs, JobPosting};

/// GET /jobs
/// Lists the sample job postings.
pub async fn handle_list_jobs() -> Json<Vec<JobPosting>> {
    Json(sample_jobs())
}
