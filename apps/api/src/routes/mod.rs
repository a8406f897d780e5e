pub mod health;
pub mod jobs;

use axum::{
    routing::{get, post},
    Router,
};

use crate::cover_letter::handlers::handle_generate_cover_letter;
use crate::matching::handlers::handle_analyze_job;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/analyze-job", post(handle_analyze_job))
        .route("/generate-cover-letter", post(handle_generate_cover_letter))
        .route("/jobs", get(jobs::handle_list_jobs))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::cover_letter::generator::testing::{EchoGenerator, RejectingGenerator};
    use crate::cover_letter::generator::CoverLetterGenerator;
    use crate::embeddings::testing::{FailingEmbedder, HashingEmbedder};
    use crate::embeddings::EmbeddingProvider;
    use crate::matching::similarity::SimilarityScorer;

    fn app_with(
        embedder: Arc<dyn EmbeddingProvider>,
        cover_letters: Arc<dyn CoverLetterGenerator>,
    ) -> Router {
        build_router(AppState {
            scorer: SimilarityScorer::new(embedder),
            cover_letters,
        })
    }

    fn app() -> Router {
        app_with(Arc::new(HashingEmbedder), Arc::new(EchoGenerator))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn application() -> Value {
        json!({
            "job_description": "Looking for a Python developer with FastAPI and cloud experience",
            "resume": "Experienced Python developer skilled in Django and AWS"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_jobs() {
        let (status, body) = send(app(), get_request("/jobs")).await;
        assert_eq!(status, StatusCode::OK);
        let jobs = body.as_array().unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0]["id"], 1);
        assert_eq!(jobs[0]["title"], "Senior Python Developer");
        assert_eq!(jobs[1]["company"], "StartupX");
    }

    #[tokio::test]
    async fn test_analyze_job_returns_score_and_missing_keywords() {
        let (status, body) = send(app(), post_json("/analyze-job", application())).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["match_score"].is_number());

        let missing: Vec<&str> = body["missing_keywords"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert!(missing.contains(&"fastapi"));
        assert!(missing.contains(&"cloud"));
        assert!(!missing.contains(&"python"));
    }

    #[tokio::test]
    async fn test_analyze_job_rejects_blank_resume() {
        let body = json!({"job_description": "Rust engineer", "resume": "  "});
        let (status, body) = send(app(), post_json("/analyze-job", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_job_rejects_missing_field() {
        let body = json!({"job_description": "Rust engineer"});
        let (status, _) = send(app(), post_json("/analyze-job", body)).await;
        assert!(status.is_client_error(), "got {status}");
    }

    #[tokio::test]
    async fn test_analyze_job_surfaces_embedding_failure() {
        let app = app_with(Arc::new(FailingEmbedder), Arc::new(EchoGenerator));
        let (status, body) = send(app, post_json("/analyze-job", application())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "EMBEDDING_ERROR");
        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.starts_with("Error analyzing resume"), "{message}");
        assert!(message.contains("model exploded"), "{message}");
    }

    #[tokio::test]
    async fn test_generate_cover_letter() {
        let (status, body) = send(app(), post_json("/generate-cover-letter", application())).await;
        assert_eq!(status, StatusCode::OK);
        let letter = body["cover_letter"].as_str().unwrap();
        assert!(letter.starts_with("Dear Hiring Manager"));
        assert!(letter.contains("FastAPI"));
    }

    #[tokio::test]
    async fn test_generate_cover_letter_surfaces_provider_failure() {
        let app = app_with(Arc::new(HashingEmbedder), Arc::new(RejectingGenerator));
        let (status, body) = send(app, post_json("/generate-cover-letter", application())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "LLM_ERROR");
        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.starts_with("Error generating cover letter"), "{message}");
        assert!(message.contains("quota"), "{message}");
    }

    #[tokio::test]
    async fn test_generate_cover_letter_rejects_blank_job_description() {
        let body = json!({"job_description": "", "resume": "Rust"});
        let (status, _) = send(app(), post_json("/generate-cover-letter", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
