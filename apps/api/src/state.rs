use std::sync::Arc;

use crate::cover_letter::generator::CoverLetterGenerator;
use crate::matching::similarity::SimilarityScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Wraps the embedding model loaded once at startup.
    pub scorer: SimilarityScorer,
    /// Pluggable cover letter backend. Default: LlmCoverLetterGenerator.
    pub cover_letters: Arc<dyn CoverLetterGenerator>,
}
