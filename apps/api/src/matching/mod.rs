// Resume-to-job matching engine.
// Implements: keyword extraction, embedding similarity, gap analysis, HTTP handler.
// The embedding model is injected through `SimilarityScorer`, never loaded here.

pub mod analyzer;
pub mod handlers;
pub mod keywords;
pub mod similarity;

use thiserror::Error;

use crate::embeddings::EmbeddingError;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("{field} cannot be empty")]
    EmptyInput { field: &'static str },

    #[error("Error analyzing resume")]
    Embedding(#[from] EmbeddingError),
}
