//! Embedding provider: the swap-ready seam between the matching engine and the
//! sentence-embedding model.
//!
//! Default: `SentenceEmbedder` (all-MiniLM-L6-v2 via local ONNX inference).
//! The provider is built once in `main` and shared as `Arc<dyn EmbeddingProvider>`.

use std::path::PathBuf;

use thiserror::Error;

pub mod download;
pub mod onnx;

pub use onnx::SentenceEmbedder;

/// Boxed cause carried by embedding errors (ort, tokenizers, io).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding model file not found: {0}")]
    ModelNotFound(PathBuf),

    #[error("failed to load embedding model from {path}")]
    Load {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("tokenization failed")]
    Tokenize(#[source] BoxError),

    #[error("embedding inference failed: {context}")]
    Inference {
        context: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("unexpected model output: expected {expected} values, got {actual}")]
    OutputShape { expected: usize, actual: usize },

    #[error("embedding session lock poisoned")]
    LockPoisoned,
}

/// Turns a single text into a fixed-dimension vector.
///
/// Implementations are loaded once and must be safe to share across
/// concurrent requests; `embed` takes `&self`.
pub trait EmbeddingProvider: Send + Sync {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Length of every vector returned by `embed`.
    fn dimension(&self) -> usize;
}
