//! Semantic similarity between two texts, as a percentage-like score.

use std::sync::Arc;

use tracing::debug;

use crate::embeddings::{EmbeddingError, EmbeddingProvider};

/// Scores text pairs with cosine similarity over sentence embeddings.
///
/// Holds the process-wide embedding provider; cloning is cheap and never
/// reloads the model.
#[derive(Clone)]
pub struct SimilarityScorer {
    provider: Arc<dyn EmbeddingProvider>,
}

impl SimilarityScorer {
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self { provider }
    }

    /// Embeds each text independently and returns `cosine × 100`.
    ///
    /// Zero-norm or mismatched vectors score 0.0 instead of NaN.
    pub fn compute_similarity(&self, text_a: &str, text_b: &str) -> Result<f64, EmbeddingError> {
        let embedding_a = self.provider.embed(text_a)?;
        let embedding_b = self.provider.embed(text_b)?;

        let similarity = cosine_similarity(&embedding_a, &embedding_b) * 100.0;
        debug!(dim = embedding_a.len(), similarity, "Computed text similarity");

        Ok(similarity)
    }
}

/// Cosine similarity in `[-1, 1]`.
///
/// Returns 0.0 for empty, mismatched, or zero-norm inputs.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b).map(|(&x, &y)| x as f64 * y as f64).sum();
    let norm_a = a.iter().map(|&x| (x as f64).powi(2)).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|&x| (x as f64).powi(2)).sum::<f64>().sqrt();

    let denom = norm_a * norm_b;
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embeddings::testing::{FailingEmbedder, FixedEmbedder, HashingEmbedder};

    fn hashing_scorer() -> SimilarityScorer {
        SimilarityScorer::new(Arc::new(HashingEmbedder))
    }

    #[test]
    fn test_cosine_identical() {
        let v = [1.0, 2.0, 3.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_cosine_orthogonal() {
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-10);
    }

    #[test]
    fn test_cosine_opposite_is_negative() {
        let sim = cosine_similarity(&[1.0, 0.0, 0.0], &[-1.0, 0.0, 0.0]);
        assert!((sim + 1.0).abs() < 1e-10, "got {sim}");
    }

    #[test]
    fn test_cosine_proportional() {
        assert!((cosine_similarity(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_cosine_zero_vector_is_zero_not_nan() {
        let sim = cosine_similarity(&[0.0, 0.0, 0.0], &[1.0, 2.0, 3.0]);
        assert_eq!(sim, 0.0);
    }

    #[test]
    fn test_cosine_empty_and_mismatched() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0, 2.0, 3.0]), 0.0);
    }

    #[test]
    fn test_self_similarity_is_one_hundred() {
        let text = "Senior Rust engineer with distributed systems experience";
        let score = hashing_scorer().compute_similarity(text, text).unwrap();
        assert!((score - 100.0).abs() < 1e-4, "got {score}");
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let scorer = hashing_scorer();
        let a = "Python developer FastAPI cloud";
        let b = "Experienced Python developer skilled in Django and AWS";
        let ab = scorer.compute_similarity(a, b).unwrap();
        let ba = scorer.compute_similarity(b, a).unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_zero_embedding_scores_zero() {
        let scorer = SimilarityScorer::new(Arc::new(FixedEmbedder(vec![0.0; 4])));
        assert_eq!(scorer.compute_similarity("a", "b").unwrap(), 0.0);
    }

    #[test]
    fn test_provider_failure_propagates() {
        let scorer = SimilarityScorer::new(Arc::new(FailingEmbedder));
        let err = scorer.compute_similarity("a", "b").unwrap_err();
        assert!(matches!(err, EmbeddingError::Inference { .. }));
    }
}
