//! Cover letter generator: pluggable, trait-based so handlers never depend on
//! a concrete LLM backend.
//!
//! Default: `LlmCoverLetterGenerator` (chat completion via `LlmClient`).
//! `AppState` holds an `Arc<dyn CoverLetterGenerator>`.

use async_trait::async_trait;
use tracing::info;

use crate::cover_letter::prompts::{render_cover_letter_prompt, COVER_LETTER_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};

#[async_trait]
pub trait CoverLetterGenerator: Send + Sync {
    async fn generate(&self, job_description: &str, resume: &str) -> Result<String, LlmError>;
}

/// Generates cover letters with one LLM call per request.
pub struct LlmCoverLetterGenerator {
    llm: LlmClient,
}

impl LlmCoverLetterGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl CoverLetterGenerator for LlmCoverLetterGenerator {
    async fn generate(&self, job_description: &str, resume: &str) -> Result<String, LlmError> {
        let prompt = render_cover_letter_prompt(job_description, resume);
        let letter = self.llm.complete(COVER_LETTER_SYSTEM, &prompt).await?;
        info!(
            "Cover letter generated: {} chars (model: {})",
            letter.len(),
            self.llm.model()
        );
        Ok(letter)
    }
}
