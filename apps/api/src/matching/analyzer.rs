//! Resume match analysis: combines the similarity score with a keyword gap.
//!
//! Flow: validate → compute_similarity → extract_keywords (job, resume) →
//!       job keywords not found among resume keywords.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::matching::keywords::extract_keywords;
use crate::matching::similarity::SimilarityScorer;
use crate::matching::MatchError;

/// Outcome of a single resume-vs-job analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Cosine similarity × 100; typically 0 – 100.
    pub match_score: f64,
    /// Job keywords absent from the resume keywords, in job keyword rank order.
    pub missing_keywords: Vec<String>,
}

/// Scores `resume` against `job_description`.
///
/// Empty or whitespace-only inputs are rejected before any embedding work.
/// Any failure aborts the analysis; no partial result is returned.
pub fn analyze_resume_match(
    scorer: &SimilarityScorer,
    job_description: &str,
    resume: &str,
) -> Result<MatchResult, MatchError> {
    if job_description.trim().is_empty() {
        return Err(MatchError::EmptyInput {
            field: "job_description",
        });
    }
    if resume.trim().is_empty() {
        return Err(MatchError::EmptyInput { field: "resume" });
    }

    let match_score = scorer.compute_similarity(job_description, resume)?;

    let job_keywords = extract_keywords(job_description);
    let resume_keywords: HashSet<String> = extract_keywords(resume).into_iter().collect();

    let missing_keywords: Vec<String> = job_keywords
        .into_iter()
        .filter(|keyword| !resume_keywords.contains(keyword))
        .collect();

    info!(
        "Match analyzed: score={:.2}, missing_keywords={}",
        match_score,
        missing_keywords.len()
    );

    Ok(MatchResult {
        match_score,
        missing_keywords,
    })
}
