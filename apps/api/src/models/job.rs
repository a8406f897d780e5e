use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Request body shared by the match and cover letter endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplication {
    pub job_description: String,
    pub resume: String,
}

impl JobApplication {
    /// Rejects blank job descriptions or resumes.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.job_description.trim().is_empty() {
            return Err(AppError::Validation(
                "job_description cannot be empty".to_string(),
            ));
        }
        if self.resume.trim().is_empty() {
            return Err(AppError::Validation("resume cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// A job posting as listed by `GET /jobs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub description: String,
}

/// Static postings served for trying the service out.
pub fn sample_jobs() -> Vec<JobPosting> {
    vec![
        JobPosting {
            id: 1,
            title: "Senior Python Developer".to_string(),
            company: "TechCorp".to_string(),
            description: "We are looking for a Senior Python Developer with 5+ years of \
                          experience in web development, FastAPI, and cloud technologies."
                .to_string(),
        },
        JobPosting {
            id: 2,
            title: "Full Stack Engineer".to_string(),
            company: "StartupX".to_string(),
            description: "Full Stack Engineer needed with expertise in React, Node.js, and AWS. \
                          Must have experience with CI/CD pipelines."
                .to_string(),
        },
    ]
}
