// LLM prompt constants for cover letter generation.

/// System prompt for cover letter generation.
pub const COVER_LETTER_SYSTEM: &str = "You are a professional cover letter writer.";

/// Cover letter prompt template. Replace `{job_description}` and `{resume}` before sending.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Using the job description and resume provided below, generate a professional and personalized cover letter.
The cover letter should highlight relevant experience and skills from the resume that match the job requirements.
Make it concise, engaging, and professional.

Job Description:
{job_description}

Resume:
{resume}

Generate a cover letter that:
1. Opens with a strong introduction
2. Highlights relevant experience and skills
3. Shows enthusiasm for the role and company
4. Closes professionally"#;

/// Fills the cover letter template.
///
/// Both values are substituted in one pass, so a job description that happens
/// to contain `{resume}` is left as written.
pub fn render_cover_letter_prompt(job_description: &str, resume: &str) -> String {
    let (head, tail) = COVER_LETTER_PROMPT_TEMPLATE
        .split_once("{job_description}")
        .unwrap_or((COVER_LETTER_PROMPT_TEMPLATE, ""));
    format!("{head}{job_description}{}", tail.replace("{resume}", resume))
}
