//! Templated cover letter

use crate::error::{Result, ResumeAssistantError};
use crate::processing::skills::SkillExtractor;
use askama::Template;

const NO_OVERLAP_HIGHLIGHT: &str = "relevant experience";

#[derive(Template)]
#[template(
    source = "Dear Hiring Manager,\n\nI am excited to apply for this role. My background aligns with your needs, including {{ highlights }}. I deliver impact through ownership, collaboration, and measurable outcomes.\n\nSincerely,\nYour Name",
    ext = "txt"
)]
struct CoverLetterTemplate<'a> {
    highlights: &'a str,
}

/// Fill the letter with the skills shared by resume and job description
pub fn generate_cover_letter(resume_text: &str, job_description: &str) -> Result<String> {
    let overlap = SkillExtractor::new().overlap(resume_text, job_description);
    let highlights = if overlap.is_empty() {
        NO_OVERLAP_HIGHLIGHT.to_string()
    } else {
        overlap.join(", ")
    };

    CoverLetterTemplate {
        highlights: &highlights,
    }
    .render()
    .map_err(|e| ResumeAssistantError::ProcessingFailure(format!("Failed to render cover letter: {}", e)))
}
