//! Text extraction from various file formats

use crate::error::{Result, ResumeAssistantError};
use crate::input::file_detector::FileType;
use crate::input::upload::{UploadPolicy, UploadedFile};
use once_cell::sync::Lazy;
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::path::Path;
use tokio::fs;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex"));

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Reads a PDF from disk and runs it through the upload checks
pub struct PdfExtractor {
    policy: UploadPolicy,
}

impl PdfExtractor {
    pub fn new(policy: UploadPolicy) -> Self {
        Self { policy }
    }
}

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ResumeAssistantError::Io)?;

        let upload = UploadedFile {
            filename: path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default(),
            content_type: FileType::Pdf.content_type().to_string(),
            bytes,
        };

        let document = self.policy.extract(&upload)?;
        Ok(document.text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await.map_err(ResumeAssistantError::Io)?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await.map_err(ResumeAssistantError::Io)?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Render markdown and strip the markup, keeping paragraph breaks
pub fn markdown_to_text(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    let text = html_output
        .replace("<br />", "\n")
        .replace("</p>", "\n\n")
        .replace("</li>", "\n")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    let clean_text = HTML_TAG.replace_all(&text, "");

    let lines: Vec<&str> = clean_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_text_strips_markup() {
        let text = markdown_to_text("## Skills\n\n- **Python** &amp; Docker\n- Redis\n");
        assert!(text.contains("Skills"));
        assert!(text.contains("Python & Docker"));
        assert!(text.contains("Redis"));
        assert!(!text.contains("**"));
        assert!(!text.contains("<li>"));
    }

    #[tokio::test]
    async fn test_plain_text_extraction() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "Python developer").unwrap();

        let text = PlainTextExtractor.extract(&path).await.unwrap();
        assert_eq!(text, "Python developer");
    }
}
