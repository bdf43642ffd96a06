//! Resume export into downloadable documents

use crate::error::{Result, ResumeAssistantError};
use crate::output::pdf;
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";
pub const DOCX_MEDIA_TYPE: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const TXT_MEDIA_TYPE: &str = "text/plain; charset=utf-8";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Docx,
    Txt,
}

impl ExportFormat {
    /// Parse an optional format, treating a missing or blank value as PDF
    pub fn from_optional(format: Option<&str>) -> Result<Self> {
        match format {
            None => Ok(ExportFormat::Pdf),
            Some(f) if f.is_empty() => Ok(ExportFormat::Pdf),
            Some(f) => f.parse(),
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => PDF_MEDIA_TYPE,
            ExportFormat::Docx => DOCX_MEDIA_TYPE,
            ExportFormat::Txt => TXT_MEDIA_TYPE,
        }
    }

    pub fn filename(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "resume.pdf",
            ExportFormat::Docx => "resume.docx",
            ExportFormat::Txt => "resume.txt",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
            ExportFormat::Txt => "txt",
        };
        f.write_str(name)
    }
}

impl FromStr for ExportFormat {
    type Err = ResumeAssistantError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "docx" => Ok(ExportFormat::Docx),
            "txt" => Ok(ExportFormat::Txt),
            _ => Err(ResumeAssistantError::InvalidInput(format!(
                "Unsupported format: {}. Supported: pdf, docx, txt",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub bytes: Vec<u8>,
    pub media_type: String,
    pub filename: String,
}

/// Renders resume text into export artifacts.
///
/// DOCX support is a capability fixed at construction: it requires the
/// `docx` cargo feature and can additionally be switched off.
#[derive(Debug, Clone)]
pub struct DocumentExporter {
    docx_available: bool,
}

impl Default for DocumentExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExporter {
    pub fn new() -> Self {
        Self::with_docx_capability(true)
    }

    pub fn without_docx() -> Self {
        Self::with_docx_capability(false)
    }

    pub fn with_docx_capability(enabled: bool) -> Self {
        Self {
            docx_available: enabled && cfg!(feature = "docx"),
        }
    }

    pub fn docx_available(&self) -> bool {
        self.docx_available
    }

    /// Parse `format` (default PDF) and export
    pub fn generate_resume_bytes(&self, resume_text: &str, format: Option<&str>) -> Result<ExportArtifact> {
        let format = ExportFormat::from_optional(format)?;
        self.export(resume_text, format)
    }

    pub fn export(&self, resume_text: &str, format: ExportFormat) -> Result<ExportArtifact> {
        let bytes = match format {
            ExportFormat::Pdf => pdf::render_pdf(resume_text)?,
            ExportFormat::Txt => resume_text.as_bytes().to_vec(),
            ExportFormat::Docx => self.render_docx(resume_text)?,
        };

        info!("Exported resume as {} ({} bytes)", format, bytes.len());

        Ok(ExportArtifact {
            bytes,
            media_type: format.media_type().to_string(),
            filename: format.filename().to_string(),
        })
    }

    #[cfg(feature = "docx")]
    fn render_docx(&self, resume_text: &str) -> Result<Vec<u8>> {
        if !self.docx_available {
            return Err(docx_unavailable());
        }
        crate::output::docx::render_docx(resume_text)
    }

    #[cfg(not(feature = "docx"))]
    fn render_docx(&self, _resume_text: &str) -> Result<Vec<u8>> {
        Err(docx_unavailable())
    }
}

fn docx_unavailable() -> ResumeAssistantError {
    ResumeAssistantError::UnavailableFeature(
        "DOCX export requires the docx feature to be enabled".to_string(),
    )
}
