//! Uploaded document validation and per-page PDF text extraction

use crate::config::UploadConfig;
use crate::error::{Result, ResumeAssistantError};
use log::{info, warn};
use serde::{Deserialize, Serialize};

const BYTES_PER_MB: u64 = 1024 * 1024;

/// A binary document handed over by the outer layer
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// What came out of a single PDF page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "lowercase")]
pub enum PageOutcome {
    Text(String),
    Empty,
    Failed(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub text: String,
    pub pages: Vec<PageOutcome>,
}

impl ExtractedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn failed_pages(&self) -> usize {
        self.pages
            .iter()
            .filter(|page| matches!(page, PageOutcome::Failed(_)))
            .count()
    }

    pub fn empty_pages(&self) -> usize {
        self.pages
            .iter()
            .filter(|page| matches!(page, PageOutcome::Empty))
            .count()
    }
}

/// Acceptance rules for uploaded PDFs
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    max_size_mb: u64,
    accepted_content_types: Vec<String>,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::from_config(&UploadConfig::default())
    }
}

impl UploadPolicy {
    pub fn from_config(config: &UploadConfig) -> Self {
        Self {
            max_size_mb: config.max_pdf_size_mb,
            accepted_content_types: config.accepted_content_types.clone(),
        }
    }

    /// Validate an upload and pull its text out page by page
    pub fn extract(&self, upload: &UploadedFile) -> Result<ExtractedDocument> {
        info!(
            "Upload attempt: filename={}, content_type={}",
            upload.filename, upload.content_type
        );

        if !self
            .accepted_content_types
            .iter()
            .any(|accepted| accepted == &upload.content_type)
        {
            warn!("Invalid file type: {}", upload.content_type);
            return Err(ResumeAssistantError::InvalidInput(
                "Only PDF files are supported".to_string(),
            ));
        }

        if upload.bytes.is_empty() {
            warn!("Empty file uploaded");
            return Err(ResumeAssistantError::InvalidInput(
                "Uploaded file is empty".to_string(),
            ));
        }

        if upload.bytes.len() as u64 > self.max_size_mb * BYTES_PER_MB {
            warn!(
                "File too large: {:.2}MB",
                upload.bytes.len() as f64 / BYTES_PER_MB as f64
            );
            return Err(ResumeAssistantError::InvalidInput(format!(
                "PDF exceeds {} MB",
                self.max_size_mb
            )));
        }

        let pages = extract_pdf_pages(&upload.bytes)?;
        let text = pages
            .iter()
            .filter_map(|page| match page {
                PageOutcome::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string();

        let document = ExtractedDocument { text, pages };
        if document.failed_pages() > 0 {
            warn!(
                "{} of {} pages could not be extracted",
                document.failed_pages(),
                document.page_count()
            );
        }

        if document.text.is_empty() {
            warn!("No text extracted from PDF");
            return Err(ResumeAssistantError::InvalidInput(
                "Could not extract text from PDF. Please upload a text-based PDF.".to_string(),
            ));
        }

        info!(
            "Successfully processed PDF: {} characters extracted from {} pages",
            document.text.chars().count(),
            document.page_count()
        );
        Ok(document)
    }
}

/// Parse a PDF and extract every page independently. A page that fails does
/// not abort the others; only an unreadable document is an error.
pub fn extract_pdf_pages(bytes: &[u8]) -> Result<Vec<PageOutcome>> {
    let document = lopdf::Document::load_mem(bytes).map_err(|e| {
        ResumeAssistantError::ProcessingFailure(format!("Failed to read PDF: {}", e))
    })?;

    let pages = document
        .get_pages()
        .keys()
        .map(|&page_number| match document.extract_text(&[page_number]) {
            Ok(text) if text.is_empty() => PageOutcome::Empty,
            Ok(text) => PageOutcome::Text(text),
            Err(e) => PageOutcome::Failed(e.to_string()),
        })
        .collect();

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{DocumentExporter, ExportFormat};
    use printpdf::{BuiltinFont, Mm, PdfDocument};

    /// One page per entry; an empty entry leaves its page blank
    fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
        let (doc, first_page, first_layer) = PdfDocument::new("test", Mm(210.0), Mm(297.0), "Page 1");
        let font = doc.add_builtin_font(BuiltinFont::Helvetica).unwrap();

        let mut layers = vec![doc.get_page(first_page).get_layer(first_layer)];
        for i in 1..pages.len() {
            let (page, layer) = doc.add_page(Mm(210.0), Mm(297.0), format!("Page {}", i + 1));
            layers.push(doc.get_page(page).get_layer(layer));
        }
        for (layer, text) in layers.iter().zip(pages) {
            if !text.is_empty() {
                layer.use_text(*text, 11.0, Mm(20.0), Mm(270.0), &font);
            }
        }
        drop(layers);
        doc.save_to_bytes().unwrap()
    }

    fn upload(content_type: &str, bytes: Vec<u8>) -> UploadedFile {
        UploadedFile {
            filename: "resume.pdf".to_string(),
            content_type: content_type.to_string(),
            bytes,
        }
    }

    #[test]
    fn test_rejects_unsupported_content_type() {
        let policy = UploadPolicy::default();
        let err = policy.extract(&upload("image/png", vec![1, 2, 3])).unwrap_err();
        assert!(matches!(err, ResumeAssistantError::InvalidInput(ref m) if m == "Only PDF files are supported"));
    }

    #[test]
    fn test_rejects_empty_upload() {
        let policy = UploadPolicy::default();
        let err = policy.extract(&upload("application/pdf", Vec::new())).unwrap_err();
        assert!(matches!(err, ResumeAssistantError::InvalidInput(ref m) if m == "Uploaded file is empty"));
    }

    #[test]
    fn test_rejects_oversized_upload() {
        let policy = UploadPolicy::from_config(&UploadConfig {
            max_pdf_size_mb: 1,
            ..UploadConfig::default()
        });
        let bytes = vec![b'x'; (BYTES_PER_MB + 1) as usize];
        let err = policy.extract(&upload("application/x-pdf", bytes)).unwrap_err();
        assert!(matches!(err, ResumeAssistantError::InvalidInput(ref m) if m == "PDF exceeds 1 MB"));
    }

    #[test]
    fn test_garbage_bytes_are_a_processing_failure() {
        let policy = UploadPolicy::default();
        let err = policy
            .extract(&upload("application/octet-stream", b"definitely not a pdf".to_vec()))
            .unwrap_err();
        assert!(matches!(err, ResumeAssistantError::ProcessingFailure(_)));
    }

    #[test]
    fn test_extracts_exported_resume() {
        let artifact = DocumentExporter::new()
            .export("Jane Doe Café\n\nPython and Docker engineer", ExportFormat::Pdf)
            .unwrap();
        let document = UploadPolicy::default()
            .extract(&upload("application/pdf", artifact.bytes))
            .unwrap();

        assert_eq!(document.text, "Resume\nJane Doe Café\nPython and Docker engineer");
        assert_eq!(document.page_count(), 1);
        assert!(matches!(document.pages[0], PageOutcome::Text(_)));
        assert_eq!(document.empty_pages(), 0);
        assert_eq!(document.failed_pages(), 0);
    }

    #[test]
    fn test_blank_pdf_is_rejected() {
        let bytes = pdf_with_pages(&["", ""]);

        let pages = extract_pdf_pages(&bytes).unwrap();
        assert_eq!(pages, vec![PageOutcome::Empty, PageOutcome::Empty]);

        let err = UploadPolicy::default()
            .extract(&upload("application/pdf", bytes))
            .unwrap_err();
        assert!(matches!(
            err,
            ResumeAssistantError::InvalidInput(ref m)
                if m == "Could not extract text from PDF. Please upload a text-based PDF."
        ));
    }

    #[test]
    fn test_pages_are_joined_in_order_and_blank_pages_skipped() {
        let bytes = pdf_with_pages(&["First page", "", "Last page"]);
        let document = UploadPolicy::default()
            .extract(&upload("application/pdf", bytes))
            .unwrap();

        assert_eq!(document.page_count(), 3);
        assert_eq!(document.pages[1], PageOutcome::Empty);
        assert_eq!(document.empty_pages(), 1);
        assert_eq!(document.text, "First page\n\nLast page");
    }

    #[test]
    fn test_whitespace_only_page_is_kept_as_text() {
        let pages = extract_pdf_pages(&pdf_with_pages(&["A", "   ", "B"])).unwrap();

        assert_eq!(pages.len(), 3);
        assert_eq!(pages[1], PageOutcome::Text("   \n".to_string()));
    }

    #[test]
    fn test_page_counters() {
        let document = ExtractedDocument {
            text: "hello".to_string(),
            pages: vec![
                PageOutcome::Text("hello".to_string()),
                PageOutcome::Empty,
                PageOutcome::Failed("bad stream".to_string()),
                PageOutcome::Empty,
            ],
        };
        assert_eq!(document.page_count(), 4);
        assert_eq!(document.empty_pages(), 2);
        assert_eq!(document.failed_pages(), 1);
    }
}
