//! Word-processing (DOCX) rendering, compiled with the `docx` feature

use crate::error::{Result, ResumeAssistantError};
use docx_rs::{BreakType, Docx, Paragraph, Run, Style, StyleType};
use std::io::Cursor;

const HEADING_STYLE: &str = "Heading1";

fn paragraph(block: &str) -> Paragraph {
    let mut run = Run::new();
    for (i, line) in block.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }
    Paragraph::new().add_run(run)
}

/// Level-1 "Resume" heading followed by one paragraph per blank-line block
pub fn render_docx(resume_text: &str) -> Result<Vec<u8>> {
    let heading_style = Style::new(HEADING_STYLE, StyleType::Paragraph)
        .name("Heading 1")
        .size(32)
        .bold();

    let mut docx = Docx::new().add_style(heading_style).add_paragraph(
        Paragraph::new()
            .style(HEADING_STYLE)
            .add_run(Run::new().add_text("Resume")),
    );
    for block in resume_text.split("\n\n") {
        docx = docx.add_paragraph(paragraph(block));
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| ResumeAssistantError::ProcessingFailure(format!("DOCX packaging failed: {}", e)))?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|window| window == needle)
    }

    #[test]
    fn test_render_is_a_zip_package() {
        let bytes = render_docx("Jane Doe\nEngineer\n\nSkills: Rust").unwrap();
        assert!(bytes.starts_with(b"PK"));
        assert!(contains(&bytes, b"word/document.xml"));
    }

    #[test]
    fn test_empty_text_still_renders() {
        let bytes = render_docx("").unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
