//! Resume rewriting, cover letters, document export and result presentation

pub mod cover_letter;
#[cfg(feature = "docx")]
pub mod docx;
pub mod envelope;
pub mod exporter;
pub mod formatter;
pub mod optimizer;
pub mod pdf;

pub use cover_letter::generate_cover_letter;
pub use envelope::Envelope;
pub use exporter::{DocumentExporter, ExportArtifact, ExportFormat};
pub use optimizer::optimize_resume;
