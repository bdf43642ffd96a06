//! Input processing module
//! Handles file detection, text extraction, upload validation and input management

pub mod file_detector;
pub mod manager;
pub mod text_extractor;
pub mod upload;

pub use manager::InputManager;
pub use upload::{ExtractedDocument, PageOutcome, UploadPolicy, UploadedFile};
