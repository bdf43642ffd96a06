//! Error handling for the resume assistant

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeAssistantError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Feature unavailable: {0}")]
    UnavailableFeature(String),

    #[error("Processing failure: {0}")]
    ProcessingFailure(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Coarse classification used at the request boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    UnavailableFeature,
    ProcessingFailure,
}

impl ResumeAssistantError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResumeAssistantError::InvalidInput(_) | ResumeAssistantError::Configuration(_) => {
                ErrorKind::InvalidInput
            }
            ResumeAssistantError::UnavailableFeature(_) => ErrorKind::UnavailableFeature,
            ResumeAssistantError::ProcessingFailure(_)
            | ResumeAssistantError::Io(_)
            | ResumeAssistantError::Serialization(_) => ErrorKind::ProcessingFailure,
        }
    }
}

pub type Result<T> = std::result::Result<T, ResumeAssistantError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeAssistantError {
    fn from(err: anyhow::Error) -> Self {
        ResumeAssistantError::ProcessingFailure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            ResumeAssistantError::InvalidInput("x".into()).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            ResumeAssistantError::UnavailableFeature("docx".into()).kind(),
            ErrorKind::UnavailableFeature
        );
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert_eq!(ResumeAssistantError::from(io).kind(), ErrorKind::ProcessingFailure);
    }

    #[test]
    fn test_anyhow_conversion() {
        let err: ResumeAssistantError = anyhow::anyhow!("renderer crashed").into();
        assert!(matches!(err, ResumeAssistantError::ProcessingFailure(ref m) if m == "renderer crashed"));
    }
}
