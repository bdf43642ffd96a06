//! `{success, message, data}` response envelope used at the command boundary

use crate::error::{Result, ResumeAssistantError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    pub data: Value,
}

impl Envelope {
    pub fn ok<T: Serialize>(message: impl Into<String>, data: &T) -> Result<Self> {
        Ok(Self {
            success: true,
            message: message.into(),
            data: serde_json::to_value(data)?,
        })
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: json!({}),
        }
    }

    pub fn from_error(context: &str, err: &ResumeAssistantError) -> Self {
        match err {
            // User errors already carry a presentable message
            ResumeAssistantError::InvalidInput(message) => Self::failure(message.clone()),
            other => Self::failure(format!("{}: {}", context, other)),
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let rendered = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope() {
        let envelope = Envelope::ok("Preferences saved", &json!({"theme": "dark"})).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data["theme"], "dark");
    }

    #[test]
    fn test_failure_envelope_has_empty_data() {
        let err = ResumeAssistantError::InvalidInput("Uploaded file is empty".to_string());
        let envelope = Envelope::from_error("Upload failed", &err);
        assert!(!envelope.success);
        assert_eq!(envelope.message, "Uploaded file is empty");
        assert_eq!(envelope.data, json!({}));
    }

    #[test]
    fn test_failure_message_includes_context() {
        let err = ResumeAssistantError::UnavailableFeature("docx".to_string());
        let envelope = Envelope::from_error("Failed to generate file", &err);
        assert_eq!(envelope.message, "Failed to generate file: Feature unavailable: docx");
    }

    #[test]
    fn test_json_shape() {
        let json = Envelope::failure("nope").to_json(false).unwrap();
        assert_eq!(json, r#"{"success":false,"message":"nope","data":{}}"#);
    }
}
