//! Configuration management for the resume assistant

use crate::error::{Result, ResumeAssistantError};
use crate::output::exporter::ExportFormat;
use crate::preferences::Theme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub upload: UploadConfig,
    pub export: ExportConfig,
    pub preferences: PreferencesConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Match percent below which the "quantify achievements" advice fires
    pub suggestion_threshold: f64,
    /// ATS penalty per missing skill
    pub missing_skill_penalty: f64,
    pub max_penalty: f64,
    /// How many missing skills the learning suggestion lists
    pub max_listed_missing: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub max_pdf_size_mb: u64,
    pub accepted_content_types: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub default_format: ExportFormat,
    pub docx_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesConfig {
    pub default_theme: Theme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub json: bool,
    pub color_output: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            suggestion_threshold: 60.0,
            missing_skill_penalty: 5.0,
            max_penalty: 30.0,
            max_listed_missing: 8,
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_pdf_size_mb: 10,
            accepted_content_types: vec![
                "application/pdf".to_string(),
                "application/x-pdf".to_string(),
                "application/octet-stream".to_string(),
            ],
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            upload: UploadConfig::default(),
            export: ExportConfig {
                default_format: ExportFormat::Pdf,
                docx_enabled: true,
            },
            preferences: PreferencesConfig {
                default_theme: Theme::Light,
            },
            output: OutputConfig {
                json: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first use
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ResumeAssistantError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeAssistantError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-assistant")
            .join("config.toml")
    }

    /// Reject settings that would break the scoring invariants
    pub fn validate(&self) -> Result<()> {
        let scoring = &self.scoring;
        if !(0.0..=100.0).contains(&scoring.suggestion_threshold) {
            return Err(ResumeAssistantError::Configuration(format!(
                "scoring.suggestion_threshold must be within 0..=100, got {}",
                scoring.suggestion_threshold
            )));
        }
        if scoring.missing_skill_penalty < 0.0 || scoring.max_penalty < 0.0 {
            return Err(ResumeAssistantError::Configuration(
                "scoring penalties must be non-negative".to_string(),
            ));
        }
        if self.upload.accepted_content_types.is_empty() {
            return Err(ResumeAssistantError::Configuration(
                "upload.accepted_content_types must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.upload.max_pdf_size_mb, 10);
        assert_eq!(config.scoring.max_listed_missing, 8);
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.preferences.default_theme = Theme::Dark;
        config.export.default_format = ExportFormat::Txt;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.preferences.default_theme, Theme::Dark);
        assert_eq!(loaded.export.default_format, ExportFormat::Txt);
        assert_eq!(loaded.scoring, config.scoring);
    }

    #[test]
    fn test_negative_penalty_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.scoring.missing_skill_penalty = -1.0;
        config.save_to(&path).unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ResumeAssistantError::Configuration(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "scoring = [not toml").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ResumeAssistantError::Configuration(_))
        ));
    }
}
