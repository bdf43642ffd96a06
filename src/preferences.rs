//! User preference storage

use crate::error::{Result, ResumeAssistantError};
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ResumeAssistantError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ResumeAssistantError::InvalidInput(format!(
                "Invalid theme: {}. Supported: light, dark",
                other
            ))),
        }
    }
}

/// Key-value contract for user preferences.
///
/// Writes are single-field replacements, so concurrent callers get
/// last-writer-wins semantics.
pub trait PreferenceStore: Send + Sync {
    fn get_theme(&self) -> Result<Theme>;

    /// Store the theme and return the value now in effect
    fn set_theme(&self, theme: Theme) -> Result<Theme>;

    fn set_theme_str(&self, theme: &str) -> Result<Theme> {
        let theme = theme.parse::<Theme>()?;
        self.set_theme(theme)
    }
}

/// Process-local store, lost on exit
pub struct InMemoryPreferenceStore {
    theme: RwLock<Theme>,
}

impl InMemoryPreferenceStore {
    pub fn new(default_theme: Theme) -> Self {
        Self {
            theme: RwLock::new(default_theme),
        }
    }
}

impl Default for InMemoryPreferenceStore {
    fn default() -> Self {
        Self::new(Theme::Light)
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get_theme(&self) -> Result<Theme> {
        let guard = self
            .theme
            .read()
            .map_err(|e| ResumeAssistantError::ProcessingFailure(format!("Preference lock poisoned: {}", e)))?;
        Ok(*guard)
    }

    fn set_theme(&self, theme: Theme) -> Result<Theme> {
        let mut guard = self
            .theme
            .write()
            .map_err(|e| ResumeAssistantError::ProcessingFailure(format!("Preference lock poisoned: {}", e)))?;
        *guard = theme;
        info!("Theme preference set to {}", theme);
        Ok(*guard)
    }
}
