//! Resume assistant library: skill matching, suggestions, cover letters and document export

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod preferences;
pub mod processing;

pub use config::Config;
pub use error::{ErrorKind, Result, ResumeAssistantError};
