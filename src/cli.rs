//! CLI interface for the resume assistant

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-assistant")]
#[command(about = "Resume and job description matching tool")]
#[command(long_about = "Score a resume against a job description, suggest improvements, write a cover letter and export the resume as PDF, DOCX or text")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the {success, message, data} envelope as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against a job description
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,
    },

    /// Suggest a skill growth path for a resume
    Suggest {
        #[arg(short, long)]
        resume: PathBuf,
    },

    /// Reformat a resume into bullet points
    Optimize {
        #[arg(short, long)]
        resume: PathBuf,
    },

    /// Generate a cover letter from resume and job description
    CoverLetter {
        #[arg(short, long)]
        resume: PathBuf,

        #[arg(short, long)]
        job: PathBuf,
    },

    /// Export a resume as pdf, docx or txt
    Export {
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: pdf, docx, txt (defaults to the configured format)
        #[arg(short, long)]
        format: Option<String>,

        /// Output path (defaults to resume.<format> in the current directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Extract text from an uploaded PDF
    Extract {
        #[arg(short, long)]
        file: PathBuf,

        /// Content type reported for the upload
        #[arg(long, default_value = "application/pdf")]
        content_type: String,
    },

    /// Set the UI theme preference
    Prefs {
        /// light or dark
        #[arg(long)]
        theme: String,
    },

    /// Check that the tool is working
    Health,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

impl Commands {
    /// Prefix for failure messages of this command
    pub fn failure_context(&self) -> &'static str {
        match self {
            Commands::Analyze { .. } => "Analysis failed",
            Commands::Suggest { .. } => "Suggestion failed",
            Commands::Optimize { .. } => "Optimization failed",
            Commands::CoverLetter { .. } => "Cover letter generation failed",
            Commands::Export { .. } => "Failed to generate file",
            // extraction errors already say what went wrong with the PDF
            Commands::Extract { .. } => "Upload failed",
            Commands::Prefs { .. } => "Failed to save preferences",
            Commands::Health => "Health check failed",
            Commands::Config { .. } => "Configuration failed",
        }
    }
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

pub const RESUME_EXTENSIONS: &[&str] = &["pdf", "txt", "md", "markdown"];
pub const JOB_EXTENSIONS: &[&str] = &["txt", "md", "markdown"];

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResumeAssistantError;
    use crate::output::Envelope;

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("cv.PDF"), RESUME_EXTENSIONS).is_ok());
        assert!(validate_file_extension(Path::new("job.pdf"), JOB_EXTENSIONS).is_err());
        assert_eq!(
            validate_file_extension(Path::new("README"), RESUME_EXTENSIONS).unwrap_err(),
            "File has no extension"
        );
    }

    #[test]
    fn test_parse_export_command() {
        let cli = Cli::parse_from(["resume-assistant", "--json", "export", "-r", "cv.txt", "-f", "docx"]);
        assert!(cli.json);
        match cli.command {
            Commands::Export { resume, format, out } => {
                assert_eq!(resume, PathBuf::from("cv.txt"));
                assert_eq!(format.as_deref(), Some("docx"));
                assert!(out.is_none());
            }
            _ => panic!("expected export command"),
        }
    }

    #[test]
    fn test_unreadable_pdf_message_is_not_repeated() {
        let cli = Cli::parse_from(["resume-assistant", "extract", "-f", "cv.pdf"]);
        let err = ResumeAssistantError::ProcessingFailure("Failed to read PDF: invalid file header".to_string());
        let envelope = Envelope::from_error(cli.command.failure_context(), &err);

        assert_eq!(envelope.message.matches("Failed to read PDF").count(), 1);
        assert!(envelope.message.ends_with("Failed to read PDF: invalid file header"));
    }
}
