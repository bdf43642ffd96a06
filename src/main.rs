//! Resume assistant: resume and job description matching tool

use clap::Parser;
use log::{error, info};
use resume_assistant::cli::{self, Cli, Commands, ConfigAction};
use resume_assistant::input::{InputManager, UploadPolicy, UploadedFile};
use resume_assistant::output::formatter::ConsoleFormatter;
use resume_assistant::output::{generate_cover_letter, optimize_resume, DocumentExporter, Envelope};
use resume_assistant::preferences::{InMemoryPreferenceStore, PreferenceStore};
use resume_assistant::processing::Analyzer;
use resume_assistant::{Config, Result, ResumeAssistantError};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::process;

/// What a successful command hands back to the user
struct CommandOutput {
    envelope: Envelope,
    console: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let json_output = cli.json || config.output.json;
    let formatter = ConsoleFormatter::new(config.output.color_output);
    let context = cli.command.failure_context();

    match run_command(cli.command, &config, cli.config.as_deref(), &formatter).await {
        Ok(output) => {
            if json_output {
                print_envelope(&output.envelope);
            } else {
                print!("{}", output.console);
            }
        }
        Err(e) => {
            let envelope = Envelope::from_error(context, &e);
            if json_output {
                print_envelope(&envelope);
            } else {
                error!("{}", envelope.message);
            }
            process::exit(1);
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn print_envelope(envelope: &Envelope) {
    match envelope.to_json(true) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Failed to serialize response: {}", e),
    }
}

async fn read_input(
    manager: &mut InputManager,
    path: &Path,
    allowed_extensions: &[&str],
    label: &str,
) -> Result<String> {
    cli::validate_file_extension(path, allowed_extensions)
        .map_err(|e| ResumeAssistantError::InvalidInput(format!("{} file: {}", label, e)))?;
    manager.extract_text(path).await
}

async fn run_command(
    command: Commands,
    config: &Config,
    config_path: Option<&Path>,
    formatter: &ConsoleFormatter,
) -> Result<CommandOutput> {
    let mut inputs = InputManager::with_policy(UploadPolicy::from_config(&config.upload));

    match command {
        Commands::Analyze { resume, job } => {
            let resume_text = read_input(&mut inputs, &resume, cli::RESUME_EXTENSIONS, "Resume").await?;
            let job_text = read_input(&mut inputs, &job, cli::JOB_EXTENSIONS, "Job description").await?;

            let analyzer = Analyzer::new(config.scoring.clone());
            let result = analyzer.analyze_resume(&resume_text, &job_text);

            Ok(CommandOutput {
                console: formatter.format_analysis(&result),
                envelope: Envelope::ok("Analysis complete", &result)?,
            })
        }

        Commands::Suggest { resume } => {
            let resume_text = read_input(&mut inputs, &resume, cli::RESUME_EXTENSIONS, "Resume").await?;
            let path = Analyzer::new(config.scoring.clone()).suggest_growth_path(&resume_text);

            Ok(CommandOutput {
                console: formatter.format_growth_path(&path),
                envelope: Envelope::ok("Suggestions ready", &path)?,
            })
        }

        Commands::Optimize { resume } => {
            let resume_text = read_input(&mut inputs, &resume, cli::RESUME_EXTENSIONS, "Resume").await?;
            let optimized = optimize_resume(&resume_text);

            Ok(CommandOutput {
                console: formatter.format_text("Optimized Resume", &optimized),
                envelope: Envelope::ok("Resume optimized", &json!({ "optimized_resume": optimized }))?,
            })
        }

        Commands::CoverLetter { resume, job } => {
            let resume_text = read_input(&mut inputs, &resume, cli::RESUME_EXTENSIONS, "Resume").await?;
            let job_text = read_input(&mut inputs, &job, cli::JOB_EXTENSIONS, "Job description").await?;
            let letter = generate_cover_letter(&resume_text, &job_text)?;

            Ok(CommandOutput {
                console: formatter.format_text("Cover Letter", &letter),
                envelope: Envelope::ok("Cover letter generated", &json!({ "cover_letter": letter }))?,
            })
        }

        Commands::Export { resume, format, out } => {
            let resume_text = read_input(&mut inputs, &resume, cli::RESUME_EXTENSIONS, "Resume").await?;

            let exporter = DocumentExporter::with_docx_capability(config.export.docx_enabled);
            let format = format.unwrap_or_else(|| config.export.default_format.to_string());
            let artifact = exporter.generate_resume_bytes(&resume_text, Some(&format))?;

            let out_path = out.unwrap_or_else(|| PathBuf::from(&artifact.filename));
            if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&out_path, &artifact.bytes).await?;
            info!("Wrote {}", out_path.display());

            Ok(CommandOutput {
                console: formatter.format_export(&artifact, &out_path),
                envelope: Envelope::ok(
                    "File generated",
                    &json!({
                        "filename": artifact.filename,
                        "media_type": artifact.media_type,
                        "size": artifact.bytes.len(),
                        "path": out_path.display().to_string(),
                    }),
                )?,
            })
        }

        Commands::Extract { file, content_type } => {
            let bytes = tokio::fs::read(&file).await?;
            let upload = UploadedFile {
                filename: file
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_default(),
                content_type,
                bytes,
            };

            let document = UploadPolicy::from_config(&config.upload).extract(&upload)?;

            Ok(CommandOutput {
                console: formatter.format_extraction(&document),
                envelope: Envelope::ok(
                    "Resume uploaded",
                    &json!({
                        "resume_text": document.text,
                        "pages": document.page_count(),
                        "empty_pages": document.empty_pages(),
                        "failed_pages": document.failed_pages(),
                    }),
                )?,
            })
        }

        Commands::Prefs { theme } => {
            let store = InMemoryPreferenceStore::new(config.preferences.default_theme);
            let theme = store.set_theme_str(&theme)?;

            Ok(CommandOutput {
                console: format!("Theme set to {}\n", theme),
                envelope: Envelope::ok("Preferences saved", &json!({ "theme": theme }))?,
            })
        }

        Commands::Health => Ok(CommandOutput {
            console: "ok\n".to_string(),
            envelope: Envelope::ok("ok", &json!({ "status": "ok" }))?,
        }),

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let rendered = toml::to_string_pretty(config).map_err(|e| {
                    ResumeAssistantError::Configuration(format!("Failed to serialize config: {}", e))
                })?;

                Ok(CommandOutput {
                    console: formatter.format_text("Current Configuration", &rendered),
                    envelope: Envelope::ok("Configuration loaded", config)?,
                })
            }

            Some(ConfigAction::Reset) => {
                let defaults = Config::default();
                let path = config_path.map(Path::to_path_buf).unwrap_or_else(Config::config_path);
                defaults.save_to(&path)?;

                Ok(CommandOutput {
                    console: format!("Configuration reset: {}\n", path.display()),
                    envelope: Envelope::ok("Configuration reset", &defaults)?,
                })
            }
        },
    }
}
