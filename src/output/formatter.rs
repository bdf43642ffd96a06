//! Console presentation of command results

use crate::input::upload::ExtractedDocument;
use crate::output::exporter::ExportArtifact;
use crate::processing::analyzer::{AnalysisResult, GrowthPath};
use colored::{Color, Colorize};
use std::path::Path;

pub struct ConsoleFormatter {
    use_colors: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn header(&self, title: &str) -> String {
        if self.use_colors {
            format!("{}\n", title.bold().underline())
        } else {
            format!("{}\n{}\n", title, "=".repeat(title.len()))
        }
    }

    fn score_color(score: f64) -> Color {
        match score {
            s if s >= 75.0 => Color::Green,
            s if s >= 50.0 => Color::Yellow,
            _ => Color::Red,
        }
    }

    pub fn format_analysis(&self, result: &AnalysisResult) -> String {
        let mut out = self.header("Resume Analysis");

        out.push_str(&format!(
            "Match:     {}\n",
            self.colorize(&format!("{:.1}%", result.match_percent), Self::score_color(result.match_percent))
        ));
        out.push_str(&format!(
            "ATS score: {}\n",
            self.colorize(&format!("{:.1}%", result.ats_score), Self::score_color(result.ats_score))
        ));

        if !result.missing_skills.is_empty() {
            out.push_str(&format!("\n{}\n", self.colorize("Missing skills:", Color::Red)));
            for skill in &result.missing_skills {
                out.push_str(&format!("  • {}\n", skill));
            }
        }

        out.push_str(&format!("\n{}\n", self.colorize("Suggestions:", Color::Cyan)));
        for (i, suggestion) in result.suggestions.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, suggestion));
        }

        out
    }

    pub fn format_growth_path(&self, path: &GrowthPath) -> String {
        let mut out = self.header("Growth Path");
        for (i, step) in path.growth_path.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, step));
        }
        out
    }

    pub fn format_text(&self, title: &str, text: &str) -> String {
        format!("{}{}\n", self.header(title), text)
    }

    pub fn format_extraction(&self, document: &ExtractedDocument) -> String {
        let mut out = self.header("Extracted Resume");
        out.push_str(&format!(
            "Pages: {} ({} empty, {} failed)\nCharacters: {}\n\n",
            document.page_count(),
            document.empty_pages(),
            document.failed_pages(),
            document.text.chars().count()
        ));
        out.push_str(&document.text);
        out.push('\n');
        out
    }

    pub fn format_export(&self, artifact: &ExportArtifact, path: &Path) -> String {
        format!(
            "{} {} ({}, {} bytes)\n",
            self.colorize("Saved", Color::Green),
            path.display(),
            artifact.media_type,
            artifact.bytes.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_analysis_output() {
        let formatter = ConsoleFormatter::new(false);
        let result = AnalysisResult {
            match_percent: 50.0,
            missing_skills: vec!["kubernetes".to_string()],
            suggestions: vec!["Explore Kubernetes basics to complement Docker skills.".to_string()],
            ats_score: 45.0,
        };

        let out = formatter.format_analysis(&result);
        assert!(out.starts_with("Resume Analysis\n==============="));
        assert!(out.contains("Match:     50.0%"));
        assert!(out.contains("ATS score: 45.0%"));
        assert!(out.contains("  • kubernetes"));
        assert!(out.contains("  1. Explore Kubernetes"));
    }

    #[test]
    fn test_growth_path_numbering() {
        let formatter = ConsoleFormatter::new(false);
        let out = formatter.format_growth_path(&GrowthPath {
            growth_path: vec!["one".to_string(), "two".to_string()],
        });
        assert!(out.contains("  1. one\n  2. two\n"));
    }
}
