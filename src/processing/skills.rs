//! Skill vocabulary and extraction

use crate::processing::text_processor::TextProcessor;
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashSet};

/// Recognized skills, lowercase. Multi-word entries are matched through the
/// pair merge in [`TextProcessor::normalize`].
pub static KNOWN_SKILLS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "python", "fastapi", "flask", "django", "sql", "nosql", "mongodb", "postgresql",
        "docker", "kubernetes", "aws", "gcp", "azure", "ci/cd", "github actions",
        "unit testing", "pytest", "rest", "graphql", "redis", "celery", "rabbitmq",
        "nlp", "machine learning", "data science", "pandas", "numpy", "transformers",
    ]
    .into_iter()
    .collect()
});

/// A deduplicated set of vocabulary entries found in a text
pub type SkillSet = BTreeSet<String>;

#[derive(Debug, Clone, Default)]
pub struct SkillExtractor {
    processor: TextProcessor,
}

impl SkillExtractor {
    pub fn new() -> Self {
        Self {
            processor: TextProcessor::new(),
        }
    }

    pub fn processor(&self) -> &TextProcessor {
        &self.processor
    }

    pub fn extract(&self, text: &str) -> SkillSet {
        self.processor
            .normalize(text)
            .into_iter()
            .filter(|token| KNOWN_SKILLS.contains(token.as_str()))
            .collect()
    }

    /// Skills present in both texts, sorted
    pub fn overlap(&self, first: &str, second: &str) -> Vec<String> {
        let a = self.extract(first);
        let b = self.extract(second);
        a.intersection(&b).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_known_skills() {
        let extractor = SkillExtractor::new();
        let skills = extractor.extract("I have Python and Docker experience");

        let expected: SkillSet = ["docker", "python"].iter().map(|s| s.to_string()).collect();
        assert_eq!(skills, expected);
    }

    #[test]
    fn test_multi_word_skills() {
        let extractor = SkillExtractor::new();
        let skills = extractor.extract("Strong in Machine Learning, Data Science and GitHub Actions");

        assert!(skills.contains("machine learning"));
        assert!(skills.contains("data science"));
        assert!(skills.contains("github actions"));
        assert!(!skills.contains("machine"));
    }

    #[test]
    fn test_ci_cd_is_never_matched_through_tokens() {
        // The slash is a delimiter and "ci cd" is not a vocabulary entry
        let extractor = SkillExtractor::new();
        assert!(extractor.extract("CI/CD pipelines").is_empty());
    }

    #[test]
    fn test_extraction_is_idempotent_and_within_vocabulary() {
        let extractor = SkillExtractor::new();
        let text = "Kubernetes, kubernetes; REST + GraphQL on AWS/GCP with pytest and redis";

        let first = extractor.extract(text);
        let second = extractor.extract(text);
        assert_eq!(first, second);
        assert!(first.iter().all(|skill| KNOWN_SKILLS.contains(skill.as_str())));
        assert_eq!(first.len(), 7);
    }

    #[test]
    fn test_overlap_is_sorted() {
        let extractor = SkillExtractor::new();
        let overlap = extractor.overlap("redis, aws, python, flask", "Python Flask Redis Go");
        assert_eq!(overlap, vec!["flask", "python", "redis"]);
    }
}
