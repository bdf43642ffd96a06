//! Resume/job skill matching and the ATS compatibility score

use crate::config::ScoringConfig;
use crate::processing::skills::{SkillExtractor, SkillSet};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Raw overlap between a resume and a job description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMatch {
    pub match_percent: f64,
    /// Sorted job skills the resume lacks; always empty in the token fallback
    pub missing_skills: Vec<String>,
    pub resume_skills: SkillSet,
    pub job_skills: SkillSet,
    /// Set when the job text had no recognizable skills and raw tokens were compared
    pub token_fallback: bool,
}

pub struct ATSMatcher {
    extractor: SkillExtractor,
    scoring: ScoringConfig,
}

impl Default for ATSMatcher {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl ATSMatcher {
    pub fn new(scoring: ScoringConfig) -> Self {
        Self {
            extractor: SkillExtractor::new(),
            scoring,
        }
    }

    pub fn extractor(&self) -> &SkillExtractor {
        &self.extractor
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    pub fn match_skills(&self, resume_text: &str, job_text: &str) -> SkillMatch {
        let resume_skills = self.extractor.extract(resume_text);
        let job_skills = self.extractor.extract(job_text);

        if job_skills.is_empty() {
            let processor = self.extractor.processor();
            let resume_tokens = processor.token_set(resume_text);
            let job_tokens = processor.token_set(job_text);
            debug!(
                "No known skills in job description, comparing {} job tokens",
                job_tokens.len()
            );

            return SkillMatch {
                match_percent: overlap_percent(&resume_tokens, &job_tokens),
                missing_skills: Vec::new(),
                resume_skills,
                job_skills,
                token_fallback: true,
            };
        }

        let missing_skills = job_skills.difference(&resume_skills).cloned().collect();

        SkillMatch {
            match_percent: overlap_percent(&resume_skills, &job_skills),
            missing_skills,
            resume_skills,
            job_skills,
            token_fallback: false,
        }
    }

    /// Match percent minus a capped per-missing-skill penalty, clamped to 0..=100
    pub fn ats_score(&self, match_percent: f64, missing_count: usize) -> f64 {
        let penalty = (self.scoring.missing_skill_penalty * missing_count as f64).min(self.scoring.max_penalty);
        round_one_decimal((match_percent - penalty).clamp(0.0, 100.0))
    }
}

/// `100 * |a ∩ b| / max(1, |b|)`, rounded to one decimal
fn overlap_percent(candidate: &BTreeSet<String>, target: &BTreeSet<String>) -> f64 {
    let overlap = candidate.intersection(target).count();
    let denom = target.len().max(1);
    round_one_decimal(100.0 * overlap as f64 / denom as f64)
}

/// Round to one decimal place using the exact decimal value of `value`.
/// Ties go to even; scaling by ten first would invent ties that are not there.
pub fn round_one_decimal(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_overlap() {
        let matcher = ATSMatcher::default();
        let result = matcher.match_skills(
            "I have Python and Docker experience",
            "Looking for Python and Kubernetes skills",
        );

        assert_eq!(result.match_percent, 50.0);
        assert_eq!(result.missing_skills, vec!["kubernetes"]);
        assert!(!result.token_fallback);
        assert!(result.resume_skills.contains("docker"));
        assert!(result.job_skills.contains("kubernetes"));
    }

    #[test]
    fn test_missing_skills_sorted() {
        let matcher = ATSMatcher::default();
        let result = matcher.match_skills("python", "Redis, AWS, Python, Celery and Django");

        assert_eq!(result.missing_skills, vec!["aws", "celery", "django", "redis"]);
        assert_eq!(result.match_percent, 20.0);
    }

    #[test]
    fn test_token_fallback_without_job_skills() {
        let matcher = ATSMatcher::default();
        let result = matcher.match_skills("team player who loves rust", "Rust team lead");

        assert!(result.token_fallback);
        assert!(result.missing_skills.is_empty());
        // job tokens {rust, team, lead}, overlap {rust, team}
        assert_eq!(result.match_percent, 66.7);
    }

    #[test]
    fn test_empty_inputs_never_divide_by_zero() {
        let matcher = ATSMatcher::default();
        for (resume, job) in [("", ""), ("python", ""), ("", "python"), ("   ", "\n")] {
            let result = matcher.match_skills(resume, job);
            assert!((0.0..=100.0).contains(&result.match_percent));
            assert!(result.match_percent.is_finite());
        }
        assert_eq!(matcher.match_skills("", "").match_percent, 0.0);
    }

    #[test]
    fn test_ats_score_penalty_is_capped() {
        let matcher = ATSMatcher::default();
        assert_eq!(matcher.ats_score(50.0, 1), 45.0);
        assert_eq!(matcher.ats_score(90.0, 10), 60.0);
        assert_eq!(matcher.ats_score(10.0, 4), 0.0);
        assert_eq!(matcher.ats_score(100.0, 0), 100.0);
    }

    #[test]
    fn test_ats_score_never_exceeds_match_percent() {
        let matcher = ATSMatcher::default();
        for missing in 0..12 {
            for percent in [0.0, 12.5, 33.3, 60.0, 99.9, 100.0] {
                assert!(matcher.ats_score(percent, missing) <= percent);
            }
        }
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_one_decimal(66.666), 66.7);
        assert_eq!(round_one_decimal(6.25), 6.2);
        assert_eq!(round_one_decimal(33.333), 33.3);
    }

    #[test]
    fn test_rounding_uses_exact_decimal_value() {
        // 0.05 is stored slightly above the tie, 0.15 slightly below
        assert_eq!(round_one_decimal(100.0 * 1.0 / 2000.0), 0.1);
        assert_eq!(round_one_decimal(100.0 * 3.0 / 2000.0), 0.1);
        assert_eq!(round_one_decimal(0.25), 0.2);
    }

    #[test]
    fn test_token_fallback_with_large_job_vocabulary() {
        let matcher = ATSMatcher::default();
        let job = (0..2000).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ");
        let result = matcher.match_skills("w0", &job);

        assert!(result.token_fallback);
        assert_eq!(result.match_percent, 0.1);
    }
}
