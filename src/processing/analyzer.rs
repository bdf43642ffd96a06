//! Resume analysis: match score, suggestions, ATS score and growth path

use crate::config::ScoringConfig;
use crate::processing::ats_matcher::{ATSMatcher, SkillMatch};
use crate::processing::rules::{Rule, RuleSet};
use crate::processing::skills::SkillSet;
use log::{debug, info};
use serde::{Deserialize, Serialize};

const QUANTIFY_ACHIEVEMENTS: &str =
    "Highlight relevant experience and quantify achievements with metrics (%, $, time).";
const FASTAPI_ADVICE: &str = "Add FastAPI projects or APIs to showcase backend skills.";
const KUBERNETES_ADVICE: &str = "Explore Kubernetes basics to complement Docker skills.";
const GREAT_ALIGNMENT: &str =
    "Great alignment. Ensure resume is concise (1-2 pages) and well-formatted.";

const GENERIC_GROWTH_PATH: [&str; 3] = [
    "Identify target role, collect 5 job descriptions, and extract required skills.",
    "Close top 3 skill gaps via focused projects and certifications.",
    "Publish projects with READMEs, tests, and live demos (Render/Heroku/Fly).",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub match_percent: f64,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<String>,
    pub ats_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthPath {
    pub growth_path: Vec<String>,
}

/// Everything the suggestion rules look at
pub struct SuggestionContext {
    pub skill_match: SkillMatch,
    pub suggestion_threshold: f64,
    pub max_listed_missing: usize,
}

fn suggestion_rules() -> RuleSet<SuggestionContext> {
    RuleSet::new(&[GREAT_ALIGNMENT])
        .rule(Rule::new(
            "low_match",
            |ctx: &SuggestionContext| ctx.skill_match.match_percent < ctx.suggestion_threshold,
            |_: &SuggestionContext| vec![QUANTIFY_ACHIEVEMENTS.to_string()],
        ))
        .rule(Rule::new(
            "missing_skills",
            |ctx: &SuggestionContext| !ctx.skill_match.missing_skills.is_empty(),
            |ctx: &SuggestionContext| {
                let listed: Vec<&str> = ctx
                    .skill_match
                    .missing_skills
                    .iter()
                    .take(ctx.max_listed_missing)
                    .map(String::as_str)
                    .collect();
                vec![format!("Consider learning or emphasizing: {}", listed.join(", "))]
            },
        ))
        .rule(Rule::new(
            "python_without_fastapi",
            |ctx: &SuggestionContext| {
                let skills = &ctx.skill_match.resume_skills;
                skills.contains("python") && !skills.contains("fastapi")
            },
            |_: &SuggestionContext| vec![FASTAPI_ADVICE.to_string()],
        ))
        .rule(Rule::new(
            "docker_without_kubernetes",
            |ctx: &SuggestionContext| {
                let skills = &ctx.skill_match.resume_skills;
                skills.contains("docker") && !skills.contains("kubernetes")
            },
            |_: &SuggestionContext| vec![KUBERNETES_ADVICE.to_string()],
        ))
}

fn growth_rules() -> RuleSet<SkillSet> {
    RuleSet::new(&GENERIC_GROWTH_PATH)
        .rule(Rule::new(
            "web_framework",
            |skills: &SkillSet| skills.contains("fastapi") || skills.contains("flask"),
            |_: &SkillSet| {
                vec![
                    "Deepen API design: auth, rate limiting, versioning, observability.".to_string(),
                    "Add async patterns, background jobs (Celery/RQ), and caching (Redis).".to_string(),
                ]
            },
        ))
        .rule(Rule::new(
            "python",
            |skills: &SkillSet| skills.contains("python"),
            |_: &SkillSet| vec!["Master typing (PEP 484), testing (pytest), and packaging.".to_string()],
        ))
        .rule(Rule::new(
            "cloud",
            |skills: &SkillSet| ["aws", "gcp", "azure"].iter().any(|c| skills.contains(*c)),
            |_: &SkillSet| vec!["Build CI/CD pipelines and infrastructure as code (Terraform).".to_string()],
        ))
        .rule(Rule::new(
            "ml",
            |skills: &SkillSet| skills.contains("nlp") || skills.contains("machine learning"),
            |_: &SkillSet| vec!["Productionize ML: model serving, monitoring, and data pipelines.".to_string()],
        ))
}

/// Entry point for the scoring heuristics
pub struct Analyzer {
    matcher: ATSMatcher,
    suggestions: RuleSet<SuggestionContext>,
    growth: RuleSet<SkillSet>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl Analyzer {
    pub fn new(scoring: ScoringConfig) -> Self {
        Self {
            matcher: ATSMatcher::new(scoring),
            suggestions: suggestion_rules(),
            growth: growth_rules(),
        }
    }

    pub fn analyze_resume(&self, resume_text: &str, job_description: &str) -> AnalysisResult {
        info!(
            "Analysis request: resume_length={}, job_desc_length={}",
            resume_text.len(),
            job_description.len()
        );

        let skill_match = self.matcher.match_skills(resume_text, job_description);
        let ats_score = self
            .matcher
            .ats_score(skill_match.match_percent, skill_match.missing_skills.len());

        let scoring = self.matcher.scoring();
        let ctx = SuggestionContext {
            skill_match,
            suggestion_threshold: scoring.suggestion_threshold,
            max_listed_missing: scoring.max_listed_missing,
        };
        debug!("Suggestion rules fired: {:?}", self.suggestions.fired(&ctx));
        let suggestions = self.suggestions.evaluate(&ctx);

        info!("Analysis complete: match_percent={}", ctx.skill_match.match_percent);

        AnalysisResult {
            match_percent: ctx.skill_match.match_percent,
            missing_skills: ctx.skill_match.missing_skills,
            suggestions,
            ats_score,
        }
    }

    pub fn suggest_growth_path(&self, resume_text: &str) -> GrowthPath {
        let skills = self.matcher.extractor().extract(resume_text);
        GrowthPath {
            growth_path: self.growth.evaluate(&skills),
        }
    }
}
