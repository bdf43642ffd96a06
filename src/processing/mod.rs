//! Skill extraction and scoring heuristics

pub mod analyzer;
pub mod ats_matcher;
pub mod rules;
pub mod skills;
pub mod text_processor;

pub use analyzer::{AnalysisResult, Analyzer, GrowthPath};
pub use skills::{SkillExtractor, SkillSet, KNOWN_SKILLS};
