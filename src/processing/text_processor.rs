//! Tokenization and normalization

use crate::processing::skills::KNOWN_SKILLS;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Any run of characters outside the identifier class splits tokens.
/// `+` and `#` are kept so that `c++` and `c#` survive.
static TOKEN_DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9+#]+").expect("Invalid token delimiter regex"));

#[derive(Debug, Clone, Copy, Default)]
pub struct TextProcessor;

impl TextProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Split text into lowercase tokens without any phrase merging
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        TOKEN_DELIMITER
            .split(text)
            .filter(|token| !token.is_empty())
            .map(|token| token.to_ascii_lowercase())
            .collect()
    }

    /// Tokenize, then greedily merge adjacent pairs that form a known
    /// two-word skill. A merged pair consumes both positions.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let tokens = self.tokenize(text);
        let mut merged = Vec::with_capacity(tokens.len());
        let mut i = 0;

        while i < tokens.len() {
            if let Some(next) = tokens.get(i + 1) {
                let phrase = format!("{} {}", tokens[i], next);
                if KNOWN_SKILLS.contains(phrase.as_str()) {
                    merged.push(phrase);
                    i += 2;
                    continue;
                }
            }
            merged.push(tokens[i].clone());
            i += 1;
        }

        merged
    }

    /// Distinct normalized tokens, used by the raw-overlap fallback
    pub fn token_set(&self, text: &str) -> BTreeSet<String> {
        self.normalize(text).into_iter().collect()
    }
}
