//! Ordered advice rules.
//!
//! A [`RuleSet`] is a list of (predicate, advice) pairs evaluated in
//! declaration order. Every rule whose predicate holds contributes its advice,
//! and the fallback is returned only when nothing fired.

/// A single advice rule over some context `C`
pub struct Rule<C> {
    pub name: &'static str,
    applies: fn(&C) -> bool,
    advice: fn(&C) -> Vec<String>,
}

impl<C> Rule<C> {
    pub fn new(name: &'static str, applies: fn(&C) -> bool, advice: fn(&C) -> Vec<String>) -> Self {
        Self { name, applies, advice }
    }

    pub fn applies(&self, ctx: &C) -> bool {
        (self.applies)(ctx)
    }
}

pub struct RuleSet<C> {
    rules: Vec<Rule<C>>,
    fallback: Vec<String>,
}

impl<C> RuleSet<C> {
    pub fn new(fallback: &[&str]) -> Self {
        Self {
            rules: Vec::new(),
            fallback: fallback.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn rule(mut self, rule: Rule<C>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Names of the rules that fire for `ctx`, in order
    pub fn fired(&self, ctx: &C) -> Vec<&'static str> {
        self.rules
            .iter()
            .filter(|rule| rule.applies(ctx))
            .map(|rule| rule.name)
            .collect()
    }

    pub fn evaluate(&self, ctx: &C) -> Vec<String> {
        let advice: Vec<String> = self
            .rules
            .iter()
            .filter(|rule| rule.applies(ctx))
            .flat_map(|rule| (rule.advice)(ctx))
            .collect();

        if advice.is_empty() {
            self.fallback.clone()
        } else {
            advice
        }
    }
}
