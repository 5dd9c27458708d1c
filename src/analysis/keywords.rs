//! Keyword rule registry and tally engine.
//!
//! Rules come in two kinds. Token rules are matched against each word and
//! should be anchored (an exact-match alternation such as `^[Ww]ars?$`), so a
//! match means the whole token qualifies rather than a substring inside it.
//! Phrase rules cover multi-word targets such as "God bless": they are
//! matched inside each sentence and every non-overlapping occurrence counts.
//!
//! All counts are exact integers. No case folding happens unless a pattern
//! encodes it.

use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::PipelineError;

/// How a rule's pattern is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Matched against each word; pattern should be anchored
    Token,

    /// Matched inside each sentence; occurrences are summed over sentences
    Phrase,
}

/// A configured (pattern, label) pair, not yet compiled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordRule {
    /// Output column label, e.g. "war"
    pub label: String,

    /// Token or phrase matching
    pub kind: RuleKind,

    /// Regex pattern
    pub pattern: String,
}

impl KeywordRule {
    /// Define a token rule
    pub fn token(label: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: RuleKind::Token,
            pattern: pattern.into(),
        }
    }

    /// Define a phrase rule
    pub fn phrase(label: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: RuleKind::Phrase,
            pattern: pattern.into(),
        }
    }
}

/// A rule with its compiled pattern
#[derive(Debug)]
struct CompiledRule {
    label: String,
    kind: RuleKind,
    regex: Regex,
}

/// An ordered registry of compiled keyword rules.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// Compile every configured rule up front. Any invalid pattern fails
    /// here, before a single document is processed.
    pub fn compile(rules: &[KeywordRule]) -> Result<Self, PipelineError> {
        let mut compiled = Vec::with_capacity(rules.len());

        for rule in rules {
            let regex = Regex::new(&rule.pattern).map_err(|source| PipelineError::InvalidRule {
                label: rule.label.clone(),
                source,
            })?;
            compiled.push(CompiledRule {
                label: rule.label.clone(),
                kind: rule.kind,
                regex,
            });
        }

        Ok(Self { rules: compiled })
    }

    /// Rule labels in registry order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.label.as_str())
    }

    /// Number of configured rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check whether no rules are configured
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Tally every rule over one document's words and sentences.
    ///
    /// The result has exactly one entry per configured rule label.
    pub fn tally(&self, words: &[String], sentences: &[String]) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();

        for rule in &self.rules {
            let count = match rule.kind {
                RuleKind::Token => words.iter().filter(|w| rule.regex.is_match(w)).count(),
                RuleKind::Phrase => sentences
                    .iter()
                    .map(|s| rule.regex.find_iter(s).count())
                    .sum(),
            };
            counts.insert(rule.label.clone(), count);
        }

        counts
    }
}
