// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.

use crate::commit::CommitMessage;
use crate::config::{BlockedPattern, PolicyConfig};
use crate::error::{ConfigError, GateError, Result};
use regex::{Regex, RegexBuilder};

use super::validator::ValidationIssue;

/// Trait for commit message rules.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// Check the commit message and return an issue if validation fails.
    fn check(&self, message: &CommitMessage) -> Option<ValidationIssue>;

    /// Get the rule name.
    fn name(&self) -> &str;
}

/// Build the built-in rules for a policy, in the order they must run.
///
/// Content checks come first so that a signed message is reported as such
/// even when its subject is also malformed.
pub fn builtin_rules(policy: &PolicyConfig) -> Result<Vec<Box<dyn Rule>>> {
    let mut rules: Vec<Box<dyn Rule>> = Vec::new();

    rules.push(Box::new(BlockedSignatureRule::new(
        &policy.blocked_patterns,
    )?));
    rules.push(Box::new(SubjectLengthRule::new(policy.max_subject_length)));
    rules.push(Box::new(ConventionalFormatRule::new(
        &policy.allowed_types,
        &policy.example,
    )?));

    if policy.imperative_mood {
        rules.push(Box::new(ImperativeMoodRule));
    }

    Ok(rules)
}

/// Rejects messages carrying an assistant attribution signature.
#[derive(Debug)]
pub struct BlockedSignatureRule {
    patterns: Vec<(String, Regex)>,
}

impl BlockedSignatureRule {
    /// Compile the configured patterns, case-insensitively.
    pub fn new(patterns: &[BlockedPattern]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                RegexBuilder::new(&p.pattern)
                    .case_insensitive(true)
                    .build()
                    .map(|re| (p.name.clone(), re))
                    .map_err(|e| {
                        GateError::Config(ConfigError::InvalidPattern {
                            name: p.name.clone(),
                            message: e.to_string(),
                        })
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }
}

impl Rule for BlockedSignatureRule {
    fn check(&self, message: &CommitMessage) -> Option<ValidationIssue> {
        let (name, _) = self
            .patterns
            .iter()
            .find(|(_, re)| re.is_match(message.text()))?;

        tracing::debug!("Blocked signature pattern matched: {}", name);

        Some(ValidationIssue {
            code: "blocked-signature".to_string(),
            message: "Blocked: remove AI/assistant signature from commit message".to_string(),
            suggestion: Some(format!("Drop the line matching '{}'", name)),
        })
    }

    fn name(&self) -> &str {
        "blocked-signature"
    }
}

/// Rejects subjects longer than the configured ceiling.
#[derive(Debug)]
pub struct SubjectLengthRule {
    max: usize,
}

impl SubjectLengthRule {
    pub fn new(max: usize) -> Self {
        Self { max }
    }
}

impl Rule for SubjectLengthRule {
    fn check(&self, message: &CommitMessage) -> Option<ValidationIssue> {
        let len = message.subject_len();

        (len > self.max).then(|| ValidationIssue {
            code: "subject-max-length".to_string(),
            message: format!(
                "Subject too long ({} chars). Keep under {} characters.",
                len, self.max
            ),
            suggestion: Some("Move the detail into the commit body".to_string()),
        })
    }

    fn name(&self) -> &str {
        "subject-max-length"
    }
}

/// Requires `type(scope)!: description` with a type from a closed set.
#[derive(Debug)]
pub struct ConventionalFormatRule {
    regex: Regex,
    types: Vec<String>,
    example: String,
}

impl ConventionalFormatRule {
    pub fn new(types: &[String], example: &str) -> Result<Self> {
        let alternatives = types
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"^(?:{})(?:\(.+?\))?!?: .+", alternatives);

        let regex = Regex::new(&pattern).map_err(|e| {
            GateError::Config(ConfigError::InvalidValue {
                key: "policy.allowed_types".to_string(),
                message: e.to_string(),
            })
        })?;

        Ok(Self {
            regex,
            types: types.to_vec(),
            example: example.to_string(),
        })
    }
}

impl Rule for ConventionalFormatRule {
    fn check(&self, message: &CommitMessage) -> Option<ValidationIssue> {
        if self.regex.is_match(message.subject()) {
            return None;
        }

        Some(ValidationIssue {
            code: "conventional-format".to_string(),
            message: format!(
                "Use Conventional Commits format: type(scope): description\nValid types: {}\nExample: {}",
                self.types.join(", "),
                self.example
            ),
            suggestion: None,
        })
    }

    fn name(&self) -> &str {
        "conventional-format"
    }
}

/// Flags descriptions whose first word ends in "ed".
///
/// A suffix check, not grammar: "embed" and "feed" are rejected too.
#[derive(Debug)]
pub struct ImperativeMoodRule;

impl Rule for ImperativeMoodRule {
    fn check(&self, message: &CommitMessage) -> Option<ValidationIssue> {
        let first_word = message.description()?.split_whitespace().next()?;

        if !first_word.ends_with("ed") {
            return None;
        }

        Some(ValidationIssue {
            code: "imperative-mood".to_string(),
            message: format!(
                "Use imperative mood: '{}' -> remove '-ed' (e.g., 'add' not 'added')",
                first_word
            ),
            suggestion: first_word
                .strip_suffix("ed")
                .filter(|stem| !stem.is_empty())
                .map(|stem| format!("Try '{}'", stem)),
        })
    }

    fn name(&self) -> &str {
        "imperative-mood"
    }
}
