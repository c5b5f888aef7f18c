// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::{extract_message, CommitMessage};
use crate::config::PolicyConfig;
use crate::error::Result;

use super::builtin::{builtin_rules, Rule};
use super::validator::ValidationResult;

/// Rule engine for validating commit messages.
///
/// Rules run in insertion order and the first failure stops the run.
#[derive(Debug)]
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    /// Create a rule engine enforcing the given policy.
    pub fn new(policy: &PolicyConfig) -> Result<Self> {
        Ok(Self {
            rules: builtin_rules(policy)?,
        })
    }

    /// Add a custom rule, run after the built-in ones.
    pub fn add_rule(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Names of the active rules, in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Validate a commit message.
    pub fn validate(&self, message: &CommitMessage) -> ValidationResult {
        for rule in &self.rules {
            if let Some(issue) = rule.check(message) {
                tracing::debug!("Rule '{}' rejected the message", rule.name());
                return ValidationResult::Rejected(issue);
            }
        }

        ValidationResult::Valid
    }

    /// Validate a commit message string.
    pub fn validate_string(&self, message: &str) -> ValidationResult {
        self.validate(&CommitMessage::new(message))
    }

    /// Extract the message from a shell command and validate it.
    ///
    /// Commands whose message cannot be located are valid.
    pub fn validate_command(&self, command: &str) -> ValidationResult {
        match extract_message(command) {
            Some(message) => self.validate(&message),
            None => {
                tracing::debug!("No commit message found in command, allowing");
                ValidationResult::Valid
            }
        }
    }
}
